//! Declarative tag catalog.
//!
//! Each [`TagSpec`] names an element, the node variant it builds and the
//! attribute keys it recognizes. Attribute order in the table is the order in
//! which attributes are rendered.

/// Node variant built for a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Self-closing element without children or content.
    Void,
    /// Element with a single text body.
    Content,
    /// Element with child nodes.
    Container,
}

/// Catalog entry for one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagSpec {
    /// Element name.
    pub name: &'static str,
    /// Node variant to build.
    pub kind: TagKind,
    /// Recognized attribute keys in render order.
    pub attributes: &'static [&'static str],
}

impl TagSpec {
    const fn void(name: &'static str, attributes: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: TagKind::Void,
            attributes,
        }
    }

    const fn content(name: &'static str, attributes: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: TagKind::Content,
            attributes,
        }
    }

    const fn container(name: &'static str, attributes: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: TagKind::Container,
            attributes,
        }
    }

    /// Whether `key` is one of this element's attributes.
    pub fn recognizes(&self, key: &str) -> bool {
        self.attributes.contains(&key)
    }
}

/// Every element known to the catalog, sorted by name.
///
/// `p` appears twice: as a content element and as a container.
pub static CATALOG: &[TagSpec] = &[
    TagSpec::content(
        "a",
        &[
            "download",
            "href",
            "hreflang",
            "ping",
            "referrerpolicy",
            "rel",
            "target",
            "type",
        ],
    ),
    TagSpec::content("abbr", &["title"]),
    TagSpec::container("address", &[]),
    TagSpec::void(
        "area",
        &[
            "alt",
            "coords",
            "download",
            "href",
            "ping",
            "referrerpolicy",
            "rel",
            "shape",
            "target",
        ],
    ),
    TagSpec::container("article", &[]),
    TagSpec::container("aside", &[]),
    TagSpec::container("audio", &["crossorigin", "preload", "src"]),
    TagSpec::content("b", &[]),
    TagSpec::void("base", &["href", "target"]),
    TagSpec::container("bdi", &[]),
    TagSpec::content("bdo", &["dir"]),
    TagSpec::container("blockquote", &["cite"]),
    TagSpec::container(
        "body",
        &[
            "onafterprint",
            "onbeforeprint",
            "onbeforeunload",
            "onblur",
            "onerror",
            "onfocus",
            "onhashchange",
            "onlanguagechange",
            "onload",
            "onmessage",
            "onoffline",
            "ononline",
            "onpopstate",
            "onredo",
            "onresize",
            "onstorage",
            "onundo",
            "onunload",
        ],
    ),
    TagSpec::void("br", &[]),
    TagSpec::content(
        "button",
        &[
            "form",
            "formaction",
            "formenctype",
            "formmethod",
            "formtarget",
            "name",
            "popovertarget",
            "popovertargetaction",
            "type",
            "value",
        ],
    ),
    TagSpec::content("canvas", &["height", "width"]),
    TagSpec::content("caption", &[]),
    TagSpec::container("cite", &[]),
    TagSpec::content("code", &[]),
    TagSpec::void("col", &["span"]),
    TagSpec::container("colgroup", &["span"]),
    TagSpec::content("data", &["value"]),
    TagSpec::container("datalist", &[]),
    TagSpec::content("dd", &[]),
    TagSpec::content("del", &["cite", "datetime"]),
    TagSpec::container("details", &[]),
    TagSpec::content("dfn", &["title"]),
    TagSpec::container("dialog", &[]),
    TagSpec::container("div", &[]),
    TagSpec::container("dl", &[]),
    TagSpec::content("dt", &[]),
    TagSpec::content("em", &[]),
    TagSpec::void("embed", &["height", "src", "type", "width"]),
    TagSpec::container("fieldset", &["form", "name"]),
    TagSpec::content("figcaption", &[]),
    TagSpec::container("figure", &[]),
    TagSpec::container("footer", &[]),
    TagSpec::container(
        "form",
        &[
            "accept-charset",
            "autocomplete",
            "name",
            "rel",
            "action",
            "enctype",
            "method",
            "target",
        ],
    ),
    TagSpec::content("h1", &[]),
    TagSpec::content("h2", &[]),
    TagSpec::content("h3", &[]),
    TagSpec::content("h4", &[]),
    TagSpec::content("h5", &[]),
    TagSpec::content("h6", &[]),
    TagSpec::container("head", &[]),
    TagSpec::container("header", &[]),
    TagSpec::container("hgroup", &[]),
    TagSpec::void("hr", &[]),
    TagSpec::content("i", &[]),
    TagSpec::content(
        "iframe",
        &[
            "allow",
            "allowfullscreen",
            "height",
            "loading",
            "name",
            "referrerpolicy",
            "sandbox",
            "src",
            "srcdoc",
            "width",
        ],
    ),
    TagSpec::void(
        "img",
        &[
            "alt",
            "crossorigin",
            "decoding",
            "elementtiming",
            "height",
            "loading",
            "referrerpolicy",
            "sizes",
            "src",
            "srcset",
            "width",
            "usemap",
        ],
    ),
    TagSpec::void(
        "input",
        &[
            "accept",
            "alt",
            "autocomplete",
            "capture",
            "dirname",
            "form",
            "formaction",
            "formenctype",
            "formmethod",
            "formnovalidate",
            "formtarget",
            "height",
            "inputmode",
            "list",
            "max",
            "maxlength",
            "min",
            "minlength",
            "name",
            "pattern",
            "placeholder",
            "popovertarget",
            "popovertargetaction",
            "size",
            "src",
            "step",
            "tabindex",
            "title",
            "type",
            "value",
            "width",
        ],
    ),
    TagSpec::content("kbd", &[]),
    TagSpec::content("label", &["for"]),
    TagSpec::content("legend", &[]),
    TagSpec::content("li", &["value"]),
    TagSpec::void("link", &["rel", "href"]),
    TagSpec::container("main", &[]),
    TagSpec::content("mark", &[]),
    TagSpec::container("menu", &[]),
    TagSpec::void("meta", &["charset", "name", "http-equiv", "content"]),
    TagSpec::container("nav", &[]),
    TagSpec::container("noscript", &[]),
    TagSpec::content("p", &[]),
    TagSpec::container("p", &[]),
    TagSpec::container("picture", &[]),
    TagSpec::content("pre", &[]),
    TagSpec::content("progress", &["max", "value"]),
    TagSpec::content("rp", &[]),
    TagSpec::content("rt", &[]),
    TagSpec::container("ruby", &[]),
    TagSpec::content("s", &[]),
    TagSpec::content("samp", &[]),
    TagSpec::content("script", &["src"]),
    TagSpec::container("section", &[]),
    TagSpec::content("small", &[]),
    TagSpec::content("span", &[]),
    TagSpec::content("strong", &[]),
    TagSpec::content("style", &[]),
    TagSpec::content("sub", &[]),
    TagSpec::content("summary", &[]),
    TagSpec::content("sup", &[]),
    TagSpec::container("svg", &[]),
    TagSpec::container("table", &[]),
    TagSpec::container("tbody", &[]),
    TagSpec::content("td", &["colspan", "headers", "rowspan"]),
    TagSpec::container("template", &[]),
    TagSpec::container("tfoot", &[]),
    TagSpec::content("th", &["abbr", "colspan", "headers", "rowspan", "scope"]),
    TagSpec::container("thead", &[]),
    TagSpec::content("time", &["datetime"]),
    TagSpec::content("title", &[]),
    TagSpec::container("tr", &[]),
    TagSpec::void("track", &["kind", "label", "src", "srclang"]),
    TagSpec::content("u", &[]),
    TagSpec::container("ul", &[]),
    TagSpec::content("var", &[]),
    TagSpec::container("video", &["crossorigin", "height", "poster", "preload", "src", "width"]),
    TagSpec::void("wbr", &[]),
];

/// Find the entry for `name` with the given variant.
pub fn lookup(name: &str, kind: TagKind) -> Option<&'static TagSpec> {
    CATALOG
        .iter()
        .find(|spec| spec.name == name && spec.kind == kind)
}

/// Find the first entry for `name`, whatever its variant.
pub fn lookup_any(name: &str) -> Option<&'static TagSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(CATALOG.len(), 99);
    }

    #[test]
    fn test_catalog_entries_are_unique() {
        let mut seen = HashSet::new();
        for spec in CATALOG {
            assert!(
                seen.insert((spec.name, spec.kind)),
                "duplicate entry {} {:?}",
                spec.name,
                spec.kind
            );
        }
    }

    #[test]
    fn test_catalog_is_sorted() {
        let names: Vec<&str> = CATALOG.iter().map(|spec| spec.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_catalog_attribute_keys_are_unique() {
        for spec in CATALOG {
            let keys: HashSet<&str> = spec.attributes.iter().copied().collect();
            assert_eq!(keys.len(), spec.attributes.len(), "tag {}", spec.name);
        }
    }

    #[test]
    fn test_lookup_by_kind() {
        let p = lookup("p", TagKind::Container).unwrap();
        assert_eq!(p.kind, TagKind::Container);
        let p = lookup("p", TagKind::Content).unwrap();
        assert_eq!(p.kind, TagKind::Content);
        assert!(lookup("br", TagKind::Container).is_none());
    }

    #[test]
    fn test_lookup_any_returns_first_entry() {
        assert_eq!(lookup_any("p").unwrap().kind, TagKind::Content);
        assert_eq!(lookup_any("br").unwrap().kind, TagKind::Void);
        assert!(lookup_any("blink").is_none());
    }

    #[test]
    fn test_attribute_order() {
        let a = lookup_any("a").unwrap();
        assert_eq!(
            a.attributes,
            ["download", "href", "hreflang", "ping", "referrerpolicy", "rel", "target", "type"]
        );
        assert!(a.recognizes("href"));
        assert!(!a.recognizes("src"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(lookup_any("img").unwrap().kind, TagKind::Void);
        assert_eq!(lookup_any("h1").unwrap().kind, TagKind::Content);
        assert_eq!(lookup_any("div").unwrap().kind, TagKind::Container);
        assert_eq!(lookup_any("wbr").unwrap().kind, TagKind::Void);
    }
}
