//! Attribute formatting shared by both serialization strategies.
//!
//! Each formatter returns an empty string when there is nothing to print, so
//! callers can drop empty fragments before joining them with single spaces.

use std::borrow::Cow;

use crate::node::{Attribute, Tag};
use crate::options::Escape;

/// Escape HTML special characters.
///
/// # Example
///
/// ```
/// use tagtree::escape_html;
///
/// assert_eq!(escape_html(r#"a < "b" & 'c'"#), "a &lt; &quot;b&quot; &amp; &#x27;c&#x27;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Apply `escape` to a value, borrowing when nothing changes.
pub(crate) fn escape_value(value: &str, escape: Escape) -> Cow<'_, str> {
    match escape {
        Escape::Raw => Cow::Borrowed(value),
        Escape::Html => Cow::Owned(escape_html(value)),
    }
}

/// Format an id as `id="<id>"`, or `""` when absent.
pub fn format_id(id: Option<&str>) -> String {
    format_id_escaped(id, Escape::Raw)
}

/// Format classes as `class="<c0> <c1> ..."`, or `""` when there are none.
pub fn format_classes(classes: &[String]) -> String {
    format_classes_escaped(classes, Escape::Raw)
}

/// Format attributes with a value as space-separated `key="value"` pairs.
///
/// Attributes without a value are skipped; the rest keep their relative order.
pub fn format_attributes(attributes: &[Attribute]) -> String {
    format_attributes_escaped(attributes, Escape::Raw)
}

pub(crate) fn format_id_escaped(id: Option<&str>, escape: Escape) -> String {
    match id {
        Some(id) => format!(r#"id="{}""#, escape_value(id, escape)),
        None => String::new(),
    }
}

pub(crate) fn format_classes_escaped(classes: &[String], escape: Escape) -> String {
    if classes.is_empty() {
        return String::new();
    }
    let joined = classes
        .iter()
        .map(|class| escape_value(class, escape))
        .collect::<Vec<_>>()
        .join(" ");
    format!(r#"class="{joined}""#)
}

pub(crate) fn format_attributes_escaped(attributes: &[Attribute], escape: Escape) -> String {
    attributes
        .iter()
        .filter_map(|attr| {
            attr.value
                .as_deref()
                .map(|value| format!(r#"{}="{}""#, attr.key, escape_value(value, escape)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Body of an opening tag: `name id class attrs [/]` with empty fragments dropped.
///
/// The result never has leading, trailing or doubled spaces.
pub(crate) fn open_tag_fragment(tag: &Tag, slash: bool, escape: Escape) -> String {
    let fragments = [
        tag.name().to_owned(),
        format_id_escaped(tag.id(), escape),
        format_classes_escaped(tag.classes(), escape),
        format_attributes_escaped(tag.attributes(), escape),
        if slash { "/".to_owned() } else { String::new() },
    ];
    fragments
        .iter()
        .filter(|fragment| !fragment.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
