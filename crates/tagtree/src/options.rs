//! Render options shared by both serialization strategies.

/// Default indentation unit for indented output.
pub const DEFAULT_INDENT: &str = "    ";

/// Output layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RenderStyle {
    /// One node per line, children indented one unit deeper than their parent.
    #[default]
    Indented,
    /// Single line, no whitespace between tags.
    Minified,
}

impl RenderStyle {
    /// Style selected by the `minified` flag of [`Document::render`](crate::Document::render).
    #[must_use]
    pub fn from_minified(minified: bool) -> Self {
        if minified { Self::Minified } else { Self::Indented }
    }
}

/// Escaping applied to text content, ids, class names and attribute values.
///
/// Tag names and attribute keys are always written as given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Escape {
    /// Values are written verbatim. Callers own the escaping.
    #[default]
    Raw,
    /// `& < > " '` are replaced with character references.
    Html,
}

/// Options controlling how a tree is serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderOptions {
    /// Output layout.
    pub style: RenderStyle,
    /// Indentation unit repeated once per nesting level (indented style only).
    pub indent: String,
    /// Deepest node level accepted, counting the rendered node as level 0.
    /// `None` renders trees of any depth.
    pub max_depth: Option<usize>,
    /// Value escaping.
    pub escape: Escape,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: RenderStyle::Indented,
            indent: DEFAULT_INDENT.to_owned(),
            max_depth: None,
            escape: Escape::Raw,
        }
    }
}

impl RenderOptions {
    /// Default options with minified output.
    #[must_use]
    pub fn minified() -> Self {
        Self {
            style: RenderStyle::Minified,
            ..Self::default()
        }
    }

    /// Set the output layout.
    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Reject trees with nodes deeper than `max_depth`.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Accept trees of any depth.
    #[must_use]
    pub fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Set value escaping.
    #[must_use]
    pub fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.style, RenderStyle::Indented);
        assert_eq!(options.indent, "    ");
        assert_eq!(options.max_depth, None);
        assert_eq!(options.escape, Escape::Raw);
    }

    #[test]
    fn test_minified_keeps_other_defaults() {
        let options = RenderOptions::minified();
        assert_eq!(options.style, RenderStyle::Minified);
        assert_eq!(options.indent, DEFAULT_INDENT);
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn test_style_from_minified_flag() {
        assert_eq!(RenderStyle::from_minified(true), RenderStyle::Minified);
        assert_eq!(RenderStyle::from_minified(false), RenderStyle::Indented);
    }

    #[test]
    fn test_builder_methods() {
        let options = RenderOptions::default()
            .with_style(RenderStyle::Minified)
            .with_indent("\t")
            .with_max_depth(8)
            .with_escape(Escape::Html);
        assert_eq!(
            options,
            RenderOptions {
                style: RenderStyle::Minified,
                indent: "\t".to_owned(),
                max_depth: Some(8),
                escape: Escape::Html,
            }
        );
    }

    #[test]
    fn test_without_max_depth_clears_limit() {
        let options = RenderOptions::default().with_max_depth(3).without_max_depth();
        assert_eq!(options, RenderOptions::default());
    }
}
