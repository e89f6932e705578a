//! Document root.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::RenderError;
use crate::node::{Attribute, ContainerElement, Node};
use crate::options::{RenderOptions, RenderStyle};
use crate::serializer::render_container;

/// Root `<html>` element of a markup tree.
///
/// Derefs to its [`ContainerElement`], so children are added with the usual
/// container methods. Rendering never mutates the tree; repeated renders of an
/// unchanged document produce identical output.
///
/// # Example
///
/// ```
/// use tagtree::{ContainerElement, ContentElement, Document};
///
/// let doc = Document::html(None, &[], None, Some("en"), |html| {
///     html.container(ContainerElement::new("div").with_class("main"), |div| {
///         div.content(ContentElement::new("h1", "Hi"));
///     });
/// });
///
/// assert_eq!(
///     doc.render(true).unwrap(),
///     r#"<html lang="en"><div class="main"><h1>Hi</h1></div></html>"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: ContainerElement,
}

impl Document {
    /// Element name of the document root.
    pub const NAME: &'static str = "html";

    /// Create an empty document without id, classes, `xmlns` or `lang`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fields(None, Vec::new(), None, None)
    }

    /// Create a document with every root field.
    ///
    /// `xmlns` and `lang` are stored as attributes in that order; absent values
    /// are kept in the attribute list and skipped when rendering.
    #[must_use]
    pub fn with_fields(
        id: Option<String>,
        classes: Vec<String>,
        xmlns: Option<String>,
        lang: Option<String>,
    ) -> Self {
        let root = ContainerElement::new(Self::NAME)
            .with_id(id)
            .with_classes(classes)
            .with_attrs([Attribute::new("xmlns", xmlns), Attribute::new("lang", lang)]);
        Self { root }
    }

    /// Create a document with every root field and populate it through
    /// `children`.
    #[must_use]
    pub fn html<F>(
        id: Option<&str>,
        classes: &[&str],
        xmlns: Option<&str>,
        lang: Option<&str>,
        children: F,
    ) -> Self
    where
        F: FnOnce(&mut ContainerElement),
    {
        let mut doc = Self::with_fields(
            id.map(str::to_owned),
            classes.iter().map(|&class| class.to_owned()).collect(),
            xmlns.map(str::to_owned),
            lang.map(str::to_owned),
        );
        children(&mut doc.root);
        doc
    }

    /// Set or clear the root id.
    #[must_use]
    pub fn with_id(self, id: Option<impl Into<String>>) -> Self {
        Self {
            root: self.root.with_id(id),
        }
    }

    /// Append class names to the root in order.
    #[must_use]
    pub fn with_classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: self.root.with_classes(classes),
        }
    }

    /// Set or clear the `xmlns` attribute, keeping its position.
    #[must_use]
    pub fn with_xmlns(mut self, xmlns: Option<impl Into<String>>) -> Self {
        self.root.tag_mut().set_attr("xmlns", xmlns.map(Into::into));
        self
    }

    /// Set or clear the `lang` attribute, keeping its position.
    #[must_use]
    pub fn with_lang(mut self, lang: Option<impl Into<String>>) -> Self {
        self.root.tag_mut().set_attr("lang", lang.map(Into::into));
        self
    }

    /// Root element.
    pub fn root(&self) -> &ContainerElement {
        &self.root
    }

    /// Render the whole document, indented or minified, with default options.
    pub fn render(&self, minified: bool) -> Result<String, RenderError> {
        let options = RenderOptions::default().with_style(RenderStyle::from_minified(minified));
        self.render_with(&options)
    }

    /// Render the whole document with explicit options.
    pub fn render_with(&self, options: &RenderOptions) -> Result<String, RenderError> {
        render_container(&self.root, options)
    }

    /// Consume the document, returning its root as a tree node.
    #[must_use]
    pub fn into_node(self) -> Node {
        Node::Container(self.root)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Document {
    type Target = ContainerElement;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}

/// Renders indented with no depth limit.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions::default().without_max_depth();
        let html = self.render_with(&options).map_err(|_| fmt::Error)?;
        f.write_str(&html)
    }
}
