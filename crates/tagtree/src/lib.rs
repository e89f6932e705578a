//! Markup tree construction and serialization.
//!
//! Callers assemble a tree of [`Node`]s with builder methods, then render it
//! either indented (one node per line, four spaces per nesting level) or
//! minified (a single line without whitespace between tags).
//!
//! # Architecture
//!
//! - [`Node`]: closed set of node variants (text, void, content, container)
//! - [`Document`]: the `<html>` root and the rendering entry point
//! - [`render_node`]: renders any subtree, driven by [`RenderOptions`]
//! - [`Layout`]: line framing strategy; [`Indented`] and [`Minified`] are built in
//!
//! Output is a structural text rendering. Values are written verbatim unless
//! [`Escape::Html`] is selected, and nesting legality is never checked.
//!
//! # Example
//!
//! ```
//! use tagtree::{ContainerElement, ContentElement, Document, VoidElement};
//!
//! let mut doc = Document::new().with_lang(Some("en"));
//! doc.container(ContainerElement::new("div").with_class("main"), |div| {
//!     div.content(ContentElement::new("h1", "Hi"))
//!         .void(VoidElement::new("br").with_slash(true));
//! });
//!
//! assert_eq!(
//!     doc.render(false).unwrap(),
//!     "<html lang=\"en\">\n    <div class=\"main\">\n        <h1>Hi</h1>\n        <br />\n    </div>\n</html>\n"
//! );
//! ```

mod attrs;
mod document;
mod error;
mod node;
mod options;
mod serializer;

pub use attrs::{escape_html, format_attributes, format_classes, format_id};
pub use document::Document;
pub use error::RenderError;
pub use node::{
    Attribute, ContainerElement, ContentElement, Node, PLAIN_NAME, PlainText, Tag, VoidElement,
};
pub use options::{DEFAULT_INDENT, Escape, RenderOptions, RenderStyle};
pub use serializer::{Indented, Layout, Minified, render_node, render_with_layout};
