//! HTML tag catalog for `tagtree`.
//!
//! Instead of one builder function per element, this crate keeps a
//! declarative [`CATALOG`] of (name, node variant, recognized attributes) and
//! derives nodes from it through a single [`build`] entry point.
//!
//! The catalog checks arguments against its own entries (unknown tags,
//! unknown attribute keys, children on leaf elements). It does not check
//! whether an element may legally appear inside its parent.
//!
//! # Example
//!
//! ```
//! use tagtree::Document;
//! use tagtree_tags::{TagArgs, TagsExt};
//!
//! let mut doc = Document::new().with_lang(Some("en"));
//! doc.push_container("ul", TagArgs::new().class("menu"), |ul| {
//!     ul.push_tag("li", TagArgs::new().content("One"))?
//!         .push_tag("li", TagArgs::new().content("Two"))?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(
//!     doc.render(true)?,
//!     r#"<html lang="en"><ul class="menu"><li>One</li><li>Two</li></ul></html>"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod catalog;
mod error;

pub use builder::{TagArgs, TagsExt, build};
pub use catalog::{CATALOG, TagKind, TagSpec, lookup, lookup_any};
pub use error::TagError;
