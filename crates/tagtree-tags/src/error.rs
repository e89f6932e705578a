//! Error types for catalog-driven building.

/// Arguments that do not fit a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TagError {
    /// No catalog entry has this name.
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    /// The attribute key is not recognized by the tag.
    #[error("attribute {key} is not recognized by <{tag}>")]
    UnknownAttribute {
        /// Element name.
        tag: String,
        /// Rejected attribute key.
        key: String,
    },

    /// Children were supplied for a void or content element.
    #[error("<{0}> cannot have child nodes")]
    ChildrenNotAllowed(String),

    /// Text content was supplied for a void or container element.
    #[error("<{0}> cannot have text content")]
    ContentNotAllowed(String),

    /// A self-closing slash was requested for a non-void element.
    #[error("<{0}> is not a void element")]
    SlashNotAllowed(String),
}
