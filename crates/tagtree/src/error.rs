//! Error types for tree serialization.

/// Error during tree rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The tree nests deeper than the configured limit.
    #[error("tree depth exceeds the limit of {limit} levels")]
    DepthLimitExceeded {
        /// Maximum depth allowed by the render options.
        limit: usize,
    },
}
