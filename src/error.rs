//! Error types for dom-facade.
//!
//! Only structural operations fail. Lookups that miss (out-of-range indices,
//! unknown attributes, selectors without matches) return `None` instead.

/// Error type for tree mutation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Replacement markup did not produce a content node.
    #[error("Malformed markup: {0}")]
    MalformedInput(String),

    /// The operation needs a parent (or a real node) and there is none.
    #[error("Detached node: {0}")]
    DetachedNode(String),

    /// The imported node could not be located in the target tree after splicing.
    #[error("Node import failed: {0}")]
    Import(String),
}

/// Result type alias for tree mutation operations.
pub type Result<T> = std::result::Result<T, Error>;
