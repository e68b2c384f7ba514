//! Error types for introspection parsing.

use thiserror::Error;

/// Error type for introspection parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document carries no `__schema` object.
    #[error("no __schema object found in introspection result")]
    MissingSchema,

    /// A list or non-null wrapper carries no inner type.
    #[error("{kind} wrapper in '{context}' has no ofType")]
    MissingOfType {
        /// Wrapper kind (`LIST` or `NON_NULL`).
        kind: String,
        /// Field or argument the wrapper belongs to.
        context: String,
    },

    /// A named type reference carries no name.
    #[error("type reference in '{context}' has neither a name nor an inner type")]
    MissingName {
        /// Field or argument the reference belongs to.
        context: String,
    },
}
