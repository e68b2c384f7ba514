//! Error types for introspection fetch.

use thiserror::Error;

/// Error type for introspection fetch operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error or non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not a usable introspection result.
    #[error("introspection parse error: {0}")]
    Parse(#[from] hookgen_schema::ParseError),
}
