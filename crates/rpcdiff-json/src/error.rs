//! Error types for JSON comparison

use thiserror::Error;

/// Result type for comparison operations
pub type DiffResult<T> = Result<T, DiffError>;

/// Errors raised when a compared document cannot be parsed
#[derive(Debug, Error)]
pub enum DiffError {
    /// The left-hand document is not valid JSON
    #[error("left document is not valid JSON: {source}")]
    LeftInvalid {
        #[source]
        source: serde_json::Error,
    },

    /// The right-hand document is not valid JSON
    #[error("right document is not valid JSON: {source}")]
    RightInvalid {
        #[source]
        source: serde_json::Error,
    },
}
