//! Error types for comparison runs

use std::path::PathBuf;
use thiserror::Error;

/// Result type for comparison run operations
pub type RunResult<T> = Result<T, RunError>;

/// Errors that abort a comparison run
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to list the request directory
    #[error("failed to read request directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a request or expected-response file
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("request to {host} failed: {source}")]
    Transport {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response body is not valid JSON
    #[error("invalid JSON from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the report or a response artifact
    #[error("failed to write report file {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
