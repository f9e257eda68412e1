//! Common error types for magpho

use thiserror::Error;

/// Common result type for magpho operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across magpho crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
