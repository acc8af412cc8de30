//! Structured error types for the nerka workspace.

use thiserror::Error;

/// Unified error type for all nerka operations.
#[derive(Debug, Error)]
pub enum NerkaError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (unknown model names, bad settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the nerka workspace.
pub type Result<T> = std::result::Result<T, NerkaError>;
