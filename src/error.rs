//! Error types for the regrid library.
//!
//! Most problems inside the sampling pipeline degrade locally (a malformed
//! parameter keeps its default, an unknown stage is skipped, an out-of-range
//! sample becomes an unavailable cell). This enum covers the surfaces that do
//! return hard errors: configuration loading and grid construction.

use thiserror::Error;

/// The main error type for regrid operations.
#[derive(Error, Debug)]
pub enum RegridError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Grid construction errors
    #[error("Grid error: {message}")]
    Grid { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with RegridError
pub type Result<T> = std::result::Result<T, RegridError>;
