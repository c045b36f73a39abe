//! Error types for color parsing

use thiserror::Error;

/// Errors that can occur while decoding colors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not a 3 or 6 digit hex color
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Unknown vision deficiency name
    #[error("Unknown vision deficiency: {0}")]
    UnknownDeficiency(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
