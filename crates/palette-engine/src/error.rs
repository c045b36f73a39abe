//! Error types for palette generation

use crate::scheme::SchemeKind;
use color_science::ColorError;
use thiserror::Error;

/// Errors that can occur while building or configuring palettes
#[derive(Debug, Error)]
pub enum EngineError {
    /// Count is too small for the requested scheme
    #[error("{kind} scheme needs at least {minimum} colors, got {requested}")]
    DegenerateRequest {
        /// Scheme that was requested
        kind: SchemeKind,
        /// Requested count
        requested: usize,
        /// Smallest count the scheme supports
        minimum: usize,
    },

    /// Unknown scheme name
    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),

    /// Unknown theme mode name
    #[error("Unknown theme mode: {0}")]
    UnknownMode(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Color parse error
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
