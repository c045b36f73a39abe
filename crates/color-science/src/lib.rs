//! Color science primitives for Theme Studio
//!
//! This crate provides the leaf layer of the palette engine: hex and HSL
//! conversions, WCAG contrast metrics, and color vision deficiency
//! simulation. Every function is pure and operates on copied [`Color`]
//! values.
//!
//! # Modules
//!
//! - [`codec`] - Hex/RGB/HSL conversion and validation
//! - [`metrics`] - Relative luminance, contrast ratio, WCAG levels
//! - [`vision`] - Protanopia/Deuteranopia/Tritanopia/Grayscale simulation
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use color_science::{contrast_ratio, wcag_level, Color, WcagLevel};
//!
//! let bg: Color = "#3498DB".parse().unwrap();
//! let ratio = contrast_ratio(bg, Color::BLACK);
//! assert_eq!(wcag_level(ratio), WcagLevel::Aa);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod metrics;
pub mod vision;

// Re-export commonly used types
pub use codec::{adjust_luminance, is_valid_hex, parse_hex, Color, Hsl, FALLBACK_BASE};
pub use error::{ColorError, Result};
pub use metrics::{
    contrast, contrast_ratio, pick_foreground, relative_luminance, wcag_level, ContrastResult,
    WcagLevel, FOREGROUND_THRESHOLD,
};
pub use vision::{simulate, simulate_palette, VisionDeficiency};
