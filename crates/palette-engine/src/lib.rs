//! Palette engine for Theme Studio
//!
//! This crate turns one base color into an accessible palette: scheme
//! generation, WCAG enforcement, light/dark variants, and the per-slot
//! report a front end shows. It builds on [`color_science`] for color math.
//!
//! Every engine function is a pure function of its inputs. The one stateful
//! type, [`session::StudioSession`], is owned by the caller and only exists
//! to bundle the configuration with the last generated palette.
//!
//! # Modules
//!
//! - [`scheme`] - Scheme kinds and palette generation
//! - [`compliance`] - Lightness search for a target contrast ratio
//! - [`variant`] - Dark/light palette variants
//! - [`analysis`] - Per-slot contrast report with optional enforcement
//! - [`config`] - Studio configuration, loadable from JSON
//! - [`session`] - Caller-owned state tying the above together
//! - [`source`] - Random base colors behind a mockable trait
//! - [`sampling`] - Palettes from externally sampled colors
//! - [`wheel`] - Hue wheel marker layout
//! - [`palette`] - The ordered [`Palette`] type
//!
//! # Example
//!
//! ```rust
//! use palette_engine::{analyze_palette, generate, AnalysisOptions, ComplianceConfig, SchemeKind};
//!
//! let scheme = generate("#3498DB", SchemeKind::Complementary, 5).unwrap();
//! let options = AnalysisOptions {
//!     enforce: true,
//!     compliance: ComplianceConfig::aaa(),
//! };
//! let report = analyze_palette(&scheme.palette, &options);
//! assert!(report.slots.iter().all(|s| s.adjusted_contrast.ratio >= 7.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod compliance;
pub mod config;
pub mod error;
pub mod palette;
pub mod sampling;
pub mod scheme;
pub mod session;
pub mod source;
pub mod variant;
pub mod wheel;

// Re-export commonly used types
pub use analysis::{analyze_color, analyze_palette, AnalysisOptions, PaletteReport, SlotReport};
pub use compliance::{ensure_compliant, enforce, ComplianceConfig, ComplianceOutcome};
pub use config::{StudioConfig, WcagTarget};
pub use error::{EngineError, Result};
pub use palette::Palette;
pub use sampling::{palette_from_samples, ColorSample};
pub use scheme::{default_custom_palette, generate, generate_from_color, GeneratedScheme, SchemeKind};
pub use session::{SessionView, StudioSession};
pub use source::{vary_color, BaseColorSource, RandomSource};
pub use variant::{derive_variant, ThemeMode};
pub use wheel::{wheel_markers, WheelMarker};
