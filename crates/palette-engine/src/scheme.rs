//! Color scheme generation
//!
//! A scheme derives a palette of related colors from one base color by
//! rotating its hue or stepping its lightness in HSL space.
//!
//! # Usage
//!
//! ```rust
//! use palette_engine::scheme::{generate, SchemeKind};
//!
//! let scheme = generate("#3498DB", SchemeKind::Triadic, 7).unwrap();
//! assert_eq!(scheme.palette.len(), 3);
//! assert_eq!(scheme.fixed_count(), Some(3));
//! ```

use crate::error::{EngineError, Result};
use crate::palette::Palette;
use color_science::{is_valid_hex, parse_hex, Color, FALLBACK_BASE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total lightness span covered by a monochromatic scheme
const MONO_SPAN: f64 = 0.5;

/// Lightness bounds for monochromatic steps
const MONO_MIN_L: f64 = 0.1;
const MONO_MAX_L: f64 = 0.9;

/// Half-width of the analogous hue fan (30°)
const ANALOGOUS_SPREAD: f64 = 30.0 / 360.0;

// =============================================================================
// Scheme Kind
// =============================================================================

/// Rule used to derive a palette from a base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeKind {
    /// Lightness steps of one hue
    #[default]
    Monochromatic,
    /// Hues within ±30° of the base
    Analogous,
    /// Hues from the base to its opposite
    Complementary,
    /// Base plus the two neighbours of its complement
    SplitComplementary,
    /// Three hues 120° apart
    Triadic,
    /// Four hues 90° apart
    Tetradic,
    /// Caller-supplied colors; generating evenly spaces `n` hues
    Custom,
}

impl SchemeKind {
    /// All schemes in picker order
    pub const ALL: [Self; 7] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Custom,
    ];

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::SplitComplementary => "Split-Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::Custom => "Custom",
        }
    }

    /// Number of colors for schemes that ignore the requested count
    pub fn fixed_count(&self) -> Option<usize> {
        match self {
            Self::SplitComplementary | Self::Triadic => Some(3),
            Self::Tetradic => Some(4),
            _ => None,
        }
    }

    /// Smallest count accepted for a generated palette
    pub fn min_count(&self) -> usize {
        match self {
            Self::Monochromatic | Self::Analogous | Self::Complementary => 2,
            Self::Custom => 1,
            Self::SplitComplementary | Self::Triadic | Self::Tetradic => 0,
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SchemeKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "monochromatic" => Ok(Self::Monochromatic),
            "analogous" => Ok(Self::Analogous),
            "complementary" => Ok(Self::Complementary),
            "splitcomplementary" => Ok(Self::SplitComplementary),
            "triadic" => Ok(Self::Triadic),
            "tetradic" => Ok(Self::Tetradic),
            "custom" => Ok(Self::Custom),
            _ => Err(EngineError::UnknownScheme(s.to_string())),
        }
    }
}

// =============================================================================
// Generation
// =============================================================================

/// A generated palette plus what the caller needs to display it
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedScheme {
    /// Scheme that produced the palette
    pub kind: SchemeKind,
    /// Count the caller asked for
    pub requested: usize,
    /// Generated colors
    pub palette: Palette,
    /// True when the base was invalid and the fallback palette was returned
    pub used_fallback_base: bool,
}

impl GeneratedScheme {
    /// Count the caller must show when the scheme ignored its request
    pub fn fixed_count(&self) -> Option<usize> {
        if self.used_fallback_base {
            return None;
        }
        self.kind.fixed_count()
    }

    /// Status note for fixed-count schemes
    pub fn notice(&self) -> Option<String> {
        self.fixed_count()
            .map(|count| format!("Note: {} scheme uses fixed count of {} colors", self.kind, count))
    }
}

/// Generate a palette from a hex base color.
///
/// An invalid `base` never fails the call: the result is `n` copies of
/// `#3498DB` with `used_fallback_base` set.
///
/// # Errors
///
/// Returns [`EngineError::DegenerateRequest`] when `n` is below
/// [`SchemeKind::min_count`].
pub fn generate(base: &str, kind: SchemeKind, n: usize) -> Result<GeneratedScheme> {
    if !is_valid_hex(base) {
        tracing::warn!("Invalid base color {:?}, using fallback {}", base, FALLBACK_BASE);
        return Ok(GeneratedScheme {
            kind,
            requested: n,
            palette: Palette::repeat(FALLBACK_BASE, n),
            used_fallback_base: true,
        });
    }

    let base = parse_hex(base)?;
    let palette = generate_from_color(base, kind, n)?;

    Ok(GeneratedScheme {
        kind,
        requested: n,
        palette,
        used_fallback_base: false,
    })
}

/// Generate a palette from an already decoded base color.
///
/// # Errors
///
/// Returns [`EngineError::DegenerateRequest`] when `n` is below
/// [`SchemeKind::min_count`].
pub fn generate_from_color(base: Color, kind: SchemeKind, n: usize) -> Result<Palette> {
    if n < kind.min_count() {
        tracing::debug!("Rejecting {} scheme with {} colors", kind, n);
        return Err(EngineError::DegenerateRequest {
            kind,
            requested: n,
            minimum: kind.min_count(),
        });
    }

    let hsl = base.to_hsl();
    let (h, l, s) = (hsl.h, hsl.l, hsl.s);
    let steps = n.saturating_sub(1) as f64;

    let palette: Palette = match kind {
        SchemeKind::Monochromatic => (0..n)
            .map(|i| {
                let li = (l - MONO_SPAN / 2.0 + MONO_SPAN * i as f64 / steps)
                    .clamp(MONO_MIN_L, MONO_MAX_L);
                Color::from_hsl(h, li, s)
            })
            .collect(),
        SchemeKind::Analogous => (0..n)
            .map(|i| {
                let hi = h - ANALOGOUS_SPREAD + 2.0 * ANALOGOUS_SPREAD * i as f64 / steps;
                Color::from_hsl(hi.rem_euclid(1.0), l, s)
            })
            .collect(),
        SchemeKind::Complementary => (0..n)
            .map(|i| Color::from_hsl((h + 0.5 * i as f64 / steps).rem_euclid(1.0), l, s))
            .collect(),
        SchemeKind::SplitComplementary => [0.0, 150.0 / 360.0, 210.0 / 360.0]
            .iter()
            .map(|offset| Color::from_hsl((h + offset).rem_euclid(1.0), l, s))
            .collect(),
        SchemeKind::Triadic => rotations(h, l, s, 3),
        SchemeKind::Tetradic => rotations(h, l, s, 4),
        SchemeKind::Custom => (0..n)
            .map(|i| Color::from_hsl((h + i as f64 / n as f64).rem_euclid(1.0), l, s))
            .collect(),
    };

    tracing::debug!("Generated {} scheme from {}: {} colors", kind, base, palette.len());
    Ok(palette)
}

/// `parts` hues evenly spaced around the wheel starting at `h`
fn rotations(h: f64, l: f64, s: f64, parts: usize) -> Palette {
    (0..parts)
        .map(|k| Color::from_hsl((h + k as f64 / parts as f64).rem_euclid(1.0), l, s))
        .collect()
}

/// Starter colors shown when Custom is selected before any are supplied
pub fn default_custom_palette() -> Palette {
    Palette::new(vec![
        Color::new(0x34, 0x98, 0xDB),
        Color::new(0xDB, 0x98, 0x34),
        Color::new(0x80, 0x80, 0x80),
        Color::new(0x55, 0x55, 0x55),
        Color::new(0xAA, 0xAA, 0xAA),
    ])
}
