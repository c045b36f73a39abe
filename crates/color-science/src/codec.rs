//! Hex, RGB and HSL conversions
//!
//! Colors are stored as 8-bit sRGB channels. The canonical textual form is
//! `#RRGGBB` in uppercase; input is case-insensitive, the leading `#` is
//! optional and the 3-digit shorthand (`#ABC`) expands to `#AABBCC`.
//!
//! # Usage
//!
//! ```rust
//! use color_science::codec::{is_valid_hex, parse_hex, Color};
//!
//! assert!(is_valid_hex("3498db"));
//! let color = parse_hex("#3498db").unwrap();
//! assert_eq!(color.to_hex(), "#3498DB");
//!
//! let hsl = color.to_hsl();
//! assert!((hsl.h - 0.567).abs() < 0.001);
//! ```

use crate::error::{ColorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Base color substituted when a scheme is requested for an invalid hex
pub const FALLBACK_BASE: Color = Color::new(0x34, 0x98, 0xDB);

// =============================================================================
// Color
// =============================================================================

/// An opaque sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// Hue/lightness/saturation triple, every component in [0, 1]
///
/// Hue is a position on the color wheel, so `0.5` is 180°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in [0, 1)
    pub h: f64,
    /// Lightness in [0, 1]
    pub l: f64,
    /// Saturation in [0, 1]
    pub s: f64,
}

impl Color {
    /// Pure black
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Pure white
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex string, degrading to black on malformed input.
    ///
    /// Callers that need to know about bad input should use [`parse_hex`]
    /// or check [`is_valid_hex`] first.
    pub fn from_hex_lossy(hex: &str) -> Self {
        parse_hex(hex).unwrap_or(Self::BLACK)
    }

    /// Canonical `#RRGGBB` form
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels normalized to [0, 1]
    pub fn to_unit_rgb(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Build a color from normalized channels, clamping each to [0, 1].
    ///
    /// Channels are scaled by 255 and truncated, so `0.999` maps to 254.
    pub fn from_unit_rgb_truncated(rgb: [f64; 3]) -> Self {
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Self::new(to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]))
    }

    /// Convert to HSL
    pub fn to_hsl(self) -> Hsl {
        let [r, g, b] = self.to_unit_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let range = max - min;
        let l = sum / 2.0;

        if range == 0.0 {
            return Hsl { h: 0.0, l, s: 0.0 };
        }

        let s = if l <= 0.5 {
            range / sum
        } else {
            range / (2.0 - max - min)
        };

        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;
        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hsl {
            h: (h / 6.0).rem_euclid(1.0),
            l,
            s,
        }
    }

    /// Build a color from HSL components.
    ///
    /// Hue wraps modulo 1, lightness and saturation are clamped to [0, 1],
    /// and each channel is rounded to the nearest integer.
    pub fn from_hsl(h: f64, l: f64, s: f64) -> Self {
        let h = h.rem_euclid(1.0);
        let l = l.clamp(0.0, 1.0);
        let s = s.clamp(0.0, 1.0);

        let [r, g, b] = if s == 0.0 {
            [l, l, l]
        } else {
            let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let m1 = 2.0 * l - m2;
            [
                hue_to_channel(m1, m2, h + 1.0 / 3.0),
                hue_to_channel(m1, m2, h),
                hue_to_channel(m1, m2, h - 1.0 / 3.0),
            ]
        };

        let to_u8 = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Same as [`Color::from_hsl`] taking an [`Hsl`] value
    pub fn from_hsl_value(hsl: Hsl) -> Self {
        Self::from_hsl(hsl.h, hsl.l, hsl.s)
    }
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// =============================================================================
// Hex parsing
// =============================================================================

fn hex_pattern() -> &'static Regex {
    static HEX_REGEX: OnceLock<Regex> = OnceLock::new();
    HEX_REGEX.get_or_init(|| {
        Regex::new(r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("hex pattern compiles")
    })
}

/// Check whether `hex` is a 3 or 6 digit hex color with an optional `#`
pub fn is_valid_hex(hex: &str) -> bool {
    hex_pattern().is_match(hex)
}

/// Parse a hex color string.
///
/// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB` in any case. The 3-digit
/// form doubles each digit.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] when `hex` fails [`is_valid_hex`].
pub fn parse_hex(hex: &str) -> Result<Color> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidColor(hex.to_string()));
    }

    let digits = hex.trim_start_matches('#');
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16)
            .map_err(|_| ColorError::InvalidColor(hex.to_string()))
    };

    Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Scale a color's HSL lightness by `factor`, keeping hue and saturation.
///
/// The result is clamped to [0.05, 0.95] so it never collapses to pure
/// black or white. A factor below 1 darkens, above 1 lightens.
pub fn adjust_luminance(color: Color, factor: f64) -> Color {
    let hsl = color.to_hsl();
    let l = (hsl.l * factor).clamp(0.05, 0.95);
    Color::from_hsl(hsl.h, l, hsl.s)
}
