//! WCAG 2.x contrast metrics
//!
//! Luminance and contrast follow the WCAG 2.x definitions exactly, since the
//! level thresholds (7, 4.5, 3) assume this formula.

use crate::codec::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contrast a foreground needs against black before black is chosen as text
///
/// This stays at the AA threshold even when the caller targets AAA.
pub const FOREGROUND_THRESHOLD: f64 = 4.5;

// =============================================================================
// WCAG Levels
// =============================================================================

/// Accessibility tier for a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Below 3:1
    #[serde(rename = "Fail")]
    Fail,
    /// At least 3:1, enough for large text only
    #[serde(rename = "AA Large")]
    AaLarge,
    /// At least 4.5:1
    #[serde(rename = "AA")]
    Aa,
    /// At least 7:1
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Display label used by palette tables
    pub fn label(&self) -> &'static str {
        match self {
            WcagLevel::Fail => "Fail",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contrast ratio of a color pair and its WCAG level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Ratio in [1, 21]
    pub ratio: f64,
    /// Level derived from `ratio`
    pub level: WcagLevel,
}

impl ContrastResult {
    /// Ratio formatted with one decimal, e.g. `4.6:1`
    pub fn ratio_label(&self) -> String {
        format!("{:.1}:1", self.ratio)
    }
}

// =============================================================================
// Luminance and Contrast
// =============================================================================

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, 0 for black and 1 for white
pub fn relative_luminance(color: Color) -> f64 {
    let r = linearize(color.r);
    let g = linearize(color.g);
    let b = linearize(color.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, symmetric and in [1, 21]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Classify a contrast ratio. Each band includes its lower bound.
pub fn wcag_level(ratio: f64) -> WcagLevel {
    if ratio >= 7.0 {
        WcagLevel::Aaa
    } else if ratio >= 4.5 {
        WcagLevel::Aa
    } else if ratio >= 3.0 {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}

/// Contrast ratio and level for a color pair
pub fn contrast(a: Color, b: Color) -> ContrastResult {
    let ratio = contrast_ratio(a, b);
    ContrastResult {
        ratio,
        level: wcag_level(ratio),
    }
}

/// Pick black or white text for a background
pub fn pick_foreground(bg: Color) -> Color {
    if contrast_ratio(bg, Color::BLACK) >= FOREGROUND_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_hex;

    fn hex(s: &str) -> Color {
        parse_hex(s).unwrap()
    }

    #[test]
    fn test_relative_luminance_extremes() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_relative_luminance_uses_low_segment() {
        // 10/255 = 0.0392 sits below the 0.03928 knee
        let dark = Color::new(10, 10, 10);
        let expected = (10.0 / 255.0) / 12.92;
        assert!((relative_luminance(dark) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio(Color::WHITE, Color::BLACK);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_ratio_low_contrast() {
        assert!(contrast_ratio(hex("#808080"), hex("#707070")) < 1.3);
    }

    #[test]
    fn test_contrast_ratio_symmetric() {
        let colors = ["#3498DB", "#DB9834", "#808080", "#000000", "#FFFFFF", "#1E3A5F"];
        for a in colors {
            for b in colors {
                assert_eq!(contrast_ratio(hex(a), hex(b)), contrast_ratio(hex(b), hex(a)));
            }
        }
    }

    #[test]
    fn test_contrast_ratio_self_is_one() {
        for c in ["#3498DB", "#000000", "#FFFFFF", "#ABCDEF"] {
            assert_eq!(contrast_ratio(hex(c), hex(c)), 1.0);
        }
    }

    #[test]
    fn test_wcag_level_boundaries() {
        assert_eq!(wcag_level(21.0), WcagLevel::Aaa);
        assert_eq!(wcag_level(7.0), WcagLevel::Aaa);
        assert_eq!(wcag_level(6.99), WcagLevel::Aa);
        assert_eq!(wcag_level(4.5), WcagLevel::Aa);
        assert_eq!(wcag_level(4.49), WcagLevel::AaLarge);
        assert_eq!(wcag_level(3.0), WcagLevel::AaLarge);
        assert_eq!(wcag_level(2.9), WcagLevel::Fail);
        assert_eq!(wcag_level(1.0), WcagLevel::Fail);
    }

    #[test]
    fn test_wcag_level_labels() {
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
        assert_eq!(WcagLevel::Aa.to_string(), "AA");
        assert_eq!(WcagLevel::AaLarge.to_string(), "AA Large");
        assert_eq!(WcagLevel::Fail.to_string(), "Fail");
        assert_eq!(serde_json::to_string(&WcagLevel::AaLarge).unwrap(), "\"AA Large\"");
        assert!(WcagLevel::Aaa > WcagLevel::Aa);
    }

    #[test]
    fn test_pick_foreground() {
        assert_eq!(pick_foreground(Color::WHITE), Color::BLACK);
        assert_eq!(pick_foreground(Color::BLACK), Color::WHITE);
        // 6.66:1 against black
        assert_eq!(pick_foreground(hex("#3498DB")), Color::BLACK);
        assert_eq!(pick_foreground(hex("#4D34DB")), Color::WHITE);
    }

    #[test]
    fn test_contrast_result() {
        let result = contrast(hex("#000000"), hex("#808080"));
        assert_eq!(result.level, WcagLevel::Aa);
        assert_eq!(result.ratio_label(), "5.3:1");
    }
}
