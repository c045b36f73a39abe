//! WCAG compliance enforcement
//!
//! Walks a background color's HSL lightness in 1% steps, away from the
//! foreground, until the pair reaches the target contrast ratio. Hue and
//! saturation never change.

use crate::error::{EngineError, Result};
use color_science::{contrast_ratio, Color};
use serde::{Deserialize, Serialize};

/// Maximum lightness steps tried before giving up
pub const MAX_STEPS: usize = 100;

/// Lightness change per step
pub const STEP: f64 = 0.01;

/// Target for [`ensure_compliant`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceConfig {
    /// Contrast ratio the adjusted pair must reach
    pub min_ratio: f64,
    /// Keep hue and saturation while adjusting.
    ///
    /// Adjustment only ever moves lightness, so both settings currently
    /// produce the same colors.
    pub preserve_character: bool,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self::aa()
    }
}

impl ComplianceConfig {
    /// 4.5:1, WCAG AA for body text
    pub fn aa() -> Self {
        Self {
            min_ratio: 4.5,
            preserve_character: true,
        }
    }

    /// 7:1, WCAG AAA for body text
    pub fn aaa() -> Self {
        Self {
            min_ratio: 7.0,
            preserve_character: true,
        }
    }

    /// Check that the ratio is a positive finite number
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if !self.min_ratio.is_finite() || self.min_ratio <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "min ratio must be a positive number, got {}",
                self.min_ratio
            )));
        }
        Ok(())
    }
}

/// What the lightness search did to a background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceOutcome {
    /// The pair already met the target
    AlreadyCompliant(Color),
    /// A lighter or darker background was found
    Adjusted {
        /// Adjusted background
        color: Color,
        /// Steps taken, in [1, 100]
        steps: usize,
    },
    /// The search ran out of steps; the original background is kept
    Unmet(Color),
}

impl ComplianceOutcome {
    /// Background to use
    pub fn color(&self) -> Color {
        match self {
            Self::AlreadyCompliant(color) | Self::Unmet(color) => *color,
            Self::Adjusted { color, .. } => *color,
        }
    }

    /// Whether the returned color meets the target
    pub fn is_compliant(&self) -> bool {
        !matches!(self, Self::Unmet(_))
    }
}

/// Run the lightness search and report how it ended
pub fn enforce(fg: Color, bg: Color, config: &ComplianceConfig) -> ComplianceOutcome {
    if contrast_ratio(fg, bg) >= config.min_ratio {
        return ComplianceOutcome::AlreadyCompliant(bg);
    }

    let hsl = bg.to_hsl();
    // Move away from the foreground: a light foreground wants a darker background.
    let direction = if contrast_ratio(fg, Color::BLACK) > contrast_ratio(fg, Color::WHITE) {
        -1.0
    } else {
        1.0
    };

    let mut l = hsl.l;
    for step in 1..=MAX_STEPS {
        l = (l + direction * STEP).clamp(0.0, 1.0);
        let candidate = Color::from_hsl(hsl.h, l, hsl.s);
        if contrast_ratio(fg, candidate) >= config.min_ratio {
            return ComplianceOutcome::Adjusted {
                color: candidate,
                steps: step,
            };
        }
    }

    tracing::debug!(
        "No background within {} steps of {} reaches {}:1 against {}",
        MAX_STEPS,
        bg,
        config.min_ratio,
        fg
    );
    ComplianceOutcome::Unmet(bg)
}

/// Adjust `bg` until it reaches `config.min_ratio` against `fg`.
///
/// Returns `bg` unchanged when it already complies, and also when no
/// lightness reaches the target. Callers needing strict compliance must
/// re-check the result or use [`enforce`].
pub fn ensure_compliant(fg: Color, bg: Color, config: &ComplianceConfig) -> Color {
    enforce(fg, bg, config).color()
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_science::parse_hex;

    fn hex(s: &str) -> Color {
        parse_hex(s).unwrap()
    }

    fn ratio(min_ratio: f64) -> ComplianceConfig {
        ComplianceConfig {
            min_ratio,
            preserve_character: true,
        }
    }

    #[test]
    fn test_compliant_input_unchanged() {
        let fg = hex("#000000");
        let bg = hex("#808080");
        let result = ensure_compliant(fg, bg, &ratio(4.5));
        assert_eq!(result, bg);
        assert!(contrast_ratio(fg, result) >= 4.5);
        assert_eq!(enforce(fg, bg, &ratio(4.5)), ComplianceOutcome::AlreadyCompliant(bg));
    }

    #[test]
    fn test_lightens_against_black_text() {
        let outcome = enforce(hex("#000000"), hex("#808080"), &ratio(7.0));
        assert_eq!(
            outcome,
            ComplianceOutcome::Adjusted {
                color: hex("#979797"),
                steps: 9
            }
        );
        assert!(contrast_ratio(Color::BLACK, outcome.color()) >= 7.0);
    }

    #[test]
    fn test_darkens_against_white_text() {
        assert_eq!(ensure_compliant(Color::WHITE, hex("#808080"), &ratio(4.5)), hex("#767676"));
        assert_eq!(ensure_compliant(Color::WHITE, hex("#808080"), &ratio(7.0)), hex("#575757"));
    }

    #[test]
    fn test_keeps_hue_and_saturation() {
        let bg = hex("#DB346E");
        let adjusted = ensure_compliant(Color::BLACK, bg, &ratio(7.0));
        assert_eq!(adjusted, hex("#E67199"));

        let before = bg.to_hsl();
        let after = adjusted.to_hsl();
        assert!((before.h - after.h).abs() < 0.01);
        assert!((before.s - after.s).abs() < 0.02);
    }

    #[test]
    fn test_unmet_returns_original() {
        let fg = hex("#777777");
        let bg = hex("#787878");
        let outcome = enforce(fg, bg, &ratio(21.0));
        assert_eq!(outcome, ComplianceOutcome::Unmet(bg));
        assert!(!outcome.is_compliant());
        assert_eq!(ensure_compliant(fg, bg, &ratio(21.0)), bg);
    }

    #[test]
    fn test_preserve_character_flag_has_no_effect() {
        let fg = Color::WHITE;
        let bg = hex("#3498DB");
        let keep = ComplianceConfig {
            min_ratio: 7.0,
            preserve_character: true,
        };
        let free = ComplianceConfig {
            preserve_character: false,
            ..keep
        };
        assert_eq!(ensure_compliant(fg, bg, &keep), ensure_compliant(fg, bg, &free));
    }

    #[test]
    fn test_idempotent_on_compliant_output() {
        let cfg = ratio(7.0);
        let fg = Color::BLACK;
        let once = ensure_compliant(fg, hex("#CB34DB"), &cfg);
        let twice = ensure_compliant(fg, once, &cfg);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_validate() {
        assert!(ComplianceConfig::aa().validate().is_ok());
        assert!(ComplianceConfig::aaa().validate().is_ok());
        assert!(ratio(0.0).validate().is_err());
        assert!(ratio(-3.0).validate().is_err());
        assert!(ratio(f64::NAN).validate().is_err());
    }
}
