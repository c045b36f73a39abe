//! Color vision deficiency simulation
//!
//! Dichromacy is approximated with a fixed 3x3 matrix applied to the
//! normalized sRGB vector. Grayscale weights the *unlinearized* channels with
//! the luminance coefficients. Results are clamped and truncated to 8 bits.

use crate::codec::Color;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.000],
    [0.558, 0.442, 0.000],
    [0.000, 0.242, 0.758],
];

const DEUTERANOPIA: Matrix = [
    [0.625, 0.375, 0.000],
    [0.700, 0.300, 0.000],
    [0.000, 0.300, 0.700],
];

const TRITANOPIA: Matrix = [
    [0.950, 0.050, 0.000],
    [0.000, 0.433, 0.567],
    [0.000, 0.475, 0.525],
];

/// Vision mode used to preview a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisionDeficiency {
    /// Normal vision, no transform
    #[default]
    None,
    /// Red-blind
    Protanopia,
    /// Green-blind
    Deuteranopia,
    /// Blue-blind
    Tritanopia,
    /// No color perception
    Grayscale,
}

impl VisionDeficiency {
    /// All modes in picker order
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Grayscale,
    ];

    /// Human-readable label for UI display
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Normal Vision",
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
            Self::Grayscale => "Grayscale",
        }
    }
}

impl fmt::Display for VisionDeficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisionDeficiency {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "normal" | "normal vision" => Ok(Self::None),
            "protanopia" => Ok(Self::Protanopia),
            "deuteranopia" => Ok(Self::Deuteranopia),
            "tritanopia" => Ok(Self::Tritanopia),
            "grayscale" | "greyscale" => Ok(Self::Grayscale),
            _ => Err(ColorError::UnknownDeficiency(s.to_string())),
        }
    }
}

/// Show how `color` appears under `deficiency`
pub fn simulate(color: Color, deficiency: VisionDeficiency) -> Color {
    let rgb = color.to_unit_rgb();

    let transformed = match deficiency {
        VisionDeficiency::None => return color,
        VisionDeficiency::Protanopia => apply_matrix(&PROTANOPIA, rgb),
        VisionDeficiency::Deuteranopia => apply_matrix(&DEUTERANOPIA, rgb),
        VisionDeficiency::Tritanopia => apply_matrix(&TRITANOPIA, rgb),
        VisionDeficiency::Grayscale => {
            let [r, g, b] = rgb;
            let gray = 0.2126 * r + 0.7152 * g + 0.0722 * b;
            [gray, gray, gray]
        }
    };

    Color::from_unit_rgb_truncated(transformed)
}

fn apply_matrix(m: &Matrix, [r, g, b]: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * r + m[0][1] * g + m[0][2] * b,
        m[1][0] * r + m[1][1] * g + m[1][2] * b,
        m[2][0] * r + m[2][1] * g + m[2][2] * b,
    ]
}

/// Apply [`simulate`] to every color, preserving order
pub fn simulate_palette(colors: &[Color], deficiency: VisionDeficiency) -> Vec<Color> {
    colors.iter().map(|&c| simulate(c, deficiency)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_hex;

    fn hex(s: &str) -> Color {
        parse_hex(s).unwrap()
    }

    const SAMPLES: [&str; 5] = ["#FF0000", "#00FF00", "#0000FF", "#3498DB", "#FFFFFF"];

    fn simulated(deficiency: VisionDeficiency) -> Vec<String> {
        SAMPLES
            .iter()
            .map(|s| simulate(hex(s), deficiency).to_hex())
            .collect()
    }

    #[test]
    fn test_none_is_identity() {
        for s in SAMPLES {
            assert_eq!(simulate(hex(s), VisionDeficiency::None), hex(s));
        }
    }

    #[test]
    fn test_protanopia() {
        assert_eq!(
            simulated(VisionDeficiency::Protanopia),
            ["#908E00", "#6E703D", "#0000C1", "#5F60CA", "#FFFFFF"]
        );
    }

    #[test]
    fn test_deuteranopia() {
        assert_eq!(
            simulated(VisionDeficiency::Deuteranopia),
            ["#9FB200", "#5F4C4C", "#0000B2", "#5951C6", "#FFFFFF"]
        );
    }

    #[test]
    fn test_tritanopia() {
        assert_eq!(
            simulated(VisionDeficiency::Tritanopia),
            ["#F20000", "#0C6E79", "#009085", "#39BDBB", "#FFFFFF"]
        );
    }

    #[test]
    fn test_grayscale_channels_equal() {
        assert_eq!(
            simulated(VisionDeficiency::Grayscale),
            ["#363636", "#B6B6B6", "#121212", "#878787", "#FFFFFF"]
        );

        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let gray = simulate(Color::new(r, g, b), VisionDeficiency::Grayscale);
                    assert_eq!(gray.r, gray.g);
                    assert_eq!(gray.g, gray.b);
                }
            }
        }
    }

    #[test]
    fn test_simulate_palette_preserves_order() {
        let palette = vec![hex("#FF0000"), hex("#0000FF"), hex("#00FF00")];
        let out = simulate_palette(&palette, VisionDeficiency::Protanopia);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], simulate(palette[0], VisionDeficiency::Protanopia));
        assert_eq!(out[1], simulate(palette[1], VisionDeficiency::Protanopia));
        assert_eq!(out[2], simulate(palette[2], VisionDeficiency::Protanopia));

        assert_eq!(simulate_palette(&palette, VisionDeficiency::None), palette);
    }

    #[test]
    fn test_deficiency_from_str() {
        assert_eq!("Normal Vision".parse::<VisionDeficiency>().unwrap(), VisionDeficiency::None);
        assert_eq!("tritanopia".parse::<VisionDeficiency>().unwrap(), VisionDeficiency::Tritanopia);
        assert_eq!("Greyscale".parse::<VisionDeficiency>().unwrap(), VisionDeficiency::Grayscale);
        assert!("achromatopsia".parse::<VisionDeficiency>().is_err());

        for mode in VisionDeficiency::ALL {
            assert_eq!(mode.label().parse::<VisionDeficiency>().unwrap(), mode);
        }
    }
}
