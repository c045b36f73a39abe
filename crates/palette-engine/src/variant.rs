//! Light and dark palette variants
//!
//! The dark variant remaps lightness per slot, following the
//! primary/secondary/accent/background slot convention. Slots past the
//! fourth fall back to inverting lightness. Hue is never touched.

use crate::error::EngineError;
use crate::palette::Palette;
use color_science::{Color, Hsl};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme mode a palette is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds
    #[default]
    Light,
    /// Dark backgrounds
    Dark,
}

impl ThemeMode {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
        }
    }

    /// Whether this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "light mode" => Ok(ThemeMode::Light),
            "dark" | "dark mode" => Ok(ThemeMode::Dark),
            _ => Err(EngineError::UnknownMode(s.to_string())),
        }
    }
}

/// Dark-mode lightness (and background saturation) for one slot
fn dark_slot(index: usize, hsl: Hsl) -> Hsl {
    let Hsl { h, l, s } = hsl;
    match index {
        0 => Hsl { h, l: if l < 0.5 { 0.7 } else { 0.3 }, s },
        1 => Hsl { h, l: if l < 0.5 { 0.6 } else { 0.4 }, s },
        2 => Hsl { h, l: if l < 0.5 { 0.8 } else { 0.75 }, s },
        3 => Hsl { h, l: 0.1, s: s.min(0.3) },
        _ => Hsl { h, l: 1.0 - l, s },
    }
}

/// Derive the counterpart of `palette` for `mode`.
///
/// `Light` returns the palette unchanged. The result always has the same
/// length and order as the input.
pub fn derive_variant(palette: &Palette, mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => palette.clone(),
        ThemeMode::Dark => palette
            .iter()
            .enumerate()
            .map(|(i, color)| Color::from_hsl_value(dark_slot(i, color.to_hsl())))
            .collect(),
    }
}
