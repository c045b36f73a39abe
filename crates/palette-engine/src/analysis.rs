//! Per-slot accessibility report
//!
//! For every color of a palette this picks a readable text color, measures
//! the contrast, and optionally swaps in a compliant background. This is
//! the data behind the "Original / Contrast / WCAG Level / Adjusted" table.

use crate::compliance::{enforce, ComplianceConfig};
use crate::palette::Palette;
use color_science::{contrast, pick_foreground, Color, ContrastResult, WcagLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a palette should be analyzed
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalysisOptions {
    /// Replace colors that miss the target
    pub enforce: bool,
    /// Target used when `enforce` is set
    pub compliance: ComplianceConfig,
}

/// Accessibility data for one palette slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotReport {
    /// Slot index
    pub index: usize,
    /// Color as generated
    pub original: Color,
    /// Text color chosen for the slot
    pub foreground: Color,
    /// Contrast of `original` against `foreground`
    pub contrast: ContrastResult,
    /// Color after enforcement, equal to `original` when untouched
    pub adjusted: Color,
    /// Contrast of `adjusted` against `foreground`
    pub adjusted_contrast: ContrastResult,
}

impl SlotReport {
    /// Whether enforcement changed the color
    pub fn was_adjusted(&self) -> bool {
        self.adjusted != self.original
    }

    /// Tooltip shown on adjusted swatches
    pub fn tooltip(&self) -> Option<String> {
        self.was_adjusted().then(|| {
            format!(
                "Adjusted from {} for {} compliance",
                self.original, self.adjusted_contrast.level
            )
        })
    }
}

/// Report for a whole palette, in slot order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaletteReport {
    /// One entry per slot
    pub slots: Vec<SlotReport>,
}

impl PaletteReport {
    /// Colors before enforcement
    pub fn original_palette(&self) -> Palette {
        self.slots.iter().map(|s| s.original).collect()
    }

    /// Colors after enforcement
    pub fn adjusted_palette(&self) -> Palette {
        self.slots.iter().map(|s| s.adjusted).collect()
    }

    /// Number of slots enforcement changed
    pub fn adjusted_count(&self) -> usize {
        self.slots.iter().filter(|s| s.was_adjusted()).count()
    }

    /// How many slots landed on each level, after enforcement
    pub fn summary(&self) -> BTreeMap<WcagLevel, usize> {
        let mut counts = BTreeMap::new();
        for slot in &self.slots {
            *counts.entry(slot.adjusted_contrast.level).or_insert(0) += 1;
        }
        counts
    }

    /// Weakest level across slots, after enforcement
    pub fn weakest_level(&self) -> Option<WcagLevel> {
        self.slots.iter().map(|s| s.adjusted_contrast.level).min()
    }
}

/// Analyze one color against its chosen foreground
pub fn analyze_color(index: usize, color: Color, options: &AnalysisOptions) -> SlotReport {
    let foreground = pick_foreground(color);
    let original = contrast(color, foreground);

    let needs_adjustment = options.enforce
        && original.level != WcagLevel::Aaa
        && original.ratio < options.compliance.min_ratio;

    let adjusted = if needs_adjustment {
        enforce(foreground, color, &options.compliance).color()
    } else {
        color
    };

    let adjusted_contrast = if adjusted == color {
        original
    } else {
        contrast(adjusted, foreground)
    };

    SlotReport {
        index,
        original: color,
        foreground,
        contrast: original,
        adjusted,
        adjusted_contrast,
    }
}

/// Analyze every slot of a palette
pub fn analyze_palette(palette: &Palette, options: &AnalysisOptions) -> PaletteReport {
    PaletteReport {
        slots: palette
            .iter()
            .enumerate()
            .map(|(i, &color)| analyze_color(i, color, options))
            .collect(),
    }
}
