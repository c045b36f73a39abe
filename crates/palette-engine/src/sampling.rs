//! Palettes from sampled colors
//!
//! Image decoding and quantization happen elsewhere; this module only
//! ranks the `(count, color)` samples they produce.

use crate::palette::Palette;
use color_science::Color;
use serde::{Deserialize, Serialize};

/// Number of colors an extracted palette keeps by default
pub const MAX_EXTRACTED_COLORS: usize = 8;

/// A quantized color and how many pixels mapped to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSample {
    /// Pixel count
    pub count: u32,
    /// Sampled color
    pub color: Color,
}

impl ColorSample {
    /// Create a sample
    pub fn new(count: u32, color: Color) -> Self {
        Self { count, color }
    }
}

/// Rank samples by frequency, most common first.
///
/// Duplicate colors are merged by summing their counts. Ties keep the
/// order in which colors were first seen. At most `limit` colors are kept.
pub fn palette_from_samples(samples: &[ColorSample], limit: usize) -> Palette {
    let mut merged: Vec<ColorSample> = Vec::with_capacity(samples.len());
    for sample in samples {
        match merged.iter_mut().find(|m| m.color == sample.color) {
            Some(existing) => existing.count = existing.count.saturating_add(sample.count),
            None => merged.push(*sample),
        }
    }

    // Stable sort keeps first-seen order among equal counts
    merged.sort_by(|a, b| b.count.cmp(&a.count));
    merged.into_iter().take(limit).map(|s| s.color).collect()
}
