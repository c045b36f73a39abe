//! Ordered color palettes
//!
//! Slot order matters to callers (0 primary, 1 secondary, 2 accent,
//! 3 background) but the engine attaches no meaning to a slot beyond its
//! index.

use crate::error::Result;
use color_science::{parse_hex, simulate_palette, Color, VisionDeficiency};
use serde::{Deserialize, Serialize};

/// An ordered sequence of colors
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Wrap a list of colors
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Parse every entry as a hex color
    ///
    /// # Errors
    ///
    /// Fails on the first entry that is not a valid hex color.
    pub fn from_hex<I, S>(hexes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = hexes
            .into_iter()
            .map(|h| parse_hex(h.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self(colors))
    }

    /// `n` copies of one color
    pub fn repeat(color: Color, n: usize) -> Self {
        Self(vec![color; n])
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette has no slots
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color in a slot
    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    /// Iterate slots in order
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.0.iter()
    }

    /// Canonical hex strings in slot order
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_hex()).collect()
    }

    /// Preview the palette under a vision deficiency
    pub fn simulate(&self, deficiency: VisionDeficiency) -> Palette {
        Self(simulate_palette(&self.0, deficiency))
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex(["#3498db", "DB9834", "#abc"]).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.to_hex_strings(), ["#3498DB", "#DB9834", "#AABBCC"]);
    }

    #[test]
    fn test_from_hex_rejects_bad_entry() {
        let result = Palette::from_hex(["#3498DB", "oops"]);
        assert!(matches!(result, Err(EngineError::Color(_))));
    }

    #[test]
    fn test_serializes_as_hex_array() {
        let palette = Palette::from_hex(["#3498DB", "#000000"]).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r##"["#3498DB","#000000"]"##);

        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn test_repeat_and_accessors() {
        let palette = Palette::repeat(Color::WHITE, 3);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(2), Some(Color::WHITE));
        assert_eq!(palette.get(3), None);
        assert!(Palette::default().is_empty());
        assert_eq!(Palette::from(vec![Color::WHITE; 3]), palette);

        let owned: Vec<Color> = palette.into_iter().collect();
        assert_eq!(owned, [Color::WHITE; 3]);
    }
}
