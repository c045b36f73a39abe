//! Hue wheel layout
//!
//! Places each palette color on a circle by its hue so a renderer can draw
//! the scheme's geometry. Angles are in radians, measured from the positive
//! x axis in screen coordinates.

use crate::palette::Palette;
use color_science::Color;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Where to draw one palette color on the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelMarker {
    /// Slot index
    pub index: usize,
    /// Marker fill
    pub color: Color,
    /// Hue angle in radians
    pub angle: f64,
    /// Marker center x
    pub x: f64,
    /// Marker center y
    pub y: f64,
    /// Label text, the 1-based slot number
    pub label: String,
    /// Label color, white on dark markers and black on light ones
    pub label_color: Color,
}

/// Lay out `palette` on a wheel of `radius` around `center`
pub fn wheel_markers(palette: &Palette, center: (f64, f64), radius: f64) -> Vec<WheelMarker> {
    let (cx, cy) = center;
    palette
        .iter()
        .enumerate()
        .map(|(index, &color)| {
            let hsl = color.to_hsl();
            let angle = hsl.h * TAU;
            WheelMarker {
                index,
                color,
                angle,
                x: cx + radius * angle.cos(),
                y: cy + radius * angle.sin(),
                label: (index + 1).to_string(),
                label_color: if hsl.l < 0.5 { Color::WHITE } else { Color::BLACK },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_primaries_land_on_expected_angles() {
        let palette = Palette::from_hex(["#FF0000", "#00FF00", "#0000FF"]).unwrap();
        let markers = wheel_markers(&palette, (100.0, 100.0), 50.0);

        assert_eq!(markers.len(), 3);
        assert!((markers[0].x - 150.0).abs() < EPS);
        assert!((markers[0].y - 100.0).abs() < EPS);
        assert!((markers[1].angle - TAU / 3.0).abs() < EPS);
        assert!((markers[2].angle - 2.0 * TAU / 3.0).abs() < EPS);
        assert_eq!(markers[2].label, "3");
    }

    #[test]
    fn test_markers_sit_on_circle() {
        let palette = Palette::from_hex(["#3498DB", "#DB3498", "#98DB34", "#CB34DB"]).unwrap();
        for marker in wheel_markers(&palette, (10.0, -4.0), 25.0) {
            let dist = ((marker.x - 10.0).powi(2) + (marker.y + 4.0).powi(2)).sqrt();
            assert!((dist - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_label_color_tracks_lightness() {
        let palette = Palette::from_hex(["#16527A", "#A0CFEE"]).unwrap();
        let markers = wheel_markers(&palette, (0.0, 0.0), 1.0);
        assert_eq!(markers[0].label_color, Color::WHITE);
        assert_eq!(markers[1].label_color, Color::BLACK);
    }
}
