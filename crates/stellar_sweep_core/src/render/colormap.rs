//! Piecewise-linear diverging color maps.

use serde::{Deserialize, Serialize};

use super::ColorMap;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Relative luminance in `[0, 1]` (Rec. 709 weights, no gamma correction)
    pub fn luminance(self) -> f64 {
        (0.2126 * self.0 as f64 + 0.7152 * self.1 as f64 + 0.0722 * self.2 as f64) / 255.0
    }
}

// Anchors sampled from the reference tables at 0, 1/4, 1/2, 3/4 and 1.
const COOLWARM: [Rgb; 5] = [
    Rgb(59, 76, 192),
    Rgb(141, 176, 254),
    Rgb(221, 221, 221),
    Rgb(244, 152, 122),
    Rgb(180, 4, 38),
];

const BWR: [Rgb; 3] = [Rgb(0, 0, 255), Rgb(255, 255, 255), Rgb(255, 0, 0)];

const SEISMIC: [Rgb; 5] = [
    Rgb(0, 0, 77),
    Rgb(0, 0, 255),
    Rgb(255, 255, 255),
    Rgb(255, 0, 0),
    Rgb(128, 0, 0),
];

impl ColorMap {
    fn anchors(&self) -> &'static [Rgb] {
        match self {
            ColorMap::Coolwarm => &COOLWARM,
            ColorMap::Bwr => &BWR,
            ColorMap::Seismic => &SEISMIC,
        }
    }

    /// Color at position `t` in `[0, 1]`; out-of-range and NaN inputs are clamped.
    pub fn sample(&self, t: f64) -> Rgb {
        let anchors = self.anchors();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let segments = (anchors.len() - 1) as f64;
        let scaled = t * segments;
        let index = (scaled.floor() as usize).min(anchors.len() - 2);
        let local = scaled - index as f64;

        let (a, b) = (anchors[index], anchors[index + 1]);
        let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * local).round() as u8;
        Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
    }
}
