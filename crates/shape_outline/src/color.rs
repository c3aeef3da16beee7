//! Pixel samples and RGB colors

use serde::{Deserialize, Serialize};
use shape_math::consts::SQRT_3;
use std::fmt;
use std::str::FromStr;

/// A single RGBA sample with every channel normalized to `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelSample {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl PixelSample {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Normalize an 8-bit RGBA quadruple
    #[inline]
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
        )
    }

    /// Color part of the sample, alpha dropped
    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// An opaque RGB color, channels in `[0, 1]`.
///
/// Serialized as a `"RRGGBB"` hex string so it reads naturally in TOML
/// and JSON files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Euclidean distance in RGB space (at most `sqrt(3)`)
    #[inline]
    pub fn distance(&self, other: &Rgb) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// True when `other` is within `tolerance` of this color, where a
    /// tolerance of 1 spans the whole color cube. The bound is inclusive.
    #[inline]
    pub fn matches(&self, other: &Rgb, tolerance: f32) -> bool {
        self.distance(other) <= tolerance * SQRT_3
    }

    fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Expected RRGGBB hex color, got '{}'", s));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| format!("Invalid hex color '{}': {}", s, e))
        };

        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_rgba8_normalizes() {
        let p = PixelSample::from_rgba8([255, 0, 51, 128]);
        assert_eq!(p.r, 1.0);
        assert_eq!(p.g, 0.0);
        assert_relative_eq!(p.b, 0.2);
        assert_relative_eq!(p.a, 128.0 / 255.0);
    }

    #[test]
    fn test_hex_round_trip() {
        let c: Rgb = "#FF8000".parse().unwrap();
        assert_eq!(c.r, 1.0);
        assert_relative_eq!(c.g, 128.0 / 255.0);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.to_string(), "FF8000");
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!("12345".parse::<Rgb>().is_err());
        assert!("GG0000".parse::<Rgb>().is_err());
        assert!("ÿÿÿ".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_matches_full_tolerance_covers_cube() {
        assert!(Rgb::BLACK.matches(&Rgb::WHITE, 1.0));
        assert!(!Rgb::BLACK.matches(&Rgb::WHITE, 0.5));
        assert!(Rgb::WHITE.matches(&Rgb::WHITE, 0.0));
    }
}
