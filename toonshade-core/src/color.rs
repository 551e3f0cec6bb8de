//! RGB/HSV color values with normalized channels.

use std::fmt;
use std::str::FromStr;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ShadeError;

/// Constrain a value to the closed interval [0, 1].
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// An opaque RGB color, every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Hue/saturation/value triple. `h` is a fraction of a full turn in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    /// Build a color, clamping each channel into [0, 1].
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r: clamp01(r), g: clamp01(g), b: clamp01(b) }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r: r as f32 / 255.0, g: g as f32 / 255.0, b: b as f32 / 255.0 }
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (clamp01(c) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Parse `#RRGGBB` or `RRGGBB`, also accepting the `#RGB` shorthand.
    pub fn from_hex(s: &str) -> Result<Self, ShadeError> {
        let digits = s.trim().trim_start_matches('#');
        let bad = || ShadeError::InvalidHex(s.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(bad()),
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| bad());
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Standard RGB to HSV conversion.
    pub fn to_hsv(self) -> Hsv {
        let Color { r, g, b } = self;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max <= 0.0 { 0.0 } else { delta / max };
        let h = if delta <= 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        // rem_euclid can land exactly on 1.0 for tiny negative inputs
        Hsv { h: if h >= 1.0 { 0.0 } else { h }, s, v: max }
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Opaque RGBA, the layout shader color uniforms expect.
    pub fn to_vec4(self) -> Vec4 {
        self.to_vec3().extend(1.0)
    }

    pub fn from_vec3(v: Vec3) -> Self {
        Self::rgb(v.x, v.y, v.z)
    }
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Build from a hue in degrees; the angle wraps into [0, 360).
    pub fn from_degrees(deg: f32, s: f32, v: f32) -> Self {
        Self { h: deg.rem_euclid(360.0) / 360.0, s, v }
    }

    pub fn hue_degrees(self) -> f32 {
        self.h * 360.0
    }

    /// Standard HSV to RGB conversion. Hue wraps; saturation and value clamp.
    pub fn to_rgb(self) -> Color {
        let h = self.h.rem_euclid(1.0) * 6.0;
        let s = clamp01(self.s);
        let v = clamp01(self.v);

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::rgb(r + m, g + m, b + m)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

impl From<Color> for Hsv {
    fn from(c: Color) -> Self {
        c.to_hsv()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Colors travel through YAML/JSON as hex strings, like palette entries do.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_primaries_to_hsv() {
        let red = Color::rgb(1.0, 0.0, 0.0).to_hsv();
        assert!(close(red.h, 0.0) && close(red.s, 1.0) && close(red.v, 1.0));

        let green = Color::rgb(0.0, 1.0, 0.0).to_hsv();
        assert!(close(green.hue_degrees(), 120.0));

        let blue = Color::rgb(0.0, 0.0, 1.0).to_hsv();
        assert!(close(blue.hue_degrees(), 240.0));
    }

    #[test]
    fn test_magenta_side_hue_is_positive() {
        // max == r with g < b exercises the wrapped sextant
        let hsv = Color::rgb(1.0, 0.0, 0.5).to_hsv();
        assert!(close(hsv.hue_degrees(), 330.0));
    }

    #[test]
    fn test_grey_has_no_hue_or_saturation() {
        let hsv = Color::rgb(0.4, 0.4, 0.4).to_hsv();
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert!(close(hsv.v, 0.4));
    }

    #[test]
    fn test_hsv_round_trip() {
        let c = Color::rgb(0.25, 0.6, 0.9);
        let back = c.to_hsv().to_rgb();
        assert!(close(c.r, back.r) && close(c.g, back.g) && close(c.b, back.b));
    }

    #[test]
    fn test_full_turn_hue_wraps_to_red() {
        let c = Hsv::new(1.0, 1.0, 1.0).to_rgb();
        assert!(close(c.r, 1.0) && close(c.g, 0.0) && close(c.b, 0.0));
    }

    #[test]
    fn test_from_degrees_wraps() {
        assert!(close(Hsv::from_degrees(-3.0, 1.0, 1.0).hue_degrees(), 357.0));
        assert!(close(Hsv::from_degrees(365.0, 1.0, 1.0).hue_degrees(), 5.0));
    }

    #[test]
    fn test_hex_parse_and_format() {
        let c = Color::from_hex("#4FA34F").unwrap();
        assert_eq!(c.to_rgb8(), [0x4F, 0xA3, 0x4F]);
        assert_eq!(c.to_hex(), "#4FA34F");
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        assert_eq!("000000".parse::<Color>().unwrap(), Color::BLACK);
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(matches!(Color::from_hex("#12345"), Err(ShadeError::InvalidHex(_))));
        assert!(matches!(Color::from_hex("#GG0000"), Err(ShadeError::InvalidHex(_))));
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_rgb_clamps_channels() {
        let c = Color::rgb(1.5, -0.2, 0.5);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.5 });
    }

    #[test]
    fn test_vec4_is_opaque() {
        let v = Color::rgb(0.1, 0.2, 0.3).to_vec4();
        assert_eq!(v.w, 1.0);
        assert_eq!(Color::from_vec3(v.truncate()), Color::rgb(0.1, 0.2, 0.3));
    }
}
