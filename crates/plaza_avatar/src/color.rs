//! Literal colors.
//!
//! Everything downstream of palette resolution works in [`Rgb`], a packed
//! 8-bit-per-channel color. Parsing accepts `#RRGGBB`, `0xRRGGBB` and bare
//! `RRGGBB`; anything else is not a literal.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Neutral gray used whenever a color key cannot be resolved.
pub const NEUTRAL_GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);

/// 24-bit RGB color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a color from channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Packs into `0xRRGGBB`.
    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parses a hex literal. Returns `None` for anything that is not one.
    #[must_use]
    pub fn parse_hex(literal: &str) -> Option<Self> {
        let trimmed = literal.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_u32)
    }

    /// Uppercase `#RRGGBB` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.to_u32())
    }

    /// Channels as normalized floats.
    #[inline]
    #[must_use]
    pub fn to_linear_array(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    /// Builds a color from normalized floats, clamping to `[0, 1]`.
    #[must_use]
    pub fn from_linear_array(rgb: [f32; 3]) -> Self {
        let channel = |v: f32| {
            let v = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
            (v * 255.0).round() as u8
        };
        Self::new(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
    }

    /// Component-wise linear interpolation, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Multiplies every channel by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        let [r, g, b] = self.to_linear_array();
        Self::from_linear_array([r * factor, g * factor, b * factor])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        let expected = Rgb::new(0x1E, 0x90, 0xFF);
        assert_eq!(Rgb::parse_hex("#1E90FF"), Some(expected));
        assert_eq!(Rgb::parse_hex("0x1e90ff"), Some(expected));
        assert_eq!(Rgb::parse_hex("1E90FF"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse_hex("doesNotExist"), None);
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex("#GGGGGG"), None);
        assert_eq!(Rgb::parse_hex(""), None);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgb::new(0xFF, 0, 0).lerp(Rgb::new(0, 0xFF, 0), 0.5);
        assert_eq!(mid, Rgb::new(128, 128, 0));
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Rgb::from_u32(0x00_66CC).to_hex(), "#0066CC");
        assert_eq!(NEUTRAL_GRAY.to_string(), "#808080");
    }
}
