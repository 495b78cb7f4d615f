//! sRGB colors and WCAG contrast math

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// String had the wrong number of hex digits
    #[error("invalid color length in {0:?} (expected #RGB, #RRGGBB or #RRGGBBAA)")]
    InvalidLength(String),

    /// String contained a non-hex character
    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

/// An sRGB color with straight (non-premultiplied) alpha, channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f32, ColorParseError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
        };

        match digits.len() {
            3 => {
                // #RGB expands each nibble: #1AF == #11AAFF
                let mut expanded = String::with_capacity(6);
                for c in digits.chars() {
                    expanded.push(c);
                    expanded.push(c);
                }
                Self::parse_hex(&expanded)
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength(input.to_string())),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (to_byte(self.r), to_byte(self.g), to_byte(self.b), to_byte(self.a));
        if a == 0xFF {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Self {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: mix(from.a, to.a),
        }
    }

    /// WCAG 2.x relative luminance in `0.0..=1.0`.
    ///
    /// Alpha is ignored: contrast is only meaningful between opaque colors.
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(c: f32) -> f64 {
            let c = c.clamp(0.0, 1.0) as f64;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG contrast ratio between two colors, in `1.0..=21.0`.
    ///
    /// Symmetric: the lighter color is always placed in the numerator.
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

// Colors travel through config files as hex strings
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}
