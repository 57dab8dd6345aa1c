//! RGB Color Samples
//!
//! This module provides the 8-bit RGB sample type and its hex encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// 8-bit sRGB color sample
///
/// Produced by image sampling or user input and consumed immediately by
/// conversion and matching routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0 to 255)
    pub r: u8,
    /// Green channel (0 to 255)
    pub g: u8,
    /// Blue channel (0 to 255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB sample
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#RGB` or `#RRGGBB`
    ///
    /// Digits are case-insensitive. Anything else, including a missing `#`,
    /// is rejected with [`Error::InvalidColorFormat`].
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::invalid_color(hex))?;

        let nibble = |i: usize| hex_value(digits.as_bytes()[i]);

        match digits.len() {
            3 => Ok(Self::new(
                nibble(0) * 17,
                nibble(1) * 17,
                nibble(2) * 17,
            )),
            6 => Ok(Self::new(
                nibble(0) << 4 | nibble(1),
                nibble(2) << 4 | nibble(3),
                nibble(4) << 4 | nibble(5),
            )),
            _ => Err(Error::invalid_color(hex)),
        }
    }

    /// Render as lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels normalized to [0, 1]
    #[inline]
    pub fn to_unit(&self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Create from channels in [0, 1], rounding to nearest
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r * 255.0).round().clamp(0.0, 255.0) as u8,
            g: (g * 255.0).round().clamp(0.0, 255.0) as u8,
            b: (b * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Squared Euclidean distance in 8-bit RGB space
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Largest per-channel difference
    #[inline]
    pub fn max_channel_diff(&self, other: &Self) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }

    /// Black color
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White color
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red primary
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green primary
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0, 0, 255);
}

/// Check a string against `^#([0-9a-f]{3}|[0-9a-f]{6})$` (case-insensitive)
pub fn is_valid_hex(hex: &str) -> bool {
    Rgb::from_hex(hex).is_ok()
}

#[inline]
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let rgb = Rgb::from_hex("#FF8000").unwrap();
        assert_eq!(rgb, Rgb::new(255, 128, 0));

        let lower = Rgb::from_hex("#9d2933").unwrap();
        assert_eq!(lower, Rgb::new(0x9d, 0x29, 0x33));
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(Rgb::from_hex("#F00").unwrap(), Rgb::RED);
        assert_eq!(Rgb::from_hex("#abc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "FF0000", "#FF00", "#FF00000", "#GGGGGG", "#12345z", "#ff 000"] {
            let err = Rgb::from_hex(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidColorFormat(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_parse_rejects_multibyte() {
        // Six bytes, but not six hex digits
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(10, 0, 255).to_hex(), "#0a00ff");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_unit_conversion() {
        let rgb = Rgb::new(255, 128, 0);
        let [r, g, b] = rgb.to_unit();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(b, 0.0);
        assert_eq!(Rgb::from_unit(r, g, b), rgb);
    }

    #[test]
    fn test_from_unit_clamps() {
        assert_eq!(Rgb::from_unit(1.2, -0.0001, 0.5), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_distance_squared() {
        assert_eq!(Rgb::RED.distance_squared(&Rgb::RED), 0);
        assert_eq!(Rgb::BLACK.distance_squared(&Rgb::WHITE), 3 * 255 * 255);
        assert_eq!(
            Rgb::new(10, 20, 30).distance_squared(&Rgb::new(13, 16, 30)),
            25
        );
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#fff"));
        assert!(is_valid_hex("#A1B2C3"));
        assert!(!is_valid_hex("fff"));
        assert!(!is_valid_hex("#ffff"));
    }
}
