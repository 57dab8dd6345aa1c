//! HSL (Hue, Saturation, Lightness)
//!
//! HSL is the working space for harmony computations: a hue rotation
//! moves a color around the color wheel while saturation and lightness
//! stay put.
//!
//! - Hue: degrees in [0, 360)
//! - Saturation: percent in [0, 100]
//! - Lightness: percent in [0, 100]
//!
//! Components are kept at full precision so that hex -> HSL -> hex is
//! lossless. [`Hsl::rounded`] gives the display form (integer hue, one
//! decimal for saturation and lightness).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::color::Rgb;

/// HSL color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0 to 360, exclusive)
    pub h: f64,
    /// Saturation in percent (0 to 100)
    pub s: f64,
    /// Lightness in percent (0 to 100)
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color, wrapping the hue into [0, 360)
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s,
            l,
        }
    }

    /// Convert from an 8-bit RGB sample
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();

        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);
        let delta = cmax - cmin;

        // Red wins ties with green/blue, then green wins over blue
        let sector = if delta == 0.0 {
            0.0
        } else if cmax == r {
            ((g - b) / delta) % 6.0
        } else if cmax == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let l = (cmax + cmin) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Self::new(sector * 60.0, s * 100.0, l * 100.0)
    }

    /// Convert to an 8-bit RGB sample
    pub fn to_rgb(&self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::from_unit(r + m, g + m, b + m)
    }

    /// Rotate the hue by `degrees`, wrapping into [0, 360)
    #[inline]
    pub fn rotate(&self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Same hue and saturation with a different lightness
    #[inline]
    pub fn with_lightness(&self, l: f64) -> Self {
        Self { l, ..*self }
    }

    /// Display precision: hue to whole degrees, saturation and lightness
    /// to one decimal
    pub fn rounded(&self) -> Self {
        let h = self.h.round();
        Self {
            h: if h >= 360.0 { h - 360.0 } else { h },
            s: round_tenth(self.s),
            l: round_tenth(self.l),
        }
    }

    /// Check if approximately equal to another HSL color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(f, "hsl({}, {:.1}%, {:.1}%)", r.h, r.s, r.l)
    }
}

/// Parse a hex string and convert it to HSL
///
/// Accepts `#RGB` and `#RRGGBB`. Malformed input is rejected with
/// [`crate::Error::InvalidColorFormat`] instead of degrading to black.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(Hsl::from_rgb(Rgb::from_hex(hex)?))
}

/// Convert HSL to a lowercase `#rrggbb` string
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_rgb().to_hex()
}

/// Wrap any hue angle into [0, 360)
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[inline]
fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
