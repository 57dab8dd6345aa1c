//! CIE L*a*b* under D65
//!
//! Used by the perceptual matching metrics. Equal Lab distances are
//! roughly equal perceived differences, which Euclidean RGB is not.
//! L* runs from 0 (black) to 100 (white); a* goes green to red and b*
//! blue to yellow.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// D65 reference white in CIE XYZ (Y normalized to 1.0)
pub const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// sRGB (D65) to XYZ matrix
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert an 8-bit sRGB sample (D65)
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit().map(srgb_to_linear);

        let m = &SRGB_TO_XYZ;
        let x = m[0][0] * r + m[0][1] * g + m[0][2] * b;
        let y = m[1][0] * r + m[1][1] * g + m[1][2] * b;
        let z = m[2][0] * r + m[2][1] * g + m[2][2] * b;

        let fx = lab_f(x / D65_WHITE[0]);
        let fy = lab_f(y / D65_WHITE[1]);
        let fz = lab_f(z / D65_WHITE[2]);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Distance from the neutral axis
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIE76 difference: Euclidean distance in Lab
    #[inline]
    pub fn delta_e_76(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// CIEDE2000 difference with unit weighting factors
    ///
    /// A value of 1.0 is roughly the smallest difference perceptible to
    /// trained observers.
    pub fn delta_e_2000(&self, other: &Self) -> f64 {
        let mean_chroma = (self.chroma() + other.chroma()) / 2.0;
        let a_scale = 1.0 + 0.5 * (1.0 - chroma_weight(mean_chroma));

        let p1 = Adjusted::new(self, a_scale);
        let p2 = Adjusted::new(other, a_scale);
        let chromatic = p1.c * p2.c != 0.0;

        let dh = if chromatic { wrapped_hue_delta(p1.h, p2.h) } else { 0.0 };
        let h_mean = if chromatic { mean_hue(p1.h, p2.h) } else { p1.h + p2.h };
        let c_mean = (p1.c + p2.c) / 2.0;
        let l_mean = (self.l + other.l) / 2.0;

        let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
            + 0.24 * (2.0 * h_mean).to_radians().cos()
            + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
            - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

        let l50 = (l_mean - 50.0).powi(2);
        let s_l = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
        let s_c = 1.0 + 0.045 * c_mean;
        let s_h = 1.0 + 0.015 * c_mean * t;

        // blue region rotation
        let theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
        let r_t = -2.0 * chroma_weight(c_mean) * (2.0 * theta).to_radians().sin();

        let dl = (other.l - self.l) / s_l;
        let dc = (p2.c - p1.c) / s_c;
        let dh = 2.0 * (p1.c * p2.c).sqrt() * (dh.to_radians() / 2.0).sin() / s_h;

        // the rotation term can push the sum a hair below zero for identical inputs
        (dl * dl + dc * dc + dh * dh + r_t * dc * dh).max(0.0).sqrt()
    }
}

/// Chroma and hue after the a* rescaling step of CIEDE2000
struct Adjusted {
    c: f64,
    h: f64,
}

impl Adjusted {
    fn new(lab: &Lab, a_scale: f64) -> Self {
        let a = lab.a * a_scale;
        Self {
            c: a.hypot(lab.b),
            h: hue_angle(a, lab.b),
        }
    }
}

/// sqrt(C^7 / (C^7 + 25^7)), which approaches 1 for saturated colors
fn chroma_weight(c: f64) -> f64 {
    const POW25_7: f64 = 6_103_515_625.0;
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// Signed hue step from `h1` to `h2`, within ±180°
fn wrapped_hue_delta(h1: f64, h2: f64) -> f64 {
    let d = h2 - h1;
    if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        d
    }
}

/// Mean of two hues taken along the shorter arc
fn mean_hue(h1: f64, h2: f64) -> f64 {
    let sum = h1 + h2;
    if (h1 - h2).abs() <= 180.0 {
        sum / 2.0
    } else if sum < 360.0 {
        (sum + 360.0) / 2.0
    } else {
        (sum - 360.0) / 2.0
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

/// sRGB transfer function, encoded value to linear light
#[inline]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Companding step of the XYZ to Lab transform
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Hue angle in degrees, [0, 360)
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    b.atan2(a).to_degrees().rem_euclid(360.0)
}
