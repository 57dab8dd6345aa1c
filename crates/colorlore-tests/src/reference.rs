//! Reference implementation wrappers
//!
//! Conversions computed with the `palette` crate, returned in colorlore's
//! units (hue in degrees, saturation and lightness in percent) so results
//! can be compared field by field.

use colorlore_core::color::Rgb;
use palette::color_difference::Ciede2000;
use palette::white_point::D65;
use palette::{FromColor, Hsl, Lab, Srgb};

/// sRGB sample as a normalized `palette` color
pub fn to_palette(rgb: Rgb) -> Srgb<f64> {
    Srgb::new(rgb.r, rgb.g, rgb.b).into_format()
}

/// HSL via `palette` as `[hue degrees, saturation %, lightness %]`
pub fn hsl_palette(rgb: Rgb) -> [f64; 3] {
    let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::from_color(to_palette(rgb));
    [
        hsl.hue.into_positive_degrees(),
        hsl.saturation * 100.0,
        hsl.lightness * 100.0,
    ]
}

/// HSL (degrees, percent) back to 8-bit sRGB via `palette`
pub fn hsl_to_rgb_palette(h: f64, s: f64, l: f64) -> Rgb {
    let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::new(h, s / 100.0, l / 100.0);
    let rgb: Srgb<u8> = Srgb::<f64>::from_color(hsl).into_format();
    Rgb::new(rgb.red, rgb.green, rgb.blue)
}

/// CIELAB (D65) via `palette` as `[L, a, b]`
pub fn lab_palette(rgb: Rgb) -> [f64; 3] {
    let lab: Lab<D65, f64> = Lab::from_color(to_palette(rgb));
    [lab.l, lab.a, lab.b]
}

/// CIEDE2000 between two Lab triples via `palette`
pub fn ciede2000_palette(a: [f64; 3], b: [f64; 3]) -> f64 {
    let a: Lab<D65, f64> = Lab::new(a[0], a[1], a[2]);
    let b: Lab<D65, f64> = Lab::new(b[0], b[1], b[2]);
    a.difference(b)
}

/// CIE76 between two samples via `palette` Lab
pub fn cie76_palette(a: Rgb, b: Rgb) -> f64 {
    let a = lab_palette(a);
    let b = lab_palette(b);
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}
