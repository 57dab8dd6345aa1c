//! Color space types and conversions
//!
//! This module provides:
//! - 8-bit RGB samples and their hex encoding
//! - HSL for harmony computations
//! - CIELAB (D65) for perceptual distances
//! - Distance strategies used by the matcher

pub mod distance;
pub mod hsl;
pub mod lab;
pub mod rgb;

pub use distance::{Cie76, Ciede2000, ColorDistance, DistanceMetric, EuclideanRgb};
pub use hsl::{Hsl, hex_to_hsl, hsl_to_hex, normalize_hue};
pub use lab::Lab;
pub use rgb::{Rgb, is_valid_hex};
