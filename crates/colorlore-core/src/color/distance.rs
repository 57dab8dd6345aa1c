//! Color distance strategies
//!
//! The matcher is generic over [`ColorDistance`]. Plain Euclidean RGB is
//! the default metric; it is not perceptually uniform, so CIE76 and
//! CIEDE2000 are provided as drop-in perceptual alternatives.

use serde::{Deserialize, Serialize};

use crate::color::{Lab, Rgb};

/// A distance between two color samples
///
/// Implementations must be non-negative, symmetric and zero for identical
/// samples.
pub trait ColorDistance {
    /// Distance between `a` and `b`
    fn distance(&self, a: Rgb, b: Rgb) -> f64;
}

/// Euclidean distance over 8-bit RGB channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EuclideanRgb;

impl ColorDistance for EuclideanRgb {
    #[inline]
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        (a.distance_squared(&b) as f64).sqrt()
    }
}

/// Euclidean distance in CIELAB (ΔE*ab 1976)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cie76;

impl ColorDistance for Cie76 {
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        Lab::from_rgb(a).delta_e_76(&Lab::from_rgb(b))
    }
}

/// CIEDE2000 (ΔE00)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ciede2000;

impl ColorDistance for Ciede2000 {
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        Lab::from_rgb(a).delta_e_2000(&Lab::from_rgb(b))
    }
}

/// Serializable selection of a built-in metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean RGB
    #[default]
    Euclidean,
    /// CIE76
    Cie76,
    /// CIEDE2000
    Ciede2000,
}

impl ColorDistance for DistanceMetric {
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        match self {
            DistanceMetric::Euclidean => EuclideanRgb.distance(a, b),
            DistanceMetric::Cie76 => Cie76.distance(a, b),
            DistanceMetric::Ciede2000 => Ciede2000.distance(a, b),
        }
    }
}

impl<D: ColorDistance + ?Sized> ColorDistance for &D {
    #[inline]
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        (**self).distance(a, b)
    }
}
