//! Harmony palette generation
//!
//! Derives design-ready palettes from one base color by rotating its hue
//! in HSL space (complementary, analogous, triadic) or shifting its
//! lightness (monochromatic).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::color::{Hsl, hex_to_hsl};

/// Tunable parameters for harmony generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyOptions {
    /// Hue offset of the two analogous neighbors, in degrees
    pub analogous_angle: f64,
    /// Lightness shift of the monochromatic variants, in percentage points
    pub lightness_step: f64,
    /// Floor for the darker monochromatic variant
    pub lightness_min: f64,
    /// Ceiling for the lighter monochromatic variant
    pub lightness_max: f64,
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        Self {
            analogous_angle: 30.0,
            lightness_step: 20.0,
            lightness_min: 5.0,
            lightness_max: 95.0,
        }
    }
}

/// Harmony scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    /// Base and its opposite on the color wheel
    Complementary,
    /// Base flanked by its two neighbors
    Analogous,
    /// Three hues evenly spaced around the wheel
    Triadic,
    /// Lighter and darker variants of the base hue
    Monochromatic,
}

impl Harmony {
    /// All schemes in rendering order
    pub const ALL: [Harmony; 4] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::Monochromatic,
    ];

    /// Scheme name as used in serialized palettes
    pub fn name(&self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::Monochromatic => "monochromatic",
        }
    }

    /// Position of the base color within the generated group
    pub fn base_index(&self) -> usize {
        match self {
            Harmony::Complementary | Harmony::Triadic => 0,
            Harmony::Analogous | Harmony::Monochromatic => 1,
        }
    }

    /// Generate the ordered group for this scheme, base included
    ///
    /// - Complementary: `[base, +180]`
    /// - Analogous: `[-angle, base, +angle]`
    /// - Triadic: `[base, +120, +240]`
    /// - Monochromatic: `[lighter, base, darker]`
    pub fn generate(&self, base: Hsl, options: &HarmonyOptions) -> Vec<Hsl> {
        match self {
            Harmony::Complementary => vec![base, base.rotate(180.0)],
            Harmony::Analogous => vec![
                base.rotate(-options.analogous_angle),
                base,
                base.rotate(options.analogous_angle),
            ],
            Harmony::Triadic => vec![base, base.rotate(120.0), base.rotate(240.0)],
            Harmony::Monochromatic => {
                let lighter = (base.l + options.lightness_step).min(options.lightness_max);
                let darker = (base.l - options.lightness_step).max(options.lightness_min);
                vec![base.with_lightness(lighter), base, base.with_lightness(darker)]
            }
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hex groups keyed by harmony scheme
///
/// The base color appears verbatim as the caller supplied it; derived
/// members are lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPalette {
    pub complementary: Vec<String>,
    pub analogous: Vec<String>,
    pub triadic: Vec<String>,
    pub monochromatic: Vec<String>,
}

impl DerivedPalette {
    /// Group for one scheme
    pub fn get(&self, harmony: Harmony) -> &[String] {
        match harmony {
            Harmony::Complementary => &self.complementary,
            Harmony::Analogous => &self.analogous,
            Harmony::Triadic => &self.triadic,
            Harmony::Monochromatic => &self.monochromatic,
        }
    }

    /// Iterate over all groups in rendering order
    pub fn iter(&self) -> impl Iterator<Item = (Harmony, &[String])> {
        Harmony::ALL.into_iter().map(move |h| (h, self.get(h)))
    }
}

/// Generate all four harmony palettes with default options
pub fn generate_palettes(base_hex: &str) -> Result<DerivedPalette> {
    generate_palettes_with(base_hex, &HarmonyOptions::default())
}

/// Generate all four harmony palettes
pub fn generate_palettes_with(base_hex: &str, options: &HarmonyOptions) -> Result<DerivedPalette> {
    let base = hex_to_hsl(base_hex)?;

    let group = |harmony: Harmony| -> Vec<String> {
        let base_index = harmony.base_index();
        harmony
            .generate(base, options)
            .into_iter()
            .enumerate()
            .map(|(i, hsl)| {
                if i == base_index {
                    base_hex.to_string()
                } else {
                    hsl.to_rgb().to_hex()
                }
            })
            .collect()
    };

    Ok(DerivedPalette {
        complementary: group(Harmony::Complementary),
        analogous: group(Harmony::Analogous),
        triadic: group(Harmony::Triadic),
        monochromatic: group(Harmony::Monochromatic),
    })
}
