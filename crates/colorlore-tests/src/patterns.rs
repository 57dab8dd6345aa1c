//! Sample pattern generation
//!
//! Deterministic sample sets for property tests. Random patterns are
//! seeded so failures reproduce.

use colorlore_core::color::Rgb;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample pattern types
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Grayscale ramp
    Grayscale,
    /// Fully saturated hue ramp
    HueRamp,
    /// Every channel at 0, 1, 127, 128, 254 and 255
    ChannelEdges,
    /// Colors that lie on a primary/secondary hue boundary
    SextantBoundaries,
    /// Uniform random samples with seed
    Random(u64),
}

impl SamplePattern {
    /// A broad default mix used by parity tests
    pub const STANDARD: [SamplePattern; 6] = [
        SamplePattern::ColorCube,
        SamplePattern::Grayscale,
        SamplePattern::HueRamp,
        SamplePattern::ChannelEdges,
        SamplePattern::SextantBoundaries,
        SamplePattern::Random(0x5eed),
    ];
}

/// Generate up to `count` samples for `pattern`
///
/// Fixed patterns may return fewer than `count` samples.
pub fn generate_samples(pattern: SamplePattern, count: usize) -> Vec<Rgb> {
    match pattern {
        SamplePattern::ColorCube => [
            [0, 0, 0],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 255, 255],
        ]
        .into_iter()
        .map(Rgb::from_array)
        .take(count)
        .collect(),
        SamplePattern::Grayscale => {
            let n = count.min(256);
            (0..n)
                .map(|i| {
                    let v = (if n > 1 { i * 255 / (n - 1) } else { 0 }) as u8;
                    Rgb::new(v, v, v)
                })
                .collect()
        }
        SamplePattern::HueRamp => (0..count)
            .map(|i| hue_ramp_color(i as f64 / count.max(1) as f64 * 6.0))
            .collect(),
        SamplePattern::ChannelEdges => {
            const EDGES: [u8; 6] = [0, 1, 127, 128, 254, 255];
            let mut out = Vec::with_capacity(EDGES.len().pow(3));
            for r in EDGES {
                for g in EDGES {
                    for b in EDGES {
                        out.push(Rgb::new(r, g, b));
                    }
                }
            }
            out.truncate(count);
            out
        }
        SamplePattern::SextantBoundaries => {
            let mut out = Vec::new();
            for v in (0..=255u8).step_by(15) {
                out.extend([
                    Rgb::new(255, v, 0),
                    Rgb::new(v, 255, 0),
                    Rgb::new(0, 255, v),
                    Rgb::new(0, v, 255),
                    Rgb::new(v, 0, 255),
                    Rgb::new(255, 0, v),
                ]);
            }
            out.truncate(count);
            out
        }
        SamplePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
    }
}

/// Seeded random `#rrggbb` or `#rgb` strings in mixed case
pub fn random_hex_strings(seed: u64, count: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let rgb = Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen());
            let hex = if rng.gen_bool(0.2) {
                format!("#{:x}{:x}{:x}", rgb.r >> 4, rgb.g >> 4, rgb.b >> 4)
            } else {
                rgb.to_hex()
            };
            if rng.gen_bool(0.5) { hex.to_uppercase() } else { hex }
        })
        .collect()
}

/// Fully saturated color at sextant position `t` in [0, 6)
fn hue_ramp_color(t: f64) -> Rgb {
    let x = (255.0 * (1.0 - ((t % 2.0) - 1.0).abs())).round() as u8;
    match t as u32 {
        0 => Rgb::new(255, x, 0),
        1 => Rgb::new(x, 255, 0),
        2 => Rgb::new(0, 255, x),
        3 => Rgb::new(0, x, 255),
        4 => Rgb::new(x, 0, 255),
        _ => Rgb::new(255, 0, x),
    }
}
