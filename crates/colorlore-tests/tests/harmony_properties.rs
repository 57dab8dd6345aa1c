//! Harmony palette properties
//!
//! Derived members are quantized to 8 bits, so measured hue offsets carry
//! a little error. Samples are restricted to well-saturated mid tones
//! where that error stays small.

use colorlore_core::color::{Hsl, Rgb, is_valid_hex};
use colorlore_core::harmony::{Harmony, HarmonyOptions, generate_palettes, generate_palettes_with};
use colorlore_tests::{SamplePattern, generate_samples, hue_difference};

const HUE_TOLERANCE: f64 = 1.5;

fn vivid_samples() -> Vec<Rgb> {
    generate_samples(SamplePattern::Random(0x4a4d), 4000)
        .into_iter()
        .filter(|rgb| {
            let hsl = Hsl::from_rgb(*rgb);
            hsl.s >= 50.0 && (30.0..=70.0).contains(&hsl.l)
        })
        .collect()
}

fn hue_of(hex: &str) -> f64 {
    Hsl::from_rgb(Rgb::from_hex(hex).unwrap()).h
}

#[test]
fn test_shapes_and_validity() {
    for rgb in generate_samples(SamplePattern::Random(3), 500) {
        let palettes = generate_palettes(&rgb.to_hex()).unwrap();
        for (harmony, group) in palettes.iter() {
            let expected = if harmony == Harmony::Complementary { 2 } else { 3 };
            assert_eq!(group.len(), expected, "{harmony} for {rgb}");
            assert!(group.iter().all(|hex| is_valid_hex(hex)));
        }
    }
}

#[test]
fn test_hue_offsets() {
    let samples = vivid_samples();
    assert!(samples.len() > 500, "only {} vivid samples", samples.len());

    for rgb in samples {
        let base_hex = rgb.to_hex();
        let base = hue_of(&base_hex);
        let p = generate_palettes(&base_hex).unwrap();

        let check = |hex: &str, offset: f64| {
            let d = hue_difference(hue_of(hex), base + offset);
            assert!(d <= HUE_TOLERANCE, "{base_hex} -> {hex}: off by {d:.3} from +{offset}");
        };

        check(&p.complementary[1], 180.0);
        check(&p.analogous[0], -30.0);
        check(&p.analogous[2], 30.0);
        check(&p.triadic[1], 120.0);
        check(&p.triadic[2], 240.0);
    }
}

#[test]
fn test_monochromatic_keeps_hue_and_orders_lightness() {
    for rgb in vivid_samples() {
        let p = generate_palettes(&rgb.to_hex()).unwrap();
        let lighter = Hsl::from_rgb(Rgb::from_hex(&p.monochromatic[0]).unwrap());
        let base = Hsl::from_rgb(rgb);
        let darker = Hsl::from_rgb(Rgb::from_hex(&p.monochromatic[2]).unwrap());

        assert!(lighter.l > base.l && base.l > darker.l, "{rgb}");
        assert!((lighter.l - (base.l + 20.0)).abs() < 0.5, "{rgb}");
        assert!((darker.l - (base.l - 20.0)).abs() < 0.5, "{rgb}");
    }
}

#[test]
fn test_monochromatic_clamps_at_extremes() {
    let options = HarmonyOptions::default();
    for l in [0.0, 2.0, 5.0, 95.0, 99.0, 100.0] {
        let group = Harmony::Monochromatic.generate(Hsl::new(40.0, 60.0, l), &options);
        assert!(group[0].l <= options.lightness_max);
        assert!(group[2].l >= options.lightness_min);
    }
}

#[test]
fn test_generated_hues_stay_in_range() {
    let options = HarmonyOptions {
        analogous_angle: 45.0,
        ..Default::default()
    };
    for h in (0..3600).map(|i| i as f64 / 10.0) {
        for harmony in Harmony::ALL {
            for member in harmony.generate(Hsl::new(h, 70.0, 50.0), &options) {
                assert!((0.0..360.0).contains(&member.h), "{harmony} at {h}: {}", member.h);
            }
        }
    }
}

#[test]
fn test_wider_analogous_angle() {
    let options = HarmonyOptions {
        analogous_angle: 60.0,
        ..Default::default()
    };
    for rgb in vivid_samples().into_iter().take(200) {
        let base_hex = rgb.to_hex();
        let p = generate_palettes_with(&base_hex, &options).unwrap();
        let d = hue_difference(hue_of(&p.analogous[2]), hue_of(&base_hex) + 60.0);
        assert!(d <= HUE_TOLERANCE, "{base_hex}: {d}");
    }
}
