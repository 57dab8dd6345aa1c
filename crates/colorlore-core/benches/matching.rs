//! Matching and Palette Benchmarks
//!
//! Per-query cost of the linear catalog scan under each metric, plus
//! ranking and harmony generation.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use colorlore_core::catalog::{self, CollectionId};
use colorlore_core::color::{DistanceMetric, Rgb};
use colorlore_core::{MatchOptions, generate_palettes};

/// Deterministic spread of samples across the RGB cube
fn generate_samples(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| Rgb::new(((i * 37) % 256) as u8, ((i * 91) % 256) as u8, ((i * 13) % 256) as u8))
        .collect()
}

fn bench_find_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_closest");
    let catalog = catalog::builtin();

    for metric in [DistanceMetric::Euclidean, DistanceMetric::Cie76, DistanceMetric::Ciede2000] {
        let options = MatchOptions::default().with_metric(metric);
        for size in [100, 1000].iter() {
            let samples = generate_samples(*size);
            group.throughput(Throughput::Elements(*size as u64));

            group.bench_with_input(BenchmarkId::new(format!("{metric:?}"), size), size, |b, _| {
                b.iter(|| {
                    for sample in &samples {
                        black_box(catalog.find_closest_with(black_box(*sample), &options));
                    }
                })
            });
        }
    }

    group.finish();
}

fn bench_collection_scan(c: &mut Criterion) {
    let catalog = catalog::builtin();
    let options = MatchOptions::in_collection(CollectionId::Chinese);
    let sample = Rgb::new(0x9e, 0x2a, 0x34);

    c.bench_function("find_closest_chinese", |b| {
        b.iter(|| catalog.find_closest_with(black_box(sample), &options))
    });
    c.bench_function("nearest_5", |b| {
        b.iter(|| catalog.nearest_n(black_box(sample), 5, &MatchOptions::default()))
    });
}

fn bench_related(c: &mut Criterion) {
    let catalog = catalog::builtin();
    let target = catalog.color_by_id("yanzhi");

    c.bench_function("related_colors_6", |b| {
        b.iter(|| catalog.related_colors(black_box(target), 6))
    });
}

fn bench_palettes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_palettes");

    for hex in ["#ff0000", "#9d2933", "#165e83"] {
        group.bench_with_input(BenchmarkId::from_parameter(hex), hex, |b, hex| {
            b.iter(|| generate_palettes(black_box(hex)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_find_closest,
    bench_collection_scan,
    bench_related,
    bench_palettes,
);
criterion_main!(benches);
