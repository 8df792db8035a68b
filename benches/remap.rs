//! Benchmarks for the remap process loop.
//!
//! The per-cell loop is the hot path of the whole library; these compare the
//! 1:1 integer fast path against the coordinate-mapped general path across
//! the samplers.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use regrid::{remap, Grid2, IdentityMapper, PipelineBuilder};

fn source_grid(size: usize) -> Arc<Grid2> {
    let values = (0..size * size).map(|v| (v % 97) as f32).collect();
    Arc::new(Grid2::from_vec(size, size, values).unwrap())
}

fn bench_fast_path(c: &mut Criterion) {
    let source = source_grid(256);
    let mut dest = Grid2::unavailable(256, 256);
    let mut chain = PipelineBuilder::new().build("nearest");

    c.bench_function("fast_path_nearest_256", |b| {
        b.iter(|| {
            remap(chain.as_mut(), black_box(&source), &mut dest, None);
        })
    });
}

fn bench_general_path(c: &mut Criterion) {
    let source = source_grid(256);
    let mut dest = Grid2::unavailable(256, 256);
    let mut chain = PipelineBuilder::new().build("nearest");

    c.bench_function("general_path_nearest_256", |b| {
        b.iter(|| {
            remap(
                chain.as_mut(),
                black_box(&source),
                &mut dest,
                Some(&IdentityMapper),
            );
        })
    });
}

fn bench_bilinear_upscale(c: &mut Criterion) {
    let source = source_grid(128);
    let mut dest = Grid2::unavailable(256, 256);
    let mut chain = PipelineBuilder::new().build("bilinear:3:3");

    c.bench_function("bilinear_upscale_128_to_256", |b| {
        b.iter(|| {
            remap(chain.as_mut(), black_box(&source), &mut dest, None);
        })
    });
}

fn bench_cressman_pipeline(c: &mut Criterion) {
    let source = source_grid(128);
    let mut dest = Grid2::unavailable(192, 192);
    let mut chain = PipelineBuilder::new().build("cressman:3:3,threshold:18:50");

    c.bench_function("cressman_threshold_128_to_192", |b| {
        b.iter(|| {
            remap(chain.as_mut(), black_box(&source), &mut dest, None);
        })
    });
}

criterion_group!(
    benches,
    bench_fast_path,
    bench_general_path,
    bench_bilinear_upscale,
    bench_cressman_pipeline
);
criterion_main!(benches);
