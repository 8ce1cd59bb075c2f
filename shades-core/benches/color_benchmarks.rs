//! Color and bitmap benchmarks
//!
//! Covers per-color conversion and filters, and whole-bitmap transforms
//! and rasterization at a few sizes.
//!
//! Run with: `cargo bench --bench color_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shades::{
    Bitmap, BitmapRenderer, Color, Filters, Mixable, PixelCanvas, RenderOptions, Rgba, Rgba8, Size,
};
use std::time::Duration;

fn benchmark_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");
    let color = Rgba::new(0.3, 0.6, 0.9, 0.8);

    group.bench_function("rgba_to_rgba8", |b| {
        b.iter(|| black_box(color).convert::<Rgba8>())
    });
    group.bench_function("rgba8_to_rgba", |b| {
        let bytes = Rgba8::new(77, 153, 230, 204);
        b.iter(|| black_box(bytes).convert::<Rgba>())
    });
    group.bench_function("parse_hex", |b| {
        b.iter(|| black_box("#FF9770CC").parse::<Rgba>())
    });
    group.bench_function("parse_name", |b| {
        b.iter(|| black_box("Light_Peach").parse::<Rgba>())
    });

    group.finish();
}

fn benchmark_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    let color = Rgba::APRICOT;

    group.bench_function("greyed_out", |b| b.iter(|| black_box(color).greyed_out()));
    group.bench_function("mix", |b| {
        b.iter(|| black_box(color).mix(&Rgba::POOL_BLUE, black_box(0.3)))
    });
    group.bench_function("aged", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| black_box(color).aged(&mut rng))
    });

    group.finish();
}

fn bench_bitmap_size<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitmap_transforms");
    let board = Bitmap::<Rgba, N, N>::checkered(Rgba::APRICOT, Rgba::SKY_BLUE);
    let target = Bitmap::<Rgba, N, N>::filled_with_white();

    group.bench_with_input(BenchmarkId::new("aged", N), &board, |b, board| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| board.aged(&mut rng))
    });
    group.bench_with_input(BenchmarkId::new("cross_fade", N), &board, |b, board| {
        b.iter(|| board.cross_fade(&target, |p| p.column as f64 / N as f64))
    });
    group.bench_with_input(BenchmarkId::new("to_pixels", N), &board, |b, board| {
        b.iter(|| BitmapRenderer::to_pixels(board))
    });
    group.bench_with_input(BenchmarkId::new("render_with_lines", N), &board, |b, board| {
        let renderer = BitmapRenderer::new(RenderOptions::default());
        b.iter(|| {
            let mut canvas = PixelCanvas::new(400, 400);
            renderer.render(board, &mut canvas, Size::new(400.0, 400.0));
            canvas
        })
    });

    group.finish();
}

fn benchmark_bitmaps(c: &mut Criterion) {
    bench_bitmap_size::<8>(c);
    bench_bitmap_size::<32>(c);
    bench_bitmap_size::<128>(c);
}

criterion_group!(
    name = color_benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets =
        benchmark_conversions,
        benchmark_filters
);

criterion_group!(
    name = bitmap_benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets =
        benchmark_bitmaps
);

criterion_main!(color_benches, bitmap_benches);
