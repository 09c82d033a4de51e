/*
 * Wing Benchmark
 *
 * Measures the per-frame costs of the wing: sampling the curve, placing
 * feathers, one flapping step and one frame of wind.
 */

use std::time::Duration;

use bird_wing::animator::{Animator, FlapAnimator};
use bird_wing::{place_feathers, CubicBezier, FeatherMesh, KeyframeRing, Wing, WingParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Benchmark curve sampling at increasing subdivision counts
fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");
    let curve = CubicBezier::new(WingParams::default().control_points);

    for subdivisions in [10usize, 60, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(subdivisions), subdivisions, |b, &n| {
            b.iter(|| black_box(curve.sample(black_box(n))));
        });
    }

    group.finish();
}

// Benchmark feather placement for different layer counts
fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    for layers in [0u32, 2, 5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(layers), layers, |b, &layers| {
            let params = WingParams { layers, distribution: 20, ..Default::default() };
            let placement = params.placement();
            let samples = CubicBezier::new(params.control_points).sample(placement.subdivisions);
            b.iter(|| black_box(place_feathers(&samples, &placement)));
        });
    }

    group.finish();
}

// Benchmark one animation frame with flapping and wind
fn bench_animation_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_frame");

    group.bench_function("flap_step", |b| {
        let params = WingParams { flap_speed: 1.0, ..Default::default() };
        let mut wing = Wing::new(params.control_points, params.placement(), FeatherMesh::default());
        let mut keyframes = KeyframeRing::default();
        let mut flap = FlapAnimator::default();
        b.iter(|| flap.update(&mut wing, &mut keyframes, &params.control_points, params.flap_speed));
    });

    group.bench_function("wind_and_flap", |b| {
        let params = WingParams { flap_speed: 1.0, wind_speed: 2.0, ..Default::default() };
        let mut wing = Wing::new(params.control_points, params.placement(), FeatherMesh::default());
        let mut keyframes = KeyframeRing::default();
        let mut animator = Animator::new();
        let mut time = 0.0;
        b.iter(|| {
            time += 1.0 / 60.0;
            animator.update(&mut wing, &mut keyframes, &params, time);
        });
    });

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_curve_sampling, bench_placement, bench_animation_frame
}

criterion_main!(benches);
