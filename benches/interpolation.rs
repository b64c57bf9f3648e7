use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use trajectory_engine::math::{bezier_point, linear_point, spline_point};
use trajectory_engine::Trajectory;

/// Deterministic pseudo-random control points on a wavy loop
fn make_points(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let a = i as f32 * 0.61803;
            Vec3::new(a.cos() * 10.0, (a * 1.7).sin() * 3.0, a.sin() * 10.0)
        })
        .collect()
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");

    for &count in &[4usize, 16, 64, 256] {
        let points = make_points(count);

        group.bench_with_input(BenchmarkId::new("linear", count), &points, |b, points| {
            b.iter(|| black_box(linear_point(black_box(points), black_box(0.37))))
        });
        group.bench_with_input(BenchmarkId::new("spline", count), &points, |b, points| {
            b.iter(|| black_box(spline_point(black_box(points), black_box(0.37))))
        });
        // Bézier is the expensive one: full Bernstein sum over all points
        group.bench_with_input(BenchmarkId::new("bezier", count), &points, |b, points| {
            b.iter(|| black_box(bezier_point(black_box(points), black_box(0.37))))
        });
    }

    group.finish();
}

fn bench_playback_step(c: &mut Criterion) {
    let mut trajectory = Trajectory::new();
    for p in make_points(32) {
        trajectory.add_point(p);
    }

    c.bench_function("advance_32_points_linear", |b| {
        b.iter(|| black_box(trajectory.advance(black_box(0.016))))
    });
}

criterion_group!(benches, bench_kernels, bench_playback_step);
criterion_main!(benches);
