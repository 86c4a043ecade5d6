//! Criterion benchmarks: brute force vs divide and conquer.
//! Sizes: n in {100, 1000, 5000} for both, plus 25_000 for divide and conquer only.
//! Results land under target/criterion.

use closest::api::{
    closest_pair_brute_force, closest_pair_divide_and_conquer, generate_points, GenCfg,
    PreparedPoints,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest");
    for &n in &[100usize, 1_000, 5_000] {
        let pts = generate_points(GenCfg::with_count(n), 43).unwrap();
        group.bench_with_input(BenchmarkId::new("brute_force", n), &pts, |b, pts| {
            b.iter(|| closest_pair_brute_force(pts).unwrap())
        });
    }
    for &n in &[100usize, 1_000, 5_000, 25_000] {
        let pts = generate_points(GenCfg::with_count(n), 44).unwrap();
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &pts, |b, pts| {
            b.iter(|| closest_pair_divide_and_conquer(pts).unwrap())
        });
        // Recursion only; sorting happens in the setup closure.
        group.bench_with_input(BenchmarkId::new("dc_prepared", n), &pts, |b, pts| {
            b.iter_batched(
                || PreparedPoints::new(pts),
                |prepared| prepared.closest_pair().unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
