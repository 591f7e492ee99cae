//! Criterion benchmarks for grid sampling and linear scanning.
//!
//! Measures how the sweep cost scales with the number of samples taken.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stepscan_core::math::catalog::{Evaluator, FunctionId};
use stepscan_core::math::sampling::SampleGenerator;
use stepscan_core::math::solvers::LinearScanSolver;

/// Benchmark display-grid generation at several resolutions.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let f = Evaluator::new(FunctionId::CosineMinusX);

    for step in [0.1, 0.01, 0.001] {
        group.bench_with_input(BenchmarkId::new("display_grid", step), &step, |b, &step| {
            b.iter(|| {
                SampleGenerator::generate(
                    f.as_fn::<f64>(),
                    black_box(-10.0),
                    black_box(10.0),
                    step,
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark a sweep that never finds a root, the longest possible scan.
fn bench_scan_full_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_full_range");
    let solver: LinearScanSolver<f64> = LinearScanSolver::with_defaults();
    let f = |x: f64| x * x + 1.0;

    for step in [0.1, 0.01, 0.001] {
        group.bench_with_input(BenchmarkId::new("no_root", step), &step, |b, &step| {
            b.iter(|| solver.scan(f, black_box(0.0), step, black_box(10.0)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the default solve of every catalog function.
fn bench_scan_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_catalog");
    let solver: LinearScanSolver<f64> = LinearScanSolver::with_defaults();

    for id in FunctionId::ALL {
        let f = Evaluator::new(id);
        group.bench_function(id.short_id(), |b| {
            b.iter(|| solver.scan_with_config(f.as_fn::<f64>()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_scan_full_range,
    bench_scan_catalog
);
criterion_main!(benches);
