//! Finite-difference benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of whole-grid evaluation (1K to 1M points)
//! - Derivative and truncation orders on the table fast path
//! - The weight solver on non-uniform grids
//! - Boundary policies
//! - Single-point cost, fast path against solver
//!
//! For sequential evaluation, use `FINDIFF_MODE=serial cargo bench`.
//! For parallel evaluation, use `FINDIFF_MODE=parallel cargo bench` (default).

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastFindiff::prelude::*;
use findiff_benchmarks::{clustered_grid, damped, front, jittered_grid, wave};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FINDIFF_MODE").ok().as_deref() {
        Some("serial") | Some("sequential") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

fn run<G, F>(engine: &DifferentiationEngine<f64, G, F>, parallel: bool) -> Vec<f64>
where
    G: GridLike<f64> + Sync,
    F: RealFunction<f64> + Sync,
{
    let values = if parallel {
        engine.par_data()
    } else {
        engine.data()
    };
    values.unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let engine = Differentiate::new()
            .truncation_order(4)
            .build(UniformGrid::new(0.0, 10.0, size), wave)
            .unwrap();

        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, _| {
            b.iter(|| run(black_box(&engine), parallel))
        });
    }
    group.finish();
}

fn bench_orders(c: &mut Criterion) {
    let (parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("orders_{}", mode_name));
    group.sample_size(100);

    let size = 100_000;
    let grid = UniformGrid::new(0.0, 10.0, size);
    group.throughput(Throughput::Elements(size as u64));

    for (d, t) in [(1, 2), (1, 4), (1, 8), (2, 2), (2, 6), (3, 4), (4, 2)] {
        let engine = Differentiate::new()
            .derivative_order(d)
            .truncation_order(t)
            .build(grid, damped)
            .unwrap();

        let id = format!("D{}_T{}", d, t);
        group.bench_function(BenchmarkId::new("central", id), |b| {
            b.iter(|| run(black_box(&engine), parallel))
        });
    }

    for method in [Forward, Backward] {
        let engine = Differentiate::new()
            .derivative_order(2)
            .truncation_order(4)
            .method(method)
            .build(grid, damped)
            .unwrap();

        group.bench_function(BenchmarkId::new(method.to_string(), "D2_T4"), |b| {
            b.iter(|| run(black_box(&engine), parallel))
        });
    }
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let (parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("solver_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let engine = Differentiate::new()
            .truncation_order(4)
            .build(jittered_grid(size, 0.3, 42).unwrap(), wave)
            .unwrap();
        group.bench_with_input(BenchmarkId::new("jittered", size), &size, |b, _| {
            b.iter(|| run(black_box(&engine), parallel))
        });

        let engine = Differentiate::new()
            .truncation_order(4)
            .build(clustered_grid(size, 42).unwrap(), wave)
            .unwrap();
        group.bench_with_input(BenchmarkId::new("clustered", size), &size, |b, _| {
            b.iter(|| run(black_box(&engine), parallel))
        });
    }
    group.finish();
}

fn bench_boundary(c: &mut Criterion) {
    let (parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("boundary_{}", mode_name));
    group.sample_size(100);

    // Short grids so that edge points dominate
    let grid = UniformGrid::new(0.0, 10.0, 64);

    for policy in [OneSided, Extend] {
        let engine = Differentiate::new()
            .derivative_order(2)
            .truncation_order(8)
            .boundary_policy(policy)
            .build(grid, front)
            .unwrap();

        group.bench_function(policy.to_string(), |b| {
            b.iter(|| run(black_box(&engine), parallel))
        });
    }
    group.finish();
}

fn bench_single_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_point");
    group.sample_size(200);

    let size = 1_000;
    let uniform = Differentiate::new()
        .truncation_order(6)
        .build(UniformGrid::new(0.0, 10.0, size), wave)
        .unwrap();
    let nonuniform = Differentiate::new()
        .truncation_order(6)
        .build(jittered_grid(size, 0.3, 7).unwrap(), wave)
        .unwrap();

    group.bench_function("table", |b| {
        b.iter(|| uniform.at(black_box(size / 2)).unwrap())
    });
    group.bench_function("solver", |b| {
        b.iter(|| nonuniform.at(black_box(size / 2)).unwrap())
    });
    group.bench_function("stencil_at", |b| {
        b.iter(|| uniform.stencil_at(black_box(0)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_orders,
    bench_solver,
    bench_boundary,
    bench_single_point,
);

criterion_main!(benches);
