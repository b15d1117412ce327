//! Parallel Differentiation Examples
//!
//! This example demonstrates parallel evaluation of finite-difference derivatives:
//! - Whole-grid evaluation on a large uniform grid
//! - Parallel vs sequential timing
//! - Non-uniform grids through the weight solver
//! - Bounding the thread count with a custom pool

use std::time::Instant;

use fastFindiff::prelude::*;

fn main() -> Result<(), FindiffError> {
    println!("{}", "=".repeat(80));
    println!("Parallel Differentiation - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_large_grid()?;
    example_2_timing()?;
    example_3_nonuniform()?;
    example_4_thread_pool()?;

    Ok(())
}

/// Example 1: Large Uniform Grid
/// Second derivative of a damped oscillation on one million points
fn example_1_large_grid() -> Result<(), FindiffError> {
    println!("Example 1: Large Uniform Grid");
    println!("{}", "-".repeat(80));

    let grid = UniformGrid::new(0.0, 20.0, 1_000_000);
    let engine = Differentiate::new()
        .derivative_order(2)
        .truncation_order(6)
        .build(grid, |x: f64| (-0.1 * x).exp() * x.sin())?;

    let result = engine.par_evaluate()?;
    println!("Points:                 {}", result.len());
    println!("Route:                  {}", result.route);
    println!("Boundary substitutions: {}", result.boundary_substitutions);

    // f'' = e^{-x/10} ((0.01 - 1) sin x - 0.2 cos x)
    let max_error = result
        .iter()
        .map(|(x, d)| {
            let exact = (-0.1 * x).exp() * (-0.99 * x.sin() - 0.2 * x.cos());
            (d - exact).abs()
        })
        .fold(0.0, f64::max);
    println!("Max error:              {:.2e}", max_error);

    println!();
    Ok(())
}

/// Example 2: Timing
/// Sequential data() against par_data() on the same engine
fn example_2_timing() -> Result<(), FindiffError> {
    println!("Example 2: Timing");
    println!("{}", "-".repeat(80));

    let grid = UniformGrid::new(-5.0, 5.0, 2_000_000);
    let engine = Differentiate::new()
        .truncation_order(8)
        .build(grid, |x: f64| x.tanh())?;

    let start = Instant::now();
    let sequential = engine.data()?;
    let seq_time = start.elapsed();

    let start = Instant::now();
    let parallel = engine.par_data()?;
    let par_time = start.elapsed();

    println!("Sequential: {:>10.2?}", seq_time);
    println!("Parallel:   {:>10.2?}", par_time);
    println!("Identical:  {}", sequential == parallel);

    println!();
    Ok(())
}

/// Example 3: Non-uniform Grid
/// Clustered abscissas near the origin, every point solved independently
fn example_3_nonuniform() -> Result<(), FindiffError> {
    println!("Example 3: Non-uniform Grid");
    println!("{}", "-".repeat(80));

    let n = 100_000;
    let points: Vec<f64> = (0..n)
        .map(|i| {
            let s = i as f64 / (n - 1) as f64;
            s * s * 4.0
        })
        .collect();
    let grid = ArrayGrid::new(points)?;

    let engine = Differentiate::new()
        .truncation_order(4)
        .build(grid, |x: f64| x.sqrt() * x)?;

    let values = engine.par_at_range(1, n)?;
    println!("Route:  {}", engine.route());
    println!("d/dx at x = {:.4}: {:.6}", engine.grid().at(n / 2)?, values[n / 2 - 1]);

    println!();
    Ok(())
}

/// Example 4: Custom Thread Pool
/// Results are independent of the number of threads
fn example_4_thread_pool() -> Result<(), FindiffError> {
    println!("Example 4: Custom Thread Pool");
    println!("{}", "-".repeat(80));

    let grid = UniformGrid::new(0.0, 1.0, 200_000);
    let engine = Differentiate::new()
        .derivative_order(3)
        .truncation_order(4)
        .build(grid, f64::exp)?;
    let reference = engine.data()?;

    for threads in [1, 2, 4] {
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool,
            Err(e) => {
                println!("{} threads: pool unavailable ({})", threads, e);
                continue;
            }
        };

        let start = Instant::now();
        let values = pool.install(|| engine.par_data())?;
        println!(
            "{} threads: {:>10.2?}  identical = {}",
            threads,
            start.elapsed(),
            values == reference
        );
    }

    println!();
    Ok(())
}
