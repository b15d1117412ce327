//! Finite-Difference Differentiation Examples
//!
//! This example demonstrates differentiation on one-dimensional grids:
//! - Single-point and range evaluation on a uniform grid
//! - Whole-grid evaluation with one-sided boundary stencils
//! - Boundary policies compared at the grid edges
//! - Non-uniform grids served by the weight solver
//! - Convergence as the step size shrinks
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use findiff::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), FindiffError> {
    println!("{}", "=".repeat(80));
    println!("Finite-Difference Differentiation - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_uniform_grid()?;
    example_2_whole_grid()?;
    example_3_boundary_policies()?;
    example_4_nonuniform_grid()?;
    example_5_convergence()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

/// f(x) = x^2 as a default-constructible function object.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
struct Quadratic;

#[cfg(feature = "std")]
impl RealFunction<f32> for Quadratic {
    fn eval(&self, x: f32) -> f32 {
        x * x
    }
}

#[cfg(feature = "std")]
/// Example 1: Uniform Grid
/// Single points and ranges of d/dx x^2 on ten unit-spaced points
fn example_1_uniform_grid() -> Result<(), FindiffError> {
    println!("Example 1: Uniform Grid");
    println!("{}", "-".repeat(80));

    let grid = UniformGrid::new(0.0_f32, 10.0, 10);
    print!("{}", grid);

    let engine: DifferentiationEngine<f32, _, Quadratic> =
        DifferentiationEngine::new(grid, 1, 2, Central)?;

    println!("at(2):          {}", engine.at(2)?);
    println!("at_range(3, 5): {:?}", engine.at_range(3, 5)?);
    println!("data():         {:?}", engine.data()?);

    match engine.at(10) {
        Ok(v) => println!("at(10): {}", v),
        Err(e) => println!("at(10) failed: {}", e),
    }

    /* Expected Output:
    UniformGrid:
      From:   0
      To:     10
      Points: 10
      0 1 2 3 4 5 6 7 8 9
    at(2):          4
    at_range(3, 5): [6.0, 8.0]
    data():         [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0]
    at(10) failed: Index out of range: 10 (valid indices are 0..=9)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Whole Grid
/// Fourth-order first derivative of sin(x), with one-sided edges
fn example_2_whole_grid() -> Result<(), FindiffError> {
    println!("Example 2: Whole Grid");
    println!("{}", "-".repeat(80));

    let grid = UniformGrid::new(0.0, std::f64::consts::PI, 12);
    let engine = Differentiate::new()
        .truncation_order(4)
        .build(grid, f64::sin)?;

    let result = engine.evaluate()?;
    println!("{}", result);

    let max_error = result
        .iter()
        .map(|(x, d)| (d - x.cos()).abs())
        .fold(0.0, f64::max);
    println!("Max error vs cos(x): {:.2e}", max_error);

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Boundary Policies
/// The same request at the first index under each policy
fn example_3_boundary_policies() -> Result<(), FindiffError> {
    println!("Example 3: Boundary Policies");
    println!("{}", "-".repeat(80));

    let grid = UniformGrid::new(0.0, 1.0, 10);
    for policy in [OneSided, Extend, NoBoundary] {
        let engine = Differentiate::new()
            .derivative_order(2)
            .truncation_order(4)
            .boundary_policy(policy)
            .build(grid, f64::exp)?;

        match engine.stencil_at(0) {
            Ok(stencil) => println!(
                "{:<10} {:>8} T={} offsets={:?} d2f(0)={:.6}",
                policy,
                stencil.method,
                stencil.truncation_order,
                stencil.offsets,
                engine.at(0)?
            ),
            Err(e) => println!("{:<10} {}", policy, e),
        }
    }

    /* Expected Output:
    one-sided   forward T=4 offsets=[0, 1, 2, 3, 4, 5] d2f(0)=1.000...
    extend      central T=4 offsets=[-2, -1, 0, 1, 2] d2f(0)=1.000...
    none       No stencil fits at index 0 for central derivative of order 2
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Non-uniform Grid
/// Irregular abscissas route through the weight solver
fn example_4_nonuniform_grid() -> Result<(), FindiffError> {
    println!("Example 4: Non-uniform Grid");
    println!("{}", "-".repeat(80));

    let grid = ArrayGrid::new(vec![0.0, 0.3, 0.7, 1.2, 1.5, 2.1, 2.6, 3.0, 3.8, 4.1])?;
    let engine = Differentiate::new().build(grid, |x: f64| x * x)?;

    println!("Route: {}", engine.route());
    println!("{}", engine.evaluate()?);

    let stencil = engine.stencil_at(4)?;
    println!("Weights at x = 1.5: {:?}", stencil.weights);

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Convergence
/// Error of each truncation order as the grid is refined
fn example_5_convergence() -> Result<(), FindiffError> {
    println!("Example 5: Convergence");
    println!("{}", "-".repeat(80));

    println!("{:>8} {:>12} {:>12} {:>12}", "Points", "T=2", "T=4", "T=6");
    for n in [16, 32, 64, 128] {
        let grid = UniformGrid::new(0.0, 1.0, n);
        let mid = n / 2;
        let x = grid.at(mid)?;

        print!("{:>8}", n);
        for t in [2, 4, 6] {
            let engine = Differentiate::new()
                .truncation_order(t)
                .build(grid, f64::exp)?;
            print!(" {:>12.3e}", (engine.at(mid)? - x.exp()).abs());
        }
        println!();
    }

    println!();
    Ok(())
}
