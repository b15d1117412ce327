//! Tests for the differentiation engine.
//!
//! These tests verify single-point and range evaluation:
//! - Exactness on low-degree polynomials (fast path)
//! - Normalization by the step size
//! - Range consistency with single-point evaluation
//! - Boundary coverage at every index
//! - Routing through the solver on non-uniform grids and uncovered orders
//! - Error reporting that leaves the engine usable
//!
//! ## Test Organization
//!
//! 1. **Polynomial Exactness** - Analytic derivatives reproduced
//! 2. **Range Evaluation** - at_range / data / evaluate
//! 3. **Boundary Handling** - One-sided, Extend, NoBoundary
//! 4. **Solver Route** - Non-uniform grids, uncovered (D, T)
//! 5. **Errors and Construction**

use approx::{assert_abs_diff_eq, assert_relative_eq};

use findiff::prelude::*;

fn square(x: f64) -> f64 {
    x * x
}

fn nonuniform_grid() -> ArrayGrid<f64> {
    ArrayGrid::new(vec![0.0, 0.3, 0.7, 1.2, 1.5, 2.1, 2.6, 3.0, 3.8, 4.1]).unwrap()
}

// ============================================================================
// Polynomial Exactness Tests
// ============================================================================

/// Test the reference example: d/dx x^2 at x = 5 on a unit grid.
#[test]
fn test_square_at_interior_point() {
    let grid = UniformGrid::new(0.0, 10.0, 10);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central).unwrap();

    assert_eq!(engine.grid().at(5).unwrap(), 5.0);
    assert_relative_eq!(engine.at(5).unwrap(), 10.0, epsilon = 1e-12);
    assert_eq!(engine.route(), Route::Table);
}

/// Test central first derivatives of x^k are exact for k <= T + 1.
#[test]
fn test_central_first_derivative_exactness() {
    let grid = UniformGrid::new(0.0, 2.0, 20);
    let x = grid.at(10).unwrap();

    for t in [2, 4, 6, 8] {
        for k in 1..=(t + 1) {
            let f = move |x: f64| x.powi(k as i32);
            let engine = DifferentiationEngine::with_function(grid, f, 1, t, Central).unwrap();
            let expected = k as f64 * x.powi(k as i32 - 1);
            assert_relative_eq!(engine.at(10).unwrap(), expected, max_relative = 1e-9);
        }
    }
}

/// Test higher derivatives on the fast path.
#[test]
fn test_higher_derivatives() {
    let grid = UniformGrid::new(0.0, 2.0, 20);
    let x = grid.at(10).unwrap();

    // d^2/dx^2 x^3 = 6x
    let engine =
        DifferentiationEngine::with_function(grid, |x: f64| x.powi(3), 2, 2, Central).unwrap();
    assert_relative_eq!(engine.at(10).unwrap(), 6.0 * x, max_relative = 1e-9);

    // d^4/dx^4 x^5 = 120x
    let engine =
        DifferentiationEngine::with_function(grid, |x: f64| x.powi(5), 4, 2, Central).unwrap();
    assert_relative_eq!(engine.at(10).unwrap(), 120.0 * x, max_relative = 1e-6);

    // d^3/dx^3 x^3 = 6 with a forward stencil
    let engine =
        DifferentiationEngine::with_function(grid, |x: f64| x.powi(3), 3, 2, Forward).unwrap();
    assert_relative_eq!(engine.at(2).unwrap(), 6.0, max_relative = 1e-6);
}

/// Test that the weighted sum is divided by h^D.
///
/// With h = 0.5, the forward T = 1 difference of x^2 is 2x + h.
#[test]
fn test_step_normalization() {
    let grid = UniformGrid::new(0.0, 5.0, 10);
    assert_eq!(grid.spacing(), 0.5);

    let engine = DifferentiationEngine::with_function(grid, square, 1, 1, Forward).unwrap();
    assert_relative_eq!(engine.at(2).unwrap(), 2.5, epsilon = 1e-12);

    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central).unwrap();
    assert_relative_eq!(engine.at(2).unwrap(), 2.0, epsilon = 1e-12);

    let engine = DifferentiationEngine::with_function(grid, square, 2, 2, Central).unwrap();
    assert_relative_eq!(engine.at(4).unwrap(), 2.0, epsilon = 1e-12);
}

/// Test single-precision grids.
#[test]
fn test_f32_engine() {
    let grid = UniformGrid::new(0.0_f32, 10.0, 10);
    let engine = DifferentiationEngine::with_function(grid, |x: f32| x * x, 1, 2, Central).unwrap();
    assert_relative_eq!(engine.at(5).unwrap(), 10.0_f32, epsilon = 1e-4);
}

// ============================================================================
// Range Evaluation Tests
// ============================================================================

/// Test that at_range equals element-wise at().
#[test]
fn test_range_consistency() {
    let grid = UniformGrid::new(0.0, 1.0, 16);
    let engine = DifferentiationEngine::with_function(grid, f64::sin, 1, 4, Central).unwrap();

    for from in 0..=16 {
        for to in from..=16 {
            let range = engine.at_range(from, to).unwrap();
            assert_eq!(range.len(), to - from);
            for (k, value) in range.iter().enumerate() {
                assert_eq!(*value, engine.at(from + k).unwrap());
            }
        }
    }
}

/// Test that data() covers the whole grid.
#[test]
fn test_data_covers_grid() {
    let grid = UniformGrid::new(0.0, 1.0, 8);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central).unwrap();

    let data = engine.data().unwrap();
    assert_eq!(data, engine.at_range(0, 8).unwrap());
    for (value, x) in data.iter().zip(grid.data()) {
        assert_abs_diff_eq!(*value, 2.0 * x, epsilon = 1e-12);
    }
}

/// Test invalid ranges.
#[test]
fn test_invalid_ranges() {
    let grid = UniformGrid::new(0.0, 1.0, 8);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central).unwrap();

    let err = engine.at_range(5, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert!(engine.at_range(0, 9).is_err());
    assert!(engine.at_range(3, 3).unwrap().is_empty());
}

/// Test the whole-grid report.
#[test]
fn test_evaluate_report() {
    let grid = UniformGrid::new(0.0, 1.0, 10);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 4, Central).unwrap();

    let result = engine.evaluate().unwrap();
    assert_eq!(result.len(), 10);
    assert_eq!(result.x, grid.data());
    assert_eq!(result.values, engine.data().unwrap());
    assert_eq!(result.method, Central);
    assert_eq!(result.route, Route::Table);
    // Two points at each edge need a one-sided stencil for T = 4
    assert_eq!(result.boundary_substitutions, 4);

    let text = result.to_string();
    assert!(text.contains("Summary:"));
    assert!(text.contains("central"));
}

// ============================================================================
// Boundary Handling Tests
// ============================================================================

/// Test that every index is computable with the central method.
#[test]
fn test_boundary_coverage() {
    let grid = UniformGrid::new(0.0, 1.2, 12);

    for d in 1..=4 {
        for t in [2, 4, 6, 8] {
            let engine = DifferentiationEngine::with_function(grid, f64::exp, d, t, Central)
                .unwrap();
            for i in grid.first()..=grid.last() {
                let value = engine.at(i);
                assert!(value.is_ok(), "D={} T={} index {}: {:?}", d, t, i, value);
            }
        }
    }
}

/// Test edge values of an exactly representable derivative.
#[test]
fn test_one_sided_edges_are_exact() {
    let grid = UniformGrid::new(0.0, 1.0, 10);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central).unwrap();

    assert_abs_diff_eq!(engine.at(0).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(engine.at(9).unwrap(), 1.8, epsilon = 1e-12);

    let stencil = engine.stencil_at(0).unwrap();
    assert_eq!(stencil.method, Forward);
    assert_eq!(stencil.offsets, vec![0, 1, 2]);
    assert_eq!(stencil.route, Route::Table);

    let stencil = engine.stencil_at(9).unwrap();
    assert_eq!(stencil.method, Backward);
    assert_eq!(stencil.offsets, vec![-2, -1, 0]);

    let stencil = engine.stencil_at(4).unwrap();
    assert_eq!(stencil.method, Central);
    assert_eq!(stencil.offsets, vec![-1, 0, 1]);
}

/// Test that the boundary keeps accuracy by lowering truncation only as needed.
#[test]
fn test_boundary_truncation_fallback() {
    let grid = UniformGrid::new(0.0, 1.0, 20);
    let engine = DifferentiationEngine::with_function(grid, f64::sin, 1, 8, Central).unwrap();

    assert_eq!(engine.stencil_at(0).unwrap().truncation_order, 6);
    assert_eq!(engine.stencil_at(19).unwrap().truncation_order, 3);
    assert_eq!(engine.stencil_at(10).unwrap().truncation_order, 8);
}

/// Test the Extend policy samples past the grid.
#[test]
fn test_extend_policy() {
    let grid = UniformGrid::new(0.0, 1.0, 10);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central)
        .unwrap()
        .with_boundary_policy(Extend);

    let stencil = engine.stencil_at(0).unwrap();
    assert_eq!(stencil.method, Central);
    assert_eq!(stencil.offsets, vec![-1, 0, 1]);
    assert_abs_diff_eq!(engine.at(0).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(engine.at(9).unwrap(), 1.8, epsilon = 1e-12);
}

/// Test that NoBoundary fails at the edges only.
#[test]
fn test_no_boundary_policy() {
    let grid = UniformGrid::new(0.0, 1.0, 10);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central)
        .unwrap()
        .with_boundary_policy(NoBoundary);

    let err = engine.at(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BoundaryUnsolvable);
    assert!(engine.at(5).is_ok());
    assert!(engine.data().is_err());
}

/// Test that derivatives above the one-sided tables need Extend at the edges.
#[test]
fn test_high_order_central_edges() {
    let grid = UniformGrid::from_step(0.0, 0.5, 12);
    let quintic = |x: f64| x * x * x * x * x;

    let engine = DifferentiationEngine::with_function(grid, quintic, 5, 2, Central).unwrap();
    assert_eq!(engine.boundary_policy(), OneSided);

    let err = engine.at(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BoundaryUnsolvable);
    assert_eq!(engine.at(11).unwrap_err().kind(), ErrorKind::BoundaryUnsolvable);
    assert_relative_eq!(engine.at(5).unwrap(), 120.0, max_relative = 1e-8);

    let engine = engine.with_boundary_policy(Extend);
    for i in [0, 5, 11] {
        assert_relative_eq!(engine.at(i).unwrap(), 120.0, max_relative = 1e-8);
    }
}

// ============================================================================
// Solver Route Tests
// ============================================================================

/// Test that a non-uniform grid routes through the solver and stays exact.
#[test]
fn test_nonuniform_grid_uses_solver() {
    let grid = nonuniform_grid();
    assert!(!grid.is_uniform());

    let engine = DifferentiationEngine::with_function(grid.clone(), square, 1, 2, Central)
        .unwrap();
    assert_eq!(engine.route(), Route::Solver);
    assert_eq!(engine.stencil_at(4).unwrap().route, Route::Solver);

    for i in 0..grid.len() {
        let x = grid.at(i).unwrap();
        assert_relative_eq!(engine.at(i).unwrap(), 2.0 * x, epsilon = 1e-10);
    }
    assert_relative_eq!(engine.at(4).unwrap(), 3.0, epsilon = 1e-10);
}

/// Test higher orders on a non-uniform grid.
#[test]
fn test_nonuniform_higher_order() {
    let grid = nonuniform_grid();
    let engine =
        DifferentiationEngine::with_function(grid.clone(), |x: f64| x.powi(4), 2, 4, Central)
            .unwrap();

    // Five-point stencils reproduce the second derivative of a quartic
    for i in 2..=7 {
        let x = grid.at(i).unwrap();
        assert_relative_eq!(engine.at(i).unwrap(), 12.0 * x * x, max_relative = 1e-8);
    }
}

/// Test that Extend on a non-uniform grid extrapolates with the edge spacing.
#[test]
fn test_nonuniform_extend() {
    let grid = nonuniform_grid();
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central)
        .unwrap()
        .with_boundary_policy(Extend);

    assert_abs_diff_eq!(engine.at(0).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(engine.at(9).unwrap(), 8.2, epsilon = 1e-10);
}

/// Test that an uncovered (D, T) pair on a uniform grid uses the solver.
#[test]
fn test_uncovered_pair_uses_solver() {
    let grid = UniformGrid::new(0.0, 2.0, 20);
    let x = grid.at(10).unwrap();

    let engine =
        DifferentiationEngine::with_function(grid, |x: f64| x.powi(7), 1, 10, Central).unwrap();
    assert_eq!(engine.route(), Route::Solver);
    assert_relative_eq!(engine.at(10).unwrap(), 7.0 * x.powi(6), max_relative = 1e-8);
}

/// Test that the fast path and the solver agree on a covered pair.
#[test]
fn test_fast_path_matches_solver_route() {
    let uniform = UniformGrid::new(0.0, 1.0, 10);
    let forced = ArrayGrid::with_uniform_flag(uniform.data(), false).unwrap();

    let fast = DifferentiationEngine::with_function(uniform, f64::cos, 2, 4, Central).unwrap();
    let slow = DifferentiationEngine::with_function(forced, f64::cos, 2, 4, Central).unwrap();
    assert_eq!(fast.route(), Route::Table);
    assert_eq!(slow.route(), Route::Solver);

    for i in 0..10 {
        assert_relative_eq!(
            fast.at(i).unwrap(),
            slow.at(i).unwrap(),
            max_relative = 1e-6,
            epsilon = 1e-8
        );
    }
}

// ============================================================================
// Errors and Construction Tests
// ============================================================================

/// Test that invalid configuration fails at construction.
#[test]
fn test_invalid_configuration() {
    let grid = UniformGrid::new(0.0, 1.0, 10);

    let err = DifferentiationEngine::with_function(grid, square, 0, 2, Central).err().unwrap();
    assert_eq!(err, FindiffError::InvalidDerivativeOrder(0));

    let err = DifferentiationEngine::with_function(grid, square, 1, 0, Forward).err().unwrap();
    assert_eq!(err, FindiffError::InvalidTruncationOrder(0));

    let err = DifferentiationEngine::with_function(grid, square, 1, 3, Central).err().unwrap();
    assert_eq!(err, FindiffError::OddCentralTruncation(3));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

/// Test that out-of-range access fails and leaves the engine usable.
#[test]
fn test_out_of_range_then_recover() {
    let grid = UniformGrid::new(0.0, 10.0, 10);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central).unwrap();

    let err = engine.at(10).unwrap_err();
    assert_eq!(
        err,
        FindiffError::IndexOutOfRange {
            index: 10,
            first: 0,
            last: 9
        }
    );
    assert!(engine.stencil_at(42).is_err());
    assert_relative_eq!(engine.at(5).unwrap(), 10.0, epsilon = 1e-12);
}

/// Test the unchecked path on valid indices.
#[test]
fn test_unchecked_matches_checked() {
    let grid = UniformGrid::new(0.0, 10.0, 10);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 2, Central).unwrap();

    for i in 0..10 {
        assert_eq!(engine.at_unchecked(i).unwrap(), engine.at(i).unwrap());
    }
}

/// Test that the reported method marks exactly the substituted edge points.
#[test]
fn test_evaluate_unchecked_reports_method() {
    let grid = UniformGrid::new(0.0, 10.0, 10);
    let engine = DifferentiationEngine::with_function(grid, square, 1, 4, Central).unwrap();

    let methods: Vec<Method> = (0..10)
        .map(|i| engine.evaluate_unchecked(i).unwrap().1)
        .collect();
    assert_eq!(&methods[..2], &[Forward, Forward]);
    assert!(methods[2..8].iter().all(|&m| m == Central));
    assert_eq!(&methods[8..], &[Backward, Backward]);

    let (value, _) = engine.evaluate_unchecked(5).unwrap();
    assert_eq!(value, engine.at(5).unwrap());
}

/// Default-constructible function object.
#[derive(Debug, Clone, Copy, Default)]
struct Cube;

impl RealFunction<f64> for Cube {
    fn eval(&self, x: f64) -> f64 {
        x * x * x
    }
}

/// Test engines built with a default-constructed function.
#[test]
fn test_default_function_object() {
    let grid = UniformGrid::new(0.0, 10.0, 10);
    let engine: DifferentiationEngine<f64, _, Cube> =
        DifferentiationEngine::new(grid, 1, 2, Central).unwrap();

    // Central T = 2 on x^3: 3x^2 + h^2
    assert_relative_eq!(engine.at(5).unwrap(), 76.0, epsilon = 1e-10);
}

/// Test re-ordering an engine with with_orders.
#[test]
fn test_with_orders() {
    let grid = UniformGrid::new(0.0, 10.0, 10);
    let first = DifferentiationEngine::with_function(grid, Cube, 1, 2, Central).unwrap();
    let second = first.with_orders(2, 4).unwrap();

    assert_eq!(second.derivative_order(), 2);
    assert_eq!(second.truncation_order(), 4);
    assert_eq!(second.method(), Central);
    assert_relative_eq!(second.at(5).unwrap(), 30.0, epsilon = 1e-10);

    assert!(first.with_orders(1, 5).is_err());
}
