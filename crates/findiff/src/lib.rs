//! # findiff: Finite-Difference Differentiation for Rust
//!
//! Table-driven finite-difference derivatives of a function sampled on a
//! one-dimensional grid, with central, forward and backward stencils of
//! selectable derivative and truncation order.
//!
//! ## What is a finite difference?
//!
//! A finite-difference stencil approximates the `D`-th derivative of `f` at a
//! grid point `x_i` by a weighted sum of samples `f(x_i + o_k h)`, divided by
//! `h^D`. The weights are chosen so the error shrinks like `h^T`, where `T` is
//! the truncation order. Higher `T` means a wider stencil.
//!
//! ## Quick Start
//!
//! ```rust
//! use findiff::prelude::*;
//!
//! // Ten points 0, 1, ..., 9 (the upper bound is excluded)
//! let grid = UniformGrid::new(0.0, 10.0, 10);
//!
//! let engine = Differentiate::new()
//!     .derivative_order(1)    // First derivative
//!     .truncation_order(2)    // Error O(h^2)
//!     .method(Central)        // Symmetric stencil
//!     .build(grid, |x: f64| x * x)?;
//!
//! let slope = engine.at(5)?;
//! assert!((slope - 10.0).abs() < 1e-12);
//! # Result::<(), FindiffError>::Ok(())
//! ```
//!
//! ### Whole-grid evaluation
//!
//! ```rust
//! use findiff::prelude::*;
//!
//! let grid = UniformGrid::new(0.0, 1.0, 5);
//! let engine = Differentiate::new().build(grid, |x: f64| x * x)?;
//!
//! let result = engine.evaluate()?;
//! println!("{}", result);
//! # Result::<(), FindiffError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points:      5
//!   Derivative order: 1
//!   Truncation order: 2
//!   Method:           central
//!   Route:            table
//!   Boundary:         one-sided (2 substituted)
//!
//! Derivative:
//!          X              D
//! -------------------------
//!     0.0000       0.000000
//!     0.2000       0.400000
//!     0.4000       0.800000
//!     0.6000       1.200000
//!     0.8000       1.600000
//! ```
//!
//! ### Boundaries
//!
//! Near the grid edges a central stencil would sample outside the grid. The
//! default [`BoundaryPolicy::OneSided`](prelude::OneSided) switches to a
//! forward stencil at the left edge and a backward stencil at the right edge,
//! keeping the truncation order where a row exists. `Extend` samples the
//! function past the edge instead, and `NoBoundary` reports an error.
//!
//! ### Non-uniform grids
//!
//! Grids that are not uniformly spaced, and `(D, T)` pairs with no
//! precomputed row, are served by a general weight solver:
//!
//! ```rust
//! use findiff::prelude::*;
//!
//! let grid = ArrayGrid::new(vec![0.0, 0.3, 0.7, 1.2, 1.5, 2.1])?;
//! let engine = Differentiate::new().build(grid, |x: f64| x * x)?;
//!
//! assert_eq!(engine.route(), Route::Solver);
//! assert!((engine.at(3)? - 2.4).abs() < 1e-12);
//! # Result::<(), FindiffError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible call returns `Result<_, FindiffError>`. Configuration is
//! checked in `build`, index bounds in `at` and `at_range`.
//! [`FindiffError::kind`](prelude::FindiffError::kind) groups errors into
//! configuration, out-of-range, boundary and solver failures.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to build without `std`; `alloc` is still
//! required, and float math goes through `libm`:
//!
//! ```toml
//! [dependencies]
//! findiff = { version = "0.1", default-features = false }
//! ```
//!
//! ## Diagnostics
//!
//! The engine emits `tracing` events under the `findiff` target: `debug` when
//! an engine resolves its interior stencil, `trace` for boundary substitutions
//! and per-point solves on non-uniform grids. No subscriber is installed.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, grid and function contracts.
mod primitives;

// Layer 2: Math - coefficient tables, weight solver, boundary policy.
mod math;

// Layer 3: Algorithms - stencil selection.
mod algorithms;

// Layer 4: Engine - orchestration and evaluation.
mod engine;

// High-level fluent API.
mod api;

// Standard findiff prelude.
pub mod prelude {
    pub use crate::api::{
        BoundaryPolicy,
        BoundaryPolicy::Extend,
        BoundaryPolicy::NoBoundary,
        BoundaryPolicy::OneSided,
        CoefficientRow, CoefficientTable, DerivativeResult, DifferentiateBuilder as Differentiate,
        ErrorKind, FindiffError, Method,
        Method::Backward,
        Method::Central,
        Method::Forward,
        Route, Stencil, finite_difference_weights,
    };
    pub use crate::api::{ArrayGrid, UniformGrid};
    pub use crate::engine::executor::DifferentiationEngine;
    pub use crate::primitives::function::RealFunction;
    pub use crate::primitives::grid::GridLike;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
