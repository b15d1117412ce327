//! # Fast findiff (parallel finite-difference differentiation)
//!
//! Multi-core evaluation of finite-difference derivatives for the `findiff`
//! crate. Engines are configured exactly as in `findiff`; this crate adds
//! parallel counterparts of the range operations, backed by `rayon`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastFindiff::prelude::*;
//!
//! let grid = UniformGrid::new(0.0, 10.0, 1_000);
//!
//! let engine = Differentiate::new()
//!     .derivative_order(2)
//!     .truncation_order(4)
//!     .build(grid, |x: f64| x * x * x)?;
//!
//! // Same values as engine.data(), computed on all cores
//! let values = engine.par_data()?;
//! assert_eq!(values.len(), 1_000);
//! assert!((values[500] - 6.0 * grid.at(500)?).abs() < 1e-6);
//! # Result::<(), FindiffError>::Ok(())
//! ```
//!
//! ### Whole-grid Report
//!
//! ```rust
//! use fastFindiff::prelude::*;
//!
//! let grid = ArrayGrid::new(vec![0.0, 0.3, 0.7, 1.2, 1.5, 2.1])?;
//! let engine = Differentiate::new().build(grid, |x: f64| x * x)?;
//!
//! let result = engine.par_evaluate()?;
//! assert_eq!(result, engine.evaluate()?);
//! println!("{}", result);
//! # Result::<(), FindiffError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Parallel operations fail exactly where their sequential counterparts do:
//!
//! ```rust
//! use fastFindiff::prelude::*;
//!
//! let grid = UniformGrid::new(0.0, 1.0, 100);
//! let engine = Differentiate::new().build(grid, f64::sin)?;
//!
//! match engine.par_at_range(50, 200) {
//!     Ok(values) => println!("Derivatives: {:?}", values),
//!     Err(e) => eprintln!("Evaluation failed: {}", e),
//! }
//! # Result::<(), FindiffError>::Ok(())
//! ```
//!
//! ## Thread Pool
//!
//! Work runs on rayon's global pool. Wrap calls in
//! `rayon::ThreadPool::install` to bound the number of threads.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// High-level parallel API.
mod api;

// Standard fastFindiff prelude.
pub mod prelude {
    pub use crate::api::{
        ArrayGrid, BoundaryPolicy,
        BoundaryPolicy::{Extend, NoBoundary, OneSided},
        DerivativeResult, DifferentiateBuilder as Differentiate, DifferentiationEngine, ErrorKind,
        FindiffError, GridLike, Method,
        Method::{Backward, Central, Forward},
        ParallelDerivative, RealFunction, Route, Stencil, UniformGrid,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
