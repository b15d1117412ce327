//! High-level API for finite-difference evaluation with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of the parallel crate:
//! the [`ParallelDerivative`] extension trait, implemented for every
//! `findiff` engine whose grid and function can be shared across threads.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Engines are still built with the base
//!   `Differentiate` builder; importing the trait adds the `par_*` methods.
//! * **Same contract**: Each parallel method validates exactly like its
//!   sequential counterpart and returns identical values.
//!
//! ## Key concepts
//!
//! * **Drop-in**: `par_at_range`, `par_data` and `par_evaluate` mirror
//!   `at_range`, `data` and `evaluate`.

// External dependencies
use num_traits::Float;

// Export dependencies from findiff crate
use findiff::internals::engine::validator::Validator;

// Internal dependencies
use crate::engine::executor::{par_values, par_values_with_substitutions};

// Publicly re-exported types
pub use findiff::internals::api::{
    ArrayGrid, BoundaryPolicy, DerivativeResult, DifferentiateBuilder, ErrorKind, FindiffError,
    Method, Route, Stencil, UniformGrid,
};
pub use findiff::prelude::{DifferentiationEngine, GridLike, RealFunction};

// ============================================================================
// Parallel Extension Trait
// ============================================================================

/// Parallel range evaluation for differentiation engines.
pub trait ParallelDerivative<T> {
    /// Derivatives for the half-open index range `[from, to)`, in parallel.
    fn par_at_range(&self, from: usize, to: usize) -> Result<Vec<T>, FindiffError>;

    /// Derivatives at every grid index, in parallel.
    fn par_data(&self) -> Result<Vec<T>, FindiffError>;

    /// Whole-grid report, computed in parallel.
    fn par_evaluate(&self) -> Result<DerivativeResult<T>, FindiffError>;
}

impl<T, G, F> ParallelDerivative<T> for DifferentiationEngine<T, G, F>
where
    T: Float + Send + Sync,
    G: GridLike<T> + Sync,
    F: RealFunction<T> + Sync,
{
    fn par_at_range(&self, from: usize, to: usize) -> Result<Vec<T>, FindiffError> {
        Validator::validate_range(from, to, self.grid().first(), self.grid().last())?;
        par_values(self, from, to)
    }

    fn par_data(&self) -> Result<Vec<T>, FindiffError> {
        par_values(self, self.grid().first(), self.grid().last() + 1)
    }

    fn par_evaluate(&self) -> Result<DerivativeResult<T>, FindiffError> {
        let (values, boundary_substitutions) =
            par_values_with_substitutions(self, self.grid().first(), self.grid().last() + 1)?;

        Ok(DerivativeResult {
            x: self.grid().data(),
            values,
            derivative_order: self.derivative_order(),
            truncation_order: self.truncation_order(),
            method: self.method(),
            boundary_policy: self.boundary_policy(),
            route: self.route(),
            boundary_substitutions,
        })
    }
}
