//! Range evaluation on top of single-point differentiation.
//!
//! `at_range` and `data` are thin loops over the unchecked single-point path
//! after one range check, so `at_range(a, b)[k] == at(a + k)` holds exactly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::DifferentiationEngine;
use crate::engine::output::DerivativeResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::FindiffError;
use crate::primitives::function::RealFunction;
use crate::primitives::grid::GridLike;

impl<T, G, F> DifferentiationEngine<T, G, F>
where
    T: Float,
    G: GridLike<T>,
    F: RealFunction<T>,
{
    /// Derivatives for the half-open index range `[from, to)`.
    pub fn at_range(&self, from: usize, to: usize) -> Result<Vec<T>, FindiffError> {
        Validator::validate_range(from, to, self.grid().first(), self.grid().last())?;
        (from..to).map(|i| self.at_unchecked(i)).collect()
    }

    /// Derivatives at every grid index.
    pub fn data(&self) -> Result<Vec<T>, FindiffError> {
        let first = self.grid().first();
        self.at_range(first, self.grid().last() + 1)
    }

    /// Derivatives at every grid index, with abscissas and run metadata.
    pub fn evaluate(&self) -> Result<DerivativeResult<T>, FindiffError> {
        let first = self.grid().first();
        let last = self.grid().last();

        let mut values = Vec::with_capacity(self.grid().len());
        let mut boundary_substitutions = 0;
        for i in first..=last {
            let (value, method) = self.evaluate_unchecked(i)?;
            if method != self.method() {
                boundary_substitutions += 1;
            }
            values.push(value);
        }

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
