//! Validation of differentiation configuration and grids.
//!
//! ## Purpose
//!
//! This module checks every static parameter of a differentiation request
//! before an engine exists, and the index arguments of checked calls. It
//! maps each violation to a [`FindiffError`] variant.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Grid validation is generic over `Float` and `GridLike`.
//!
//! ## Key concepts
//!
//! * **Order Bounds**: Derivative and truncation orders are at least 1.
//! * **Central Symmetry**: Central stencils require an even truncation order.
//! * **Stencil Width**: At most `MAX_STENCIL_LEN` samples, computed without overflow.
//! * **Grid Contract**: At least two finite, strictly increasing points, and a
//!   finite positive step on grids that report themselves uniform.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * Grid validation reads every point exactly once.
//!
//! ## Non-goals
//!
//! * This module does not check table coverage (uncovered pairs use the solver).
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::coefficients::{MAX_STENCIL_LEN, Method};
use crate::primitives::errors::FindiffError;
use crate::primitives::grid::GridLike;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for differentiation configuration and grids.
///
/// Provides static methods returning `Result<(), FindiffError>` that fail
/// fast on the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Order Validation
    // ========================================================================

    /// Validate the derivative order.
    pub fn validate_derivative_order(d: usize) -> Result<(), FindiffError> {
        if d < 1 {
            return Err(FindiffError::InvalidDerivativeOrder(d));
        }
        Ok(())
    }

    /// Validate the truncation order.
    pub fn validate_truncation_order(t: usize) -> Result<(), FindiffError> {
        if t < 1 {
            return Err(FindiffError::InvalidTruncationOrder(t));
        }
        Ok(())
    }

    /// Validate that `t` is admissible for `method`.
    pub fn validate_method_truncation(method: Method, t: usize) -> Result<(), FindiffError> {
        if !method.accepts_truncation(t) {
            return Err(FindiffError::OddCentralTruncation(t));
        }
        Ok(())
    }

    /// Validate that the `(method, d, t)` stencil is at most [`MAX_STENCIL_LEN`] samples wide.
    pub fn validate_stencil_width(method: Method, d: usize, t: usize) -> Result<(), FindiffError> {
        match method.checked_stencil_len(d, t) {
            Some(len) if len <= MAX_STENCIL_LEN => Ok(()),
            _ => Err(FindiffError::StencilTooWide {
                method,
                derivative_order: d,
                truncation_order: t,
                max: MAX_STENCIL_LEN,
            }),
        }
    }

    /// Validate a full `(method, d, t)` configuration.
    pub fn validate_orders(method: Method, d: usize, t: usize) -> Result<(), FindiffError> {
        Self::validate_derivative_order(d)?;
        Self::validate_truncation_order(t)?;
        Self::validate_method_truncation(method, t)?;
        Self::validate_stencil_width(method, d, t)
    }

    // ========================================================================
    // Grid Validation
    // ========================================================================

    /// Validate that a grid satisfies the grid contract.
    pub fn validate_grid<T, G>(grid: &G) -> Result<(), FindiffError>
    where
        T: Float,
        G: GridLike<T>,
    {
        // Check 1: Enough points for a step
        let n = grid.len();
        if n < 2 {
            return Err(FindiffError::TooFewPoints { got: n, min: 2 });
        }

        // Check 2: Finite and strictly increasing
        let first = grid.first();
        let mut prev = T::neg_infinity();
        for i in first..first + n {
            let x = grid.at_unchecked(i);
            if !x.is_finite() {
                return Err(FindiffError::InvalidNumericValue(format!(
                    "grid[{}]={}",
                    i,
                    x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if x <= prev {
                return Err(FindiffError::InvalidGrid(format!(
                    "points must be strictly increasing (grid[{}] >= grid[{}])",
                    i - 1,
                    i
                )));
            }
            prev = x;
        }

        // Check 3: Usable step on uniform grids
        if grid.is_uniform() {
            let h = grid.spacing();
            if !h.is_finite() || h <= T::zero() {
                return Err(FindiffError::InvalidGrid(format!(
                    "uniform step must be finite and positive, got {}",
                    h.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Call Validation
    // ========================================================================

    /// Validate an index against the inclusive span `[first, last]`.
    pub fn validate_index(index: usize, first: usize, last: usize) -> Result<(), FindiffError> {
        if index < first || index > last {
            return Err(FindiffError::IndexOutOfRange { index, first, last });
        }
        Ok(())
    }

    /// Validate a half-open range `[from, to)` against `[first, last]`.
    pub fn validate_range(
        from: usize,
        to: usize,
        first: usize,
        last: usize,
    ) -> Result<(), FindiffError> {
        if from > to || from < first || to > last + 1 {
            return Err(FindiffError::InvalidRange {
                from,
                to,
                first,
                last,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FindiffError> {
        if let Some(param) = duplicate_param {
            return Err(FindiffError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
