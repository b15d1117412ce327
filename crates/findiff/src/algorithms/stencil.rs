//! Resolved stencils ready for evaluation.
//!
//! ## Purpose
//!
//! This module defines [`Stencil`], the fully resolved set of sample offsets
//! and weights the engine applies at one grid index, and [`Route`], which
//! records where the weights came from.
//!
//! ## Design notes
//!
//! * **Normalization**: Weights are stored together with the divisor that
//!   turns their weighted sum into a derivative. Table rows and solver rows
//!   at unit offsets use `h^D`; solver rows at physical positions use 1.
//! * **Owned**: A stencil owns its offsets and weights so the engine can
//!   cache the interior stencil and hand out copies for inspection.
//!
//! ## Invariants
//!
//! * `offsets.len() == weights.len()`.
//! * Offsets are strictly increasing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::math::coefficients::Method;

// ============================================================================
// Route
// ============================================================================

/// Origin of a stencil's weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Precomputed coefficient table (fast path).
    Table,

    /// General weight solver (fallback path).
    Solver,
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad(match self {
            Route::Table => "table",
            Route::Solver => "solver",
        })
    }
}

// ============================================================================
// Stencil
// ============================================================================

/// Offsets, weights and normalization for one derivative evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stencil<T> {
    /// Method the stencil implements (may differ from the requested one at edges).
    pub method: Method,

    /// Derivative order.
    pub derivative_order: usize,

    /// Truncation order actually achieved.
    pub truncation_order: usize,

    /// Sample offsets relative to the evaluation index, ascending.
    pub offsets: Vec<isize>,

    /// Weight per offset.
    pub weights: Vec<T>,

    /// Divisor applied to the weighted sum.
    pub scale: T,

    /// Where the weights came from.
    pub route: Route,
}

impl<T: Float> Stencil<T> {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the stencil has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weighted sum of `samples` (one per offset), divided by `scale`.
    pub fn apply<I>(&self, samples: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        let sum = self
            .weights
            .iter()
            .zip(samples)
            .fold(T::zero(), |acc, (&w, f)| acc + w * f);
        sum / self.scale
    }

    /// Weights multiplied out by `1 / scale`.
    pub fn normalized_weights(&self) -> Vec<T> {
        self.weights.iter().map(|&w| w / self.scale).collect()
    }
}
