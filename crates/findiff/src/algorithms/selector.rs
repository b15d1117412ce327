//! Stencil selection between the coefficient tables and the weight solver.
//!
//! ## Purpose
//!
//! This module decides, for a `(method, D, T)` request and a grid, whether a
//! precomputed coefficient row can be used (the fast path) or whether the
//! general weight solver must derive the weights (the fallback path), and
//! builds the resulting [`Stencil`].
//!
//! ## Design notes
//!
//! * **Coverage-derived eligibility**: The fast path is taken exactly when
//!   the grid is uniform and the method's table holds a `(D, T)` row. There
//!   is no hand-written guard per method that could drift from the tables.
//! * **Unit offsets on uniform grids**: On a uniform grid the solver runs at
//!   integer offsets, so its output is directly comparable with table rows
//!   and shares the `h^D` normalization.
//! * **Physical positions otherwise**: On a non-uniform grid the solver runs
//!   at the actual sample positions and no further scaling is applied.
//!
//! ## Key concepts
//!
//! * **Fast path**: Table lookup, no arithmetic beyond a cast per weight.
//! * **Fallback path**: Fornberg recurrence, `O(L^2 * D)` per stencil.
//!
//! ## Invariants
//!
//! * Both paths produce weights for the same offsets in the same order.
//!
//! ## Non-goals
//!
//! * This module does not check whether offsets fit inside the grid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::stencil::{Route, Stencil};
use crate::math::coefficients::{CoefficientRow, Method};
use crate::math::weights::finite_difference_weights;
use crate::primitives::errors::FindiffError;
use crate::primitives::numeric::{from_f64, from_isize};

// ============================================================================
// Stencil Selector
// ============================================================================

/// Chooses between tabulated and solved stencil weights.
pub struct StencilSelector;

impl StencilSelector {
    /// Check whether the fast path applies to `(method, d, t)` on a grid with the given uniformity.
    #[inline]
    pub fn is_fast_path_eligible(method: Method, d: usize, t: usize, uniform: bool) -> bool {
        uniform && method.table().covers(d, t)
    }

    /// Tabulated row for `(method, d, t)` if the fast path applies.
    pub fn select(method: Method, d: usize, t: usize, uniform: bool) -> Option<CoefficientRow> {
        if !Self::is_fast_path_eligible(method, d, t, uniform) {
            return None;
        }
        method.table().get(d, t)
    }

    /// Offsets sampled by a `(method, d, t)` stencil, ascending.
    pub fn offsets(method: Method, d: usize, t: usize) -> Vec<isize> {
        let len = method.stencil_len(d, t);
        let start = method.first_offset(len);
        (0..len as isize).map(|k| start + k).collect()
    }

    /// Resolve a stencil for a uniform grid with step `h`.
    ///
    /// Uses the table row when one exists, otherwise solves for weights at
    /// unit offsets. Either way the weighted sum is divided by `h^D`.
    pub fn resolve_uniform<T: Float>(
        method: Method,
        d: usize,
        t: usize,
        h: T,
    ) -> Result<Stencil<T>, FindiffError> {
        let offsets = Self::offsets(method, d, t);
        let scale = h.powi(d as i32);

        let (weights, route) = match Self::select(method, d, t, true) {
            Some(row) => (
                row.weights.iter().map(|&w| from_f64::<T>(w)).collect(),
                Route::Table,
            ),
            None => {
                let nodes: Vec<T> = offsets.iter().map(|&o| from_isize::<T>(o)).collect();
                (
                    finite_difference_weights(T::zero(), &nodes, d)?,
                    Route::Solver,
                )
            }
        };

        Ok(Stencil {
            method,
            derivative_order: d,
            truncation_order: t,
            offsets,
            weights,
            scale,
            route,
        })
    }

    /// Resolve a stencil from physical sample `positions` around `x0`.
    ///
    /// `positions` must hold one abscissa per offset of the `(method, d, t)`
    /// stencil, in offset order.
    pub fn resolve_positions<T: Float>(
        method: Method,
        d: usize,
        t: usize,
        x0: T,
        positions: &[T],
    ) -> Result<Stencil<T>, FindiffError> {
        let offsets = Self::offsets(method, d, t);
        if positions.len() != offsets.len() {
            return Err(FindiffError::FallbackUnavailable(format!(
                "expected {} sample positions, got {}",
                offsets.len(),
                positions.len()
            )));
        }

        let weights = finite_difference_weights(x0, positions, d)?;

        Ok(Stencil {
            method,
            derivative_order: d,
            truncation_order: t,
            offsets,
            weights,
            scale: T::one(),
            route: Route::Solver,
        })
    }
}
