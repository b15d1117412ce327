//! Boundary handling for stencils near the grid edges.
//!
//! ## Purpose
//!
//! This module decides what happens when a stencil's sample window would
//! reach outside the grid's valid index span, for example a central stencil
//! requested at the first or last index.
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: Uses `BoundaryPolicy` enum to select the behavior.
//! * **Pure decision**: `apply_boundary_policy` only inspects indices and
//!   table coverage; sampling is left to the engine.
//! * **Edge-appropriate substitution**: A window overflowing the left edge is
//!   replaced by a forward stencil, one overflowing the right edge by a
//!   backward stencil.
//!
//! ## Key concepts
//!
//! * **Window**: The inclusive index span `[i + o_min, i + o_max]` a stencil
//!   samples when evaluated at index `i`.
//! * **Truncation fallback**: A substituted stencil keeps the requested
//!   truncation order when its table covers it, otherwise the largest covered
//!   order below it. On short grids the order keeps dropping until the
//!   window fits.
//!
//! ## Invariants
//!
//! * A `Substitute` action always names a covered `(D, T)` row whose window
//!   fits inside `[first, last]`.
//! * `Interior` is returned exactly when the requested window fits.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the function or extrapolate positions.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::math::coefficients::Method;
use crate::primitives::errors::FindiffError;

// ============================================================================
// Boundary Policy
// ============================================================================

/// Policy for stencils whose window leaves the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Switch to a forward (left edge) or backward (right edge) stencil.
    ///
    /// Substitutes come from the one-sided tables, which stop at the fourth
    /// derivative. Above that order no substitute exists and edge indices
    /// report `BoundaryUnsolvable`; use `Extend` for those orders.
    #[default]
    OneSided,

    /// Keep the requested stencil and sample the function past the grid edge.
    Extend,

    /// No boundary handling; an overflowing window is an error.
    NoBoundary,
}

impl Display for BoundaryPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad(match self {
            BoundaryPolicy::OneSided => "one-sided",
            BoundaryPolicy::Extend => "extend",
            BoundaryPolicy::NoBoundary => "none",
        })
    }
}

/// Outcome of applying a boundary policy at one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryAction {
    /// The requested stencil fits; use it unchanged.
    Interior,

    /// The requested stencil overflows; sample beyond the edge.
    Extend,

    /// Use a one-sided stencil with the given truncation order instead.
    Substitute {
        /// Replacement method.
        method: Method,

        /// Truncation order of the replacement row.
        truncation_order: usize,
    },
}

// ============================================================================
// Boundary Decision
// ============================================================================

/// Check whether a `method` stencil of `len` samples at `index` stays inside `[first, last]`.
#[inline]
pub fn window_fits(method: Method, len: usize, index: usize, first: usize, last: usize) -> bool {
    let start = index as isize + method.first_offset(len);
    let end = start + len as isize - 1;
    start >= first as isize && end <= last as isize
}

/// Decide how to evaluate a `(method, d, t)` stencil at `index` under `policy`.
///
/// Fails with `BoundaryUnsolvable` if the window overflows and the policy
/// cannot produce a stencil that fits.
pub fn apply_boundary_policy(
    policy: BoundaryPolicy,
    method: Method,
    d: usize,
    t: usize,
    index: usize,
    first: usize,
    last: usize,
) -> Result<BoundaryAction, FindiffError> {
    let len = method.stencil_len(d, t);
    if window_fits(method, len, index, first, last) {
        return Ok(BoundaryAction::Interior);
    }

    let unsolvable = FindiffError::BoundaryUnsolvable {
        index,
        method,
        derivative_order: d,
    };

    match policy {
        BoundaryPolicy::NoBoundary => Err(unsolvable),
        BoundaryPolicy::Extend => Ok(BoundaryAction::Extend),
        BoundaryPolicy::OneSided => {
            let start = index as isize + method.first_offset(len);
            let substitute = if start < first as isize {
                Method::Forward
            } else {
                Method::Backward
            };

            let table = substitute.table();
            let highest = table.truncation_orders(d).filter(|&o| o <= t).max();

            // Prefer the requested order, then progressively shorter rows.
            let Some(top) = highest else {
                return Err(unsolvable);
            };
            (1..=top)
                .rev()
                .filter(|&o| table.covers(d, o))
                .find(|&o| {
                    let len = substitute.stencil_len(d, o);
                    window_fits(substitute, len, index, first, last)
                })
                .map(|o| BoundaryAction::Substitute {
                    method: substitute,
                    truncation_order: o,
                })
                .ok_or(unsolvable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_fit_respects_both_edges() {
        assert!(window_fits(Method::Central, 3, 1, 0, 9));
        assert!(!window_fits(Method::Central, 3, 0, 0, 9));
        assert!(!window_fits(Method::Central, 3, 9, 0, 9));
        assert!(window_fits(Method::Backward, 3, 2, 0, 9));
        assert!(!window_fits(Method::Forward, 3, 8, 0, 9));
    }
}
