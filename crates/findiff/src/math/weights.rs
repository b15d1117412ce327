//! General finite-difference weight solver.
//!
//! ## Purpose
//!
//! This module computes weights for an arbitrary derivative order over an
//! arbitrary set of distinct sample positions. It is used whenever no
//! precomputed row applies: non-uniform grids, uncovered `(D, T)` pairs and
//! boundary substitutions with no matching table entry.
//!
//! ## Design notes
//!
//! * **Recurrence**: Fornberg's algorithm builds the weights for all
//!   derivative orders `0..=D` in one sweep over the nodes, using
//!   `O(n * D)` storage and `O(n^2 * D)` work.
//! * **Scaling**: Weights are returned for the physical positions given, so
//!   no further division by a step size is needed.
//! * **Validation**: Non-finite positions and duplicate nodes are rejected
//!   up front; the recurrence divides by node differences.
//!
//! ## Invariants
//!
//! * With `n >= D + 1` distinct nodes, the weights reproduce the `D`-th
//!   derivative of every polynomial of degree `< n` exactly (up to rounding).
//! * The weights for `D >= 1` sum to zero.
//!
//! ## Non-goals
//!
//! * Least-squares or overdetermined weight fitting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FindiffError;
use crate::primitives::numeric::from_usize;

// ============================================================================
// Weight Solver
// ============================================================================

/// Weights approximating the `derivative_order`-th derivative at `x0` from samples at `nodes`.
///
/// The returned vector has one weight per node, in the order given. Nodes
/// need not be sorted or contain `x0`, but must be finite and distinct, and
/// there must be at least `derivative_order + 1` of them.
pub fn finite_difference_weights<T: Float>(
    x0: T,
    nodes: &[T],
    derivative_order: usize,
) -> Result<Vec<T>, FindiffError> {
    let n = nodes.len();
    let m = derivative_order;

    if n < m + 1 {
        return Err(FindiffError::FallbackUnavailable(format!(
            "{} nodes cannot resolve a derivative of order {}",
            n, m
        )));
    }
    if !x0.is_finite() || nodes.iter().any(|x| !x.is_finite()) {
        return Err(FindiffError::FallbackUnavailable(
            "sample positions must be finite".into(),
        ));
    }
    for i in 1..n {
        if nodes[..i].iter().any(|&x| x == nodes[i]) {
            return Err(FindiffError::FallbackUnavailable(format!(
                "duplicate sample position at node {}",
                i
            )));
        }
    }

    // c[j][k]: weight of node j for derivative order k.
    let mut c = vec![vec![T::zero(); m + 1]; n];
    c[0][0] = T::one();

    let mut c1 = T::one();
    let mut c4 = nodes[0] - x0;

    for i in 1..n {
        let mn = i.min(m);
        let mut c2 = T::one();
        let c5 = c4;
        c4 = nodes[i] - x0;

        for j in 0..i {
            let c3 = nodes[i] - nodes[j];
            c2 = c2 * c3;

            if j == i - 1 {
                for k in (1..=mn).rev() {
                    let kf = from_usize::<T>(k);
                    c[i][k] = c1 * (kf * c[i - 1][k - 1] - c5 * c[i - 1][k]) / c2;
                }
                c[i][0] = -c1 * c5 * c[i - 1][0] / c2;
            }

            for k in (1..=mn).rev() {
                let kf = from_usize::<T>(k);
                c[j][k] = (c4 * c[j][k] - kf * c[j][k - 1]) / c3;
            }
            c[j][0] = c4 * c[j][0] / c3;
        }

        c1 = c2;
    }

    let weights: Vec<T> = c.into_iter().map(|row| row[m]).collect();
    if weights.iter().any(|w| !w.is_finite()) {
        return Err(FindiffError::FallbackUnavailable(
            "weight recurrence produced a non-finite value".into(),
        ));
    }

    Ok(weights)
}
