//! Output types for whole-grid differentiation.
//!
//! ## Purpose
//!
//! This module defines [`DerivativeResult`], which pairs every grid abscissa
//! with its derivative estimate and records how the estimates were produced.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for a human-readable table.
//!
//! ## Invariants
//!
//! * `x` and `values` have the same length and are in grid order.
//! * `boundary_substitutions <= values.len()`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::stencil::Route;
use crate::math::boundary::BoundaryPolicy;
use crate::math::coefficients::Method;

// ============================================================================
// Result Structure
// ============================================================================

/// Derivative estimates over a whole grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeResult<T> {
    /// Grid abscissas.
    pub x: Vec<T>,

    /// Derivative estimate at each abscissa.
    pub values: Vec<T>,

    /// Derivative order.
    pub derivative_order: usize,

    /// Requested truncation order.
    pub truncation_order: usize,

    /// Requested method.
    pub method: Method,

    /// Boundary policy in effect.
    pub boundary_policy: BoundaryPolicy,

    /// Route of the interior stencil.
    pub route: Route,

    /// Number of points served by a substituted one-sided stencil.
    pub boundary_substitutions: usize,
}

impl<T: Float> DerivativeResult<T> {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the result holds no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(x, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.values.iter().copied())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for DerivativeResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:      {}", self.len())?;
        writeln!(f, "  Derivative order: {}", self.derivative_order)?;
        writeln!(f, "  Truncation order: {}", self.truncation_order)?;
        writeln!(f, "  Method:           {}", self.method)?;
        writeln!(f, "  Route:            {}", self.route)?;
        writeln!(
            f,
            "  Boundary:         {} ({} substituted)",
            self.boundary_policy, self.boundary_substitutions
        )?;
        writeln!(f)?;

        writeln!(f, "Derivative:")?;
        writeln!(f, "{:>10} {:>14}", "X", "D")?;
        writeln!(f, "{:-<25}", "")?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>10.4} {:>14.6}", self.x[idx], self.values[idx])?;
        }

        Ok(())
    }
}
