//! Precomputed stencil coefficients for the three difference methods.
//!
//! ## Purpose
//!
//! This module holds the fast-path weight tables for central, forward and
//! backward differences, keyed by derivative order `D` and truncation order
//! `T`, and the [`Method`] selector that names each family.
//!
//! ## Design notes
//!
//! * **Constant data**: Tables are `static` rational constants rounded to
//!   `f64`; they need no initialization and are safe to share across threads.
//! * **Ordering**: Every row lists weights by ascending sample offset.
//!   Central rows span `-p..=p`, forward rows `0..L`, backward rows
//!   `-(L-1)..=0`, where `L` is the row length.
//! * **Coverage**: Each table covers a finite, method-specific set of
//!   `(D, T)` pairs; anything else goes to the general solver.
//!
//! ## Key concepts
//!
//! | Method   | Derivative orders | Truncation orders          |
//! |----------|-------------------|----------------------------|
//! | Central  | 1, 2              | 2, 4, 6, 8                 |
//! | Central  | 3, 4, 5, 6        | 2, 4, 6                    |
//! | Forward  | 1, 2, 3           | 1..=6                      |
//! | Forward  | 4                 | 1..=5                      |
//! | Backward | 1                 | 1..=3                      |
//! | Backward | 2, 3, 4           | 1, 2                       |
//!
//! ## Invariants
//!
//! * Row length is `2 * floor((D + 1) / 2) - 1 + T` (central) or `D + T`
//!   (forward, backward).
//! * The weights of every row sum to zero.
//!
//! ## Non-goals
//!
//! * Non-uniform spacing (handled by the weight solver).

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::FindiffError;

// ============================================================================
// Method
// ============================================================================

/// Stencil family used to approximate a derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Offsets symmetric around the evaluation point.
    #[default]
    Central,

    /// Offsets at and ahead of the evaluation point.
    Forward,

    /// Offsets at and behind the evaluation point.
    Backward,
}

/// Widest stencil an engine will build.
///
/// Weights of wider stencils lose all precision in floating point, and the
/// bound keeps `h^D` within `powi` range.
pub const MAX_STENCIL_LEN: usize = 64;

impl Method {
    /// Human-readable method name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Central => "central",
            Method::Forward => "forward",
            Method::Backward => "backward",
        }
    }

    /// Precomputed coefficient table for this method.
    pub fn table(&self) -> &'static CoefficientTable {
        match self {
            Method::Central => &CENTRAL,
            Method::Forward => &FORWARD,
            Method::Backward => &BACKWARD,
        }
    }

    /// Number of samples in a stencil for derivative order `d` and truncation order `t`.
    ///
    /// Saturates at `usize::MAX`; configurations are bounded by
    /// [`MAX_STENCIL_LEN`] before any stencil is built.
    #[inline]
    pub fn stencil_len(&self, d: usize, t: usize) -> usize {
        self.checked_stencil_len(d, t).unwrap_or(usize::MAX)
    }

    /// Number of samples, or `None` if it does not fit in a `usize`.
    pub fn checked_stencil_len(&self, d: usize, t: usize) -> Option<usize> {
        match self {
            Method::Central => d.div_ceil(2).checked_mul(2)?.checked_sub(1)?.checked_add(t),
            Method::Forward | Method::Backward => d.checked_add(t),
        }
    }

    /// Offset of the first (leftmost) sample of a stencil with `len` samples.
    #[inline]
    pub fn first_offset(&self, len: usize) -> isize {
        let len = len as isize;
        match self {
            Method::Central => -(len - 1) / 2,
            Method::Forward => 0,
            Method::Backward => -(len - 1),
        }
    }

    /// Whether `t` is admissible as a truncation order for this method.
    #[inline]
    pub fn accepts_truncation(&self, t: usize) -> bool {
        match self {
            Method::Central => t % 2 == 0,
            Method::Forward | Method::Backward => true,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad(self.name())
    }
}

// ============================================================================
// Coefficient Row
// ============================================================================

/// Tabulated weights for one `(method, D, T)` triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientRow {
    /// Stencil family.
    pub method: Method,

    /// Derivative order.
    pub derivative_order: usize,

    /// Truncation order.
    pub truncation_order: usize,

    /// Weights by ascending sample offset, for unit spacing.
    pub weights: &'static [f64],
}

impl CoefficientRow {
    /// Number of weights.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the row is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sample offsets matching `weights`, in the same order.
    pub fn offsets(&self) -> impl Iterator<Item = isize> {
        let start = self.method.first_offset(self.len());
        (0..self.len() as isize).map(move |k| start + k)
    }
}

// ============================================================================
// Coefficient Table
// ============================================================================

// Rows for one derivative order: (truncation order, weights).
type OrderRows = &'static [(usize, &'static [f64])];

/// Immutable weight table for one stencil family.
#[derive(Debug)]
pub struct CoefficientTable {
    method: Method,

    // rows[d - 1] holds the rows for derivative order d.
    rows: &'static [OrderRows],
}

impl CoefficientTable {
    /// Stencil family this table serves.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Highest derivative order with at least one row.
    pub fn max_derivative_order(&self) -> usize {
        self.rows.len()
    }

    /// Look up the row for `(d, t)`, if tabulated.
    pub fn get(&self, d: usize, t: usize) -> Option<CoefficientRow> {
        let rows = self.rows.get(d.checked_sub(1)?)?;
        rows.iter()
            .find(|(order, _)| *order == t)
            .map(|&(_, weights)| CoefficientRow {
                method: self.method,
                derivative_order: d,
                truncation_order: t,
                weights,
            })
    }

    /// Look up the row for `(d, t)`, failing if the pair is not covered.
    pub fn row(&self, d: usize, t: usize) -> Result<CoefficientRow, FindiffError> {
        self.get(d, t).ok_or(FindiffError::UncoveredRow {
            method: self.method,
            derivative_order: d,
            truncation_order: t,
        })
    }

    /// Check if `(d, t)` is tabulated.
    #[inline]
    pub fn covers(&self, d: usize, t: usize) -> bool {
        self.get(d, t).is_some()
    }

    /// Tabulated truncation orders for derivative order `d`, ascending.
    pub fn truncation_orders(&self, d: usize) -> impl Iterator<Item = usize> + '_ {
        d.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .into_iter()
            .flat_map(|rows| rows.iter().map(|(t, _)| *t))
    }

    /// Every tabulated row, ordered by derivative then truncation order.
    pub fn rows(&self) -> impl Iterator<Item = CoefficientRow> + '_ {
        self.rows.iter().enumerate().flat_map(move |(i, rows)| {
            rows.iter().map(move |&(t, weights)| CoefficientRow {
                method: self.method,
                derivative_order: i + 1,
                truncation_order: t,
                weights,
            })
        })
    }
}

// ============================================================================
// Central Differences
// ============================================================================

/// Central-difference weights.
pub static CENTRAL: CoefficientTable = CoefficientTable {
    method: Method::Central,
    rows: &[
        // First derivative
        &[
            (2, &[-1.0 / 2.0, 0.0, 1.0 / 2.0]),
            (4, &[1.0 / 12.0, -2.0 / 3.0, 0.0, 2.0 / 3.0, -1.0 / 12.0]),
            (
                6,
                &[
                    -1.0 / 60.0,
                    3.0 / 20.0,
                    -3.0 / 4.0,
                    0.0,
                    3.0 / 4.0,
                    -3.0 / 20.0,
                    1.0 / 60.0,
                ],
            ),
            (
                8,
                &[
                    1.0 / 280.0,
                    -4.0 / 105.0,
                    1.0 / 5.0,
                    -4.0 / 5.0,
                    0.0,
                    4.0 / 5.0,
                    -1.0 / 5.0,
                    4.0 / 105.0,
                    -1.0 / 280.0,
                ],
            ),
        ],
        // Second derivative
        &[
            (2, &[1.0, -2.0, 1.0]),
            (4, &[-1.0 / 12.0, 4.0 / 3.0, -5.0 / 2.0, 4.0 / 3.0, -1.0 / 12.0]),
            (
                6,
                &[
                    1.0 / 90.0,
                    -3.0 / 20.0,
                    3.0 / 2.0,
                    -49.0 / 18.0,
                    3.0 / 2.0,
                    -3.0 / 20.0,
                    1.0 / 90.0,
                ],
            ),
            (
                8,
                &[
                    -1.0 / 560.0,
                    8.0 / 315.0,
                    -1.0 / 5.0,
                    8.0 / 5.0,
                    -205.0 / 72.0,
                    8.0 / 5.0,
                    -1.0 / 5.0,
                    8.0 / 315.0,
                    -1.0 / 560.0,
                ],
            ),
        ],
        // Third derivative
        &[
            (2, &[-1.0 / 2.0, 1.0, 0.0, -1.0, 1.0 / 2.0]),
            (
                4,
                &[
                    1.0 / 8.0,
                    -1.0,
                    13.0 / 8.0,
                    0.0,
                    -13.0 / 8.0,
                    1.0,
                    -1.0 / 8.0,
                ],
            ),
            (
                6,
                &[
                    -7.0 / 240.0,
                    3.0 / 10.0,
                    -169.0 / 120.0,
                    61.0 / 30.0,
                    0.0,
                    -61.0 / 30.0,
                    169.0 / 120.0,
                    -3.0 / 10.0,
                    7.0 / 240.0,
                ],
            ),
        ],
        // Fourth derivative
        &[
            (2, &[1.0, -4.0, 6.0, -4.0, 1.0]),
            (
                4,
                &[
                    -1.0 / 6.0,
                    2.0,
                    -13.0 / 2.0,
                    28.0 / 3.0,
                    -13.0 / 2.0,
                    2.0,
                    -1.0 / 6.0,
                ],
            ),
            (
                6,
                &[
                    7.0 / 240.0,
                    -2.0 / 5.0,
                    169.0 / 60.0,
                    -122.0 / 15.0,
                    91.0 / 8.0,
                    -122.0 / 15.0,
                    169.0 / 60.0,
                    -2.0 / 5.0,
                    7.0 / 240.0,
                ],
            ),
        ],
        // Fifth derivative
        &[
            (2, &[-1.0 / 2.0, 2.0, -5.0 / 2.0, 0.0, 5.0 / 2.0, -2.0, 1.0 / 2.0]),
            (
                4,
                &[
                    1.0 / 6.0,
                    -3.0 / 2.0,
                    13.0 / 3.0,
                    -29.0 / 6.0,
                    0.0,
                    29.0 / 6.0,
                    -13.0 / 3.0,
                    3.0 / 2.0,
                    -1.0 / 6.0,
                ],
            ),
            (
                6,
                &[
                    -13.0 / 288.0,
                    19.0 / 36.0,
                    -87.0 / 32.0,
                    13.0 / 2.0,
                    -323.0 / 48.0,
                    0.0,
                    323.0 / 48.0,
                    -13.0 / 2.0,
                    87.0 / 32.0,
                    -19.0 / 36.0,
                    13.0 / 288.0,
                ],
            ),
        ],
        // Sixth derivative
        &[
            (2, &[1.0, -6.0, 15.0, -20.0, 15.0, -6.0, 1.0]),
            (
                4,
                &[
                    -1.0 / 4.0,
                    3.0,
                    -13.0,
                    29.0,
                    -75.0 / 2.0,
                    29.0,
                    -13.0,
                    3.0,
                    -1.0 / 4.0,
                ],
            ),
            (
                6,
                &[
                    13.0 / 240.0,
                    -19.0 / 24.0,
                    87.0 / 16.0,
                    -39.0 / 2.0,
                    323.0 / 8.0,
                    -1023.0 / 20.0,
                    323.0 / 8.0,
                    -39.0 / 2.0,
                    87.0 / 16.0,
                    -19.0 / 24.0,
                    13.0 / 240.0,
                ],
            ),
        ],
    ],
};

// ============================================================================
// Forward Differences
// ============================================================================

/// Forward-difference weights.
pub static FORWARD: CoefficientTable = CoefficientTable {
    method: Method::Forward,
    rows: &[
        // First derivative
        &[
            (1, &[-1.0, 1.0]),
            (2, &[-3.0 / 2.0, 2.0, -1.0 / 2.0]),
            (3, &[-11.0 / 6.0, 3.0, -3.0 / 2.0, 1.0 / 3.0]),
            (4, &[-25.0 / 12.0, 4.0, -3.0, 4.0 / 3.0, -1.0 / 4.0]),
            (5, &[-137.0 / 60.0, 5.0, -5.0, 10.0 / 3.0, -5.0 / 4.0, 1.0 / 5.0]),
            (
                6,
                &[
                    -49.0 / 20.0,
                    6.0,
                    -15.0 / 2.0,
                    20.0 / 3.0,
                    -15.0 / 4.0,
                    6.0 / 5.0,
                    -1.0 / 6.0,
                ],
            ),
        ],
        // Second derivative
        &[
            (1, &[1.0, -2.0, 1.0]),
            (2, &[2.0, -5.0, 4.0, -1.0]),
            (3, &[35.0 / 12.0, -26.0 / 3.0, 19.0 / 2.0, -14.0 / 3.0, 11.0 / 12.0]),
            (
                4,
                &[
                    15.0 / 4.0,
                    -77.0 / 6.0,
                    107.0 / 6.0,
                    -13.0,
                    61.0 / 12.0,
                    -5.0 / 6.0,
                ],
            ),
            (
                5,
                &[
                    203.0 / 45.0,
                    -87.0 / 5.0,
                    117.0 / 4.0,
                    -254.0 / 9.0,
                    33.0 / 2.0,
                    -27.0 / 5.0,
                    137.0 / 180.0,
                ],
            ),
            (
                6,
                &[
                    469.0 / 90.0,
                    -223.0 / 10.0,
                    879.0 / 20.0,
                    -949.0 / 18.0,
                    41.0,
                    -201.0 / 10.0,
                    1019.0 / 180.0,
                    -7.0 / 10.0,
                ],
            ),
        ],
        // Third derivative
        &[
            (1, &[-1.0, 3.0, -3.0, 1.0]),
            (2, &[-5.0 / 2.0, 9.0, -12.0, 7.0, -3.0 / 2.0]),
            (
                3,
                &[
                    -17.0 / 4.0,
                    71.0 / 4.0,
                    -59.0 / 2.0,
                    49.0 / 2.0,
                    -41.0 / 4.0,
                    7.0 / 4.0,
                ],
            ),
            (
                4,
                &[
                    -49.0 / 8.0,
                    29.0,
                    -461.0 / 8.0,
                    62.0,
                    -307.0 / 8.0,
                    13.0,
                    -15.0 / 8.0,
                ],
            ),
            (
                5,
                &[
                    -967.0 / 120.0,
                    638.0 / 15.0,
                    -3929.0 / 40.0,
                    389.0 / 3.0,
                    -2545.0 / 24.0,
                    268.0 / 5.0,
                    -1849.0 / 120.0,
                    29.0 / 15.0,
                ],
            ),
            (
                6,
                &[
                    -801.0 / 80.0,
                    349.0 / 6.0,
                    -18353.0 / 120.0,
                    2391.0 / 10.0,
                    -1457.0 / 6.0,
                    4891.0 / 30.0,
                    -561.0 / 8.0,
                    527.0 / 30.0,
                    -469.0 / 240.0,
                ],
            ),
        ],
        // Fourth derivative
        &[
            (1, &[1.0, -4.0, 6.0, -4.0, 1.0]),
            (2, &[3.0, -14.0, 26.0, -24.0, 11.0, -2.0]),
            (
                3,
                &[
                    35.0 / 6.0,
                    -31.0,
                    137.0 / 2.0,
                    -242.0 / 3.0,
                    107.0 / 2.0,
                    -19.0,
                    17.0 / 6.0,
                ],
            ),
            (
                4,
                &[
                    28.0 / 3.0,
                    -111.0 / 2.0,
                    142.0,
                    -1219.0 / 6.0,
                    176.0,
                    -185.0 / 2.0,
                    82.0 / 3.0,
                    -7.0 / 2.0,
                ],
            ),
            (
                5,
                &[
                    1069.0 / 80.0,
                    -1316.0 / 15.0,
                    15289.0 / 60.0,
                    -2144.0 / 5.0,
                    10993.0 / 24.0,
                    -4772.0 / 15.0,
                    2803.0 / 20.0,
                    -536.0 / 15.0,
                    967.0 / 240.0,
                ],
            ),
        ],
    ],
};

// ============================================================================
// Backward Differences
// ============================================================================

/// Backward-difference weights.
pub static BACKWARD: CoefficientTable = CoefficientTable {
    method: Method::Backward,
    rows: &[
        // First derivative
        &[
            (1, &[-1.0, 1.0]),
            (2, &[1.0 / 2.0, -2.0, 3.0 / 2.0]),
            (3, &[-1.0 / 3.0, 3.0 / 2.0, -3.0, 11.0 / 6.0]),
        ],
        // Second derivative
        &[(1, &[1.0, -2.0, 1.0]), (2, &[-1.0, 4.0, -5.0, 2.0])],
        // Third derivative
        &[
            (1, &[-1.0, 3.0, -3.0, 1.0]),
            (2, &[3.0 / 2.0, -7.0, 12.0, -9.0, 5.0 / 2.0]),
        ],
        // Fourth derivative
        &[
            (1, &[1.0, -4.0, 6.0, -4.0, 1.0]),
            (2, &[-2.0, 11.0, -24.0, 26.0, -14.0, 3.0]),
        ],
    ],
};
