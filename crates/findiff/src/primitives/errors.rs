//! Error types for finite-difference operations.
//!
//! ## Purpose
//!
//! This module defines every error condition the differentiation engine can
//! report: configuration mistakes caught before an engine exists, index
//! access outside the grid, boundary windows that cannot be served, and
//! failures of the general weight solver.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (orders, indices, bounds).
//! * **Taxonomy**: [`FindiffError::kind`] groups variants into four families.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration**: Invalid orders, odd central truncation, bad grids, duplicate builder parameters.
//! 2. **Out of range**: Checked index or range access outside `[first, last]`.
//! 3. **Boundary**: No one-sided stencil can serve a point near the grid edge.
//! 4. **Fallback**: The weight solver cannot produce weights for the given nodes.
//!
//! ## Invariants
//!
//! * Every failed call leaves the engine untouched and usable.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::math::coefficients::Method;

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`FindiffError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid static parameters; fatal for the configuration that produced it.
    Configuration,

    /// Checked access outside the grid's valid index span.
    OutOfRange,

    /// No one-sided stencil is available near a grid edge.
    BoundaryUnsolvable,

    /// The general weight solver could not produce a solution.
    FallbackUnavailable,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for finite-difference operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FindiffError {
    /// Derivative order must be at least 1.
    InvalidDerivativeOrder(usize),

    /// Truncation order must be at least 1.
    InvalidTruncationOrder(usize),

    /// Central stencils are symmetric and need an even truncation order.
    OddCentralTruncation(usize),

    /// The requested row is not stored in the method's coefficient table.
    UncoveredRow {
        /// Stencil family of the table.
        method: Method,
        /// Requested derivative order.
        derivative_order: usize,
        /// Requested truncation order.
        truncation_order: usize,
    },

    /// The `(D, T)` pair needs more samples than any engine builds.
    StencilTooWide {
        /// Stencil family.
        method: Method,
        /// Requested derivative order.
        derivative_order: usize,
        /// Requested truncation order.
        truncation_order: usize,
        /// Largest accepted stencil length.
        max: usize,
    },

    /// The grid does not satisfy the grid contract.
    InvalidGrid(String),

    /// The grid has fewer points than the engine needs.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// A grid abscissa or solver node is NaN or infinite.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Checked access to an index outside `[first, last]`.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// First valid index.
        first: usize,
        /// Last valid index (inclusive).
        last: usize,
    },

    /// A half-open range `[from, to)` that is reversed or leaves the grid.
    InvalidRange {
        /// Range start.
        from: usize,
        /// Range end (exclusive).
        to: usize,
        /// First valid index.
        first: usize,
        /// Last valid index (inclusive).
        last: usize,
    },

    /// No stencil fits the grid at this index under the active boundary policy.
    BoundaryUnsolvable {
        /// Index being evaluated.
        index: usize,
        /// Method that was requested at this index.
        method: Method,
        /// Requested derivative order.
        derivative_order: usize,
    },

    /// The weight solver cannot produce weights for the given nodes.
    FallbackUnavailable(String),
}

impl FindiffError {
    /// Classify this error into one of the four error families.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDerivativeOrder(_)
            | Self::InvalidTruncationOrder(_)
            | Self::OddCentralTruncation(_)
            | Self::UncoveredRow { .. }
            | Self::StencilTooWide { .. }
            | Self::InvalidGrid(_)
            | Self::TooFewPoints { .. }
            | Self::InvalidNumericValue(_)
            | Self::DuplicateParameter { .. } => ErrorKind::Configuration,
            Self::IndexOutOfRange { .. } | Self::InvalidRange { .. } => ErrorKind::OutOfRange,
            Self::BoundaryUnsolvable { .. } => ErrorKind::BoundaryUnsolvable,
            Self::FallbackUnavailable(_) => ErrorKind::FallbackUnavailable,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FindiffError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDerivativeOrder(d) => {
                write!(f, "Invalid derivative order: {d} (must be >= 1)")
            }
            Self::InvalidTruncationOrder(t) => {
                write!(f, "Invalid truncation order: {t} (must be >= 1)")
            }
            Self::OddCentralTruncation(t) => {
                write!(
                    f,
                    "Invalid truncation order: {t} (central differences need an even order)"
                )
            }
            Self::UncoveredRow {
                method,
                derivative_order,
                truncation_order,
            } => {
                write!(
                    f,
                    "No {method} coefficients for derivative order {derivative_order}, truncation order {truncation_order}"
                )
            }
            Self::StencilTooWide {
                method,
                derivative_order,
                truncation_order,
                max,
            } => {
                write!(
                    f,
                    "Stencil too wide: {method} derivative order {derivative_order} with truncation order {truncation_order} needs more than {max} samples"
                )
            }
            Self::InvalidGrid(msg) => write!(f, "Invalid grid: {msg}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::IndexOutOfRange { index, first, last } => {
                write!(f, "Index out of range: {index} (valid indices are {first}..={last})")
            }
            Self::InvalidRange {
                from,
                to,
                first,
                last,
            } => {
                write!(
                    f,
                    "Invalid range: {from}..{to} (must satisfy {first} <= from <= to <= {})",
                    last + 1
                )
            }
            Self::BoundaryUnsolvable {
                index,
                method,
                derivative_order,
            } => {
                write!(
                    f,
                    "No stencil fits at index {index} for {method} derivative of order {derivative_order}"
                )
            }
            Self::FallbackUnavailable(msg) => write!(f, "Weight solver failed: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FindiffError {}
