//! Grid collaborators for one-dimensional differentiation.
//!
//! ## Purpose
//!
//! This module defines the [`GridLike`] contract the engine consumes and two
//! concrete grids: [`UniformGrid`] (arithmetic abscissas) and [`ArrayGrid`]
//! (explicit, possibly non-uniform abscissas).
//!
//! ## Design notes
//!
//! * **Contract**: Checked and unchecked indexed access, range queries,
//!   a uniformity flag and the first/last valid index.
//! * **Ownership**: Engines take grids by value, so a grid is never shared
//!   mutably with the caller after construction.
//! * **Lazy points**: `UniformGrid` computes abscissas on demand.
//!
//! ## Invariants
//!
//! * Valid indices form the inclusive span `[first(), last()]`.
//! * `ArrayGrid` points are finite and strictly increasing.
//!
//! ## Non-goals
//!
//! * Multi-dimensional grids.
//! * Grid refinement or resampling.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FindiffError;
use crate::primitives::numeric::from_usize;

// ============================================================================
// Grid Contract
// ============================================================================

/// Ordered abscissas with random access.
pub trait GridLike<T: Float> {
    /// First valid index.
    fn first(&self) -> usize;

    /// Number of points in the grid.
    fn len(&self) -> usize;

    /// Whether consecutive points are equally spaced.
    fn is_uniform(&self) -> bool;

    /// Point at `index` without bounds checking.
    ///
    /// The result for an index outside `[first(), last()]` is unspecified
    /// and implementations backed by storage may panic.
    fn at_unchecked(&self, index: usize) -> T;

    /// Last valid index (inclusive).
    #[inline]
    fn last(&self) -> usize {
        (self.first() + self.len()).saturating_sub(1)
    }

    /// Check if the grid has no points.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Point at `index`, failing if it lies outside `[first(), last()]`.
    fn at(&self, index: usize) -> Result<T, FindiffError> {
        if self.is_empty() || index < self.first() || index > self.last() {
            return Err(FindiffError::IndexOutOfRange {
                index,
                first: self.first(),
                last: self.last(),
            });
        }
        Ok(self.at_unchecked(index))
    }

    /// Points for the half-open index range `[from, to)`.
    fn at_range(&self, from: usize, to: usize) -> Result<Vec<T>, FindiffError> {
        if from > to || from < self.first() || to > self.first() + self.len() {
            return Err(FindiffError::InvalidRange {
                from,
                to,
                first: self.first(),
                last: self.last(),
            });
        }
        Ok((from..to).map(|i| self.at_unchecked(i)).collect())
    }

    /// All points of the grid.
    fn data(&self) -> Vec<T> {
        let first = self.first();
        (first..first + self.len())
            .map(|i| self.at_unchecked(i))
            .collect()
    }

    /// Distance between the first two points.
    ///
    /// On a uniform grid this is the step size everywhere.
    #[inline]
    fn spacing(&self) -> T {
        let first = self.first();
        self.at_unchecked(first + 1) - self.at_unchecked(first)
    }
}

// ============================================================================
// Uniform Grid
// ============================================================================

/// Equally spaced grid of `n` points starting at `from`.
///
/// `UniformGrid::new(from, to, n)` divides `[from, to)` into `n` cells and
/// places one point at the left edge of each, so `to` itself is not a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid<T> {
    from: T,
    to: T,
    step: T,
    n: usize,
}

impl<T: Float> UniformGrid<T> {
    /// Create a grid of `n` points spaced `(to - from) / n` apart.
    pub fn new(from: T, to: T, n: usize) -> Self {
        let step = (to - from) / from_usize::<T>(n);
        Self { from, to, step, n }
    }

    /// Create a grid of `n` points spaced `step` apart.
    pub fn from_step(from: T, step: T, n: usize) -> Self {
        let to = from + step * from_usize::<T>(n);
        Self { from, to, step, n }
    }

    /// First point of the grid.
    pub fn start(&self) -> T {
        self.from
    }

    /// Right end of the covered interval (excluded).
    pub fn end(&self) -> T {
        self.to
    }

    /// Distance between consecutive points.
    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: Float> GridLike<T> for UniformGrid<T> {
    #[inline]
    fn first(&self) -> usize {
        0
    }

    #[inline]
    fn len(&self) -> usize {
        self.n
    }

    #[inline]
    fn is_uniform(&self) -> bool {
        true
    }

    #[inline]
    fn at_unchecked(&self, index: usize) -> T {
        self.from + from_usize::<T>(index) * self.step
    }

    #[inline]
    fn spacing(&self) -> T {
        self.step
    }
}

impl<T: Float + Display> Display for UniformGrid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "UniformGrid:")?;
        writeln!(f, "  From:   {}", self.from)?;
        writeln!(f, "  To:     {}", self.to)?;
        writeln!(f, "  Points: {}", self.n)?;
        write!(f, " ")?;
        for i in 0..self.n {
            write!(f, " {}", self.at_unchecked(i))?;
        }
        writeln!(f)
    }
}

// ============================================================================
// Array Grid
// ============================================================================

/// Grid over explicit, strictly increasing abscissas.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayGrid<T> {
    points: Vec<T>,
    uniform: bool,
}

impl<T: Float> ArrayGrid<T> {
    /// Create a grid from explicit points, detecting uniform spacing.
    ///
    /// Spacings that agree with the first one to within `sqrt(eps)` relative
    /// error mark the grid as uniform.
    pub fn new(points: Vec<T>) -> Result<Self, FindiffError> {
        check_points(&points)?;
        let uniform = detect_uniform(&points);
        Ok(Self { points, uniform })
    }

    /// Create a grid from explicit points with a caller-supplied uniformity flag.
    pub fn with_uniform_flag(points: Vec<T>, uniform: bool) -> Result<Self, FindiffError> {
        check_points(&points)?;
        Ok(Self { points, uniform })
    }

    /// Create a grid by copying points from a slice.
    pub fn from_slice(points: &[T]) -> Result<Self, FindiffError> {
        Self::new(points.to_vec())
    }

    /// Borrow the abscissas.
    pub fn points(&self) -> &[T] {
        &self.points
    }
}

impl<T: Float> GridLike<T> for ArrayGrid<T> {
    #[inline]
    fn first(&self) -> usize {
        0
    }

    #[inline]
    fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn is_uniform(&self) -> bool {
        self.uniform
    }

    #[inline]
    fn at_unchecked(&self, index: usize) -> T {
        self.points[index]
    }

    fn data(&self) -> Vec<T> {
        self.points.clone()
    }
}

// Points must be finite and strictly increasing; at least two are needed for a step.
fn check_points<T: Float>(points: &[T]) -> Result<(), FindiffError> {
    if points.len() < 2 {
        return Err(FindiffError::TooFewPoints {
            got: points.len(),
            min: 2,
        });
    }

    for (i, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(FindiffError::InvalidNumericValue(format!(
                "points[{}]={}",
                i,
                p.to_f64().unwrap_or(f64::NAN)
            )));
        }
    }

    if let Some(i) = points.windows(2).position(|w| w[1] <= w[0]) {
        return Err(FindiffError::InvalidGrid(format!(
            "points must be strictly increasing (points[{}] >= points[{}])",
            i,
            i + 1
        )));
    }

    Ok(())
}

fn detect_uniform<T: Float>(points: &[T]) -> bool {
    let h0 = points[1] - points[0];
    let tol = T::epsilon().sqrt() * h0.abs();
    points
        .windows(2)
        .all(|w| ((w[1] - w[0]) - h0).abs() <= tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_grid_excludes_upper_bound() {
        let grid = UniformGrid::new(0.0_f64, 10.0, 10);
        assert_eq!(grid.len(), 10);
        assert_eq!(grid.last(), 9);
        assert_eq!(grid.at_unchecked(9), 9.0);
        assert_eq!(grid.spacing(), 1.0);
    }

    #[test]
    fn uniform_grid_checked_access() {
        let grid = UniformGrid::new(0.0_f64, 1.0, 4);
        assert_eq!(grid.at(2), Ok(0.5));
        assert!(matches!(
            grid.at(4),
            Err(FindiffError::IndexOutOfRange { index: 4, first: 0, last: 3 })
        ));
    }

    #[test]
    fn uniform_grid_range_and_data() {
        let grid = UniformGrid::from_step(1.0_f64, 0.5, 5);
        assert_eq!(grid.at_range(1, 3).unwrap(), vec![1.5, 2.0]);
        assert_eq!(grid.at_range(2, 2).unwrap(), Vec::<f64>::new());
        assert!(grid.at_range(3, 2).is_err());
        assert!(grid.at_range(0, 6).is_err());
        assert_eq!(grid.data(), vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn array_grid_detects_uniformity() {
        let uniform = ArrayGrid::new(vec![0.0_f64, 0.25, 0.5, 0.75]).unwrap();
        assert!(uniform.is_uniform());

        let stretched = ArrayGrid::new(vec![0.0_f64, 0.1, 0.3, 0.7]).unwrap();
        assert!(!stretched.is_uniform());

        let forced = ArrayGrid::with_uniform_flag(vec![0.0_f64, 0.25, 0.5], false).unwrap();
        assert!(!forced.is_uniform());
    }

    #[test]
    fn array_grid_from_slice_copies_points() {
        let raw = [0.0_f64, 0.5, 1.5, 3.0];
        let grid = ArrayGrid::from_slice(&raw).unwrap();
        assert_eq!(grid.points(), &raw);
        assert_eq!(grid, ArrayGrid::new(raw.to_vec()).unwrap());
        assert!(!grid.is_uniform());

        assert!(ArrayGrid::from_slice(&[0.0_f64, 0.1, 0.2]).unwrap().is_uniform());
        assert!(matches!(
            ArrayGrid::from_slice(&[2.0_f64, 1.0]),
            Err(FindiffError::InvalidGrid(_))
        ));
    }

    #[test]
    fn array_grid_rejects_bad_points() {
        assert!(matches!(
            ArrayGrid::new(vec![1.0_f64]),
            Err(FindiffError::TooFewPoints { got: 1, min: 2 })
        ));
        assert!(matches!(
            ArrayGrid::new(vec![0.0_f64, f64::NAN]),
            Err(FindiffError::InvalidNumericValue(_))
        ));
        assert!(matches!(
            ArrayGrid::new(vec![0.0_f64, 1.0, 1.0]),
            Err(FindiffError::InvalidGrid(_))
        ));
    }
}
