//! Reproducible grids and test functions for the findiff benchmarks.
//!
//! All generators take an explicit seed so repeated runs measure the same
//! inputs.

use findiff::prelude::{ArrayGrid, FindiffError};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};

// ============================================================================
// Test Functions
// ============================================================================

/// Smooth oscillation with a slow trend.
pub fn wave(x: f64) -> f64 {
    (3.0 * x).sin() + 0.1 * x * x
}

/// Exponentially damped oscillation, typical of measured signals.
pub fn damped(x: f64) -> f64 {
    (-0.3 * x).exp() * (2.0 * core::f64::consts::PI * x).cos()
}

/// Steep front that stresses high derivative orders.
pub fn front(x: f64) -> f64 {
    (10.0 * (x - 5.0)).tanh()
}

// ============================================================================
// Grid Generation with Reproducible RNG
// ============================================================================

/// Grid on `[0, 10]` whose interior nodes are jittered by up to `amount`
/// of the nominal spacing.
pub fn jittered_grid(size: usize, amount: f64, seed: u64) -> Result<ArrayGrid<f64>, FindiffError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let h = 10.0 / size as f64;
    let amount = amount.clamp(0.0, 0.45);
    let jitter = Uniform::new_inclusive(-amount, amount)
        .map_err(|e| FindiffError::InvalidGrid(e.to_string()))?;

    let points = (0..size)
        .map(|i| {
            let offset = if i == 0 || i + 1 == size {
                0.0
            } else {
                jitter.sample(&mut rng)
            };
            (i as f64 + offset) * h
        })
        .collect();
    ArrayGrid::new(points)
}

/// Grid on `[0, 10]` with gaps drawn from a log-normal distribution.
pub fn clustered_grid(size: usize, seed: u64) -> Result<ArrayGrid<f64>, FindiffError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let gaps = Normal::<f64>::new(0.0, 1.0).map_err(|e| FindiffError::InvalidGrid(e.to_string()))?;

    let mut x = 0.0;
    let mut points = Vec::with_capacity(size);
    for _ in 0..size {
        points.push(x);
        x += gaps.sample(&mut rng).exp();
    }

    let scale = 10.0 / x;
    ArrayGrid::new(points.into_iter().map(|p| p * scale).collect())
}
