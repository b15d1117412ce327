//! Parallel execution engine for finite-difference evaluation.
//!
//! ## Purpose
//!
//! This module evaluates a `findiff` engine over many grid indices at once,
//! spreading the indices across CPU cores. Every index is independent, so
//! the work is a plain data-parallel map followed by an ordered collect.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` indexed iterators, so results come back in
//!   grid order regardless of scheduling.
//! * **Shared engine**: The engine is only borrowed; its cached interior
//!   stencil is read concurrently without copies.
//! * **Granularity**: Each task handles at least [`MIN_POINTS_PER_TASK`]
//!   indices, since a single stencil application is only a few flops.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Unchecked inner loop**: Ranges are validated once by the caller; each
//!   index then goes through the engine's unchecked single-point path.
//! * **First error wins**: Collecting into `Result` stops at an error, and
//!   the error reported is one produced by a failing index.
//!
//! ## Invariants
//!
//! * Output position `k` holds the derivative at `from + k`.
//! * Values are bit-identical to the sequential evaluation.
//!
//! ## Non-goals
//!
//! * This module does not validate ranges (handled by `api`).
//! * This module does not configure the rayon thread pool.

// External dependencies
use num_traits::Float;
use rayon::prelude::*;

// Export dependencies from findiff crate
use findiff::prelude::{DifferentiationEngine, FindiffError, GridLike, Method, RealFunction};

/// Smallest number of indices handed to one rayon task.
pub const MIN_POINTS_PER_TASK: usize = 64;

// ============================================================================
// Parallel Evaluation Functions
// ============================================================================

/// Derivatives at every index of `[from, to)`, computed in parallel.
pub fn par_values<T, G, F>(
    engine: &DifferentiationEngine<T, G, F>,
    from: usize,
    to: usize,
) -> Result<Vec<T>, FindiffError>
where
    T: Float + Send + Sync,
    G: GridLike<T> + Sync,
    F: RealFunction<T> + Sync,
{
    tracing::debug!(
        target: "fastFindiff",
        from,
        to,
        threads = rayon::current_num_threads(),
        "parallel range evaluation"
    );

    (from..to)
        .into_par_iter()
        .with_min_len(MIN_POINTS_PER_TASK)
        .map(|i| engine.at_unchecked(i))
        .collect()
}

/// Derivatives at every index of `[from, to)` plus the number of indices
/// served by a substituted boundary stencil.
pub fn par_values_with_substitutions<T, G, F>(
    engine: &DifferentiationEngine<T, G, F>,
    from: usize,
    to: usize,
) -> Result<(Vec<T>, usize), FindiffError>
where
    T: Float + Send + Sync,
    G: GridLike<T> + Sync,
    F: RealFunction<T> + Sync,
{
    let requested = engine.method();

    let points: Vec<(T, Method)> = (from..to)
        .into_par_iter()
        .with_min_len(MIN_POINTS_PER_TASK)
        .map(|i| engine.evaluate_unchecked(i))
        .collect::<Result<_, _>>()?;

    let substitutions = points.iter().filter(|(_, m)| *m != requested).count();
    let values = points.into_iter().map(|(v, _)| v).collect();

    tracing::debug!(
        target: "fastFindiff",
        points = to - from,
        substitutions,
        "parallel whole-grid evaluation"
    );

    Ok((values, substitutions))
}
