//! Execution engine for single-point differentiation.
//!
//! ## Purpose
//!
//! This module provides [`DifferentiationEngine`], which owns a grid and a
//! function and evaluates the derivative of the function at grid indices.
//! For each index it applies the boundary policy, resolves a stencil through
//! the selector, samples the function at the stencil offsets and returns the
//! normalized weighted sum.
//!
//! ## Design notes
//!
//! * **Resolve once**: The interior stencil of a uniform grid is resolved at
//!   construction and cached; per-call work is sampling and a dot product.
//! * **Ownership**: Grid and function are moved in and never mutated, so a
//!   shared engine can be read from many threads.
//! * **Sample positions**: On uniform grids samples sit at `x_i + o * h`. On
//!   non-uniform grids they are the grid nodes themselves, extrapolated with
//!   the edge spacing when the `Extend` policy reaches past the grid.
//! * **Errors are local**: A failed call leaves the engine usable.
//!
//! ## Invariants
//!
//! * Configuration (orders, method, grid) is validated before an engine exists.
//! * `step` is `x[first + 1] - x[first]` and is only used on uniform grids.
//!
//! ## Non-goals
//!
//! * This module does not iterate over ranges (handled by `range`).
//! * This module does not provide public-facing result formatting.
//! * This module does not handle parallel execution directly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::borrow::Cow;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::selector::StencilSelector;
use crate::algorithms::stencil::{Route, Stencil};
use crate::engine::validator::Validator;
use crate::math::boundary::{BoundaryAction, BoundaryPolicy, apply_boundary_policy};
use crate::math::coefficients::Method;
use crate::primitives::errors::FindiffError;
use crate::primitives::function::RealFunction;
use crate::primitives::grid::GridLike;
use crate::primitives::numeric::from_isize;

// ============================================================================
// Differentiation Engine
// ============================================================================

/// Finite-difference derivative of a function sampled on a grid.
#[derive(Debug, Clone)]
pub struct DifferentiationEngine<T, G, F> {
    grid: G,
    function: F,
    derivative_order: usize,
    truncation_order: usize,
    method: Method,
    policy: BoundaryPolicy,
    step: T,
    uniform: bool,

    // Cached interior stencil; only set on uniform grids.
    interior: Option<Stencil<T>>,
}

impl<T, G, F> DifferentiationEngine<T, G, F>
where
    T: Float,
    G: GridLike<T>,
    F: RealFunction<T>,
{
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an engine over `grid` with a default-constructed function.
    pub fn new(grid: G, d: usize, t: usize, method: Method) -> Result<Self, FindiffError>
    where
        F: Default,
    {
        Self::with_function(grid, F::default(), d, t, method)
    }

    /// Create an engine over `grid` for an explicit `function`.
    pub fn with_function(
        grid: G,
        function: F,
        d: usize,
        t: usize,
        method: Method,
    ) -> Result<Self, FindiffError> {
        Self::from_parts(grid, function, d, t, method, BoundaryPolicy::default())
    }

    /// Create an engine with every parameter given explicitly.
    pub fn from_parts(
        grid: G,
        function: F,
        d: usize,
        t: usize,
        method: Method,
        policy: BoundaryPolicy,
    ) -> Result<Self, FindiffError> {
        Validator::validate_orders(method, d, t)?;
        Validator::validate_grid(&grid)?;

        let step = grid.spacing();
        let uniform = grid.is_uniform();

        let interior = if uniform {
            let stencil = StencilSelector::resolve_uniform(method, d, t, step)?;
            tracing::debug!(
                target: "findiff",
                method = %method,
                derivative_order = d,
                truncation_order = t,
                route = %stencil.route,
                width = stencil.len(),
                "resolved interior stencil"
            );
            Some(stencil)
        } else {
            tracing::debug!(
                target: "findiff",
                method = %method,
                derivative_order = d,
                truncation_order = t,
                "non-uniform grid, stencils solved per point"
            );
            None
        };

        Ok(Self {
            grid,
            function,
            derivative_order: d,
            truncation_order: t,
            method,
            policy,
            step,
            uniform,
            interior,
        })
    }

    /// Replace the boundary policy.
    pub fn with_boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build an engine for different orders over copies of this grid and function.
    pub fn with_orders(&self, d: usize, t: usize) -> Result<Self, FindiffError>
    where
        G: Clone,
        F: Clone,
    {
        Self::from_parts(
            self.grid.clone(),
            self.function.clone(),
            d,
            t,
            self.method,
            self.policy,
        )
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Derivative at `index`, failing if `index` is outside `[first, last]`.
    pub fn at(&self, index: usize) -> Result<T, FindiffError> {
        Validator::validate_index(index, self.grid.first(), self.grid.last())?;
        self.at_unchecked(index)
    }

    /// Derivative at `index` without bounds checking.
    ///
    /// The result for an invalid index is unspecified, and grids backed by
    /// storage may panic. Boundary and solver failures are still reported.
    pub fn at_unchecked(&self, index: usize) -> Result<T, FindiffError> {
        let stencil = self.resolve(index)?;
        Ok(self.apply(index, &stencil))
    }

    /// Derivative at `index` together with the method actually applied.
    ///
    /// The method differs from [`method`](Self::method) exactly where the
    /// boundary policy substituted a one-sided stencil. Bounds are not checked.
    pub fn evaluate_unchecked(&self, index: usize) -> Result<(T, Method), FindiffError> {
        let stencil = self.resolve(index)?;
        Ok((self.apply(index, &stencil), stencil.method))
    }

    /// Stencil used at `index`, after boundary handling.
    pub fn stencil_at(&self, index: usize) -> Result<Stencil<T>, FindiffError> {
        Validator::validate_index(index, self.grid.first(), self.grid.last())?;
        self.resolve(index).map(Cow::into_owned)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Route of the interior stencil.
    ///
    /// Non-uniform grids always use the solver.
    pub fn route(&self) -> Route {
        self.interior
            .as_ref()
            .map_or(Route::Solver, |stencil| stencil.route)
    }

    /// The grid.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// The function.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Derivative order.
    pub fn derivative_order(&self) -> usize {
        self.derivative_order
    }

    /// Requested truncation order.
    pub fn truncation_order(&self) -> usize {
        self.truncation_order
    }

    /// Requested method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Boundary policy.
    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Grid step, `x[first + 1] - x[first]`.
    pub fn step(&self) -> T {
        self.step
    }

    /// Whether the grid reported itself uniform at construction.
    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    // ========================================================================
    // Internals
    // ========================================================================

    // Boundary decision plus stencil resolution for one index.
    fn resolve(&self, index: usize) -> Result<Cow<'_, Stencil<T>>, FindiffError> {
        let (d, t) = (self.derivative_order, self.truncation_order);
        let action = apply_boundary_policy(
            self.policy,
            self.method,
            d,
            t,
            index,
            self.grid.first(),
            self.grid.last(),
        )?;

        let (method, t) = match action {
            BoundaryAction::Interior | BoundaryAction::Extend => (self.method, t),
            BoundaryAction::Substitute {
                method,
                truncation_order,
            } => {
                tracing::trace!(
                    target: "findiff",
                    index,
                    requested = %self.method,
                    substitute = %method,
                    truncation_order,
                    "boundary substitution"
                );
                (method, truncation_order)
            }
        };

        if let Some(interior) = &self.interior {
            if method == interior.method && t == interior.truncation_order {
                return Ok(Cow::Borrowed(interior));
            }
        }

        if self.uniform {
            return StencilSelector::resolve_uniform(method, d, t, self.step).map(Cow::Owned);
        }

        let offsets = StencilSelector::offsets(method, d, t);
        let positions: Vec<T> = offsets.iter().map(|&o| self.position(index, o)).collect();
        tracing::trace!(
            target: "findiff",
            index,
            method = %method,
            width = positions.len(),
            "solving weights on non-uniform grid"
        );
        StencilSelector::resolve_positions(method, d, t, self.grid.at_unchecked(index), &positions)
            .map(Cow::Owned)
    }

    // Weighted sum of function samples for a resolved stencil.
    fn apply(&self, index: usize, stencil: &Stencil<T>) -> T {
        stencil.apply(
            stencil
                .offsets
                .iter()
                .map(|&o| self.function.eval(self.position(index, o))),
        )
    }

    // Abscissa sampled at `offset` from `index`.
    fn position(&self, index: usize, offset: isize) -> T {
        if self.uniform {
            return self.grid.at_unchecked(index) + from_isize::<T>(offset) * self.step;
        }

        let first = self.grid.first() as isize;
        let last = self.grid.last() as isize;
        let j = index as isize + offset;

        if j < first {
            let x0 = self.grid.at_unchecked(first as usize);
            let h = self.grid.at_unchecked(first as usize + 1) - x0;
            x0 - from_isize::<T>(first - j) * h
        } else if j > last {
            let xn = self.grid.at_unchecked(last as usize);
            let h = xn - self.grid.at_unchecked(last as usize - 1);
            xn + from_isize::<T>(j - last) * h
        } else {
            self.grid.at_unchecked(j as usize)
        }
    }
}
