//! High-level API for finite-difference differentiation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the differentiation parameters that ends in an engine
//! bound to a grid and a function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Every parameter and the grid are validated in `build`,
//!   before an engine exists.
//! * **Type-Safe**: The builder is not generic; the float, grid and function
//!   types are fixed by the `build` call.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DifferentiateBuilder`] via `Differentiate::new()`.
//! 2. Chain configuration methods (`.derivative_order()`, `.method()`, etc.).
//! 3. Call `.build(grid, f)` or `.build_default::<F, _, _>(grid)`.
//!
//! ### Defaults
//!
//! | Parameter        | Default                      |
//! |------------------|------------------------------|
//! | derivative order | 1                            |
//! | truncation order | 2                            |
//! | method           | [`Method::Central`]          |
//! | boundary policy  | [`BoundaryPolicy::OneSided`] |

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::DifferentiationEngine;
use crate::engine::validator::Validator;
use crate::primitives::function::RealFunction;
use crate::primitives::grid::GridLike;

// Publicly re-exported types
pub use crate::algorithms::stencil::{Route, Stencil};
pub use crate::engine::output::DerivativeResult;
pub use crate::math::boundary::BoundaryPolicy;
pub use crate::math::coefficients::{CoefficientRow, CoefficientTable, Method};
pub use crate::math::weights::finite_difference_weights;
pub use crate::primitives::errors::{ErrorKind, FindiffError};
pub use crate::primitives::grid::{ArrayGrid, UniformGrid};

/// Fluent builder for configuring a differentiation engine.
#[derive(Debug, Clone, Default)]
pub struct DifferentiateBuilder {
    /// Derivative order `D` (default: 1).
    pub derivative_order: Option<usize>,

    /// Truncation order `T` (default: 2).
    pub truncation_order: Option<usize>,

    /// Stencil family (default: Central).
    pub method: Option<Method>,

    /// Policy for stencils that leave the grid (default: OneSided).
    pub boundary_policy: Option<BoundaryPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl DifferentiateBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the derivative order.
    pub fn derivative_order(mut self, d: usize) -> Self {
        if self.derivative_order.is_some() {
            self.duplicate_param = Some("derivative_order");
        }
        self.derivative_order = Some(d);
        self
    }

    /// Set the truncation (accuracy) order.
    pub fn truncation_order(mut self, t: usize) -> Self {
        if self.truncation_order.is_some() {
            self.duplicate_param = Some("truncation_order");
        }
        self.truncation_order = Some(t);
        self
    }

    /// Set the stencil family.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the boundary handling policy.
    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        if self.boundary_policy.is_some() {
            self.duplicate_param = Some("boundary_policy");
        }
        self.boundary_policy = Some(policy);
        self
    }

    /// Build an engine that differentiates `function` over `grid`.
    pub fn build<T, G, F>(
        self,
        grid: G,
        function: F,
    ) -> Result<DifferentiationEngine<T, G, F>, FindiffError>
    where
        T: Float,
        G: GridLike<T>,
        F: RealFunction<T>,
    {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        DifferentiationEngine::from_parts(
            grid,
            function,
            self.derivative_order.unwrap_or(1),
            self.truncation_order.unwrap_or(2),
            self.method.unwrap_or_default(),
            self.boundary_policy.unwrap_or_default(),
        )
    }

    /// Build an engine over `grid` for a default-constructed function object.
    pub fn build_default<F, T, G>(
        self,
        grid: G,
    ) -> Result<DifferentiationEngine<T, G, F>, FindiffError>
    where
        T: Float,
        G: GridLike<T>,
        F: RealFunction<T> + Default,
    {
        self.build(grid, F::default())
    }
}
