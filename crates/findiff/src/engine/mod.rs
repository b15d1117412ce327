//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates differentiation: it validates configuration,
//! applies the boundary policy, resolves stencils through the algorithms
//! layer, samples the function and evaluates single points or whole ranges.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-point differentiation engine.
pub mod executor;

/// Range and whole-grid evaluation.
pub mod range;

/// Validation utilities.
pub mod validator;

/// Output types for whole-grid evaluation.
pub mod output;
