//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the collaborator contracts (grid and function), the
//! shared error type and small numeric helpers used throughout the crate.
//! It only depends on the method tag from the math layer, used in error
//! context.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Grid contract and concrete grids.
pub mod grid;

/// Function contract.
pub mod function;

/// Numeric conversion helpers.
pub mod numeric;
