//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks of differentiation:
//! - The method selector and the precomputed coefficient tables
//! - The general finite-difference weight solver
//! - The boundary policy deciding how edge points are served
//!
//! These are pure functions and constant data with no engine state.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Method selector and coefficient tables.
pub mod coefficients;

/// General weight solver for arbitrary sample positions.
pub mod weights;

/// Boundary policy for stencils near the grid edges.
pub mod boundary;
