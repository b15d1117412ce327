//! Layer 3: Algorithms
//!
//! This layer turns a differentiation request into a concrete stencil. It
//! decides between the coefficient tables and the weight solver, but leaves
//! sampling and boundary handling to the engine layer.

// Resolved stencils and their route.
pub mod stencil;

// Fast-path eligibility and stencil resolution.
pub mod selector;
