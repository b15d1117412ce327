//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for finite-difference
//! evaluation. It distributes grid indices across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
