//! Function collaborator for differentiation.
//!
//! The engine samples a pure function of one real argument. Any closure or
//! function pointer `Fn(T) -> T` satisfies the contract through a blanket
//! impl; named function objects implement [`RealFunction`] directly, and
//! those that also implement `Default` can be built by the engine itself.

// External dependencies
use num_traits::Float;

/// A side-effect-free map from one real input to one real output.
pub trait RealFunction<T: Float> {
    /// Evaluate the function at `x`.
    fn eval(&self, x: T) -> T;
}

impl<T, F> RealFunction<T> for F
where
    T: Float,
    F: Fn(T) -> T,
{
    #[inline]
    fn eval(&self, x: T) -> T {
        self(x)
    }
}
