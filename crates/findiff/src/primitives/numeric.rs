//! Numeric conversions shared across layers.
//!
//! Integer-to-float casts cannot fail for `f32`/`f64`; a custom `Float`
//! that rejects a value yields NaN, which downstream finiteness checks catch.

// External dependencies
use num_traits::Float;

/// Convert an index or count to the working float type.
#[inline]
pub fn from_usize<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Convert a signed stencil offset to the working float type.
#[inline]
pub fn from_isize<T: Float>(n: isize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Convert a tabulated `f64` weight to the working float type.
#[inline]
pub fn from_f64<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}
