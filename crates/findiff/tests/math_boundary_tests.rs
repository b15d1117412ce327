#![cfg(feature = "dev")]
//! Tests for the boundary policy.
//!
//! These tests verify the decision taken when a stencil's window would leave
//! the grid:
//! - Interior points keep the requested stencil
//! - One-sided substitution at each edge, with truncation fallback
//! - `Extend` and `NoBoundary` behavior
//!
//! ## Test Organization
//!
//! 1. **Interior** - No action needed
//! 2. **One-sided Substitution** - Method and truncation order chosen
//! 3. **Other Policies** - Extend, NoBoundary

use findiff::internals::math::boundary::{
    BoundaryAction, BoundaryPolicy, apply_boundary_policy, window_fits,
};
use findiff::internals::math::coefficients::Method;
use findiff::internals::primitives::errors::{ErrorKind, FindiffError};

const FIRST: usize = 0;
const LAST: usize = 9;

fn one_sided(method: Method, d: usize, t: usize, index: usize) -> BoundaryAction {
    apply_boundary_policy(BoundaryPolicy::OneSided, method, d, t, index, FIRST, LAST).unwrap()
}

// ============================================================================
// Interior Tests
// ============================================================================

/// Test that a fitting window is left alone under every policy.
#[test]
fn test_interior_is_untouched() {
    for policy in [
        BoundaryPolicy::OneSided,
        BoundaryPolicy::Extend,
        BoundaryPolicy::NoBoundary,
    ] {
        let action =
            apply_boundary_policy(policy, Method::Central, 1, 2, 5, FIRST, LAST).unwrap();
        assert_eq!(action, BoundaryAction::Interior);
    }

    // Forward stencil at the left edge fits
    assert_eq!(one_sided(Method::Forward, 1, 2, 0), BoundaryAction::Interior);
    // Backward stencil at the right edge fits
    assert_eq!(one_sided(Method::Backward, 1, 2, 9), BoundaryAction::Interior);
}

/// Test the window check at both edges.
#[test]
fn test_window_fits() {
    assert!(window_fits(Method::Central, 5, 2, FIRST, LAST));
    assert!(!window_fits(Method::Central, 5, 1, FIRST, LAST));
    assert!(window_fits(Method::Central, 5, 7, FIRST, LAST));
    assert!(!window_fits(Method::Central, 5, 8, FIRST, LAST));
    assert!(window_fits(Method::Forward, 10, 0, FIRST, LAST));
    assert!(!window_fits(Method::Forward, 11, 0, FIRST, LAST));
}

// ============================================================================
// One-sided Substitution Tests
// ============================================================================

/// Test forward substitution at the left edge, keeping the truncation order.
#[test]
fn test_left_edge_uses_forward() {
    let expected = BoundaryAction::Substitute {
        method: Method::Forward,
        truncation_order: 2,
    };
    assert_eq!(one_sided(Method::Central, 1, 2, 0), expected);

    // T = 4 central needs two points on each side
    let expected = BoundaryAction::Substitute {
        method: Method::Forward,
        truncation_order: 4,
    };
    assert_eq!(one_sided(Method::Central, 1, 4, 1), expected);
}

/// Test backward substitution at the right edge, keeping the truncation order.
#[test]
fn test_right_edge_uses_backward() {
    let expected = BoundaryAction::Substitute {
        method: Method::Backward,
        truncation_order: 2,
    };
    assert_eq!(one_sided(Method::Central, 1, 2, 9), expected);

    // A forward stencil running off the right edge switches to backward
    let expected = BoundaryAction::Substitute {
        method: Method::Backward,
        truncation_order: 1,
    };
    assert_eq!(one_sided(Method::Forward, 1, 1, 9), expected);
}

/// Test truncation fallback to the largest covered order.
///
/// Forward rows for D = 1 stop at T = 6; backward rows for D = 2 stop at T = 2.
#[test]
fn test_truncation_falls_back_to_largest_covered() {
    assert_eq!(
        one_sided(Method::Central, 1, 8, 0),
        BoundaryAction::Substitute {
            method: Method::Forward,
            truncation_order: 6,
        }
    );
    assert_eq!(
        one_sided(Method::Central, 2, 4, 9),
        BoundaryAction::Substitute {
            method: Method::Backward,
            truncation_order: 2,
        }
    );
    assert_eq!(
        one_sided(Method::Central, 1, 6, 8),
        BoundaryAction::Substitute {
            method: Method::Backward,
            truncation_order: 3,
        }
    );
}

/// Test that short grids lower the truncation order until the window fits.
#[test]
fn test_short_grid_lowers_truncation() {
    // Three points: forward T = 4 (5 points) and T = 3 (4 points) do not fit
    let action =
        apply_boundary_policy(BoundaryPolicy::OneSided, Method::Central, 1, 4, 0, 0, 2).unwrap();
    assert_eq!(
        action,
        BoundaryAction::Substitute {
            method: Method::Forward,
            truncation_order: 2,
        }
    );
}

/// Test that a derivative order with no one-sided rows is unsolvable.
#[test]
fn test_missing_one_sided_rows_is_unsolvable() {
    let err = apply_boundary_policy(BoundaryPolicy::OneSided, Method::Central, 5, 2, 0, FIRST, LAST)
        .unwrap_err();
    assert_eq!(
        err,
        FindiffError::BoundaryUnsolvable {
            index: 0,
            method: Method::Central,
            derivative_order: 5,
        }
    );
    assert_eq!(err.kind(), ErrorKind::BoundaryUnsolvable);
}

/// Test that a grid too short for any one-sided row is unsolvable.
#[test]
fn test_grid_too_short_is_unsolvable() {
    // Second derivative needs at least 3 points
    let result = apply_boundary_policy(BoundaryPolicy::OneSided, Method::Central, 2, 2, 0, 0, 1);
    assert!(matches!(
        result,
        Err(FindiffError::BoundaryUnsolvable { index: 0, .. })
    ));
}

// ============================================================================
// Other Policy Tests
// ============================================================================

/// Test that `Extend` keeps the requested stencil.
#[test]
fn test_extend_policy() {
    let action =
        apply_boundary_policy(BoundaryPolicy::Extend, Method::Central, 1, 2, 0, FIRST, LAST)
            .unwrap();
    assert_eq!(action, BoundaryAction::Extend);
}

/// Test that `NoBoundary` reports overflowing windows.
#[test]
fn test_no_boundary_policy() {
    let result =
        apply_boundary_policy(BoundaryPolicy::NoBoundary, Method::Central, 1, 2, 9, FIRST, LAST);
    assert!(matches!(
        result,
        Err(FindiffError::BoundaryUnsolvable { index: 9, .. })
    ));
}

/// Test the default policy and display names.
#[test]
fn test_policy_defaults() {
    assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::OneSided);
    assert_eq!(BoundaryPolicy::OneSided.to_string(), "one-sided");
    assert_eq!(BoundaryPolicy::Extend.to_string(), "extend");
}
