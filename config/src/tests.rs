//! # Tests for Config Constants
//!
//! Sanity checks across constant categories.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_tiny() {
    assert!(K_EPSILON < 1e-10, "K_EPSILON must stay below single precision noise");
}

// =============================================================================
// FORMATTING TESTS
// =============================================================================

#[test]
fn test_default_specifier_is_fixed_point() {
    assert!(DEFAULT_FORMAT_SPECIFIER.starts_with('F'));
}

#[test]
fn test_exponent_widths() {
    assert!(EXPONENT_MIN_WIDTH >= GENERAL_EXPONENT_MIN_WIDTH);
}

#[test]
fn test_general_thresholds() {
    assert!(GENERAL_MIN_EXPONENT < 0);
    assert!(GENERAL_SHORTEST_EXPONENT_LIMIT > 0);
    assert!((GENERAL_SHORTEST_EXPONENT_LIMIT as usize) <= MAX_FORMAT_PRECISION);
}

#[test]
fn test_group_size_is_positive() {
    assert!(DEFAULT_GROUP_SIZE > 0);
}
