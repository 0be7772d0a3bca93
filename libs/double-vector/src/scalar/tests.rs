//! Tests for the scalar helpers.

use super::*;

#[test]
fn clamp01_bounds() {
    assert_eq!(clamp01(-1.0), 0.0);
    assert_eq!(clamp01(0.0), 0.0);
    assert_eq!(clamp01(1.0), 1.0);
    assert_eq!(clamp01(1.5), 1.0);
    assert_eq!(clamp01(f32::INFINITY), 1.0);
    assert_eq!(clamp01(f32::NEG_INFINITY), 0.0);
}

#[test]
fn clamp01_passes_nan_through() {
    assert!(clamp01(f32::NAN).is_nan());
}

#[test]
fn min_max_ordinary_values() {
    assert_eq!(min(-2.0, 4.0), -2.0);
    assert_eq!(min(4.0, -2.0), -2.0);
    assert_eq!(max(-2.0, 4.0), 4.0);
    assert_eq!(max(4.0, -2.0), 4.0);
    assert_eq!(min(f64::NEG_INFINITY, 0.0), f64::NEG_INFINITY);
    assert_eq!(max(f64::INFINITY, 0.0), f64::INFINITY);
}

/// NaN in either position propagates, unlike `f64::min`.
#[test]
fn min_max_propagate_nan() {
    assert!(min(f64::NAN, 1.0).is_nan());
    assert!(min(1.0, f64::NAN).is_nan());
    assert!(max(f64::NAN, 1.0).is_nan());
    assert!(max(1.0, f64::NAN).is_nan());
    assert!(!1.0f64.min(f64::NAN).is_nan());
}

#[test]
fn min_max_signed_zero() {
    assert!(min(0.0, -0.0).is_sign_negative());
    assert!(min(-0.0, 0.0).is_sign_negative());
    assert!(max(0.0, -0.0).is_sign_positive());
    assert!(max(-0.0, 0.0).is_sign_positive());
}

#[test]
fn canonical_bits_merges_zeros() {
    assert_eq!(canonical_bits(0.0), canonical_bits(-0.0));
    assert_ne!(canonical_bits(1.0), canonical_bits(-1.0));
    assert_eq!(canonical_bits(2.5), 2.5f64.to_bits());
}
