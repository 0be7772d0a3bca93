//! Scalar helpers shared by both vector types.
//!
//! These reproduce the single-precision clamp and the NaN-propagating
//! min/max that vector call sites written against `f32` math expect.

/// Clamps a single-precision value to `[0, 1]`.
///
/// `NaN` passes through unchanged because neither comparison holds.
///
/// # Examples
/// ```
/// use double_vector::scalar::clamp01;
/// assert_eq!(clamp01(-0.5), 0.0);
/// assert_eq!(clamp01(0.25), 0.25);
/// assert_eq!(clamp01(7.0), 1.0);
/// ```
pub fn clamp01(value: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// Smaller of two values; `NaN` if either is `NaN`.
///
/// Unlike [`f64::min`], a `NaN` operand is never discarded, and `-0.0` is
/// considered smaller than `+0.0`.
///
/// # Examples
/// ```
/// use double_vector::scalar::min;
/// assert_eq!(min(1.0, 3.0), 1.0);
/// assert!(min(f64::NAN, 3.0).is_nan());
/// assert!(min(0.0, -0.0).is_sign_negative());
/// ```
pub fn min(a: f64, b: f64) -> f64 {
    if a != b {
        if a.is_nan() || a < b {
            a
        } else {
            b
        }
    } else if a.is_sign_negative() {
        a
    } else {
        b
    }
}

/// Larger of two values; `NaN` if either is `NaN`.
///
/// `+0.0` is considered larger than `-0.0`.
///
/// # Examples
/// ```
/// use double_vector::scalar::max;
/// assert_eq!(max(1.0, 3.0), 3.0);
/// assert!(max(1.0, f64::NAN).is_nan());
/// assert!(max(-0.0, 0.0).is_sign_positive());
/// ```
pub fn max(a: f64, b: f64) -> f64 {
    if a != b {
        if a.is_nan() || b < a {
            a
        } else {
            b
        }
    } else if b.is_sign_negative() {
        a
    } else {
        b
    }
}

/// Bit pattern used for hashing a component.
///
/// Both zeros map to the same bits so that exactly-equal components hash
/// identically.
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests;
