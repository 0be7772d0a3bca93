//! Centralized configuration values shared across the vector workspace.
//!
//! Each public item documents its purpose and, where useful, a minimal usage
//! example so that downstream crates can stay declarative.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for vector equality and the normalization guard.
///
/// Two vectors compare equal when their squared distance is below
/// `K_EPSILON * K_EPSILON`. A vector whose magnitude does not exceed this
/// value normalizes to zero.
///
/// # Examples
/// ```
/// use config::constants::K_EPSILON;
/// assert_eq!(K_EPSILON, 1e-14);
/// ```
pub const K_EPSILON: f64 = 1e-14;

/// Finer tolerance reserved for squared-length comparisons near zero.
///
/// # Examples
/// ```
/// use config::constants::{K_EPSILON, K_EPSILON_NORMAL_SQRT};
/// assert!(K_EPSILON_NORMAL_SQRT < K_EPSILON);
/// ```
pub const K_EPSILON_NORMAL_SQRT: f64 = 1e-30;

// =============================================================================
// FORMATTING CONSTANTS
// =============================================================================

/// Specifier used when a caller formats a vector without choosing one.
///
/// Fixed-point with two decimals, so the origin prints as `(0.00, 0.00)`.
pub const DEFAULT_FORMAT_SPECIFIER: &str = "F2";

/// Decimal digits used by `F`, `N` and `P` when no precision is given.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_NUMBER_DECIMAL_DIGITS;
/// assert_eq!(DEFAULT_NUMBER_DECIMAL_DIGITS, 2);
/// ```
pub const DEFAULT_NUMBER_DECIMAL_DIGITS: usize = 2;

/// Mantissa digits after the point for `E` when no precision is given.
pub const DEFAULT_EXPONENT_DIGITS: usize = 6;

/// Minimum number of exponent digits written by the `E` specifier.
pub const EXPONENT_MIN_WIDTH: usize = 3;

/// Minimum number of exponent digits written by the `G` and `R` specifiers.
pub const GENERAL_EXPONENT_MIN_WIDTH: usize = 2;

/// Largest precision accepted after a specifier letter.
///
/// # Examples
/// ```
/// use config::constants::MAX_FORMAT_PRECISION;
/// assert!(MAX_FORMAT_PRECISION >= 17);
/// ```
pub const MAX_FORMAT_PRECISION: usize = 99;

/// Decimal exponent at which shortest round-trip output switches to
/// scientific notation.
pub const GENERAL_SHORTEST_EXPONENT_LIMIT: i32 = 15;

/// Decimal exponents at or below this value are written in scientific
/// notation by `G` and `R`.
pub const GENERAL_MIN_EXPONENT: i32 = -5;

/// Significant digits needed to write any finite `f64` exactly.
///
/// Rounding works on the exact decimal expansion, so halfway cases are
/// detected without the error of an intermediate shorter rendering.
pub const MAX_EXACT_SIGNIFICANT_DIGITS: usize = 767;

/// Digits per group for the `N` and `P` specifiers.
pub const DEFAULT_GROUP_SIZE: usize = 3;
