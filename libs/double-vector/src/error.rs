//! # Error Types
//!
//! Vector arithmetic never fails: degenerate input propagates through
//! IEEE-754 `NaN`/`Infinity` instead. The only fallible surface is numeric
//! text conversion, which rejects specifiers it cannot honor.
//!
//! ## Error Policy
//!
//! - NO silent fallback to the default specifier when a caller supplied one
//! - Errors carry the offending specifier for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while converting vector components to text.
///
/// ## Example
///
/// ```rust
/// use double_vector::{FormatError, Vector2D};
///
/// match Vector2D::ONE.to_string_with(Some("Q"), None) {
///     Ok(text) => println!("{text}"),
///     Err(FormatError::InvalidSpecifier(spec)) => eprintln!("bad specifier {spec}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A letter-plus-digits specifier whose letter is not a known format.
    #[error("Unknown format specifier '{0}'")]
    InvalidSpecifier(String),

    /// The precision following the specifier letter is too large.
    #[error("Precision {precision} in '{specifier}' exceeds the maximum of {max}")]
    PrecisionOutOfRange {
        /// Specifier as supplied by the caller
        specifier: String,
        /// Parsed precision (saturated on overflow)
        precision: usize,
        /// Largest accepted precision
        max: usize,
    },

    /// `D` and `X` only apply to integral values.
    #[error("Format specifier '{0}' is only valid for integral types")]
    IntegerOnlySpecifier(char),

    /// Picture formats such as `"0.###"` are not implemented.
    #[error("Custom numeric format '{0}' is not supported")]
    CustomFormatUnsupported(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for text conversion.
pub type FormatResult<T> = Result<T, FormatError>;

// =============================================================================
// TESTS
// =============================================================================
