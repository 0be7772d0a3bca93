//! Parsing of standard numeric format specifiers.

use std::str::FromStr;

use config::constants::{DEFAULT_FORMAT_SPECIFIER, MAX_FORMAT_PRECISION};
use tracing::debug;

use crate::error::{FormatError, FormatResult};

/// Layout selected by the specifier letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// `F`: fixed-point.
    FixedPoint,
    /// `N`: fixed-point with group separators.
    Number,
    /// `E`: scientific with a three-digit exponent.
    Exponential,
    /// `G`: the more compact of fixed-point and scientific.
    General,
    /// `R`: shortest text that reads back to the same value.
    RoundTrip,
    /// `P`: value times 100 followed by the percent symbol.
    Percent,
}

/// A parsed specifier such as `"F2"` or `"e4"`.
///
/// # Examples
/// ```
/// use double_vector::format::{FormatKind, NumberFormat};
///
/// let spec: NumberFormat = "N3".parse().unwrap();
/// assert_eq!(spec.kind, FormatKind::Number);
/// assert_eq!(spec.precision, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Selected layout.
    pub kind: FormatKind,
    /// Digits requested after the letter, if any.
    pub precision: Option<usize>,
    /// Whether the specifier letter was uppercase (controls `E` vs `e`).
    pub uppercase: bool,
}

impl NumberFormat {
    /// Fixed-point with the given number of decimals.
    pub const fn fixed(decimals: usize) -> Self {
        Self {
            kind: FormatKind::FixedPoint,
            precision: Some(decimals),
            uppercase: true,
        }
    }

    /// Parses a specifier; an empty string selects the `"F2"` default.
    pub fn parse(specifier: &str) -> FormatResult<Self> {
        if specifier.is_empty() {
            return Self::parse(DEFAULT_FORMAT_SPECIFIER);
        }

        let mut chars = specifier.chars();
        let letter = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => c,
            _ => return Err(custom_format(specifier)),
        };
        let digits = chars.as_str();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(custom_format(specifier));
        }

        let kind = match letter.to_ascii_uppercase() {
            'F' => FormatKind::FixedPoint,
            'N' => FormatKind::Number,
            'E' => FormatKind::Exponential,
            'G' => FormatKind::General,
            'R' => FormatKind::RoundTrip,
            'P' => FormatKind::Percent,
            'D' | 'X' => {
                debug!(specifier, "integer-only format specifier used on a vector");
                return Err(FormatError::IntegerOnlySpecifier(letter));
            }
            _ => {
                debug!(specifier, "unknown format specifier");
                return Err(FormatError::InvalidSpecifier(specifier.to_string()));
            }
        };

        let precision = if digits.is_empty() {
            None
        } else {
            let value = digits.bytes().fold(0usize, |acc, b| {
                acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
            });
            if value > MAX_FORMAT_PRECISION {
                debug!(specifier, value, "format precision out of range");
                return Err(FormatError::PrecisionOutOfRange {
                    specifier: specifier.to_string(),
                    precision: value,
                    max: MAX_FORMAT_PRECISION,
                });
            }
            Some(value)
        };

        Ok(Self {
            kind,
            precision,
            uppercase: letter.is_ascii_uppercase(),
        })
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::fixed(config::constants::DEFAULT_NUMBER_DECIMAL_DIGITS)
    }
}

impl FromStr for NumberFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn custom_format(specifier: &str) -> FormatError {
    debug!(specifier, "custom numeric format rejected");
    FormatError::CustomFormatUnsupported(specifier.to_string())
}
