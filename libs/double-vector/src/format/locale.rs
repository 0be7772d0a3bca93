//! Locale conventions for numeric text.

use std::sync::OnceLock;

use config::constants::{DEFAULT_GROUP_SIZE, DEFAULT_NUMBER_DECIMAL_DIGITS};

/// Symbols and digit defaults used when writing numbers as text.
///
/// [`NumberLocale::invariant`] is the culture-neutral convention used when no
/// locale is supplied. Other conventions are derived from it with the
/// `with_*` builders.
///
/// # Examples
/// ```
/// use double_vector::NumberLocale;
///
/// let german = NumberLocale::invariant()
///     .clone()
///     .with_decimal_separator(",")
///     .with_group_separator(".");
/// assert_eq!(german.decimal_separator, ",");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    /// Separator between integral and fractional digits.
    pub decimal_separator: String,
    /// Separator inserted between digit groups by `N` and `P`.
    pub group_separator: String,
    /// Digits per group; `0` disables grouping.
    pub group_size: usize,
    /// Prefix for negative values, including negative zero.
    pub negative_sign: String,
    /// Suffix written by the `P` specifier.
    pub percent_symbol: String,
    /// Text for `NaN`.
    pub nan_symbol: String,
    /// Text for positive infinity.
    pub positive_infinity_symbol: String,
    /// Text for negative infinity.
    pub negative_infinity_symbol: String,
    /// Decimal digits for `F` and `N` without an explicit precision.
    pub number_decimal_digits: usize,
    /// Decimal digits for `P` without an explicit precision.
    pub percent_decimal_digits: usize,
}

static INVARIANT: OnceLock<NumberLocale> = OnceLock::new();

impl NumberLocale {
    /// Culture-neutral conventions: `.` decimal point, `,` groups of three,
    /// `NaN`, `Infinity` and `-Infinity`.
    ///
    /// # Examples
    /// ```
    /// use double_vector::NumberLocale;
    /// assert_eq!(NumberLocale::invariant().decimal_separator, ".");
    /// ```
    pub fn invariant() -> &'static NumberLocale {
        INVARIANT.get_or_init(|| NumberLocale {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_size: DEFAULT_GROUP_SIZE,
            negative_sign: "-".to_string(),
            percent_symbol: "%".to_string(),
            nan_symbol: "NaN".to_string(),
            positive_infinity_symbol: "Infinity".to_string(),
            negative_infinity_symbol: "-Infinity".to_string(),
            number_decimal_digits: DEFAULT_NUMBER_DECIMAL_DIGITS,
            percent_decimal_digits: DEFAULT_NUMBER_DECIMAL_DIGITS,
        })
    }

    /// Replaces the decimal separator.
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Replaces the group separator.
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Replaces the group size.
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Replaces the negative sign.
    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    /// Replaces the `NaN` and infinity symbols.
    pub fn with_special_symbols(
        mut self,
        nan: impl Into<String>,
        positive_infinity: impl Into<String>,
        negative_infinity: impl Into<String>,
    ) -> Self {
        self.nan_symbol = nan.into();
        self.positive_infinity_symbol = positive_infinity.into();
        self.negative_infinity_symbol = negative_infinity.into();
        self
    }

    /// Replaces the default decimal digits for `F`, `N` and `P`.
    pub fn with_decimal_digits(mut self, digits: usize) -> Self {
        self.number_decimal_digits = digits;
        self.percent_decimal_digits = digits;
        self
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::invariant().clone()
    }
}
