//! Numeric text conversion for vector components.
//!
//! Components are written with standard numeric format specifiers
//! ([`NumberFormat`]) under a [`NumberLocale`]. Vectors join their
//! components as `"(x, y)"` or `"(x, y, z)"`; the list separator is always
//! `", "` regardless of locale.
//!
//! Digits come from the exact decimal expansion of each value and are
//! rounded half away from zero, so `0.125` under `"F2"` is `"0.13"`.
//! Negative values, including negative zero and values that round to zero,
//! keep their sign: `-0.001` under `"F2"` is `"-0.00"`.

mod locale;
mod specifier;

pub use locale::NumberLocale;
pub use specifier::{FormatKind, NumberFormat};

use config::constants::{
    DEFAULT_EXPONENT_DIGITS, EXPONENT_MIN_WIDTH, GENERAL_EXPONENT_MIN_WIDTH,
    GENERAL_MIN_EXPONENT, GENERAL_SHORTEST_EXPONENT_LIMIT, MAX_EXACT_SIGNIFICANT_DIGITS,
};

use crate::error::FormatResult;

/// Writes a single value with the given specifier and locale.
///
/// # Examples
/// ```
/// use double_vector::format::{format_f64, NumberFormat, NumberLocale};
///
/// let spec = NumberFormat::parse("E2").unwrap();
/// assert_eq!(format_f64(1234.5, &spec, NumberLocale::invariant()), "1.23E+003");
/// ```
pub fn format_f64(value: f64, format: &NumberFormat, locale: &NumberLocale) -> String {
    if value.is_nan() {
        return locale.nan_symbol.clone();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            locale.positive_infinity_symbol.clone()
        } else {
            locale.negative_infinity_symbol.clone()
        };
    }

    let magnitude = value.abs();
    let body = match format.kind {
        FormatKind::FixedPoint => fixed(
            magnitude,
            format.precision.unwrap_or(locale.number_decimal_digits),
            false,
            locale,
        ),
        FormatKind::Number => fixed(
            magnitude,
            format.precision.unwrap_or(locale.number_decimal_digits),
            true,
            locale,
        ),
        FormatKind::Exponential => exponential(
            magnitude,
            format.precision.unwrap_or(DEFAULT_EXPONENT_DIGITS),
            format.uppercase,
            locale,
        ),
        FormatKind::General => general(magnitude, format.precision, format.uppercase, locale),
        FormatKind::RoundTrip => general(magnitude, None, format.uppercase, locale),
        FormatKind::Percent => {
            let digits = fixed(
                magnitude * 100.0,
                format.precision.unwrap_or(locale.percent_decimal_digits),
                true,
                locale,
            );
            format!("{digits} {}", locale.percent_symbol)
        }
    };

    if value.is_sign_negative() {
        format!("{}{body}", locale.negative_sign)
    } else {
        body
    }
}

/// Parses `format` (default `"F2"`) and joins `components` as a tuple.
///
/// `None` or an empty specifier selects the default; `None` locale selects
/// [`NumberLocale::invariant`].
pub(crate) fn format_components(
    components: &[f64],
    format: Option<&str>,
    locale: Option<&NumberLocale>,
) -> FormatResult<String> {
    let spec = NumberFormat::parse(format.unwrap_or_default())?;
    let locale = locale.unwrap_or(NumberLocale::invariant());
    Ok(join_components(components, &spec, locale))
}

/// Joins already-validated components as `"(a, b, ...)"`.
pub(crate) fn join_components(
    components: &[f64],
    format: &NumberFormat,
    locale: &NumberLocale,
) -> String {
    let parts: Vec<String> = components
        .iter()
        .map(|&c| format_f64(c, format, locale))
        .collect();
    format!("({})", parts.join(", "))
}

fn fixed(magnitude: f64, decimals: usize, grouped: bool, locale: &NumberLocale) -> String {
    let (digits, exponent) = exact_digits(magnitude);
    let keep = (i64::from(exponent) + 1).saturating_add(as_position(decimals));
    let (digits, exponent) = round_half_away(digits, exponent, keep);

    let integral: String = if exponent < 0 {
        "0".to_string()
    } else {
        (0..=i64::from(exponent))
            .map(|i| digit_at(&digits, i))
            .collect()
    };
    let mut out = if grouped {
        group_digits(&integral, locale)
    } else {
        integral
    };
    if decimals > 0 {
        out.push_str(&locale.decimal_separator);
        let first = i64::from(exponent);
        out.extend((1..=as_position(decimals)).map(|i| digit_at(&digits, first + i)));
    }
    out
}

fn group_digits(integral: &str, locale: &NumberLocale) -> String {
    let size = locale.group_size;
    if size == 0 || integral.len() <= size {
        return integral.to_string();
    }

    let mut out = String::with_capacity(integral.len() + integral.len() / size);
    let lead = integral.len() % size;
    for (i, ch) in integral.chars().enumerate() {
        if i > 0 && (i + size - lead) % size == 0 {
            out.push_str(&locale.group_separator);
        }
        out.push(ch);
    }
    out
}

fn exponential(magnitude: f64, decimals: usize, uppercase: bool, locale: &NumberLocale) -> String {
    let (digits, exponent) = exact_digits(magnitude);
    let (digits, exponent) =
        round_half_away(digits, exponent, as_position(decimals).saturating_add(1));

    let mut out = String::from(digit_at(&digits, 0));
    if decimals > 0 {
        out.push_str(&locale.decimal_separator);
        out.extend((1..=as_position(decimals)).map(|i| digit_at(&digits, i)));
    }
    out.push_str(&exponent_suffix(
        exponent,
        EXPONENT_MIN_WIDTH,
        uppercase,
        locale,
    ));
    out
}

fn general(
    magnitude: f64,
    precision: Option<usize>,
    uppercase: bool,
    locale: &NumberLocale,
) -> String {
    let precision = precision.filter(|&p| p > 0);
    let (digits, exponent) = significant_digits(magnitude, precision);
    let limit = precision
        .and_then(|p| i32::try_from(p).ok())
        .unwrap_or(GENERAL_SHORTEST_EXPONENT_LIMIT);

    if exponent >= limit || exponent <= GENERAL_MIN_EXPONENT {
        let mut out = digits[..1].to_string();
        if digits.len() > 1 {
            out.push_str(&locale.decimal_separator);
            out.push_str(&digits[1..]);
        }
        out.push_str(&exponent_suffix(
            exponent,
            GENERAL_EXPONENT_MIN_WIDTH,
            uppercase,
            locale,
        ));
        return out;
    }

    if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("0{}{zeros}{digits}", locale.decimal_separator);
    }

    let integral_len = exponent as usize + 1;
    if digits.len() <= integral_len {
        format!("{digits}{}", "0".repeat(integral_len - digits.len()))
    } else {
        format!(
            "{}{}{}",
            &digits[..integral_len],
            locale.decimal_separator,
            &digits[integral_len..]
        )
    }
}

/// Decimal digits without trailing zeros and the base-10 exponent of the
/// first digit. `None` yields the shortest round-trip digits.
fn significant_digits(magnitude: f64, precision: Option<usize>) -> (String, i32) {
    let (digits, exponent) = match precision {
        Some(p) => {
            let (digits, exponent) = exact_digits(magnitude);
            round_half_away(digits, exponent, as_position(p))
        }
        None => {
            let raw = format!("{magnitude:e}");
            let (mantissa, exponent) = split_scientific(&raw);
            (mantissa.bytes().filter(u8::is_ascii_digit).collect(), exponent)
        }
    };
    let mut digits: String = digits.iter().map(|&d| char::from(d)).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    if digits.is_empty() {
        return ("0".to_string(), 0);
    }
    (digits, exponent)
}

/// Exact decimal expansion of a finite, non-negative value: ASCII digits
/// with trailing zeros removed (empty for zero) and the base-10 exponent of
/// the first digit.
fn exact_digits(magnitude: f64) -> (Vec<u8>, i32) {
    let raw = format!("{magnitude:.prec$e}", prec = MAX_EXACT_SIGNIFICANT_DIGITS);
    let (mantissa, exponent) = split_scientific(&raw);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    while digits.last() == Some(&b'0') {
        digits.pop();
    }
    if digits.is_empty() {
        return (digits, 0);
    }
    (digits, exponent)
}

/// Keeps the first `keep` digits, rounding half away from zero.
///
/// A carry out of the leading digit yields `"1"` one exponent higher. A
/// value that rounds away entirely comes back as no digits at exponent 0.
fn round_half_away(mut digits: Vec<u8>, exponent: i32, keep: i64) -> (Vec<u8>, i32) {
    let Ok(keep) = usize::try_from(keep) else {
        return (Vec::new(), 0);
    };
    if digits.len() <= keep {
        return (digits, exponent);
    }

    let round_up = digits[keep] >= b'5';
    digits.truncate(keep);
    if round_up {
        while let Some(last) = digits.pop() {
            if last != b'9' {
                digits.push(last + 1);
                return (digits, exponent);
            }
        }
        return (vec![b'1'], exponent + 1);
    }

    while digits.last() == Some(&b'0') {
        digits.pop();
    }
    if digits.is_empty() {
        return (digits, 0);
    }
    (digits, exponent)
}

/// Digit at a position counted from the first significant digit; positions
/// outside the expansion are zero.
fn digit_at(digits: &[u8], position: i64) -> char {
    usize::try_from(position)
        .ok()
        .and_then(|i| digits.get(i))
        .map_or('0', |&d| char::from(d))
}

fn as_position(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

fn split_scientific(raw: &str) -> (&str, i32) {
    match raw.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (raw, 0),
    }
}

fn exponent_suffix(exponent: i32, width: usize, uppercase: bool, locale: &NumberLocale) -> String {
    let letter = if uppercase { 'E' } else { 'e' };
    let sign = if exponent < 0 {
        locale.negative_sign.as_str()
    } else {
        "+"
    };
    format!("{letter}{sign}{:0width$}", exponent.unsigned_abs())
}

#[cfg(test)]
mod tests;
