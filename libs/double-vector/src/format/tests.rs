//! Tests for numeric text conversion.

use super::*;
use crate::error::FormatError;

fn fmt(value: f64, spec: &str) -> String {
    let spec = NumberFormat::parse(spec).unwrap();
    format_f64(value, &spec, NumberLocale::invariant())
}

// =============================================================================
// SPECIFIER PARSING
// =============================================================================

#[test]
fn empty_specifier_is_f2() {
    assert_eq!(NumberFormat::parse("").unwrap(), NumberFormat::fixed(2));
    assert_eq!(NumberFormat::default(), NumberFormat::fixed(2));
}

#[test]
fn parses_letter_case_and_precision() {
    let spec = NumberFormat::parse("e10").unwrap();
    assert_eq!(spec.kind, FormatKind::Exponential);
    assert_eq!(spec.precision, Some(10));
    assert!(!spec.uppercase);

    let spec: NumberFormat = "R".parse().unwrap();
    assert_eq!(spec.kind, FormatKind::RoundTrip);
    assert_eq!(spec.precision, None);
}

#[test]
fn rejects_unknown_letter() {
    assert_eq!(
        NumberFormat::parse("Q2"),
        Err(FormatError::InvalidSpecifier("Q2".to_string()))
    );
}

#[test]
fn rejects_integer_only_letters() {
    assert_eq!(
        NumberFormat::parse("D4"),
        Err(FormatError::IntegerOnlySpecifier('D'))
    );
    assert_eq!(
        NumberFormat::parse("x"),
        Err(FormatError::IntegerOnlySpecifier('x'))
    );
}

#[test]
fn rejects_custom_formats() {
    for spec in ["0.00", "#,##0", "F2x", " F2"] {
        assert_eq!(
            NumberFormat::parse(spec),
            Err(FormatError::CustomFormatUnsupported(spec.to_string())),
            "{spec}"
        );
    }
}

#[test]
fn rejects_excessive_precision() {
    match NumberFormat::parse("F100") {
        Err(FormatError::PrecisionOutOfRange { precision, max, .. }) => {
            assert_eq!(precision, 100);
            assert_eq!(max, 99);
        }
        other => panic!("expected precision error, got {other:?}"),
    }
    assert!(matches!(
        NumberFormat::parse("F999999999999999999999999"),
        Err(FormatError::PrecisionOutOfRange { precision: usize::MAX, .. })
    ));
}

// =============================================================================
// FIXED AND NUMBER
// =============================================================================

#[test]
fn fixed_point() {
    assert_eq!(fmt(0.0, "F2"), "0.00");
    assert_eq!(fmt(1.005, "F1"), "1.0");
    assert_eq!(fmt(3.14159, "F3"), "3.142");
    assert_eq!(fmt(2.4, "F0"), "2");
    assert_eq!(fmt(1234567.891, "F"), "1234567.89");
    assert_eq!(fmt(-7.26, "F1"), "-7.3");
}

#[test]
fn halfway_values_round_away_from_zero() {
    assert_eq!(fmt(0.125, "F2"), "0.13");
    assert_eq!(fmt(2.5, "F0"), "3");
    assert_eq!(fmt(0.5, "F0"), "1");
    assert_eq!(fmt(-0.125, "F2"), "-0.13");
    assert_eq!(fmt(0.25, "F1"), "0.3");
    assert_eq!(fmt(0.75, "F1"), "0.8");
    assert_eq!(fmt(1_234_567.5, "N0"), "1,234,568");
    assert_eq!(fmt(0.125, "P0"), "13 %");
}

#[test]
fn halfway_rounding_carries_into_integral_digits() {
    assert_eq!(fmt(9.5, "F0"), "10");
    assert_eq!(fmt(99.95, "F1"), "100.0");
    assert_eq!(fmt(999.5, "N0"), "1,000");
}

#[test]
fn values_just_below_halfway_round_down() {
    // 1.005 and 2.675 are stored slightly below their decimal literals.
    assert_eq!(fmt(1.005, "F2"), "1.00");
    assert_eq!(fmt(2.675, "F2"), "2.67");
    assert_eq!(fmt(0.05, "F0"), "0");
}

#[test]
fn negative_zero_keeps_sign() {
    assert_eq!(fmt(-0.0, "F2"), "-0.00");
    assert_eq!(fmt(-0.001, "F2"), "-0.00");
}

#[test]
fn number_groups_integral_digits() {
    assert_eq!(fmt(1234567.891, "N2"), "1,234,567.89");
    assert_eq!(fmt(123456.0, "N0"), "123,456");
    assert_eq!(fmt(999.0, "N1"), "999.0");
    assert_eq!(fmt(-1000.0, "N"), "-1,000.00");
}

// =============================================================================
// EXPONENTIAL, GENERAL, ROUND-TRIP, PERCENT
// =============================================================================

#[test]
fn exponential() {
    assert_eq!(fmt(1234.5, "E"), "1.234500E+003");
    assert_eq!(fmt(1234.5, "e2"), "1.23e+003");
    assert_eq!(fmt(0.000123, "E1"), "1.2E-004");
    assert_eq!(fmt(0.0, "E0"), "0E+000");
    assert_eq!(fmt(-5.0, "E1"), "-5.0E+000");
}

#[test]
fn exponential_and_general_round_halfway_away_from_zero() {
    assert_eq!(fmt(2.25, "E1"), "2.3E+000");
    assert_eq!(fmt(0.75, "E0"), "8E-001");
    assert_eq!(fmt(9.5, "E0"), "1E+001");
    assert_eq!(fmt(1.25, "G2"), "1.3");
    assert_eq!(fmt(9.5, "G1"), "1E+01");
    assert_eq!(fmt(0.125, "G2"), "0.13");
}

#[test]
fn general_shortest() {
    assert_eq!(fmt(0.0, "G"), "0");
    assert_eq!(fmt(1.5, "G"), "1.5");
    assert_eq!(fmt(100.0, "G"), "100");
    assert_eq!(fmt(0.1, "G"), "0.1");
    assert_eq!(fmt(0.0001, "G"), "0.0001");
    assert_eq!(fmt(0.00001, "G"), "1E-05");
    assert_eq!(fmt(123456789012345.0, "G"), "123456789012345");
    assert_eq!(fmt(1e15, "G"), "1E+15");
    assert_eq!(fmt(1e15, "g"), "1e+15");
}

#[test]
fn general_with_precision() {
    assert_eq!(fmt(12345.6789, "G4"), "1.235E+04");
    assert_eq!(fmt(12.3456, "G4"), "12.35");
    assert_eq!(fmt(1.0, "G3"), "1");
    assert_eq!(fmt(123.0, "G3"), "123");
    assert_eq!(fmt(1234.0, "G3"), "1.23E+03");
}

#[test]
fn round_trip_reads_back() {
    let value = 0.1 + 0.2;
    let text = fmt(value, "R");
    assert_eq!(text, "0.30000000000000004");
    assert_eq!(text.parse::<f64>().unwrap(), value);
}

#[test]
fn percent() {
    assert_eq!(fmt(0.125, "P1"), "12.5 %");
    assert_eq!(fmt(12.0, "P0"), "1,200 %");
    assert_eq!(fmt(-0.5, "P"), "-50.00 %");
}

// =============================================================================
// SPECIAL VALUES AND LOCALES
// =============================================================================

#[test]
fn special_values_ignore_specifier() {
    assert_eq!(fmt(f64::NAN, "F2"), "NaN");
    assert_eq!(fmt(f64::INFINITY, "E3"), "Infinity");
    assert_eq!(fmt(f64::NEG_INFINITY, "N"), "-Infinity");
}

#[test]
fn custom_locale_separators() {
    let locale = NumberLocale::invariant()
        .clone()
        .with_decimal_separator(",")
        .with_group_separator(".");
    let spec = NumberFormat::parse("N2").unwrap();
    assert_eq!(format_f64(1234.5, &spec, &locale), "1.234,50");

    let spec = NumberFormat::parse("E1").unwrap();
    assert_eq!(format_f64(1234.5, &spec, &locale), "1,2E+003");
}

#[test]
fn custom_locale_digits_and_symbols() {
    let locale = NumberLocale::default()
        .with_decimal_digits(4)
        .with_negative_sign("~")
        .with_group_size(0)
        .with_special_symbols("nan", "inf", "-inf");
    let spec = NumberFormat::parse("N").unwrap();
    assert_eq!(format_f64(-12345.0, &spec, &locale), "~12345.0000");
    assert_eq!(format_f64(f64::INFINITY, &spec, &locale), "inf");
}

#[test]
fn components_join_with_comma_space() {
    let text = format_components(&[1.0, -2.5], None, None).unwrap();
    assert_eq!(text, "(1.00, -2.50)");

    let text = format_components(&[1.0, 2.0, 3.0], Some("F0"), None).unwrap();
    assert_eq!(text, "(1, 2, 3)");
}

#[test]
fn components_propagate_parse_errors() {
    assert!(format_components(&[1.0], Some("Z"), None).is_err());
}
