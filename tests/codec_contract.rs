//! Contract tests for the money and date wire codecs.
//!
//! These pin down the exact textual formats the API produces and the
//! canonical forms the crate emits back.

use vantage_core::{
    format_date, format_money, parse_date, parse_money, CalendarDate, Money, ParseError,
};

// =============================================================================
// Money: canonicalization
// =============================================================================

#[test]
fn every_valid_decimal_formats_to_four_fraction_digits() {
    let cases = [
        ("0.1", "0.1000"),
        ("12", "12.0000"),
        ("12.", "12.0000"),
        ("-3.25", "-3.2500"),
        ("007.5", "7.5000"),
        ("+1.5", "1.5000"),
        ("-0.0001", "-0.0001"),
        ("0.9999", "0.9999"),
    ];

    for (input, canonical) in cases {
        let money = parse_money(input).expect("valid decimal");
        assert_eq!(format_money(money), canonical, "input {input:?}");

        // Canonical output is itself a fixed point of the codec.
        let again = parse_money(canonical).expect("canonical form parses");
        assert_eq!(again, money, "input {input:?}");
    }
}

#[test]
fn sentinel_tokens_all_mean_zero() {
    let empty = parse_money("").expect("empty");
    let none = parse_money("None").expect("None");
    let nil = parse_money("nil").expect("nil");

    assert_eq!(empty, Money::ZERO);
    assert_eq!(none, Money::ZERO);
    assert_eq!(nil, Money::ZERO);
}

#[test]
fn concrete_money_scenarios() {
    let cases = [
        (".42", 4_200, "0.4200"),
        ("-0.12", -1_200, "-0.1200"),
        ("28282828", 282_828_280_000, "28282828.0000"),
    ];

    for (input, scaled, formatted) in cases {
        let money = parse_money(input).expect("valid");
        assert_eq!(money.scaled(), scaled);
        assert_eq!(format_money(money), formatted);
    }
}

// =============================================================================
// Money: rejection
// =============================================================================

#[test]
fn extra_fraction_digits_are_an_error_not_rounded() {
    let err = parse_money("0.12345").expect_err("five fraction digits");
    assert!(matches!(err, ParseError::Money { .. }));
    assert_eq!(err.value(), "0.12345");
}

#[test]
fn more_than_one_separator_is_an_error() {
    let err = parse_money("127.0.0.1").expect_err("ip address");
    assert!(matches!(err, ParseError::Money { .. }));
}

#[test]
fn words_are_an_error_not_zero() {
    let err = parse_money("fourty two").expect_err("words");
    assert!(err.to_string().contains("fourty two"));
}

#[test]
fn sign_in_fraction_is_an_error() {
    for input in ["1.-5", "1. 5", ".-5", ".+12", "-.-5", ".-123", "0.+1"] {
        let err = parse_money(input).expect_err("sign belongs to the integer part");
        assert!(matches!(err, ParseError::Money { .. }), "input {input:?}");
        assert_eq!(err.value(), input);
    }
}

// =============================================================================
// Dates
// =============================================================================

#[test]
fn valid_dates_round_trip_byte_for_byte() {
    for input in ["2019-12-31", "2015-09-30", "2020-02-29", "1999-05-27", "0001-01-01"] {
        let date = parse_date(input).expect("valid date");
        assert_eq!(format_date(date), input);
    }
}

#[test]
fn concrete_date_scenario() {
    let date = parse_date("2019-12-31").expect("valid date");
    let expected = CalendarDate::from_ymd(2019, time::Month::December, 31).expect("literal");

    assert_eq!(date, expected);
    assert_eq!(date.midnight_utc().offset(), time::UtcOffset::UTC);
    assert_eq!(format_date(date), "2019-12-31");
}

#[test]
fn non_iso_layouts_are_rejected() {
    for input in ["08-25-2017", "31/01/2018", "Jan 1, 2020", "2019-12-31 ", "20191231"] {
        let err = parse_date(input).expect_err("non-conforming layout");
        assert!(matches!(err, ParseError::Date { .. }), "input {input:?}");
        assert_eq!(err.value(), input);
    }
}

// =============================================================================
// JSON integration
// =============================================================================

#[test]
fn money_json_is_always_a_string() {
    let value = serde_json::to_value(Money::from_scaled(282_828_280_000)).expect("serialize");
    assert_eq!(value, serde_json::Value::from("28282828.0000"));

    let quoted_null: Money = serde_json::from_str(r#""null""#).expect("quoted null");
    assert_eq!(quoted_null, Money::ZERO);
}

#[test]
fn date_json_is_a_quoted_string() {
    let date = parse_date("2020-08-07").expect("valid date");
    let json = serde_json::to_string(&date).expect("serialize");
    assert_eq!(json, r#""2020-08-07""#);

    assert!(serde_json::from_str::<CalendarDate>(r#""""#).is_err());
}
