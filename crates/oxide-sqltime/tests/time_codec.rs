//! End-to-end behaviour of the TIME and nullable TIME codecs.

use chrono::NaiveDate;
use oxide_sqltime::{
    DriverValue, MarshalText, NullTime, Scan, Time, TimeError, UnmarshalText, Valuer,
};
use serde::{Deserialize, Serialize};

// ===================================================================
// Text
// ===================================================================

#[test]
fn parse_full_time_renders_unchanged() {
    let time = Time::parse("13:30:45").unwrap();
    assert_eq!(time.marshal_text(), b"13:30:45");
}

#[test]
fn single_digit_hour_is_not_padded() {
    assert_eq!(Time::parse("9:05").unwrap().marshal_text(), b"9:05");
}

#[test]
fn zero_seconds_are_elided() {
    assert_eq!(Time::parse("9:05:00").unwrap().marshal_text(), b"9:05");
}

#[test]
fn minutes_are_zero_padded() {
    assert_eq!(Time::new(14, 5, 0).to_string(), "14:05");
    assert_eq!(Time::new(14, 5, 9).to_string(), "14:05:09");
}

#[test]
fn midnight_renders_hour_zero() {
    assert_eq!(Time::default().to_string(), "0:00");
}

#[test]
fn leading_zeros_accepted() {
    assert_eq!(Time::parse("009:0005:007").unwrap(), Time::new(9, 5, 7));
}

#[test]
fn extra_segments_tolerated() {
    assert_eq!(Time::parse("10:20:30:40").unwrap(), Time::new(10, 20, 30));
    assert_eq!(Time::parse("10:20:30:not-a-number").unwrap(), Time::new(10, 20, 30));
}

#[test]
fn empty_text_is_zero_time_and_null_time() {
    assert_eq!(Time::parse("").unwrap(), Time::default());
    assert!(NullTime::parse("").unwrap().is_null());
}

#[test]
fn non_numeric_segment_is_an_error() {
    let err = Time::parse("12:3O").unwrap_err();
    assert!(matches!(err, TimeError::InvalidSegment { ref segment, .. } if segment == "3O"));
    assert!(err.to_string().contains("3O"));
}

#[test]
fn non_utf8_segment_is_an_error() {
    let mut time = Time::default();
    assert!(matches!(
        time.unmarshal_text(&[b'1', b':', 0xFF]),
        Err(TimeError::InvalidSegment { .. })
    ));
}

#[test]
fn from_str_matches_parse() {
    let parsed: Time = "7:45".parse().unwrap();
    assert_eq!(parsed, Time::parse("7:45").unwrap());
}

#[test]
#[should_panic(expected = "invalid TIME literal")]
fn must_parse_panics_on_bad_input() {
    let _ = Time::must_parse("noon");
}

#[test]
#[should_panic(expected = "invalid nullable TIME literal")]
fn must_parse_null_time_panics_on_bad_input() {
    let _ = NullTime::must_parse("noon");
}

#[test]
fn must_parse_null_time_accepts_null_spellings() {
    assert!(NullTime::must_parse("null").is_null());
    assert!(NullTime::must_parse("").is_null());
}

// ===================================================================
// JSON
// ===================================================================

#[test]
fn null_time_json_null_round_trip() {
    let null = NullTime::null();
    assert_eq!(null.marshal_json(), b"null");

    let mut decoded = NullTime::new(Time::new(1, 0, 0));
    decoded.unmarshal_json(&null.marshal_json()).unwrap();
    assert!(!decoded.valid);
}

#[test]
fn null_time_json_valid_is_quoted_text() {
    let value = NullTime::new(Time::new(13, 30, 45));
    let mut expected = b"\"".to_vec();
    expected.extend(value.time.marshal_text());
    expected.push(b'"');
    assert_eq!(value.marshal_json(), expected);
}

#[test]
fn null_time_json_accepts_empty_string() {
    let mut value = NullTime::new(Time::new(1, 0, 0));
    value.unmarshal_json(b"\"\"").unwrap();
    assert!(value.is_null());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Shift {
    starts_at: Time,
    ends_at: NullTime,
}

#[test]
fn serde_inside_a_struct() {
    let shift = Shift {
        starts_at: Time::new(8, 0, 0),
        ends_at: NullTime::null(),
    };
    let json = serde_json::to_string(&shift).unwrap();
    assert_eq!(json, r#"{"starts_at":"8:00","ends_at":null}"#);
    assert_eq!(serde_json::from_str::<Shift>(&json).unwrap(), shift);
}

#[test]
fn serde_null_time_accepts_permissive_inputs() {
    let shift: Shift = serde_json::from_str(r#"{"starts_at":"8","ends_at":""}"#).unwrap();
    assert_eq!(shift.starts_at, Time::new(8, 0, 0));
    assert!(shift.ends_at.is_null());

    let shift: Shift =
        serde_json::from_str(r#"{"starts_at":"8:00","ends_at":"17:30:15"}"#).unwrap();
    assert_eq!(shift.ends_at, NullTime::new(Time::new(17, 30, 15)));
}

#[test]
fn serde_rejects_malformed_time() {
    assert!(serde_json::from_str::<Time>(r#""8:xx""#).is_err());
    assert!(serde_json::from_str::<Time>("800").is_err());
    assert!(serde_json::from_str::<NullTime>("true").is_err());
}

// ===================================================================
// Driver
// ===================================================================

#[test]
fn scan_of_marshal_is_identity() {
    let original = Time::new(23, 59, 1);
    let mut scanned = Time::default();
    scanned.scan(&original.value()).unwrap();
    assert_eq!(scanned, original);

    scanned.scan(&DriverValue::Bytes(original.marshal_text())).unwrap();
    assert_eq!(scanned, original);
}

#[test]
fn scan_timestamp_takes_clock_fields_only() {
    let ts = NaiveDate::from_ymd_opt(1999, 12, 31)
        .unwrap()
        .and_hms_milli_opt(23, 59, 58, 750)
        .unwrap();
    let mut time = Time::default();
    time.scan(&ts.into()).unwrap();
    assert_eq!(time, Time::new(23, 59, 58));
}

#[test]
fn scan_unsupported_type() {
    let mut time = Time::default();
    let err = time.scan(&DriverValue::Float(9.5)).unwrap_err();
    assert_eq!(err.to_string(), "unsupported scan source type: float");
}

#[test]
fn null_time_value_sentinels() {
    assert_eq!(NullTime::null().value(), DriverValue::Null);
    assert_eq!(
        NullTime::new(Time::new(6, 30, 0)).value(),
        DriverValue::Text(String::from("6:30"))
    );
}

#[test]
fn null_time_scan_then_value_round_trip() {
    for src in [DriverValue::Null, DriverValue::from("18:00:30")] {
        let mut value = NullTime::default();
        value.scan(&src).unwrap();
        assert_eq!(value.value(), src);
    }
}
