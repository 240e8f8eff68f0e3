//! Property tests for the TIME codec laws.

use oxide_sqltime::{DriverValue, MarshalText, NullTime, Scan, Time, UnmarshalText, Valuer};
use proptest::prelude::*;

fn clock_time() -> impl Strategy<Value = Time> {
    (0_i64..1_000, 0_i64..60, 0_i64..60).prop_map(|(h, m, s)| Time::new(h, m, s))
}

fn any_time() -> impl Strategy<Value = Time> {
    (-50_i64..50, -5_i64..5, -5_i64..5).prop_map(|(h, m, s)| Time::new(h, m, s))
}

fn null_time() -> impl Strategy<Value = NullTime> {
    prop_oneof![
        clock_time().prop_map(NullTime::new),
        clock_time().prop_map(|time| NullTime { time, valid: false }),
    ]
}

proptest! {
    #[test]
    fn text_round_trip(time in clock_time()) {
        let mut decoded = Time::default();
        decoded.unmarshal_text(&time.marshal_text()).unwrap();
        prop_assert_eq!(decoded, time);
    }

    #[test]
    fn text_rendering_is_idempotent(time in clock_time()) {
        let first = time.to_string();
        let second = Time::parse(&first).unwrap().to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scan_round_trip(time in clock_time()) {
        let mut scanned = Time::default();
        scanned.scan(&time.value()).unwrap();
        prop_assert_eq!(scanned, time);
    }

    #[test]
    fn colon_count_follows_seconds(time in clock_time()) {
        let colons = time.to_string().matches(':').count();
        prop_assert_eq!(colons, if time.seconds == 0 { 1 } else { 2 });
    }

    #[test]
    fn minutes_always_two_digits(time in clock_time()) {
        let text = time.to_string();
        let minutes = text.split(':').nth(1).unwrap();
        prop_assert_eq!(minutes.len(), 2);
    }

    #[test]
    fn invalid_null_time_uses_null_sentinels(time in any_time()) {
        let value = NullTime { time, valid: false };
        prop_assert!(value.marshal_text().is_empty());
        prop_assert_eq!(value.marshal_json(), b"null".to_vec());
        prop_assert_eq!(value.value(), DriverValue::Null);
    }

    #[test]
    fn valid_null_time_json_is_quoted_text(time in clock_time()) {
        let value = NullTime::new(time);
        let expected = format!("\"{time}\"").into_bytes();
        prop_assert_eq!(value.marshal_json(), expected);
    }

    #[test]
    fn json_round_trip(value in null_time()) {
        let json = value.marshal_json();
        let mut decoded = NullTime::default();
        decoded.unmarshal_json(&json).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(decoded.marshal_json(), json);
    }

    #[test]
    fn serde_matches_marshal_json(value in null_time()) {
        prop_assert_eq!(serde_json::to_vec(&value).unwrap(), value.marshal_json());
    }

    #[test]
    fn time_equality_is_an_equivalence(a in any_time(), b in any_time(), c in any_time()) {
        prop_assert_eq!(a, a);
        prop_assert_eq!(a == b, b == a);
        if a == b && b == c {
            prop_assert_eq!(a, c);
        }
    }

    #[test]
    fn null_time_equality_is_an_equivalence(
        a in null_time(),
        b in null_time(),
        c in null_time(),
    ) {
        prop_assert_eq!(a, a);
        prop_assert_eq!(a == b, b == a);
        if a == b && b == c {
            prop_assert_eq!(a, c);
        }
    }
}
