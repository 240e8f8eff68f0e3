//! The SQL TIME value.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::codec::{MarshalText, Scan, UnmarshalText, Valuer};
use crate::driver::DriverValue;
use crate::error::{Result, TimeError};

/// Segment separator of the text form.
const SEPARATOR: u8 = b':';

/// Number of segments read from the text form; later ones are ignored.
const MAX_SEGMENTS: usize = 3;

/// An SQL TIME: hours, minutes and seconds with no date and no time zone.
///
/// Components are not range checked. Text such as `25:61` decodes to
/// `Time { hours: 25, minutes: 61, seconds: 0 }` and encodes back unchanged.
///
/// Text form on output is `H:MM`, or `H:MM:SS` when seconds are non-zero:
///
/// ```rust
/// use oxide_sqltime::Time;
///
/// assert_eq!(Time::must_parse("13:30:45").to_string(), "13:30:45");
/// assert_eq!(Time::must_parse("9:05:00").to_string(), "9:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Time {
    #[must_use]
    pub const fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Parses the text form `H[:M[:S[:...]]]`.
    ///
    /// Missing segments are zero and segments after the third are ignored.
    /// Empty input yields the zero time.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidSegment`] if one of the first three
    /// segments is not a decimal integer.
    pub fn parse(s: &str) -> Result<Self> {
        let mut time = Self::default();
        time.unmarshal_text(s.as_bytes())?;
        Ok(time)
    }

    /// Like [`Time::parse`], for literals known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid TIME.
    #[must_use]
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|e| panic!("invalid TIME literal {s:?}: {e}"))
    }

    /// Whether the value is a time of day: `0 <= hours < 24` and minutes
    /// and seconds in `0..60`.
    #[must_use]
    pub const fn is_time_of_day(&self) -> bool {
        0 <= self.hours
            && self.hours < 24
            && 0 <= self.minutes
            && self.minutes < 60
            && 0 <= self.seconds
            && self.seconds < 60
    }
}

fn parse_segment(segment: &[u8]) -> Result<i64> {
    let text = String::from_utf8_lossy(segment);
    text.parse::<i64>()
        .map_err(|source| TimeError::InvalidSegment {
            segment: text.into_owned(),
            source,
        })
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)?;
        if self.seconds != 0 {
            write!(f, ":{:02}", self.seconds)?;
        }
        Ok(())
    }
}

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl MarshalText for Time {
    fn marshal_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl UnmarshalText for Time {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        let mut parsed = Self::default();
        if !text.is_empty() {
            let segments = text.split(|&b| b == SEPARATOR).take(MAX_SEGMENTS);
            for (index, segment) in segments.enumerate() {
                let value = parse_segment(segment)?;
                match index {
                    0 => parsed.hours = value,
                    1 => parsed.minutes = value,
                    _ => parsed.seconds = value,
                }
            }
        }
        *self = parsed;
        Ok(())
    }
}

impl Scan for Time {
    fn scan(&mut self, src: &DriverValue) -> Result<()> {
        match src {
            DriverValue::Bytes(bytes) => self.unmarshal_text(bytes),
            DriverValue::Text(text) => self.unmarshal_text(text.as_bytes()),
            DriverValue::Timestamp(ts) => {
                *self = Self::new(
                    i64::from(ts.hour()),
                    i64::from(ts.minute()),
                    i64::from(ts.second()),
                );
                Ok(())
            }
            other => {
                debug!(source = other.type_name(), "cannot scan TIME");
                Err(TimeError::UnsupportedScanType(other.type_name()))
            }
        }
    }
}

impl Valuer for Time {
    fn value(&self) -> DriverValue {
        DriverValue::Text(self.to_string())
    }
}

/// Serialized as its text form, e.g. `"13:30:45"`.
impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TimeVisitor)
    }
}

struct TimeVisitor;

impl Visitor<'_> for TimeVisitor {
    type Value = Time;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a time string such as \"13:30\" or \"13:30:45\"")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Time::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        let mut time = Time::default();
        time.unmarshal_text(v).map_err(E::custom)?;
        Ok(time)
    }
}
