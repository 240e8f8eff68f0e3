//! Values exchanged with a database driver.

use chrono::{DateTime, NaiveDateTime, TimeZone};

/// A column value as read from, or handed to, a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL NULL.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Wall-clock timestamp without a time zone.
    Timestamp(NaiveDateTime),
}

impl DriverValue {
    /// Returns the name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Timestamp(_) => "timestamp",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text payload, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for DriverValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for DriverValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for DriverValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for DriverValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DriverValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<NaiveDateTime> for DriverValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

/// Zoned timestamps are reduced to their local wall-clock reading.
impl<Tz: TimeZone> From<DateTime<Tz>> for DriverValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Timestamp(value.naive_local())
    }
}

impl<T: Into<Self>> From<Option<T>> for DriverValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
