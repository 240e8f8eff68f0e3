//! Nullable TIME.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{MarshalText, Scan, UnmarshalText, Valuer};
use crate::driver::DriverValue;
use crate::error::Result;
use crate::time::Time;

/// Text accepted as null besides the empty string.
const NULL_LITERAL: &str = "null";

/// A [`Time`] that may be SQL NULL.
///
/// When `valid` is false the `time` field is ignored by every encoder and
/// by equality. Decoders accept several null spellings (`""`, `null`, SQL
/// NULL, empty bytes); encoders always produce the canonical one for their
/// surface.
///
/// ```rust
/// use oxide_sqltime::NullTime;
///
/// let null = NullTime::null();
/// assert_eq!(null.marshal_json(), b"null");
///
/// let mut decoded = NullTime::must_parse("9:05");
/// decoded.unmarshal_json(b"null").unwrap();
/// assert!(!decoded.valid);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTime {
    pub time: Time,
    pub valid: bool,
}

impl NullTime {
    /// A valid (non-null) value.
    #[must_use]
    pub const fn new(time: Time) -> Self {
        Self { time, valid: true }
    }

    #[must_use]
    pub const fn null() -> Self {
        Self {
            time: Time::new(0, 0, 0),
            valid: false,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        !self.valid
    }

    /// Returns the time if the value is not null.
    #[must_use]
    pub const fn as_option(&self) -> Option<Time> {
        if self.valid { Some(self.time) } else { None }
    }

    /// Parses the text form; empty text and `null` give a null value.
    ///
    /// # Errors
    ///
    /// Returns the [`Time`] parse error for any other malformed input.
    pub fn parse(s: &str) -> Result<Self> {
        let mut value = Self::null();
        value.unmarshal_text(s.as_bytes())?;
        Ok(value)
    }

    /// Like [`NullTime::parse`], for literals known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `s` is neither a null spelling nor a valid TIME.
    #[must_use]
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|e| panic!("invalid nullable TIME literal {s:?}: {e}"))
    }

    /// Encodes as JSON: `null`, or the text form in double quotes.
    #[must_use]
    pub fn marshal_json(&self) -> Vec<u8> {
        match self.as_option() {
            // The text form is digits, colons and signs; no escaping needed.
            Some(time) => format!("\"{time}\"").into_bytes(),
            None => NULL_LITERAL.as_bytes().to_vec(),
        }
    }

    /// Decodes from JSON. `null` and `""` give a null value; any other JSON
    /// string is decoded with [`UnmarshalText`].
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Json`](crate::TimeError::Json) if `data` is
    /// neither `null` nor a JSON string, and the text decoding error
    /// otherwise.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        let text: Option<String> = serde_json::from_slice(data)?;
        match text {
            Some(text) => self.unmarshal_text(text.as_bytes()),
            None => {
                *self = Self::null();
                Ok(())
            }
        }
    }
}

impl PartialEq for NullTime {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl Eq for NullTime {}

impl Hash for NullTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl fmt::Display for NullTime {
    /// Null renders as the empty string, matching the text encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(time) => write!(f, "{time}"),
            None => Ok(()),
        }
    }
}

impl From<Time> for NullTime {
    fn from(time: Time) -> Self {
        Self::new(time)
    }
}

impl From<Option<Time>> for NullTime {
    fn from(time: Option<Time>) -> Self {
        time.map_or(Self::null(), Self::new)
    }
}

impl From<NullTime> for Option<Time> {
    fn from(value: NullTime) -> Self {
        value.as_option()
    }
}

impl MarshalText for NullTime {
    fn marshal_text(&self) -> Vec<u8> {
        match self.as_option() {
            Some(time) => time.marshal_text(),
            None => Vec::new(),
        }
    }
}

impl UnmarshalText for NullTime {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        if text.is_empty() || text == NULL_LITERAL.as_bytes() {
            *self = Self::null();
            return Ok(());
        }
        let mut time = Time::default();
        time.unmarshal_text(text)?;
        *self = Self::new(time);
        Ok(())
    }
}

impl Scan for NullTime {
    fn scan(&mut self, src: &DriverValue) -> Result<()> {
        let is_null = match src {
            DriverValue::Bytes(bytes) => bytes.is_empty(),
            other => {
                other.is_null()
                    || other
                        .as_text()
                        .is_some_and(|text| text.is_empty() || text == NULL_LITERAL)
            }
        };
        if is_null {
            *self = Self::null();
            return Ok(());
        }
        let mut time = Time::default();
        time.scan(src)?;
        *self = Self::new(time);
        Ok(())
    }
}

impl Valuer for NullTime {
    fn value(&self) -> DriverValue {
        match self.as_option() {
            Some(time) => time.value(),
            None => DriverValue::Null,
        }
    }
}

/// Serialized as `null` or the quoted text form.
impl Serialize for NullTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_option() {
            Some(time) => serializer.collect_str(&time),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NullTimeVisitor)
    }
}

/// Accepts `null`, unit, strings (including `""` and `"null"`) and bytes.
struct NullTimeVisitor;

impl<'de> Visitor<'de> for NullTimeVisitor {
    type Value = NullTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null or a time string such as \"13:30:45\"")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        NullTime::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        let mut value = NullTime::null();
        value.unmarshal_text(v).map_err(E::custom)?;
        Ok(value)
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NullTime::null())
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NullTime::null())
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
