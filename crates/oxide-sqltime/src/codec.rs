//! The serialization surfaces a TIME value takes part in.
//!
//! JSON goes through `serde` (`Serialize`/`Deserialize`); the text and
//! driver surfaces are the traits below.

use crate::driver::DriverValue;
use crate::error::Result;

/// Encodes a value to its canonical text form.
pub trait MarshalText {
    fn marshal_text(&self) -> Vec<u8>;
}

/// Decodes a value from text, replacing the receiver's contents.
pub trait UnmarshalText {
    /// # Errors
    ///
    /// Returns an error if `text` is not a valid encoding. The receiver is
    /// left unchanged in that case.
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()>;
}

/// Reads a value out of a database driver column.
pub trait Scan {
    /// # Errors
    ///
    /// Returns [`TimeError::UnsupportedScanType`](crate::TimeError) for
    /// driver values of a type the implementor cannot read, or the text
    /// decoding error for malformed textual input.
    fn scan(&mut self, src: &DriverValue) -> Result<()>;
}

/// Produces the payload handed to a database driver.
pub trait Valuer {
    fn value(&self) -> DriverValue;
}
