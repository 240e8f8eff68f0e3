//! # oxide-sqltime
//!
//! An SQL `TIME` value (hours, minutes, seconds) and its nullable wrapper,
//! encoded on four surfaces:
//!
//! - text: `H:MM` or `H:MM:SS` ([`MarshalText`] / [`UnmarshalText`])
//! - JSON: a JSON string, or `null` ([`serde`] and [`NullTime::marshal_json`])
//! - driver values read with [`Scan`]
//! - driver values produced with [`Valuer`]
//!
//! ```rust
//! use oxide_sqltime::{DriverValue, NullTime, Scan, Time, Valuer};
//!
//! let time = Time::parse("9:05:00").unwrap();
//! assert_eq!(time.to_string(), "9:05");
//!
//! let mut column = NullTime::null();
//! column.scan(&DriverValue::from("13:30:45")).unwrap();
//! assert_eq!(column.as_option(), Some(Time::new(13, 30, 45)));
//! assert_eq!(NullTime::null().value(), DriverValue::Null);
//! ```
//!
//! With the `sqlite` feature (on by default) both types can be bound to and
//! read from sqlx SQLite queries.

mod codec;
mod driver;
mod error;
mod null_time;
#[cfg(feature = "sqlite")]
mod sqlite;
mod time;

pub use codec::{MarshalText, Scan, UnmarshalText, Valuer};
pub use driver::DriverValue;
pub use error::{Result, TimeError};
pub use null_time::NullTime;
pub use time::Time;
