//! Predicate parser
//!
//! A hand-written recursive descent parser with Pratt operator precedence.

mod error;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;

pub use error::ParseError;
pub use parser::{MAX_DEPTH, Parser};
