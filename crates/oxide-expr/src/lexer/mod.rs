//! Predicate lexer.
//!
//! Hand-written, single pass, left to right. Lexical problems are reported
//! as [`TokenKind::Error`] tokens and turned into parse errors by the parser.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
