//! # oxide-expr
//!
//! A parser for the small predicate language used to describe filters on
//! query results:
//!
//! - `'quoted'` and bare identifiers
//! - `?` positional placeholders and `$` placeholders
//! - the comparison operators `=`, `!=`, `<>`, `<`, `<=`, `>`, `>=`
//! - `AND`, `OR`, `NOT`, `IS [NOT] NULL` and parentheses
//!
//! ```rust
//! use oxide_expr::{Expr, parse};
//!
//! let expr = parse("'Count' > ? AND $ = ?").unwrap();
//! assert!(matches!(expr, Expr::Logical { .. }));
//! assert_eq!(expr.to_string(), "'Count' > ? AND $ = ?");
//!
//! let err = parse("'Unclosed").unwrap_err();
//! assert!(err.message.contains("Unterminated"));
//! ```
//!
//! The parser only checks structure. Evaluating a predicate and binding its
//! placeholders is left to the caller.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{ComparisonOp, Expr, Literal, LogicalOp, Placeholder};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use parser::{MAX_DEPTH, ParseError, Parser};

/// Parses `input` as a predicate.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not a well-formed predicate.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    tracing::trace!(input, "parsing predicate");
    Parser::new(input).parse_predicate()
}
