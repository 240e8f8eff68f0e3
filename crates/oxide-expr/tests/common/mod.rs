#![allow(dead_code)]

use oxide_expr::{Expr, ParseError, Parser};

pub fn parse(input: &str) -> Expr {
    Parser::new(input)
        .parse_predicate()
        .unwrap_or_else(|e| panic!("Failed to parse: {input}\nError: {e:?}"))
}

pub fn parse_err(input: &str) -> ParseError {
    Parser::new(input)
        .parse_predicate()
        .expect_err(&format!("Expected parse error for: {input}"))
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(input).to_string() can be re-parsed and yields the same
/// string again.
pub fn round_trip(input: &str) {
    let ast1 = parse(input);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {input}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
