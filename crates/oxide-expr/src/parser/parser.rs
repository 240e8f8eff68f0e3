//! Predicate parser implementation.

use tracing::debug;

use super::error::ParseError;
use super::pratt::{
    NOT_BINDING_POWER, infix_binding_power, token_to_comparison_op, token_to_logical_op,
};
use crate::ast::{Expr, Literal, Placeholder};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// Maximum nesting of parentheses and prefix `NOT` in one predicate.
pub const MAX_DEPTH: usize = 128;

/// Predicate parser.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    /// Counter for `?` placeholders.
    param_counter: usize,
    /// Open parentheses and `NOT`s enclosing the current position.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            param_counter: 0,
            depth: 0,
        }
    }

    /// Parses a complete predicate; the whole input must be consumed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` describing the first lexical or structural
    /// problem. No partial tree is returned.
    pub fn parse_predicate(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression(0)?;
        if !self.current.is_eof() {
            return Err(self.error_at_current("AND, OR, or end of input"));
        }
        Ok(expr)
    }

    /// Parses an expression using Pratt parsing.
    fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let start = self.current.span;
        let mut lhs = self.parse_prefix()?;

        while let Some((l_bp, r_bp)) = infix_binding_power(&self.current.kind) {
            if l_bp < min_bp {
                break;
            }

            if let Some(op) = token_to_logical_op(&self.current.kind) {
                self.advance();
                let rhs = self.parse_expression(r_bp)?;
                lhs = Expr::Logical {
                    left: Box::new(lhs),
                    op,
                    right: Box::new(rhs),
                };
                continue;
            }

            // Comparisons and IS do not chain: `a = b = c` needs parentheses.
            if matches!(lhs, Expr::Comparison { .. } | Expr::IsNull { .. }) {
                return Err(ParseError::new(
                    "Comparison operators cannot be chained",
                    start.merge(self.current.span),
                ));
            }

            if self.check_keyword(Keyword::Is) {
                self.advance();
                let negated = if self.check_keyword(Keyword::Not) {
                    self.advance();
                    true
                } else {
                    false
                };
                self.expect_keyword(Keyword::Null)?;
                lhs = Expr::IsNull {
                    expr: Box::new(lhs),
                    negated,
                };
            } else if let Some(op) = token_to_comparison_op(&self.current.kind) {
                self.advance();
                let rhs = self.parse_expression(r_bp)?;
                lhs = Expr::Comparison {
                    left: Box::new(lhs),
                    op,
                    right: Box::new(rhs),
                };
            } else {
                break;
            }
        }

        Ok(lhs)
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        if self.check_keyword(Keyword::Not) {
            self.enter_nested()?;
            self.advance();
            let operand = self.parse_expression(NOT_BINDING_POWER)?;
            self.depth -= 1;
            return Ok(Expr::Not(Box::new(operand)));
        }

        self.parse_primary()
    }

    /// Parses an operand.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current.clone();

        let expr = match token.kind {
            TokenKind::QuotedIdentifier(name) => Expr::Identifier {
                name,
                quoted: true,
                span: token.span,
            },
            TokenKind::Identifier(name) => Expr::Identifier {
                name,
                quoted: false,
                span: token.span,
            },

            // Parameter placeholders
            TokenKind::Question => {
                self.param_counter += 1;
                Expr::Placeholder(Placeholder::Positional {
                    position: self.param_counter,
                })
            }
            TokenKind::Dollar(name) => Expr::Placeholder(Placeholder::Dollar { name }),

            // Literals
            TokenKind::Integer(n) => Expr::Literal(Literal::Integer(n)),
            TokenKind::Float(f) => Expr::Literal(Literal::Float(f)),
            TokenKind::Keyword(Keyword::True) => Expr::Literal(Literal::Boolean(true)),
            TokenKind::Keyword(Keyword::False) => Expr::Literal(Literal::Boolean(false)),
            TokenKind::Keyword(Keyword::Null) => Expr::Literal(Literal::Null),

            TokenKind::LeftParen => {
                self.enter_nested()?;
                self.advance();
                let inner = self.parse_expression(0)?;
                self.expect(&TokenKind::RightParen)?;
                self.depth -= 1;
                return Ok(Expr::Paren(Box::new(inner)));
            }

            _ => return Err(self.error_at_current("expression")),
        };

        self.advance();
        Ok(expr)
    }

    // --- Helper methods ---

    /// Enters one level of `(` or `NOT` nesting.
    fn enter_nested(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new(
                "Expression nested too deeply",
                self.current.span,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.as_keyword() == Some(keyword)
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(kind.to_string()))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(keyword.as_str()))
        }
    }

    /// Builds the error for the current token: the lexer's own message for
    /// an error token, otherwise an "expected ..., found ..." error.
    fn error_at_current(&self, expected: impl Into<String>) -> ParseError {
        let span = self.current.span;
        match &self.current.kind {
            TokenKind::Error(message) => {
                debug!(%message, start = span.start, "lexical error in predicate");
                ParseError::new(message.clone(), span)
            }
            TokenKind::Eof => ParseError::unexpected_eof(expected, span),
            other => ParseError::unexpected(expected, other.clone(), span),
        }
    }
}
