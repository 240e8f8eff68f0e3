//! Binding powers for the Pratt expression loop.

use crate::ast::{ComparisonOp, LogicalOp};
use crate::lexer::{Keyword, TokenKind};

/// Binding power of the operand of prefix `NOT`.
///
/// Higher than `AND` so `NOT a AND b` is `(NOT a) AND b`, lower than the
/// comparisons so `NOT a = b` is `NOT (a = b)`.
pub const NOT_BINDING_POWER: u8 = 5;

/// Returns the infix binding power for a token as `(left_bp, right_bp)`.
///
/// Higher binds tighter; `left_bp < right_bp` makes the operator
/// left-associative. Returns `None` if the token is not an infix or
/// postfix operator.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(Keyword::Is) => Some((7, 8)),
        _ => None,
    }
}

#[must_use]
pub const fn token_to_comparison_op(kind: &TokenKind) -> Option<ComparisonOp> {
    match kind {
        TokenKind::Eq => Some(ComparisonOp::Eq),
        TokenKind::NotEq => Some(ComparisonOp::NotEq),
        TokenKind::Lt => Some(ComparisonOp::Lt),
        TokenKind::LtEq => Some(ComparisonOp::LtEq),
        TokenKind::Gt => Some(ComparisonOp::Gt),
        TokenKind::GtEq => Some(ComparisonOp::GtEq),
        _ => None,
    }
}

#[must_use]
pub const fn token_to_logical_op(kind: &TokenKind) -> Option<LogicalOp> {
    match kind {
        TokenKind::Keyword(Keyword::And) => Some(LogicalOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(LogicalOp::Or),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        let or_bp = infix_binding_power(&TokenKind::Keyword(Keyword::Or)).unwrap();
        let and_bp = infix_binding_power(&TokenKind::Keyword(Keyword::And)).unwrap();
        let gt_bp = infix_binding_power(&TokenKind::Gt).unwrap();

        assert!(and_bp.0 > or_bp.0);
        assert!(NOT_BINDING_POWER > and_bp.0);
        assert!(gt_bp.0 > NOT_BINDING_POWER);
    }

    #[test]
    fn test_left_associativity() {
        let (left, right) = infix_binding_power(&TokenKind::Keyword(Keyword::And)).unwrap();
        assert!(left < right);
    }

    #[test]
    fn test_operand_tokens_are_not_infix() {
        assert_eq!(infix_binding_power(&TokenKind::Question), None);
        assert_eq!(infix_binding_power(&TokenKind::LeftParen), None);
    }

    #[test]
    fn test_token_conversions() {
        assert_eq!(
            token_to_comparison_op(&TokenKind::LtEq),
            Some(ComparisonOp::LtEq)
        );
        assert_eq!(token_to_comparison_op(&TokenKind::Question), None);
        assert_eq!(
            token_to_logical_op(&TokenKind::Keyword(Keyword::Or)),
            Some(LogicalOp::Or)
        );
        assert_eq!(token_to_logical_op(&TokenKind::Keyword(Keyword::Not)), None);
    }
}
