//! Token types for the predicate lexer.

use core::fmt;

use super::Span;

/// Reserved words of the predicate language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    And,
    Or,
    Not,
    Is,
    Null,
    True,
    False,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            _ => None,
        }
    }

    /// Returns the canonical (uppercase) spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Operands
    /// Single-quoted identifier (e.g., 'Count'), quotes stripped.
    QuotedIdentifier(String),
    /// Bare identifier (e.g., count).
    Identifier(String),
    /// Integer literal (e.g., 42)
    Integer(i64),
    /// Decimal literal (e.g., 2.5)
    Float(f64),
    /// Reserved word.
    Keyword(Keyword),

    // Placeholders
    /// ?
    Question,
    /// $, optionally followed by a name or number (e.g., $1, $user)
    Dollar(Option<String>),

    // Comparison operators
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,

    // Special
    /// End of input
    Eof,
    /// Lexical error with its message
    Error(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuotedIdentifier(name) => write!(f, "quoted identifier '{name}'"),
            Self::Identifier(name) => write!(f, "identifier {name}"),
            Self::Integer(n) => write!(f, "number {n}"),
            Self::Float(n) => write!(f, "number {n}"),
            Self::Keyword(kw) => f.write_str(kw.as_str()),
            Self::Question => f.write_str("'?'"),
            Self::Dollar(None) => f.write_str("'$'"),
            Self::Dollar(Some(name)) => write!(f, "'${name}'"),
            Self::Eq => f.write_str("'='"),
            Self::NotEq => f.write_str("'!='"),
            Self::Lt => f.write_str("'<'"),
            Self::LtEq => f.write_str("'<='"),
            Self::Gt => f.write_str("'>'"),
            Self::GtEq => f.write_str("'>='"),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
            Self::Eof => f.write_str("end of input"),
            Self::Error(message) => f.write_str(message),
        }
    }
}

/// A token with its span in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("AND"), Some(Keyword::And));
        assert_eq!(Keyword::from_str("and"), Some(Keyword::And));
        assert_eq!(Keyword::from_str("Or"), Some(Keyword::Or));
        assert_eq!(Keyword::from_str("Count"), None);
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::Not.as_str(), "NOT");
        assert_eq!(Keyword::Null.as_str(), "NULL");
    }

    #[test]
    fn test_token_as_keyword() {
        let and = Token::new(TokenKind::Keyword(Keyword::And), Span::new(0, 3));
        let question = Token::new(TokenKind::Question, Span::new(0, 1));
        assert_eq!(and.as_keyword(), Some(Keyword::And));
        assert_eq!(question.as_keyword(), None);
        assert!(!and.is_eof());
    }

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::GtEq.to_string(), "'>='");
        assert_eq!(TokenKind::Dollar(Some("1".into())).to_string(), "'$1'");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }
}
