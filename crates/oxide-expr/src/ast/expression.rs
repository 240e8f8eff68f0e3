//! Predicate expression AST.

use core::fmt;

use crate::lexer::Span;

/// A literal operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the decimal point so the value re-lexes as a float.
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Null => f.write_str("NULL"),
        }
    }
}

/// A parameter slot to be filled in by a later binding step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `?`, numbered from 1 in source order.
    Positional { position: usize },
    /// `$`, optionally carrying the name or number written after it.
    Dollar { name: Option<String> },
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional { .. } => f.write_str("?"),
            Self::Dollar { name: None } => f.write_str("$"),
            Self::Dollar { name: Some(name) } => write!(f, "${name}"),
        }
    }
}

/// Relational operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ComparisonOp {
    /// Returns the operator as written in canonical output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

/// Conjunction and disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// A parsed predicate.
///
/// Nodes appear in source order and parentheses are kept as [`Expr::Paren`],
/// so rendering with `Display` reproduces the structure that was parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A field name, either `'quoted'` or bare.
    Identifier {
        /// The name with quotes removed and `''` unescaped.
        name: String,
        /// Whether the name was written in single quotes.
        quoted: bool,
        /// Source span.
        span: Span,
    },

    /// A `?` or `$` parameter slot.
    Placeholder(Placeholder),

    /// A number, boolean or NULL.
    Literal(Literal),

    /// `left op right`.
    Comparison {
        left: Box<Expr>,
        op: ComparisonOp,
        right: Box<Expr>,
    },

    /// `left AND right` / `left OR right`.
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },

    /// `NOT expr`.
    Not(Box<Expr>),

    /// `expr IS [NOT] NULL`.
    IsNull {
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },

    /// A parenthesized expression.
    Paren(Box<Expr>),
}

impl Expr {
    /// Returns every placeholder in source order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&Placeholder> {
        let mut out = Vec::new();
        self.collect_placeholders(&mut out);
        out
    }

    fn collect_placeholders<'a>(&'a self, out: &mut Vec<&'a Placeholder>) {
        match self {
            Self::Placeholder(p) => out.push(p),
            Self::Comparison { left, right, .. } | Self::Logical { left, right, .. } => {
                left.collect_placeholders(out);
                right.collect_placeholders(out);
            }
            Self::Not(inner) | Self::Paren(inner) | Self::IsNull { expr: inner, .. } => {
                inner.collect_placeholders(out);
            }
            Self::Identifier { .. } | Self::Literal(_) => {}
        }
    }

    /// Returns the names of all identifiers in source order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_identifiers(&mut out);
        out
    }

    fn collect_identifiers<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Identifier { name, .. } => out.push(name),
            Self::Comparison { left, right, .. } | Self::Logical { left, right, .. } => {
                left.collect_identifiers(out);
                right.collect_identifiers(out);
            }
            Self::Not(inner) | Self::Paren(inner) | Self::IsNull { expr: inner, .. } => {
                inner.collect_identifiers(out);
            }
            Self::Placeholder(_) | Self::Literal(_) => {}
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier {
                name, quoted: true, ..
            } => write!(f, "'{}'", name.replace('\'', "''")),
            Self::Identifier { name, .. } => f.write_str(name),
            Self::Placeholder(p) => write!(f, "{p}"),
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::Comparison { left, op, right } => {
                write!(f, "{left} {} {right}", op.as_str())
            }
            Self::Logical { left, op, right } => write!(f, "{left} {} {right}", op.as_str()),
            Self::Not(inner) => write!(f, "NOT {inner}"),
            Self::IsNull {
                expr,
                negated: false,
            } => write!(f, "{expr} IS NULL"),
            Self::IsNull {
                expr,
                negated: true,
            } => write!(f, "{expr} IS NOT NULL"),
            Self::Paren(inner) => write!(f, "({inner})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expr {
        Expr::Identifier {
            name: String::from(name),
            quoted: true,
            span: Span::default(),
        }
    }

    #[test]
    fn test_quoted_identifier_display_escapes_quotes() {
        assert_eq!(ident("it's").to_string(), "'it''s'");
    }

    #[test]
    fn test_comparison_display() {
        let expr = Expr::Comparison {
            left: Box::new(ident("Count")),
            op: ComparisonOp::GtEq,
            right: Box::new(Expr::Placeholder(Placeholder::Positional { position: 1 })),
        };
        assert_eq!(expr.to_string(), "'Count' >= ?");
    }

    #[test]
    fn test_float_literal_keeps_decimal_point() {
        assert_eq!(Literal::Float(1.0).to_string(), "1.0");
    }

    #[test]
    fn test_placeholders_in_order() {
        let expr = Expr::Logical {
            left: Box::new(Expr::Placeholder(Placeholder::Dollar {
                name: Some(String::from("a")),
            })),
            op: LogicalOp::Or,
            right: Box::new(Expr::Not(Box::new(Expr::Placeholder(
                Placeholder::Positional { position: 1 },
            )))),
        };
        assert_eq!(
            expr.placeholders(),
            vec![
                &Placeholder::Dollar {
                    name: Some(String::from("a"))
                },
                &Placeholder::Positional { position: 1 },
            ]
        );
    }
}
