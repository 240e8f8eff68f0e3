//! Abstract syntax tree for predicates.

mod expression;

pub use expression::{ComparisonOp, Expr, Literal, LogicalOp, Placeholder};
