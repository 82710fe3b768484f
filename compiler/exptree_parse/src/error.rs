//! Structural errors from tree building.

use exptree_ir::{BinaryOp, Token};
use thiserror::Error;

/// The postfix sequence does not describe exactly one expression.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// An operator was reached with fewer than two operands on the stack.
    #[error("operator `{op}` needs two operands but only {available} available")]
    MissingOperand { op: BinaryOp, available: usize },

    /// Nothing to build: the input had no operands or operators.
    #[error("empty expression")]
    Empty,

    /// More than one subtree was left over: operands without operators between them.
    #[error("expression has {count} separate values; an operator is missing between them")]
    MultipleRoots { count: usize },

    /// A parenthesis reached the builder. Postfix sequences never contain them.
    #[error("unexpected `{paren}` in postfix sequence")]
    UnexpectedParen { paren: Token },
}
