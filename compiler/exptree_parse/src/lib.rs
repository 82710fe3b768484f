//! Exptree Parse - from infix tokens to an expression tree.
//!
//! Two stages, each a plain function over token slices:
//!
//! 1. [`to_postfix`]: shunting-yard reordering of infix tokens into postfix
//!    (Reverse Polish) order. Never fails; unbalanced parentheses are
//!    tolerated.
//! 2. [`build`]: stack-based construction of an [`ExprTree`] from postfix
//!    tokens. Fails with [`StructuralError`] when the sequence does not
//!    describe exactly one well-formed expression.
//!
//! [`ExprTree`]: exptree_ir::ExprTree

mod build;
mod error;
mod postfix;

pub use build::build;
pub use error::StructuralError;
pub use postfix::to_postfix;
