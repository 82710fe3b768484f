//! Exptree Eval - recursive evaluator for expression trees.
//!
//! Leaves are parsed as `f64` when they are reached; internal nodes evaluate
//! their left subtree, then their right subtree, then apply their operator.
//!
//! # Division by zero
//!
//! Division follows IEEE-754: `1/0` is `inf`, `-1/0` is `-inf` and `0/0`
//! is `NaN`. Evaluation only fails on a literal that is not a number.

mod errors;
mod operators;

use exptree_ir::{ExprId, ExprKind, ExprTree};
use exptree_stack::ensure_sufficient_stack;
use tracing::debug;

pub use errors::ParseError;
pub use operators::apply_binary;

/// Evaluate a whole tree.
pub fn evaluate(tree: &ExprTree) -> Result<f64, ParseError> {
    let value = eval_node(tree, tree.root())?;
    debug!(value, nodes = tree.node_count(), "evaluated");
    Ok(value)
}

fn eval_node(tree: &ExprTree, id: ExprId) -> Result<f64, ParseError> {
    ensure_sufficient_stack(|| match tree.get(id) {
        ExprKind::Literal(text) => parse_literal(text),
        ExprKind::Binary { op, left, right } => {
            let lhs = eval_node(tree, *left)?;
            let rhs = eval_node(tree, *right)?;
            Ok(apply_binary(*op, lhs, rhs))
        }
    })
}

/// Parse literal text as produced by the tokenizer.
///
/// Only the tokenizer's literal grammar is accepted: an optional `-`, then
/// digits with at most one decimal point. Forms `f64::from_str` would also
/// take, like `inf` or `1e3`, are rejected.
pub fn parse_literal(text: &str) -> Result<f64, ParseError> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let lexical = !unsigned.is_empty()
        && unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    match text.parse::<f64>() {
        Ok(value) if lexical => Ok(value),
        _ => Err(ParseError::new(text)),
    }
}
