//! Binary operator implementations.

use exptree_ir::BinaryOp;

/// Apply `op` to two operands, left operand first.
///
/// Plain IEEE-754 arithmetic: division by zero yields an infinity or NaN.
#[inline]
pub fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Div => lhs / rhs,
    }
}
