//! Expression tree construction from postfix tokens.

use exptree_ir::{ExprArena, ExprId, ExprTree, Token};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::StructuralError;

/// Build an expression tree from a postfix token sequence.
///
/// Operands become leaves. An operator pops two subtrees (first pop is the
/// right operand, second the left) and pushes a new internal node over
/// them. Exactly one subtree must remain at the end.
pub fn build(postfix: &[Token]) -> Result<ExprTree, StructuralError> {
    let mut arena = ExprArena::with_capacity(postfix.len());
    let mut stack: SmallVec<[ExprId; 16]> = SmallVec::new();

    for token in postfix {
        match token {
            Token::Number(text) => {
                stack.push(arena.alloc_literal(text.as_str()));
            }
            Token::Operator(op) => {
                let available = stack.len();
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(StructuralError::MissingOperand { op: *op, available });
                };
                trace!(%op, ?left, ?right, "combine");
                let Some(node) = arena.alloc_binary(*op, left, right) else {
                    return Err(StructuralError::MissingOperand { op: *op, available });
                };
                stack.push(node);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(StructuralError::UnexpectedParen {
                    paren: token.clone(),
                });
            }
        }
    }

    match stack.as_slice() {
        [root] => {
            debug!(nodes = arena.len(), "built expression tree");
            ExprTree::new(arena, *root).ok_or(StructuralError::Empty)
        }
        [] => Err(StructuralError::Empty),
        roots => Err(StructuralError::MultipleRoots { count: roots.len() }),
    }
}
