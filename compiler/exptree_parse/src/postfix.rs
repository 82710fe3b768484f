//! Infix to postfix conversion (shunting-yard).

use exptree_ir::{BinaryOp, Token, TokenList};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Entry on the working stack.
#[derive(Copy, Clone, Debug)]
enum Pending {
    Operator(BinaryOp),
    /// An open `(` waiting for its `)`.
    Group,
}

/// Reorder infix tokens into postfix order.
///
/// - Operands go straight to the output.
/// - An operator first pops every stacked operator that binds tighter, or
///   equally tight when the incoming operator is left-associative, so
///   `6/3/2` groups as `(6/3)/2`.
/// - `)` pops operators until the matching `(`, which is discarded. With no
///   matching `(` it pops the whole stack and carries on.
/// - At the end, remaining operators are popped to the output. A leftover
///   `(` is discarded.
///
/// The output never contains parentheses.
pub fn to_postfix(tokens: &[Token]) -> TokenList {
    let mut output = TokenList::with_capacity(tokens.len());
    let mut stack: SmallVec<[Pending; 8]> = SmallVec::new();

    for token in tokens {
        match token {
            Token::Number(_) => {
                trace!(%token, "operand -> output");
                output.push(token.clone());
            }
            Token::LeftParen => stack.push(Pending::Group),
            Token::RightParen => {
                let mut matched = false;
                while let Some(entry) = stack.pop() {
                    match entry {
                        Pending::Operator(op) => output.push(Token::Operator(op)),
                        Pending::Group => {
                            matched = true;
                            break;
                        }
                    }
                }
                if !matched {
                    trace!("unmatched `)` tolerated");
                }
            }
            Token::Operator(incoming) => {
                while let Some(&Pending::Operator(top)) = stack.last() {
                    if !pops_before(top, *incoming) {
                        break;
                    }
                    trace!(%top, %incoming, "pop stacked operator");
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Operator(*incoming));
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::Group => trace!("unmatched `(` discarded"),
        }
    }

    debug!(input = tokens.len(), output = output.len(), "converted to postfix");
    output
}

/// Whether `top`, already on the stack, must be emitted before `incoming`.
fn pops_before(top: BinaryOp, incoming: BinaryOp) -> bool {
    top.precedence() > incoming.precedence()
        || (top.precedence() == incoming.precedence() && incoming.is_left_assoc())
}
