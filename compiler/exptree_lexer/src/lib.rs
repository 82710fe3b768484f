//! Tokenizer for arithmetic expressions.
//!
//! Scans text left to right into a [`TokenList`]:
//! - Runs of digits and `.` merge into one `Number` token.
//! - `+ - * / ( )` each become a single token.
//! - Whitespace separates literals and is otherwise skipped.
//! - Any other character is dropped without a diagnostic. It still ends
//!   the literal being accumulated, so `3a4` lexes as `3 4`.
//!
//! # Unary minus
//!
//! A `-` in operand position (at the start, after an operator, or after
//! `(`) that is immediately followed by a digit or `.` becomes the sign of
//! the literal: `-3*2` lexes as `-3 * 2` and `2--3` as `2 - -3`. Anywhere
//! else `-` is the subtraction operator, including before `(`.
//!
//! Tokenizing never fails. Malformed literals such as `.` or `1.2.3` are
//! passed through and rejected by the evaluator.

use exptree_ir::{BinaryOp, Token, TokenList};
use tracing::{debug, trace};

/// Tokenize `source`.
pub fn tokenize(source: &str) -> TokenList {
    let mut tokens = TokenList::new();
    let mut pending = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if is_literal_char(c) {
            pending.push(c);
            continue;
        }
        flush_literal(&mut pending, &mut tokens);

        match c {
            '(' => tokens.push(Token::LeftParen),
            ')' => tokens.push(Token::RightParen),
            '-' if in_operand_position(&tokens)
                && chars.peek().copied().is_some_and(is_literal_char) =>
            {
                pending.push('-');
            }
            _ => {
                if let Some(op) = BinaryOp::from_char(c) {
                    tokens.push(Token::Operator(op));
                } else if !c.is_whitespace() {
                    trace!(?c, "dropping unrecognized character");
                }
            }
        }
    }
    flush_literal(&mut pending, &mut tokens);

    debug!(count = tokens.len(), "tokenized");
    tokens
}

#[inline]
fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// A value is expected next: nothing yet, or the last token was an operator or `(`.
fn in_operand_position(tokens: &TokenList) -> bool {
    matches!(
        tokens.last(),
        None | Some(Token::Operator(_) | Token::LeftParen)
    )
}

fn flush_literal(pending: &mut String, tokens: &mut TokenList) {
    if !pending.is_empty() {
        tokens.push(Token::Number(std::mem::take(pending)));
    }
}

#[cfg(test)]
mod tests;
