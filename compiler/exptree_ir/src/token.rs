//! Lexical tokens.

use std::fmt;
use std::ops::Deref;

use crate::BinaryOp;

/// A lexical token.
///
/// Tokens carry no position information. A `Number` keeps its source text
/// verbatim; it is only converted to `f64` by the evaluator, so a malformed
/// literal such as `.` or `1.2.3` survives until evaluation.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Token {
    /// Digits and decimal points, optionally preceded by a unary `-`.
    Number(String),
    Operator(BinaryOp),
    LeftParen,
    RightParen,
}

impl Token {
    /// Shorthand for building a `Number` token.
    pub fn number(text: impl Into<String>) -> Self {
        Token::Number(text.into())
    }

    /// Check if this token is an operand.
    #[inline]
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// The operator this token carries, if any.
    #[inline]
    pub fn as_operator(&self) -> Option<BinaryOp> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// The source text of this token.
    pub fn text(&self) -> &str {
        match self {
            Token::Number(text) => text,
            Token::Operator(op) => op.symbol(),
            Token::LeftParen => "(",
            Token::RightParen => ")",
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "Number({text})"),
            Token::Operator(op) => write!(f, "Operator({op})"),
            Token::LeftParen => write!(f, "LeftParen"),
            Token::RightParen => write!(f, "RightParen"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// An ordered token sequence.
///
/// Used for both tokenizer output (infix order) and converter output
/// (postfix order). Displays as space-separated token text.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty token list.
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create an empty token list with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Token text in order, for comparing against plain string sequences.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::text).collect()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for TokenList {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
