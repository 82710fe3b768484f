//! Evaluation errors.

use thiserror::Error;

/// A leaf's text is not a number.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid numeric literal `{literal}`")]
pub struct ParseError {
    pub literal: String,
}

impl ParseError {
    pub fn new(literal: impl Into<String>) -> Self {
        ParseError {
            literal: literal.into(),
        }
    }
}
