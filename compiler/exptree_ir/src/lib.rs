//! Exptree IR - shared types for the expression pipeline.
//!
//! This crate contains the data that flows between pipeline stages:
//! - `BinaryOp` and its precedence table
//! - `Token` and `TokenList` for tokenizer and converter output
//! - `ExprArena`, `ExprId` and `ExprTree` for the expression tree
//!
//! # Design Philosophy
//!
//! - **Classify once**: tokens carry their kind as an enum tag, decided by
//!   the tokenizer. Later stages never re-inspect token text.
//! - **Flatten the tree**: nodes live in a `Vec` and refer to their children
//!   by `ExprId(u32)`. Dropping the tree frees every node at once.

mod arena;
mod expr_id;
mod operator;
mod token;

pub use arena::{ExprArena, ExprKind, ExprTree};
pub use expr_id::ExprId;
pub use operator::BinaryOp;
pub use token::{Token, TokenList};
