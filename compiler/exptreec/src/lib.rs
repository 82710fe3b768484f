//! Exptree driver.
//!
//! Chains the four pipeline stages and hosts the line-oriented front ends:
//!
//! ```text
//! text ─tokenize─▶ tokens ─to_postfix─▶ postfix ─build─▶ tree ─evaluate─▶ f64
//! ```
//!
//! - [`run_pipeline`]: one expression in, every intermediate product out.
//! - [`Repl`]: reads expressions line by line until `quit`, `:q` or EOF.
//! - [`evaluate_batch`]: independent expressions evaluated in parallel.
//!
//! # Debugging
//!
//! Stage-level tracing is available through `RUST_LOG`, e.g.
//! `RUST_LOG=exptree_parse=trace exptree eval "1+2*3"`. See [`init_tracing`].

mod batch;
mod logging;
mod pipeline;
mod repl;

pub use batch::{batch_lines, evaluate_batch, BatchEntry};
pub use logging::init_tracing;
pub use pipeline::{evaluate_str, format_value, run_pipeline, Evaluation, PipelineError};
pub use repl::{is_quit_command, Repl, ReplConfig, SessionSummary, DEFAULT_PROMPT};

// Stage entry points, so front ends depend on the driver alone.
pub use exptree_eval::{evaluate, ParseError};
pub use exptree_fmt::{render, render_svg};
pub use exptree_ir::{ExprTree, Token, TokenList};
pub use exptree_lexer::tokenize;
pub use exptree_parse::{build, to_postfix, StructuralError};
