//! Command handlers for the exptree CLI.
//!
//! Each submodule implements one command. Handlers print their own output
//! and exit with status 1 on failure.

mod batch;
mod debug;
mod eval;
mod repl;

pub use batch::batch_file;
pub use debug::{lex_expression, postfix_expression, tree_expression};
pub use eval::eval_expression;
pub use repl::run_repl;

/// Report a failure on stderr and exit with status 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}
