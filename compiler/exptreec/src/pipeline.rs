//! The full tokenize → postfix → build → evaluate pipeline.

use exptree_eval::{evaluate, ParseError};
use exptree_ir::{ExprTree, TokenList};
use exptree_lexer::tokenize;
use exptree_parse::{build, to_postfix, StructuralError};
use thiserror::Error;
use tracing::debug_span;

/// Any failure of a single pipeline invocation.
///
/// The first stage that sees a problem reports it; later stages never run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Structure(#[from] StructuralError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Every product of one pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Tokenizer output, infix order.
    pub tokens: TokenList,
    /// Converter output.
    pub postfix: TokenList,
    pub tree: ExprTree,
    pub value: f64,
}

/// Run all four stages over `text`.
///
/// Each call owns everything it creates; nothing is shared between calls.
pub fn run_pipeline(text: &str) -> Result<Evaluation, PipelineError> {
    let span = debug_span!("pipeline", text);
    let _guard = span.enter();

    let tokens = tokenize(text);
    let postfix = to_postfix(&tokens);
    let tree = build(&postfix)?;
    let value = evaluate(&tree)?;

    Ok(Evaluation {
        tokens,
        postfix,
        tree,
        value,
    })
}

/// Run the pipeline and keep only the result.
pub fn evaluate_str(text: &str) -> Result<f64, PipelineError> {
    run_pipeline(text).map(|evaluation| evaluation.value)
}

/// Format a result for display.
///
/// Whole numbers print without a fraction (`11`, not `11.0`); non-finite
/// results print as `inf`, `-inf` and `NaN`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Collapse -0 so `0 * -1` prints `0`.
        return "0".to_owned();
    }
    value.to_string()
}
