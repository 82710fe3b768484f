//! Parallel evaluation of independent expressions.
//!
//! Pipeline runs share no state, so a batch fans out over the rayon thread
//! pool with no coordination. Results keep input order.

use rayon::prelude::*;
use tracing::debug;

use crate::{evaluate_str, PipelineError};

/// One non-blank line of a batch source and its outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchEntry {
    /// 1-based line number in the source.
    pub line: usize,
    pub expression: String,
    pub result: Result<f64, PipelineError>,
}

/// Evaluate every expression in parallel.
pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<Result<f64, PipelineError>>
where
    S: AsRef<str> + Sync,
{
    debug!(count = expressions.len(), "evaluating batch");
    expressions
        .par_iter()
        .map(|expression| evaluate_str(expression.as_ref()))
        .collect()
}

/// Evaluate each non-blank line of `source`, in parallel.
pub fn batch_lines(source: &str) -> Vec<BatchEntry> {
    let (numbers, expressions): (Vec<usize>, Vec<&str>) = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .unzip();

    let results = evaluate_batch(&expressions);
    numbers
        .into_iter()
        .zip(expressions)
        .zip(results)
        .map(|((line, expression), result)| BatchEntry {
            line,
            expression: expression.to_owned(),
            result,
        })
        .collect()
}
