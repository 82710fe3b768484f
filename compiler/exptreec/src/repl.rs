//! Line-oriented interactive shell.

use std::io::{self, BufRead, Write};

use exptree_fmt::{render, render_svg};
use tracing::info;

use crate::{format_value, run_pipeline};

/// Prompt printed before each line unless overridden.
pub const DEFAULT_PROMPT: &str = "> ";

/// Lines that end the session.
const QUIT_COMMANDS: [&str; 2] = ["quit", ":q"];

/// Whether `line` (already trimmed) ends the session.
pub fn is_quit_command(line: &str) -> bool {
    QUIT_COMMANDS.contains(&line)
}

/// What the shell prints for each expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Echo tokens and postfix order, and draw the tree, before the result.
    pub verbose: bool,
    /// Draw the tree as text before the result.
    pub show_tree: bool,
    /// Print an SVG diagram of the tree before the result.
    pub svg: bool,
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            verbose: false,
            show_tree: false,
            svg: false,
            prompt: DEFAULT_PROMPT.to_owned(),
        }
    }
}

/// Counts for a finished session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that produced a result.
    pub evaluated: usize,
    /// Lines that produced an error.
    pub failed: usize,
}

/// Reads expressions from `input` and writes results to `output`.
pub struct Repl<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Repl {
            input,
            output,
            config,
        }
    }

    /// Run until a quit command or end of input.
    ///
    /// A failing expression is reported and the loop moves on to the next
    /// line; only I/O errors end the session early. Invalid UTF-8 is decoded
    /// lossily, so stray bytes reach the tokenizer as U+FFFD and are dropped.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut line = Vec::new();

        loop {
            if !self.config.prompt.is_empty() {
                write!(self.output, "{}", self.config.prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&line);
            let expression = text.trim();
            if expression.is_empty() {
                continue;
            }
            if is_quit_command(expression) {
                break;
            }

            if self.eval_line(expression)? {
                summary.evaluated += 1;
            } else {
                summary.failed += 1;
            }
        }

        info!(
            evaluated = summary.evaluated,
            failed = summary.failed,
            "session finished"
        );
        Ok(summary)
    }

    /// Evaluate one expression and print the outcome. Returns whether it succeeded.
    fn eval_line(&mut self, expression: &str) -> io::Result<bool> {
        let run = match run_pipeline(expression) {
            Ok(run) => run,
            Err(err) => {
                writeln!(self.output, "error: {err}")?;
                return Ok(false);
            }
        };

        if self.config.verbose {
            writeln!(self.output, "Tokens:  {}", run.tokens)?;
            writeln!(self.output, "Postfix: {}", run.postfix)?;
        }
        if self.config.verbose || self.config.show_tree {
            write!(self.output, "{}", render(&run.tree))?;
        }
        if self.config.svg {
            write!(self.output, "{}", render_svg(&run.tree))?;
        }
        writeln!(self.output, "Result: {}", format_value(run.value))?;
        Ok(true)
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
