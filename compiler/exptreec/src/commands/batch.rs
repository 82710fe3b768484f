//! `batch`: evaluate every line of a file.

use exptreec::{batch_lines, format_value};

use super::fail;

/// Evaluate each non-blank line of `path`, printing one result per line.
///
/// Invalid UTF-8 only affects the line it appears on. Exits with status 1 if
/// any line failed.
pub fn batch_file(path: &str) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => fail(format_args!("cannot read '{path}': {err}")),
    };

    let entries = batch_lines(&String::from_utf8_lossy(&bytes));
    let mut failures = 0_usize;
    for entry in &entries {
        match &entry.result {
            Ok(value) => println!(
                "{}: {} = {}",
                entry.line,
                entry.expression,
                format_value(*value)
            ),
            Err(err) => {
                failures += 1;
                println!("{}: {} error: {err}", entry.line, entry.expression);
            }
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {} expressions failed", entries.len());
        std::process::exit(1);
    }
}
