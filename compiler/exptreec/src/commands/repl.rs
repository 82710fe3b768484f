//! Default command: the interactive shell on stdin/stdout.

use exptreec::{Repl, ReplConfig};

use super::fail;

pub fn run_repl(config: ReplConfig) {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), config);
    if let Err(err) = repl.run() {
        fail(err);
    }
}
