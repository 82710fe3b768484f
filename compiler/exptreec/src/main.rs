//! Exptree CLI
//!
//! Arithmetic expression evaluator: interactive shell plus one-shot commands.

mod commands;

use commands::{
    batch_file, eval_expression, lex_expression, postfix_expression, run_repl, tree_expression,
};
use exptreec::{init_tracing, ReplConfig, DEFAULT_PROMPT};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        run_repl(repl_config(&[]));
        return;
    };

    match command.as_str() {
        "eval" => eval_expression(&expression_arg(&args, "eval")),
        "lex" => lex_expression(&expression_arg(&args, "lex")),
        "postfix" => postfix_expression(&expression_arg(&args, "postfix")),
        "tree" => {
            let svg = args.iter().skip(2).any(|a| a == "--svg");
            let rest: Vec<String> = args
                .iter()
                .skip(2)
                .filter(|a| *a != "--svg")
                .cloned()
                .collect();
            if rest.is_empty() {
                eprintln!("Usage: exptree tree <expression> [--svg]");
                std::process::exit(1);
            }
            tree_expression(&rest.join(" "), svg);
        }
        "batch" => {
            if args.len() < 3 {
                eprintln!("Usage: exptree batch <file>");
                std::process::exit(1);
            }
            batch_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" => {
            println!("exptree {}", env!("CARGO_PKG_VERSION"));
        }
        flag if flag.starts_with('-') => {
            run_repl(repl_config(&args[1..]));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Everything after the command name, joined, so unquoted input works too.
fn expression_arg(args: &[String], command: &str) -> String {
    if args.len() < 3 {
        eprintln!("Usage: exptree {command} <expression>");
        std::process::exit(1);
    }
    args[2..].join(" ")
}

/// Build the shell configuration from flags and `EXPTREE_PROMPT`.
fn repl_config(flags: &[String]) -> ReplConfig {
    let mut config = ReplConfig {
        prompt: std::env::var("EXPTREE_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_owned()),
        ..ReplConfig::default()
    };

    for flag in flags {
        match flag.as_str() {
            "--verbose" | "-v" => config.verbose = true,
            "--tree" => config.show_tree = true,
            "--svg" => config.svg = true,
            _ => {
                eprintln!("error: unknown flag '{flag}'");
                eprintln!("Valid flags: --verbose, --tree, --svg");
                std::process::exit(1);
            }
        }
    }
    config
}

fn print_usage() {
    println!("exptree - arithmetic expression evaluator");
    println!();
    println!("Usage: exptree [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)               Start the interactive shell");
    println!("  eval <expr>          Evaluate one expression");
    println!("  lex <expr>           Show the token stream");
    println!("  postfix <expr>       Show the postfix (RPN) order");
    println!("  tree <expr>          Draw the expression tree");
    println!("  batch <file>         Evaluate every line of a file in parallel");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Shell options:");
    println!("  --verbose, -v        Echo tokens, postfix order and tree for each line");
    println!("  --tree               Draw the tree for each line");
    println!("  --svg                Print an SVG diagram for each line");
    println!();
    println!("Tree options:");
    println!("  --svg                Emit SVG instead of text");
    println!();
    println!("Shell input ends at 'quit', ':q' or end of input.");
    println!("Set EXPTREE_PROMPT to change the prompt, RUST_LOG to enable tracing.");
    println!();
    println!("Examples:");
    println!("  exptree eval \"(3 + 4) * 2 - 5 / (1 + 0)\"");
    println!("  exptree postfix \"3 + 4*2\"");
    println!("  exptree tree \"6/3/2\" --svg > tree.svg");
    println!("  exptree -v");
}
