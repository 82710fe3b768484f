//! Debug commands: `lex`, `postfix` and `tree` for inspecting pipeline stages.

use exptreec::{build, render, render_svg, to_postfix, tokenize};

use super::fail;

/// Tokenize and display the token stream.
pub fn lex_expression(expression: &str) {
    let tokens = tokenize(expression);

    println!("Tokens for '{expression}' ({} tokens):", tokens.len());
    for token in &tokens {
        println!("  {token:?}");
    }
}

/// Display the postfix order.
pub fn postfix_expression(expression: &str) {
    let postfix = to_postfix(&tokenize(expression));
    println!("{postfix}");
}

/// Build the tree and draw it as text or SVG.
pub fn tree_expression(expression: &str, svg: bool) {
    let tree = match build(&to_postfix(&tokenize(expression))) {
        Ok(tree) => tree,
        Err(err) => fail(err),
    };

    if svg {
        print!("{}", render_svg(&tree));
    } else {
        print!("{}", render(&tree));
    }
}
