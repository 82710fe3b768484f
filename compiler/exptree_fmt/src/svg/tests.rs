#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use exptree_ir::{BinaryOp, ExprArena};
use exptree_lexer::tokenize;
use exptree_parse::{build, to_postfix};
use pretty_assertions::assert_eq;

use super::*;

fn tree_for(source: &str) -> ExprTree {
    match build(&to_postfix(&tokenize(source))) {
        Ok(tree) => tree,
        Err(err) => panic!("{source:?} should build: {err}"),
    }
}

#[test]
fn single_node_document() {
    let expected = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 480 154" width="480" height="154">
  <g><circle cx="44" cy="24" r="18" fill="#07192a" stroke="#88ffd1" stroke-width="1"/><text x="44" y="29" fill="#e6eef6" font-size="12" text-anchor="middle">42</text></g>
</svg>
"##;
    assert_eq!(render_svg(&tree_for("42")), expected);
}

#[test]
fn children_are_centred_under_parent() {
    let svg = render_svg(&tree_for("1+2"));
    assert!(svg.contains(r#"viewBox="0 0 480 244""#), "{svg}");
    // root at x=76; children 64 apart on the next level
    assert!(svg.contains(r#"<circle cx="76" cy="24""#), "{svg}");
    assert!(svg.contains(r#"<circle cx="44" cy="114""#), "{svg}");
    assert!(svg.contains(r#"<circle cx="108" cy="114""#), "{svg}");
    assert!(svg.contains(
        r##"<line x1="76" y1="42" x2="44" y2="96" stroke="#57e6b6" stroke-width="1.5"/>"##
    ));
    assert!(svg.contains(
        r##"<line x1="76" y1="42" x2="108" y2="96" stroke="#60a5fa" stroke-width="1.5"/>"##
    ));
}

#[test]
fn one_circle_per_node_and_one_line_per_edge() {
    let tree = tree_for("(3 + 4) * 2 - 5 / (1 + 0)");
    let svg = render_svg(&tree);
    assert_eq!(svg.matches("<circle").count(), tree.node_count());
    assert_eq!(svg.matches("<line").count(), tree.node_count() - 1);
}

#[test]
fn wide_trees_grow_the_canvas() {
    let tree = tree_for("1+2+3+4+5+6+7+8+9");
    let svg = render_svg(&tree);
    // 9 leaves * 48 + 8 gaps * 16 = 560, plus side margins
    assert!(svg.contains(r#"width="600""#), "{svg}");
}

#[test]
fn labels_are_escaped() {
    let mut arena = ExprArena::new();
    let odd = arena.alloc_literal("<&>");
    let one = arena.alloc_literal("1");
    let root = arena.alloc_binary(BinaryOp::Add, odd, one).unwrap();
    let svg = render_svg(&ExprTree::new(arena, root).unwrap());
    assert!(svg.contains(">&lt;&amp;&gt;</text>"), "{svg}");
    assert!(!svg.contains("<&>"));
}
