//! Property-based tests for the whole pipeline.
//!
//! Generated expressions are evaluated both through the pipeline and by a
//! direct reference computation that performs the same floating-point
//! operations in the same order, so results must match bit for bit.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use exptreec::{evaluate_str, run_pipeline, PipelineError, StructuralError};
use proptest::prelude::*;

/// Generated expression shape.
#[derive(Clone, Debug)]
enum Expr {
    Num(u32),
    Bin(Box<Expr>, char, Box<Expr>),
}

fn op_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = (0u32..1000).prop_map(Expr::Num);
    leaf.prop_recursive(6, 64, 2, |inner| {
        (inner.clone(), op_strategy(), inner)
            .prop_map(|(left, op, right)| Expr::Bin(Box::new(left), op, Box::new(right)))
    })
}

fn apply(op: char, lhs: f64, rhs: f64) -> f64 {
    match op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        _ => lhs / rhs,
    }
}

/// Fully parenthesized source text.
fn source(expr: &Expr) -> String {
    match expr {
        Expr::Num(n) => n.to_string(),
        Expr::Bin(left, op, right) => format!("({} {} {})", source(left), op, source(right)),
    }
}

fn reference(expr: &Expr) -> f64 {
    match expr {
        Expr::Num(n) => f64::from(*n),
        Expr::Bin(left, op, right) => apply(*op, reference(left), reference(right)),
    }
}

/// Reference for a flat `a op b op c ...` chain: fold `* /` into terms left
/// to right, then fold `+ -` over the terms left to right.
fn flat_reference(first: u32, rest: &[(char, u32)]) -> f64 {
    let mut terms: Vec<(char, f64)> = vec![('+', f64::from(first))];
    for &(op, n) in rest {
        let n = f64::from(n);
        if op == '*' || op == '/' {
            let (sign, term) = terms.pop().unwrap();
            terms.push((sign, apply(op, term, n)));
        } else {
            terms.push((op, n));
        }
    }
    let mut terms = terms.into_iter();
    let (_, mut total) = terms.next().unwrap();
    for (op, term) in terms {
        total = apply(op, total, term);
    }
    total
}

fn same(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn parenthesized_expressions_match_reference(expr in expr_strategy()) {
        let text = source(&expr);
        let value = evaluate_str(&text).unwrap();
        prop_assert!(same(value, reference(&expr)), "{} = {} vs {}", text, value, reference(&expr));
    }

    #[test]
    fn flat_expressions_follow_precedence(
        first in 0u32..100,
        rest in proptest::collection::vec((op_strategy(), 0u32..100), 0..12),
    ) {
        let mut text = first.to_string();
        for (op, n) in &rest {
            text.push_str(&format!(" {} {}", op, n));
        }
        let value = evaluate_str(&text).unwrap();
        let expected = flat_reference(first, &rest);
        prop_assert!(same(value, expected), "{} = {} vs {}", text, value, expected);
    }

    #[test]
    fn pipeline_is_pure(text in "[0-9 .+*/()-]{0,32}") {
        let first = format!("{:?}", run_pipeline(&text));
        let second = format!("{:?}", run_pipeline(&text));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn well_formed_input_never_fails_structurally(expr in expr_strategy()) {
        let result = evaluate_str(&source(&expr));
        let structural = matches!(result, Err(PipelineError::Structure(_)));
        prop_assert!(!structural);
    }

    #[test]
    fn adjacent_numbers_are_multiple_roots(a in 0u32..1000, b in 0u32..1000) {
        prop_assert_eq!(
            evaluate_str(&format!("{} {}", a, b)),
            Err(PipelineError::Structure(StructuralError::MultipleRoots { count: 2 }))
        );
    }
}
