use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn texts(source: &str) -> Vec<String> {
    tokenize(source).iter().map(ToString::to_string).collect()
}

#[test]
fn splits_operators_and_merges_digits() {
    assert_eq!(texts("3 + 4*2"), vec!["3", "+", "4", "*", "2"]);
}

#[test]
fn multi_character_literals() {
    assert_eq!(texts("12.75/100"), vec!["12.75", "/", "100"]);
    assert_eq!(texts(".5+5."), vec![".5", "+", "5."]);
}

#[test]
fn parentheses_are_isolated() {
    assert_eq!(
        tokenize("(1+2)*3").into_vec(),
        vec![
            Token::LeftParen,
            Token::number("1"),
            Token::Operator(BinaryOp::Add),
            Token::number("2"),
            Token::RightParen,
            Token::Operator(BinaryOp::Mul),
            Token::number("3"),
        ]
    );
}

#[test]
fn letters_are_dropped() {
    assert_eq!(texts("3+a4"), vec!["3", "+", "4"]);
    assert_eq!(texts("x = 7 % 2"), vec!["7", "2"]);
}

#[test]
fn dropped_characters_still_end_a_literal() {
    assert_eq!(texts("3a4"), vec!["3", "4"]);
    assert_eq!(texts("1 2"), vec!["1", "2"]);
}

#[test]
fn whitespace_of_any_kind_is_skipped() {
    assert_eq!(texts("\t1\n+\r\n2  "), vec!["1", "+", "2"]);
}

#[test]
fn empty_and_blank_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
    assert!(tokenize("hello").is_empty());
}

#[test]
fn malformed_literals_pass_through() {
    assert_eq!(texts("1.2.3 + ."), vec!["1.2.3", "+", "."]);
}

#[test]
fn leading_minus_joins_literal() {
    assert_eq!(texts("-3*2"), vec!["-3", "*", "2"]);
    assert_eq!(texts("-.5"), vec!["-.5"]);
}

#[test]
fn minus_after_operator_or_paren_joins_literal() {
    assert_eq!(texts("2--3"), vec!["2", "-", "-3"]);
    assert_eq!(texts("2 * -3"), vec!["2", "*", "-3"]);
    assert_eq!(texts("(-4)"), vec!["(", "-4", ")"]);
}

#[test]
fn minus_after_operand_is_subtraction() {
    assert_eq!(texts("2-3"), vec!["2", "-", "3"]);
    assert_eq!(texts("2 -3"), vec!["2", "-", "3"]);
    assert_eq!(texts("(1)-2"), vec!["(", "1", ")", "-", "2"]);
}

#[test]
fn minus_not_followed_by_digit_is_an_operator() {
    assert_eq!(texts("- 3"), vec!["-", "3"]);
    assert_eq!(texts("-(3)"), vec!["-", "(", "3", ")"]);
    assert_eq!(
        tokenize("-").into_vec(),
        vec![Token::Operator(BinaryOp::Sub)]
    );
}

proptest! {
    #[test]
    fn token_text_is_the_recognized_input(source in "[0-9. +*/()a-z\t-]{0,40}") {
        let expected: String = source
            .chars()
            .filter(|c| c.is_ascii_digit() || ".+-*/()".contains(*c))
            .collect();
        let joined: String = tokenize(&source).iter().map(Token::text).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn numbers_hold_only_literal_characters(source in any::<String>()) {
        for token in &tokenize(&source) {
            if let Token::Number(text) = token {
                let digits = text.strip_prefix('-').unwrap_or(text);
                prop_assert!(!digits.is_empty());
                prop_assert!(digits.chars().all(|c| c.is_ascii_digit() || c == '.'));
            }
        }
    }
}
