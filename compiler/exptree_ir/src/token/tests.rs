use pretty_assertions::assert_eq;

use super::*;

fn sample() -> TokenList {
    vec![
        Token::LeftParen,
        Token::number("1.5"),
        Token::Operator(BinaryOp::Add),
        Token::number("-2"),
        Token::RightParen,
        Token::Operator(BinaryOp::Div),
        Token::number("3"),
    ]
    .into()
}

#[test]
fn display_joins_token_text_with_spaces() {
    assert_eq!(sample().to_string(), "( 1.5 + -2 ) / 3");
    assert_eq!(TokenList::new().to_string(), "");
}

#[test]
fn texts_match_source_fragments() {
    assert_eq!(sample().texts(), vec!["(", "1.5", "+", "-2", ")", "/", "3"]);
}

#[test]
fn debug_shows_kind_tags() {
    assert_eq!(format!("{:?}", Token::number("4")), "Number(4)");
    assert_eq!(format!("{:?}", Token::Operator(BinaryOp::Mul)), "Operator(*)");
    assert_eq!(format!("{:?}", Token::RightParen), "RightParen");
}

#[test]
fn classification_helpers() {
    assert!(Token::number("7").is_operand());
    assert!(!Token::LeftParen.is_operand());
    assert_eq!(Token::Operator(BinaryOp::Sub).as_operator(), Some(BinaryOp::Sub));
    assert_eq!(Token::number("7").as_operator(), None);
}

#[test]
fn collects_from_iterator() {
    let list: TokenList = sample().iter().filter(|t| t.is_operand()).cloned().collect();
    assert_eq!(list.len(), 3);
    assert_eq!(list.into_vec(), vec![Token::number("1.5"), Token::number("-2"), Token::number("3")]);
}
