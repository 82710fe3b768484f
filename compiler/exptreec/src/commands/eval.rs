//! `eval`: evaluate one expression.

use exptreec::{evaluate_str, format_value};

use super::fail;

pub fn eval_expression(expression: &str) {
    match evaluate_str(expression) {
        Ok(value) => println!("{}", format_value(value)),
        Err(err) => fail(err),
    }
}
