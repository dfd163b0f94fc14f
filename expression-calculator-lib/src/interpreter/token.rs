use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression.
///
/// A token's variant is decided once, at tokenization time; nothing
/// downstream re-inspects the source text.
#[derive(Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

pub static SYMBOLS: [char; 7] = ['+', '-', '*', '/', '%', '(', ')'];

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = EvaluationError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Operator(BinaryOperator::Add)),
            "-" => Ok(Token::Operator(BinaryOperator::Subtract)),
            "*" => Ok(Token::Operator(BinaryOperator::Multiply)),
            "/" => Ok(Token::Operator(BinaryOperator::Divide)),
            "%" => Ok(Token::Operator(BinaryOperator::Remainder)),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            input => parse_number(input),
        }
    }
}

/// Accepts only plain decimal literals, so text like `inf` or `1e3` that
/// `f64` would otherwise parse is still rejected.
fn parse_number(text: &str) -> Result<Token, EvaluationError> {
    let plain_decimal = !text.is_empty()
        && text
            .chars()
            .all(|character| character.is_ascii_digit() || character == '.');
    let invalid = EvaluationError::InvalidCharacter(text.chars().next().unwrap_or(' '));
    if !plain_decimal {
        return Err(invalid);
    }
    match text.parse::<f64>() {
        Ok(value) => Ok(Token::Number(value)),
        Err(_) => Err(invalid),
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
