pub mod error;
pub mod evaluator;
pub mod history;
pub mod lexer;
mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;

pub use crate::interpreter::operator::BinaryOperator;

/// The single user-visible failure string. Internally every failure has a
/// typed [`EvaluationError`] kind; only the presentation layer collapses
/// them into this.
pub const ERROR_DISPLAY: &str = "Error";

/// Evaluates an infix arithmetic expression to a number.
///
/// Runs the full pipeline: tokenize, reorder to postfix, evaluate. Any
/// stage failure short-circuits; no partial result is ever surfaced.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using digits, `.`
///   and the operators `+ - * / % ( )`.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use expression_calculator::interpreter::evaluate_expression;
///
/// let result = evaluate_expression("2+3*4").unwrap();
/// assert_eq!(result, 14.0);
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, EvaluationError> {
    let tokens = lexer::tokenize(expression)?;
    debug!("tokenized {:?} into {:?}", expression, tokens);
    let postfix_tokens = parser::to_postfix(tokens)?;
    debug!("postfix order: {:?}", postfix_tokens);
    evaluator::evaluate(&postfix_tokens)
}

/// Evaluates an expression and renders the outcome the way a calculator
/// display would: the formatted number on success, [`ERROR_DISPLAY`] on
/// any failure. The failure kind is logged for diagnostics.
///
/// # Examples
///
/// ```
/// use expression_calculator::interpreter::evaluate_to_display;
///
/// assert_eq!(evaluate_to_display("1.5+2.5"), "4");
/// assert_eq!(evaluate_to_display("5+"), "Error");
/// ```
pub fn evaluate_to_display(expression: &str) -> String {
    match evaluate_expression(expression) {
        Ok(result) => format_result(result),
        Err(error) => {
            debug!("evaluation of {:?} failed: {}", expression, error);
            ERROR_DISPLAY.to_string()
        }
    }
}

/// Formats a result as the shortest decimal text that round-trips back to
/// the same value, so whole numbers display without a trailing `.0`.
pub fn format_result(value: f64) -> String {
    format!("{}", value)
}

/// Formats a result with a fixed number of decimal places, for callers
/// that want currency-style output.
pub fn format_result_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Reconstructs the canonical compact text of a token sequence.
/// Re-tokenizing the returned string yields an equal sequence.
///
/// # Examples
///
/// ```
/// use expression_calculator::interpreter::tokens_to_string;
/// use expression_calculator::interpreter::token::Token;
///
/// let tokens = vec![Token::Number(12.0), "+".parse().unwrap(), Token::Number(3.0)];
/// assert_eq!(tokens_to_string(&tokens), "12+3");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join("")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "2+3*4",
    "(2+3)*4",
    "8-3-2",
    "8/4/2",
    "1.5+2.5",
    "10%3",
    "2*(3+4)%5",
    "7",
    "(1+2)*(3+4)",
    },
    expected = {
    14.0,
    20.0,
    3.0,
    1.0,
    4.0,
    1.0,
    4.0,
    7.0,
    21.0,
    }
    )]
    fn well_formed_expression_evaluates_correctly(expression: &str, expected: f64) {
        use pretty_assertions::assert_eq;
        let actual = evaluate_expression(expression).unwrap();
        assert_eq!(actual, expected);
    }

    #[parameterized(
    expression = {
    "5+",
    "+5",
    "",
    "(2+3",
    "2+3)",
    "2a+3",
    },
    expected_error = {
    EvaluationError::StackUnderflow,
    EvaluationError::StackUnderflow,
    EvaluationError::EmptyExpression,
    EvaluationError::UnbalancedParentheses,
    EvaluationError::UnbalancedParentheses,
    EvaluationError::InvalidCharacter('a'),
    }
    )]
    fn malformed_expression_fails_with_specific_kind(
        expression: &str,
        expected_error: EvaluationError,
    ) {
        use pretty_assertions::assert_eq;
        let actual_error = evaluate_expression(expression).unwrap_err();
        assert_eq!(actual_error, expected_error);
    }

    #[test]
    fn division_by_zero_propagates_through_the_pipeline() {
        use pretty_assertions::assert_eq;
        assert_eq!(evaluate_expression("1/0").unwrap(), f64::INFINITY);
    }

    #[test]
    fn display_collapses_every_failure_to_the_error_string() {
        for expression in ["5+", "+5", "", "(2+3", "2+3)", "2a+3"] {
            assert_eq!(evaluate_to_display(expression), ERROR_DISPLAY);
        }
    }

    #[test]
    fn display_formats_whole_results_without_decimals() {
        assert_eq!(evaluate_to_display("1.5+2.5"), "4");
    }

    #[test]
    fn display_keeps_fractional_results() {
        assert_eq!(evaluate_to_display("7/2"), "3.5");
    }

    #[test]
    fn fixed_formatting_pads_to_the_requested_places() {
        assert_eq!(format_result_fixed(4.0, 2), "4.00");
        assert_eq!(format_result_fixed(2.345, 2), "2.35");
    }

    #[test]
    fn tokens_round_trip_through_canonical_text() {
        let tokens = lexer::tokenize("12+3").unwrap();

        let canonical = tokens_to_string(&tokens);
        let reparsed = lexer::tokenize(&canonical).unwrap();

        assert_eq!(reparsed, tokens);
    }

    #[test]
    fn parenthesised_tokens_round_trip_through_canonical_text() {
        let tokens = lexer::tokenize("(1.5+2)*3%4").unwrap();

        let canonical = tokens_to_string(&tokens);
        let reparsed = lexer::tokenize(&canonical).unwrap();

        assert_eq!(reparsed, tokens);
    }
}
