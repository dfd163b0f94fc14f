use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Reorders infix tokens into postfix (Reverse Polish) order using the
/// shunting-yard algorithm.
pub(super) fn infix_to_postfix(
    original_tokens: Vec<Token>,
) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(operator) => {
                push_operator_token(&mut operators, &mut output, operator)
            }
            Token::CloseParenthesis => {
                drain_until_open_parenthesis(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvaluationError::UnbalancedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn drain_until_open_parenthesis(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    loop {
        match operators.pop_front() {
            // A `)` was seen but the stack ran out before any `(`.
            None => return Err(EvaluationError::UnbalancedParentheses),
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn push_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(top_of_operator_stack) = operators.front() {
        let top_operator = match top_of_operator_stack {
            Token::Operator(top_operator) if top_operator.precedence_ge(&operator) => {
                *top_operator
            }
            // An open parenthesis, or an operator that binds less tightly.
            _ => break,
        };
        operators.pop_front();
        output.push(Token::Operator(top_operator));
    }

    operators.push_front(Token::Operator(operator));
}
