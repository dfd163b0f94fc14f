use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;

/// Evaluates a postfix (Reverse Polish) token sequence to a single number.
///
/// Numbers are pushed onto a stack; an operator pops its right operand
/// first and its left operand second, which is what makes `-`, `/` and `%`
/// come out the right way round. A successful evaluation leaves exactly
/// one value on the stack.
pub fn evaluate(postfix_tokens: &[Token]) -> Result<f64, EvaluationError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(value) => stack.push(*value),
            Token::Operator(operator) => {
                let right = stack.pop().ok_or(EvaluationError::StackUnderflow)?;
                let left = stack.pop().ok_or(EvaluationError::StackUnderflow)?;
                stack.push(operator.apply(left, right));
            }
            // The converter never emits parentheses; a hand-built sequence
            // containing one is malformed.
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvaluationError::UnbalancedParentheses)
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvaluationError::EmptyExpression),
    }
}
