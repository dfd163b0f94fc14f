mod infix_converter;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders the given infix tokens into postfix (Reverse Polish) order,
/// which is evaluable left to right with a single stack and no precedence
/// lookups.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to reorder, in infix format.
///
/// returns: The equivalent postfix sequence, with parentheses removed.
///
/// # Examples
///
/// ```
/// # use expression_calculator::interpreter::error::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
/// use expression_calculator::interpreter::parser::to_postfix;
/// use expression_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number(2.0),
///     "+".parse()?,
///     Token::Number(3.0),
/// ];
/// let postfix_tokens = to_postfix(infix_tokens)?;
/// assert_eq!(postfix_tokens.len(), 3);
/// # Ok(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, EvaluationError> {
    infix_to_postfix(infix_tokens)
}
