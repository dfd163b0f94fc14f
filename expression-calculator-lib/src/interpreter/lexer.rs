use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::{Token, SYMBOLS};

/// Splits an expression string into tokens, left to right.
///
/// A number is the longest run of digits optionally followed by a decimal
/// point and more digits. ASCII whitespace only separates tokens; any other
/// unrecognized character fails with
/// [`EvaluationError::InvalidCharacter`] instead of being skipped.
///
/// # Examples
///
/// ```
/// use expression_calculator::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("12+3.5").unwrap();
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, EvaluationError> {
    let characters: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < characters.len() {
        let character = characters[position];
        if character.is_ascii_whitespace() {
            position += 1;
        } else if character.is_ascii_digit() {
            let (token, end) = scan_number(&characters, position)?;
            tokens.push(token);
            position = end;
        } else if SYMBOLS.contains(&character) {
            tokens.push(character.to_string().parse()?);
            position += 1;
        } else {
            return Err(EvaluationError::InvalidCharacter(character));
        }
    }

    Ok(tokens)
}

/// Scans one numeric literal starting at `start` (which must be a digit)
/// and returns the token together with the position just past it.
fn scan_number(characters: &[char], start: usize) -> Result<(Token, usize), EvaluationError> {
    let mut end = start;
    while end < characters.len() && characters[end].is_ascii_digit() {
        end += 1;
    }
    // A decimal point only belongs to the literal when a digit follows it.
    if end + 1 < characters.len()
        && characters[end] == '.'
        && characters[end + 1].is_ascii_digit()
    {
        end += 2;
        while end < characters.len() && characters[end].is_ascii_digit() {
            end += 1;
        }
    }

    let literal: String = characters[start..end].iter().collect();
    let value = literal
        .parse::<f64>()
        .map_err(|_| EvaluationError::InvalidCharacter(characters[start]))?;
    Ok((Token::Number(value), end))
}
