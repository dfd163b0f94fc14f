use thiserror::Error;

/// Everything that can go wrong while turning an expression string into a number.
///
/// Every stage of the pipeline fails fast with one of these; callers that only
/// care about presentation collapse them into a single display string (see
/// [`evaluate_to_display`](crate::interpreter::evaluate_to_display)).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    /// The input contained a character that is neither part of a number
    /// nor a known operator.
    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),

    /// A `)` with no matching `(`, or a `(` left over at the end of conversion.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// An operator was applied with fewer than two operands available,
    /// e.g. `+5` or `5+`.
    #[error("operator is missing an operand")]
    StackUnderflow,

    /// The input produced no single evaluable result, e.g. an empty string.
    #[error("expression has no result")]
    EmptyExpression,
}
