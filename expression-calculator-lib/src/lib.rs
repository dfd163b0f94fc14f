//! A small arithmetic expression engine: tokenizer, infix-to-postfix
//! converter and postfix evaluator, plus a bounded history ledger of past
//! evaluations. See [`interpreter::evaluate_expression`] for the entry
//! point.

pub mod interpreter;
