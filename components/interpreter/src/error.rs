//! Evaluation errors

use core_types::Operator;
use thiserror::Error;

/// Result type for stack machine operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Failures raised while running a postfix chunk
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An operator found fewer than two values on the stack
    #[error("stack underflow: `{operator}` at instruction {index} needs two operands")]
    StackUnderflow {
        /// Index of the offending instruction
        index: usize,
        /// The operator that could not run
        operator: Operator,
    },

    /// A number instruction holds text that is not a decimal literal
    #[error("invalid numeric literal `{literal}` at instruction {index}")]
    InvalidNumber {
        /// Index of the offending instruction
        index: usize,
        /// The literal text
        literal: String,
    },

    /// A single result was requested but the stack held a different count
    #[error("expected a single result, found {remaining} values on the stack")]
    UnbalancedStack {
        /// Number of values left after the run
        remaining: usize,
    },
}
