//! Dispatch loop for postfix execution
//!
//! Handles individual instruction execution.

use core_types::Operator;
use postfix_system::Instruction;

use crate::context::ExecutionContext;
use crate::error::{EvalError, EvalResult};

/// Dispatch handler for executing instructions
#[derive(Debug, Default)]
pub struct Dispatcher {
    /// Stack for intermediate values
    stack: Vec<f64>,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every instruction in the context and drain the final stack
    ///
    /// The stack is cleared first, so a dispatcher can be reused across runs
    /// and a failed run leaves nothing behind for the next one.
    pub fn execute(&mut self, ctx: &mut ExecutionContext<'_>) -> EvalResult<Vec<f64>> {
        self.stack.clear();

        while let Some(inst) = ctx.fetch() {
            let index = ctx.current_index();
            match inst {
                Instruction::Number(literal) => {
                    let value = literal
                        .parse::<f64>()
                        .map_err(|_| EvalError::InvalidNumber {
                            index,
                            literal: literal.clone(),
                        })?;
                    self.stack.push(value);
                }
                Instruction::Operator(op) => {
                    let result = self.binary(*op, index)?;
                    self.stack.push(result);
                }
            }
        }

        Ok(std::mem::take(&mut self.stack))
    }

    /// Current stack height
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    fn binary(&mut self, operator: Operator, index: usize) -> EvalResult<f64> {
        match (self.stack.pop(), self.stack.pop()) {
            (Some(b), Some(a)) => Ok(operator.apply(a, b)),
            _ => {
                self.stack.clear();
                Err(EvalError::StackUnderflow { index, operator })
            }
        }
    }
}
