//! Virtual Machine for postfix execution
//!
//! Main entry point for evaluating compiled expressions.

use postfix_system::PostfixChunk;

use crate::context::ExecutionContext;
use crate::dispatch::Dispatcher;
use crate::error::{EvalError, EvalResult};

/// Virtual Machine for evaluating postfix chunks
#[derive(Debug, Default)]
pub struct Vm {
    /// Dispatcher for instruction execution
    dispatcher: Dispatcher,
}

impl Vm {
    /// Create a new VM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a chunk and return every value left on the stack
    ///
    /// Values come back in source order: one per top-level expression, and
    /// one per statement inside a top-level grouping.
    ///
    /// # Example
    ///
    /// ```
    /// use interpreter::Vm;
    /// use postfix_system::{Instruction, PostfixChunk};
    /// use core_types::Operator;
    ///
    /// let chunk: PostfixChunk = vec![
    ///     Instruction::Number("1".into()),
    ///     Instruction::Number("2".into()),
    ///     Instruction::Operator(Operator::Add),
    ///     Instruction::Number("3".into()),
    ///     Instruction::Number("4".into()),
    ///     Instruction::Operator(Operator::Mul),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let mut vm = Vm::new();
    /// assert_eq!(vm.run(&chunk).unwrap(), vec![3.0, 12.0]);
    /// ```
    pub fn run(&mut self, chunk: &PostfixChunk) -> EvalResult<Vec<f64>> {
        let mut ctx = ExecutionContext::new(chunk);
        self.dispatcher.execute(&mut ctx)
    }

    /// Execute a chunk that must produce exactly one value
    pub fn evaluate(&mut self, chunk: &PostfixChunk) -> EvalResult<f64> {
        let values = self.run(chunk)?;
        match values.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::UnbalancedStack {
                remaining: values.len(),
            }),
        }
    }
}
