//! Execution context for the stack machine

use postfix_system::{Instruction, PostfixChunk};

/// Cursor over the instructions of one chunk
#[derive(Debug, Clone)]
pub struct ExecutionContext<'c> {
    /// Index of the next instruction to run
    pub instruction_pointer: usize,
    /// The instructions being executed
    pub chunk: &'c PostfixChunk,
}

impl<'c> ExecutionContext<'c> {
    /// Create a new execution context at the start of a chunk
    pub fn new(chunk: &'c PostfixChunk) -> Self {
        Self {
            instruction_pointer: 0,
            chunk,
        }
    }

    /// Advance instruction pointer and return current instruction
    pub fn fetch(&mut self) -> Option<&'c Instruction> {
        let inst = self.chunk.instructions.get(self.instruction_pointer)?;
        self.instruction_pointer += 1;
        Some(inst)
    }

    /// Index of the instruction most recently fetched
    pub fn current_index(&self) -> usize {
        self.instruction_pointer.saturating_sub(1)
    }
}
