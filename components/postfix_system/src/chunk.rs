//! Postfix chunk - the compiled instruction container

use std::fmt;

use core_types::Operator;
use serde::Serialize;

use crate::instruction::Instruction;

/// An ordered sequence of postfix instructions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PostfixChunk {
    /// Sequence of instructions in execution order
    pub instructions: Vec<Instruction>,
}

impl PostfixChunk {
    /// Create a new empty chunk
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Append an instruction
    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Append a numeric literal
    pub fn emit_number(&mut self, value: impl Into<String>) {
        self.emit(Instruction::Number(value.into()));
    }

    /// Append an operator
    pub fn emit_operator(&mut self, op: Operator) {
        self.emit(Instruction::Operator(op));
    }

    /// Get the number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the chunk holds no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over the instructions in order
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Deepest stack the chunk needs when run from an empty stack.
    ///
    /// Returns `None` if some operator would find fewer than two values.
    pub fn max_stack_depth(&self) -> Option<usize> {
        let mut depth: usize = 0;
        let mut max = 0;
        for instruction in &self.instructions {
            match instruction {
                Instruction::Number(_) => {
                    depth += 1;
                    max = max.max(depth);
                }
                Instruction::Operator(_) => {
                    if depth < 2 {
                        return None;
                    }
                    depth -= 1;
                }
            }
        }
        Some(max)
    }

    /// Number of values left on the stack after the chunk runs.
    ///
    /// Returns `None` under the same condition as [`max_stack_depth`](Self::max_stack_depth).
    pub fn result_count(&self) -> Option<usize> {
        self.max_stack_depth()?;
        let net: isize = self.instructions.iter().map(Instruction::stack_effect).sum();
        usize::try_from(net).ok()
    }
}

impl fmt::Display for PostfixChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

impl FromIterator<Instruction> for PostfixChunk {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Instruction> for PostfixChunk {
    fn extend<I: IntoIterator<Item = Instruction>>(&mut self, iter: I) {
        self.instructions.extend(iter);
    }
}

impl IntoIterator for PostfixChunk {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a PostfixChunk {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
