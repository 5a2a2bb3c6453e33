//! Postfix instruction representation

use std::fmt;

use core_types::Operator;
use serde::Serialize;

/// A single postfix instruction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// Push a numeric literal, kept as its source text
    Number(String),
    /// Pop two values, apply the operator, push the result
    Operator(Operator),
}

impl Instruction {
    /// Net change in stack height when this instruction runs
    pub fn stack_effect(&self) -> isize {
        match self {
            Instruction::Number(_) => 1,
            Instruction::Operator(_) => -1,
        }
    }

    /// Check if this instruction is an operator
    pub fn is_operator(&self) -> bool {
        matches!(self, Instruction::Operator(_))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Number(value) => f.write_str(value),
            Instruction::Operator(op) => write!(f, "{}", op),
        }
    }
}
