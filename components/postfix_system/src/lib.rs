//! Postfix instruction set for the expression front end
//!
//! This crate provides the flat instruction stream that the front end lowers
//! an AST into. Instructions are in postfix (reverse Polish) order: operands
//! come first, and each operator consumes the two values below it.
//!
//! # Example
//!
//! ```
//! use core_types::Operator;
//! use postfix_system::{Instruction, PostfixChunk};
//!
//! let mut chunk = PostfixChunk::new();
//! chunk.emit_number("1");
//! chunk.emit_number("2");
//! chunk.emit_operator(Operator::Add);
//!
//! assert_eq!(chunk.to_string(), "1 2 +");
//! assert_eq!(chunk.max_stack_depth(), Some(2));
//! assert!(matches!(chunk.instructions[2], Instruction::Operator(Operator::Add)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod instruction;

// Re-export main types at crate root
pub use chunk::PostfixChunk;
pub use instruction::Instruction;
