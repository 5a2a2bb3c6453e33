//! Stack machine for postfix arithmetic
//!
//! This crate evaluates the [`PostfixChunk`](postfix_system::PostfixChunk)
//! produced by the parser's transformer:
//! - Numbers are pushed onto a value stack
//! - Operators pop two values and push the result
//! - Whatever remains on the stack is the program's result
//!
//! # Example
//!
//! ```
//! use interpreter::Vm;
//! use postfix_system::PostfixChunk;
//! use core_types::Operator;
//!
//! let mut chunk = PostfixChunk::new();
//! chunk.emit_number("6");
//! chunk.emit_number("4");
//! chunk.emit_operator(Operator::Sub);
//!
//! let mut vm = Vm::new();
//! assert_eq!(vm.evaluate(&chunk).unwrap(), 2.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod dispatch;
pub mod error;
pub mod vm;

pub use context::ExecutionContext;
pub use dispatch::Dispatcher;
pub use error::{EvalError, EvalResult};
pub use vm::Vm;
