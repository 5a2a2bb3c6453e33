//! Arithmetic expression front end
//!
//! Provides character classification, tokenizing, AST construction, a
//! generic visitor-driven traversal, and lowering to postfix instructions.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes expression source text
//! - [`Token`] - Number, operator, parenthesis and unknown tokens
//! - [`Parser`] - Recursive descent parser producing an AST
//! - [`Program`] - Root of the Abstract Syntax Tree
//! - [`Traverser`] - Depth-first walk driving a [`Visitor`] record
//! - [`Transformer`] - Converts an AST to postfix instructions
//!
//! # Example
//!
//! ```
//! use parser::{compile, Grammar, Parser, Transformer};
//!
//! let mut parser = Parser::from_source("(1 + 2) * 3");
//! let ast = parser.parse().unwrap();
//!
//! let chunk = Transformer::new().transform(&ast);
//! assert_eq!(chunk.to_string(), "1 2 + 3 *");
//!
//! let chunk = compile("1 - 2 - 3", Grammar::RightRecursive).unwrap();
//! assert_eq!(chunk.to_string(), "1 2 3 - -");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod chars;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod transform;
pub mod traverse;

pub use ast::{
    ExpressionStatement, GroupingStatement, NumberLiteral, Operand, OperandLiteral, Program,
    Statement,
};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, Grammar, Parser, DEFAULT_MAX_DEPTH};
pub use transform::{transform, Transformer};
pub use traverse::{traverse, Node, NodeKind, Traverser, Visitor};

use core_types::SyntaxError;
use postfix_system::PostfixChunk;

/// Run the whole front end: tokenize, parse, and lower to postfix
pub fn compile(source: &str, grammar: Grammar) -> Result<PostfixChunk, SyntaxError> {
    let program = Parser::from_source(source).with_grammar(grammar).parse()?;
    Ok(transform(&program))
}
