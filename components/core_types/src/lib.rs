//! Core types shared by the arithmetic expression front end.
//!
//! This crate provides the foundational types used by every stage of the
//! pipeline: the operator set, syntax errors, and source location tracking.
//!
//! # Overview
//!
//! - [`Operator`] - The four binary arithmetic operators
//! - [`SyntaxError`] - Fail-fast error raised while compiling an expression
//! - [`ErrorKind`] - Categories of syntax errors
//! - [`SourcePosition`] - Source code location
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, Operator, SourcePosition, SyntaxError};
//!
//! let op = Operator::from_symbol('*').unwrap();
//! assert_eq!(op.apply(6.0, 7.0), 42.0);
//!
//! let error = SyntaxError {
//!     kind: ErrorKind::UnexpectedEnding,
//!     message: "expected an operand".to_string(),
//!     offset: 2,
//!     position: Some(SourcePosition::from_offset("1+", 2)),
//!     excerpt: None,
//! };
//! assert!(error.is_incomplete());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod operator;
mod source;

pub use error::{ErrorKind, SyntaxError};
pub use operator::Operator;
pub use source::{excerpt, SourcePosition};
