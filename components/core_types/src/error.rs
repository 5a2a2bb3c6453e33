//! Syntax error types for the expression front end.
//!
//! Every failure raised by the parser is a [`SyntaxError`]. Errors are
//! fail-fast: compilation stops at the first violation and reports it with the
//! offending token's position.

use std::fmt;

use thiserror::Error;

use crate::SourcePosition;

/// The kind of syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric literal contains more than one decimal point
    LexicalAmbiguity,
    /// A token of the wrong kind or value at a point in the grammar
    UnexpectedToken,
    /// The token stream ended before a required token
    UnexpectedEnding,
    /// Operations or groupings nest past the parser's depth limit
    NestingTooDeep,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::LexicalAmbiguity => "lexical ambiguity",
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::UnexpectedEnding => "unexpected ending",
            ErrorKind::NestingTooDeep => "nesting too deep",
        };
        f.write_str(name)
    }
}

/// A syntax error with message and location.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, SyntaxError};
///
/// let error = SyntaxError {
///     kind: ErrorKind::UnexpectedToken,
///     message: "expected an operand, got `+`".to_string(),
///     offset: 0,
///     position: None,
///     excerpt: None,
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "unexpected token: expected an operand, got `+` at offset 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}{}", location(.offset, .position))]
pub struct SyntaxError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Character offset of the offending token, or of the end of input
    pub offset: usize,
    /// Line and column of the offending token, when the source is known
    pub position: Option<SourcePosition>,
    /// Surrounding source text with a caret under the offending token
    pub excerpt: Option<String>,
}

impl SyntaxError {
    /// Returns true if more input could complete the expression.
    pub fn is_incomplete(&self) -> bool {
        self.kind == ErrorKind::UnexpectedEnding
    }

    /// Render the error followed by its source excerpt, if any.
    pub fn report(&self) -> String {
        match &self.excerpt {
            Some(excerpt) => format!("{}\n{}", self, excerpt),
            None => self.to_string(),
        }
    }
}

fn location(offset: &usize, position: &Option<SourcePosition>) -> String {
    match position {
        Some(pos) => format!(" at {}", pos),
        None => format!(" at offset {}", offset),
    }
}
