//! Parser error types and helpers

use core_types::{excerpt, ErrorKind, SourcePosition, SyntaxError};

use crate::lexer::Token;

/// Create a syntax error at a given offset
///
/// When the source text is known the error also carries the line and column
/// and an excerpt with carets under `len` characters.
pub fn syntax_error(
    kind: ErrorKind,
    message: impl Into<String>,
    offset: usize,
    len: usize,
    source: Option<&str>,
) -> SyntaxError {
    SyntaxError {
        kind,
        message: message.into(),
        offset,
        position: source.map(|src| SourcePosition::from_offset(src, offset)),
        excerpt: source.map(|src| excerpt(src, offset, len)),
    }
}

/// Create an unexpected token error
pub fn unexpected_token(expected: &str, got: &Token, source: Option<&str>) -> SyntaxError {
    syntax_error(
        ErrorKind::UnexpectedToken,
        format!("expected {}, got `{}`", expected, got.text),
        got.start_offset,
        got.char_len(),
        source,
    )
}

/// Create an unexpected end of input error
pub fn unexpected_ending(expected: &str, offset: usize, source: Option<&str>) -> SyntaxError {
    syntax_error(
        ErrorKind::UnexpectedEnding,
        format!("expected {}, got end of input", expected),
        offset,
        0,
        source,
    )
}

/// Create an error for a numeric literal with more than one decimal point
pub fn lexical_ambiguity(literal: &Token, source: Option<&str>) -> SyntaxError {
    syntax_error(
        ErrorKind::LexicalAmbiguity,
        format!(
            "numeric literal `{}` has more than one decimal point",
            literal.text
        ),
        literal.start_offset,
        literal.char_len(),
        source,
    )
}

/// Create an error for operations or groupings nested past `limit` levels
pub fn nesting_too_deep(limit: usize, at: &Token, source: Option<&str>) -> SyntaxError {
    syntax_error(
        ErrorKind::NestingTooDeep,
        format!("expression nests deeper than {} levels", limit),
        at.start_offset,
        at.char_len(),
        source,
    )
}
