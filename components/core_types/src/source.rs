//! Source position tracking and excerpts for error reporting.

use std::fmt;

use serde::Serialize;

/// Number of characters shown on each side of an offending token.
const EXCERPT_RADIUS: usize = 10;

/// Represents a position in source code.
///
/// Lines and columns are 1-indexed. The offset counts characters, not bytes,
/// from the start of the source text.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition::from_offset("1 +\n2 $", 6);
///
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.column, 3);
/// assert_eq!(pos.offset, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
    /// Character offset from the start of the source
    pub offset: usize,
}

impl SourcePosition {
    /// Compute the line and column of a character offset in `source`.
    ///
    /// An offset past the end of the source resolves to the position just
    /// after the last character.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for ch in source.chars().take(offset) {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Build a two-line excerpt of `source` around a token.
///
/// The first line holds up to ten characters on either side of the token,
/// with line breaks flattened to spaces. The second line places carets under
/// the token. `len` is the token length in characters; an empty token (such
/// as the end of input) still gets a single caret.
///
/// ```
/// use core_types::excerpt;
///
/// assert_eq!(excerpt("1 + $ 2", 4, 1), "1 + $ 2\n    ^");
/// ```
pub fn excerpt(source: &str, offset: usize, len: usize) -> String {
    let chars: Vec<char> = source.chars().collect();
    let offset = offset.min(chars.len());
    let from = offset.saturating_sub(EXCERPT_RADIUS);
    let to = (offset + len + EXCERPT_RADIUS).min(chars.len());

    let snippet: String = chars[from..to]
        .iter()
        .map(|&ch| if ch == '\n' || ch == '\r' || ch == '\t' { ' ' } else { ch })
        .collect();
    let marker = format!("{}{}", " ".repeat(offset - from), "^".repeat(len.max(1)));

    format!("{}\n{}", snippet.trim_end(), marker)
}
