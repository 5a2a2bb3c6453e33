//! Character classification for the tokenizer

use core_types::Operator;

/// Primary category of a source character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Space, tab, line feed or carriage return
    Whitespace,
    /// ASCII digit `0`-`9`
    Digit,
    /// Decimal point `.`
    Dot,
    /// One of `+ - * /`
    Operator,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Anything else
    Unknown,
}

/// Check if character separates tokens
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Check if character is an ASCII digit
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if character is a decimal point
pub fn is_dot(ch: char) -> bool {
    ch == '.'
}

/// Check if character is one of the four operators
pub fn is_operator(ch: char) -> bool {
    Operator::from_symbol(ch).is_some()
}

/// Check if character opens a grouping
pub fn is_left_paren(ch: char) -> bool {
    ch == '('
}

/// Check if character closes a grouping
pub fn is_right_paren(ch: char) -> bool {
    ch == ')'
}

/// Classify a character into exactly one [`CharClass`]
pub fn classify(ch: char) -> CharClass {
    if is_whitespace(ch) {
        CharClass::Whitespace
    } else if is_digit(ch) {
        CharClass::Digit
    } else if is_dot(ch) {
        CharClass::Dot
    } else if is_operator(ch) {
        CharClass::Operator
    } else if is_left_paren(ch) {
        CharClass::LeftParen
    } else if is_right_paren(ch) {
        CharClass::RightParen
    } else {
        CharClass::Unknown
    }
}
