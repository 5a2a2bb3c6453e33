//! Expression tokenizer - converts source text into tokens
//!
//! The tokenizer is total: it never fails. Characters it cannot place become
//! [`TokenKind::Unknown`] tokens, and the parser decides whether they are
//! errors.

use core_types::Operator;
use serde::Serialize;

use crate::chars::{self, CharClass};

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Run of digits and decimal points
    Number,
    /// One of `+ - * /`
    Operator,
    /// `(` or `)`
    Parenthesis,
    /// Any other single character
    Unknown,
}

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Literal source text of the token
    pub text: String,
    /// Character offset of the token's first character
    pub start_offset: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, start_offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start_offset,
        }
    }

    /// Check the token category
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Check if this is the `(` parenthesis
    pub fn is_left_paren(&self) -> bool {
        self.kind == TokenKind::Parenthesis && self.text == "("
    }

    /// Check if this is the `)` parenthesis
    pub fn is_right_paren(&self) -> bool {
        self.kind == TokenKind::Parenthesis && self.text == ")"
    }

    /// The operator this token spells, if it is an operator token
    pub fn operator(&self) -> Option<Operator> {
        if self.kind != TokenKind::Operator {
            return None;
        }
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Operator::from_symbol(ch),
            _ => None,
        }
    }

    /// Length of the token text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Offset just past the token's last character
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.char_len()
    }
}

/// Lexer for expression source text
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source text
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
        }
    }

    /// Consume the lexer and collect every remaining token
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    /// Get the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        if self.is_at_end() {
            return None;
        }

        let start = self.position;
        let ch = self.advance();

        let token = match chars::classify(ch) {
            CharClass::Digit => self.scan_number(ch, start),
            CharClass::Operator => Token::new(TokenKind::Operator, ch, start),
            CharClass::LeftParen | CharClass::RightParen => {
                Token::new(TokenKind::Parenthesis, ch, start)
            }
            CharClass::Dot | CharClass::Unknown | CharClass::Whitespace => {
                Token::new(TokenKind::Unknown, ch, start)
            }
        };
        Some(token)
    }

    // Digits and dots are taken greedily; extra dots are rejected by the parser.
    fn scan_number(&mut self, first: char, start: usize) -> Token {
        let mut text = first.to_string();
        while !self.is_at_end() && (chars::is_digit(self.peek()) || chars::is_dot(self.peek())) {
            text.push(self.advance());
        }
        Token::new(TokenKind::Number, text, start)
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && chars::is_whitespace(self.peek()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn peek(&self) -> char {
        self.chars[self.position]
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.position];
        self.position += 1;
        ch
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenize a complete source string
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Rebuild source text from its tokens, re-inserting the skipped whitespace
///
/// The gaps between token spans are copied from `source`, so for tokens that
/// came from `source` the result equals `source`.
pub fn reconstruct(tokens: &[Token], source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;

    for token in tokens {
        let gap_end = token.start_offset.min(chars.len());
        if cursor < gap_end {
            out.extend(&chars[cursor..gap_end]);
        }
        out.push_str(&token.text);
        cursor = token.end_offset();
    }
    if cursor < chars.len() {
        out.extend(&chars[cursor..]);
    }
    out
}
