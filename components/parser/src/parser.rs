//! Recursive descent parser for arithmetic expressions

use core_types::{Operator, SyntaxError};

use crate::ast::*;
use crate::error::*;
use crate::lexer::{self, Token, TokenKind};

/// Operator semantics used when building expressions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Precedence climbing: `*` and `/` bind tighter than `+` and `-`, and
    /// operators of equal precedence associate left to right
    #[default]
    Precedence,
    /// Single-rule descent: precedence-blind and right-associative, so
    /// `1 - 2 - 3` parses as `1 - (2 - 3)`
    RightRecursive,
}

/// Default limit on how deeply operations and groupings may nest
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A parsed node paired with its nesting depth
///
/// Numbers have depth 0; an operation or grouping is one deeper than its
/// deepest child.
type Nested<T> = (T, usize);

/// Expression parser
pub struct Parser<'a> {
    tokens: Vec<Token>,
    index: usize,
    source: Option<&'a str>,
    grammar: Grammar,
    max_depth: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over an existing token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            source: None,
            grammar: Grammar::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            nesting: 0,
        }
    }

    /// Tokenize `source` and create a parser that reports excerpts from it
    pub fn from_source(source: &'a str) -> Self {
        Self::new(lexer::tokenize(source)).with_source(source)
    }

    /// Attach the source text the tokens came from, for error positions
    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Select the operator semantics
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Set how deeply operations and groupings may nest
    ///
    /// Deeper input fails with [`ErrorKind::NestingTooDeep`](core_types::ErrorKind)
    /// instead of building a tree too deep to walk or drop.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The operator semantics in use
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// The nesting limit in use
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse the whole token stream into a program
    ///
    /// Stops at the first violation; no partial tree is returned.
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        self.index = 0;
        self.nesting = 0;
        let mut body = Vec::new();

        while !self.is_at_end() {
            let (statement, _) = self.parse_statement()?;
            body.push(statement);
        }

        Ok(Program::new(body))
    }

    /// Peek `n` tokens past the current one without consuming anything
    pub fn lookahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.index + n)
    }

    fn parse_statement(&mut self) -> Result<Nested<Statement>, SyntaxError> {
        match self.grammar {
            Grammar::Precedence => self.parse_precedence_statement(),
            Grammar::RightRecursive => self.parse_right_recursive_statement(),
        }
    }

    // Precedence climbing

    fn parse_precedence_statement(&mut self) -> Result<Nested<Statement>, SyntaxError> {
        let token = self.peek_required("an expression or `(`")?;

        if token.is_left_paren() {
            let (grouping, depth) = self.parse_grouping()?;
            if self.peek_operator().is_none() {
                return Ok((Statement::Grouping(grouping), depth));
            }
            let left = self.grouping_operand(grouping, depth, &token)?;
            let operand = self.continue_binary_from_lhs(left, 1)?;
            return self.finish_statement(operand);
        }

        let operand = self.parse_binary_expression(1)?;
        self.finish_statement(operand)
    }

    fn parse_binary_expression(&mut self, min_precedence: u8) -> Result<Nested<Operand>, SyntaxError> {
        let left = self.parse_primary()?;
        self.continue_binary_from_lhs(left, min_precedence)
    }

    fn continue_binary_from_lhs(
        &mut self,
        (mut left, mut depth): Nested<Operand>,
        min_precedence: u8,
    ) -> Result<Nested<Operand>, SyntaxError> {
        while let Some(token) = self.peek().cloned() {
            let Some(op) = token.operator() else {
                break;
            };
            if op.precedence() < min_precedence {
                break;
            }
            self.advance();
            // Binding the right side one level tighter makes equal precedence
            // associate to the left.
            let (right, right_depth) = self.parse_binary_expression(op.precedence() + 1)?;
            depth = self.check_depth(depth.max(right_depth) + 1, &token)?;
            left = Operand::expression(op, left, right);
        }
        Ok((left, depth))
    }

    fn parse_primary(&mut self) -> Result<Nested<Operand>, SyntaxError> {
        let token = self.peek_required("an operand")?;
        match token.kind {
            TokenKind::Number => Ok((Operand::Number(self.parse_number()?), 0)),
            TokenKind::Parenthesis if token.is_left_paren() => {
                let (grouping, depth) = self.parse_grouping()?;
                self.grouping_operand(grouping, depth, &token)
            }
            _ => Err(unexpected_token("an operand", &token, self.source)),
        }
    }

    fn grouping_operand(
        &self,
        grouping: GroupingStatement,
        depth: usize,
        open: &Token,
    ) -> Result<Nested<Operand>, SyntaxError> {
        if grouping.body.len() != 1 {
            return Err(unexpected_token(
                "a grouping holding a single expression",
                open,
                self.source,
            ));
        }
        Ok((Operand::Grouping(grouping), depth))
    }

    fn finish_statement(
        &self,
        (operand, depth): Nested<Operand>,
    ) -> Result<Nested<Statement>, SyntaxError> {
        match operand {
            Operand::Expression(expr) => Ok((Statement::Expression(*expr), depth)),
            Operand::Grouping(grouping) => Ok((Statement::Grouping(grouping), depth)),
            Operand::Number(_) => Err(self.missing("an operator")),
        }
    }

    // Right-recursive descent

    fn parse_right_recursive_statement(&mut self) -> Result<Nested<Statement>, SyntaxError> {
        let token = self.peek_required("an expression or `(`")?;
        match token.kind {
            TokenKind::Number => {
                let (expr, depth) = self.parse_right_recursive_expression()?;
                Ok((Statement::Expression(expr), depth))
            }
            TokenKind::Parenthesis if token.is_left_paren() => {
                let (grouping, depth) = self.parse_grouping()?;
                Ok((Statement::Grouping(grouping), depth))
            }
            _ => Err(unexpected_token("a number or `(`", &token, self.source)),
        }
    }

    fn parse_right_recursive_expression(
        &mut self,
    ) -> Result<Nested<ExpressionStatement>, SyntaxError> {
        let start = self.peek_required("a number")?;
        self.nest(&start)?;

        let left = self.parse_number()?;
        let op = self.parse_operator()?;
        let (right, right_depth) = self.parse_right_recursive_operand()?;

        self.unnest();
        let depth = self.check_depth(right_depth + 1, &start)?;
        Ok((ExpressionStatement::new(op, Operand::Number(left), right), depth))
    }

    fn parse_right_recursive_operand(&mut self) -> Result<Nested<Operand>, SyntaxError> {
        let token = self.peek_required("an operand")?;
        match token.kind {
            TokenKind::Number => {
                let continues = self
                    .lookahead(1)
                    .is_some_and(|next| next.is(TokenKind::Operator));
                if continues {
                    let (expr, depth) = self.parse_right_recursive_expression()?;
                    Ok((Operand::Expression(Box::new(expr)), depth))
                } else {
                    Ok((Operand::Number(self.parse_number()?), 0))
                }
            }
            TokenKind::Parenthesis if token.is_left_paren() => {
                let (grouping, depth) = self.parse_grouping()?;
                Ok((Operand::Grouping(grouping), depth))
            }
            _ => Err(unexpected_token("an operand", &token, self.source)),
        }
    }

    // Shared productions

    fn parse_grouping(&mut self) -> Result<Nested<GroupingStatement>, SyntaxError> {
        let open = self.peek_required("`(`")?;
        self.advance();
        self.nest(&open)?;

        let mut body = Vec::new();
        let mut depth = 0;

        loop {
            let token = match self.peek() {
                Some(token) => token.clone(),
                None => {
                    let expected = format!("`)` to close `(` at offset {}", open.start_offset);
                    return Err(self.missing(&expected));
                }
            };
            if token.is_right_paren() {
                if body.is_empty() {
                    return Err(unexpected_token("an expression", &token, self.source));
                }
                self.advance();
                break;
            }
            let (statement, statement_depth) = self.parse_statement()?;
            depth = depth.max(statement_depth);
            body.push(statement);
        }

        self.unnest();
        let depth = self.check_depth(depth + 1, &open)?;
        Ok((GroupingStatement::new(body), depth))
    }

    fn parse_number(&mut self) -> Result<NumberLiteral, SyntaxError> {
        let token = self.peek_required("a number")?;
        if !token.is(TokenKind::Number) {
            return Err(unexpected_token("a number", &token, self.source));
        }
        if token.text.matches('.').count() > 1 {
            return Err(lexical_ambiguity(&token, self.source));
        }
        self.advance();
        Ok(NumberLiteral::new(token.text))
    }

    fn parse_operator(&mut self) -> Result<Operator, SyntaxError> {
        match self.peek_operator() {
            Some(op) => {
                self.advance();
                Ok(op)
            }
            None => Err(self.missing("an operator")),
        }
    }

    // Recursion guard: every descent into a nested production goes through
    // `nest`, so the call stack stays within `max_depth` levels.
    fn nest(&mut self, at: &Token) -> Result<(), SyntaxError> {
        self.nesting += 1;
        if self.nesting > self.max_depth {
            return Err(nesting_too_deep(self.max_depth, at, self.source));
        }
        Ok(())
    }

    fn unnest(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    fn check_depth(&self, depth: usize, at: &Token) -> Result<usize, SyntaxError> {
        if depth > self.max_depth {
            return Err(nesting_too_deep(self.max_depth, at, self.source));
        }
        Ok(depth)
    }

    /// Error for a required token that is absent: the wrong token, or none
    fn missing(&self, expected: &str) -> SyntaxError {
        match self.peek() {
            Some(token) => unexpected_token(expected, token, self.source),
            None => unexpected_ending(expected, self.end_offset(), self.source),
        }
    }

    fn peek_required(&self, expected: &str) -> Result<Token, SyntaxError> {
        match self.peek() {
            Some(token) => Ok(token.clone()),
            None => Err(unexpected_ending(expected, self.end_offset(), self.source)),
        }
    }

    fn peek_operator(&self) -> Option<Operator> {
        self.peek().and_then(Token::operator)
    }

    fn peek(&self) -> Option<&Token> {
        self.lookahead(0)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn end_offset(&self) -> usize {
        match self.source {
            Some(source) => source.chars().count(),
            None => self.tokens.last().map_or(0, Token::end_offset),
        }
    }
}

/// Parse a token stream with the default grammar
pub fn parse(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse()
}
