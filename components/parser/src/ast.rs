//! Abstract Syntax Tree node definitions
//!
//! Every node owns its children exclusively. The parser builds the whole tree
//! in one pass and nothing mutates it afterwards.

use std::fmt;
use std::num::ParseFloatError;

use core_types::Operator;
use serde::Serialize;

/// Root of a parsed source text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    /// Top-level statements in source order
    pub body: Vec<Statement>,
}

/// A complete unit of the language
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// One binary operation
    #[serde(rename = "ExpressionStatement")]
    Expression(ExpressionStatement),
    /// A parenthesized group of statements
    #[serde(rename = "GroupingStatement")]
    Grouping(GroupingStatement),
}

/// One side of a binary operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Operand {
    /// A numeric literal leaf
    #[serde(rename = "NumberLiteral")]
    Number(NumberLiteral),
    /// A nested binary operation
    #[serde(rename = "ExpressionStatement")]
    Expression(Box<ExpressionStatement>),
    /// A parenthesized sub-expression
    #[serde(rename = "GroupingStatement")]
    Grouping(GroupingStatement),
}

/// A binary operation with exactly two operands
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    /// The operator applied to the operands
    pub operator: OperandLiteral,
    /// Left and right operands, in that order
    pub operands: [Operand; 2],
}

/// Statements found between a matched `(` and `)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupingStatement {
    /// Statements in source order
    pub body: Vec<Statement>,
}

/// Numeric literal, kept as source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    /// Digits and at most one decimal point
    pub value: String,
}

/// The operator tag of an [`ExpressionStatement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct OperandLiteral {
    /// One of `+ - * /`
    pub value: Operator,
}

impl Program {
    /// Create a program from its statements
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }
}

impl ExpressionStatement {
    /// Create a binary operation
    pub fn new(operator: Operator, left: Operand, right: Operand) -> Self {
        Self {
            operator: OperandLiteral::new(operator),
            operands: [left, right],
        }
    }

    /// The operator symbol's typed form
    pub fn op(&self) -> Operator {
        self.operator.value
    }

    /// Left operand
    pub fn left(&self) -> &Operand {
        &self.operands[0]
    }

    /// Right operand
    pub fn right(&self) -> &Operand {
        &self.operands[1]
    }
}

impl GroupingStatement {
    /// Create a grouping from its statements
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }
}

impl NumberLiteral {
    /// Create a literal from its source text
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Convert the literal text to a number
    pub fn to_f64(&self) -> Result<f64, ParseFloatError> {
        self.value.parse()
    }
}

impl OperandLiteral {
    /// Create an operator tag
    pub fn new(value: Operator) -> Self {
        Self { value }
    }
}

impl Operand {
    /// Shorthand for a number literal operand
    pub fn number(value: impl Into<String>) -> Self {
        Operand::Number(NumberLiteral::new(value))
    }

    /// Shorthand for a nested binary operation operand
    pub fn expression(operator: Operator, left: Operand, right: Operand) -> Self {
        Operand::Expression(Box::new(ExpressionStatement::new(operator, left, right)))
    }
}

// Display renders the tree fully parenthesized so the parse shape is visible:
// expressions as `(l op r)`, groupings as `[..]`, statements separated by `; `
// inside groupings and by newlines at the top level.

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(expr) => write!(f, "{}", expr),
            Statement::Grouping(group) => write!(f, "{}", group),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(lit) => write!(f, "{}", lit),
            Operand::Expression(expr) => write!(f, "{}", expr),
            Operand::Grouping(group) => write!(f, "{}", group),
        }
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left(), self.operator, self.right())
    }
}

impl fmt::Display for GroupingStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", stmt)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for OperandLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
