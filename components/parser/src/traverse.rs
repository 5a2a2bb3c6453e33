//! Generic depth-first AST traversal
//!
//! A [`Visitor`] is a record of optional enter/exit hooks, one pair per
//! [`NodeKind`]. The [`Traverser`] walks a tree and calls whichever hooks are
//! present; a missing hook is skipped. Hooks receive the visitor's state
//! explicitly, so the traverser itself holds nothing but its work stack.
//!
//! # Example
//!
//! ```
//! use parser::traverse::{traverse, Node, NodeKind, Visitor};
//! use parser::Parser;
//!
//! fn count(total: &mut usize, _node: Node<'_>, _parent: Option<Node<'_>>) {
//!     *total += 1;
//! }
//!
//! let program = Parser::from_source("1 + 2 * 3").parse().unwrap();
//! let visitor = Visitor::new().on_enter(NodeKind::NumberLiteral, count);
//!
//! let mut total = 0;
//! traverse(Node::Program(&program), &visitor, &mut total);
//! assert_eq!(total, 3);
//! ```

use std::fmt;

use crate::ast::*;

/// The closed set of AST node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Program`]
    Program,
    /// [`ExpressionStatement`]
    ExpressionStatement,
    /// [`GroupingStatement`]
    GroupingStatement,
    /// [`NumberLiteral`]
    NumberLiteral,
    /// [`OperandLiteral`]
    OperandLiteral,
}

/// A borrowed reference to any AST node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// Root node
    Program(&'a Program),
    /// Binary operation
    ExpressionStatement(&'a ExpressionStatement),
    /// Parenthesized group
    GroupingStatement(&'a GroupingStatement),
    /// Numeric leaf
    NumberLiteral(&'a NumberLiteral),
    /// Operator leaf
    OperandLiteral(&'a OperandLiteral),
}

impl<'a> Node<'a> {
    /// Kind tag used for hook dispatch
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Node::GroupingStatement(_) => NodeKind::GroupingStatement,
            Node::NumberLiteral(_) => NodeKind::NumberLiteral,
            Node::OperandLiteral(_) => NodeKind::OperandLiteral,
        }
    }

    /// Traversed children in stored order
    ///
    /// An expression's operator is a field, not a child.
    pub fn children(&self) -> Children<'a> {
        match *self {
            Node::Program(program) => Children::Statements(program.body.iter()),
            Node::ExpressionStatement(expr) => Children::Operands(expr.operands.iter()),
            Node::GroupingStatement(group) => Children::Statements(group.body.iter()),
            Node::NumberLiteral(_) | Node::OperandLiteral(_) => Children::Leaf,
        }
    }
}

/// Iterator over a node's children, borrowing straight from the tree
#[derive(Debug, Clone)]
pub enum Children<'a> {
    /// Body of a program or grouping
    Statements(std::slice::Iter<'a, Statement>),
    /// Left and right operands of an expression
    Operands(std::slice::Iter<'a, Operand>),
    /// No children
    Leaf,
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        match self {
            Children::Statements(iter) => iter.next().map(Node::from),
            Children::Operands(iter) => iter.next().map(Node::from),
            Children::Leaf => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Children::Statements(iter) => iter.size_hint(),
            Children::Operands(iter) => iter.size_hint(),
            Children::Leaf => (0, Some(0)),
        }
    }
}

impl<'a> DoubleEndedIterator for Children<'a> {
    fn next_back(&mut self) -> Option<Node<'a>> {
        match self {
            Children::Statements(iter) => iter.next_back().map(Node::from),
            Children::Operands(iter) => iter.next_back().map(Node::from),
            Children::Leaf => None,
        }
    }
}

impl ExactSizeIterator for Children<'_> {}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        match stmt {
            Statement::Expression(expr) => Node::ExpressionStatement(expr),
            Statement::Grouping(group) => Node::GroupingStatement(group),
        }
    }
}

impl<'a> From<&'a Operand> for Node<'a> {
    fn from(operand: &'a Operand) -> Self {
        match operand {
            Operand::Number(lit) => Node::NumberLiteral(lit),
            Operand::Expression(expr) => Node::ExpressionStatement(expr),
            Operand::Grouping(group) => Node::GroupingStatement(group),
        }
    }
}

/// A traversal callback: `(state, node, parent)`
pub type Hook<S> = for<'n> fn(&mut S, Node<'n>, Option<Node<'n>>);

/// Optional enter and exit callbacks for one node kind
pub struct Hooks<S> {
    /// Called before the node's children are visited
    pub enter: Option<Hook<S>>,
    /// Called after the node's children are visited
    pub exit: Option<Hook<S>>,
}

impl<S> Hooks<S> {
    /// A pair with neither hook set
    pub const fn none() -> Self {
        Self {
            enter: None,
            exit: None,
        }
    }
}

impl<S> Clone for Hooks<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Hooks<S> {}

impl<S> fmt::Debug for Hooks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("enter", &self.enter.is_some())
            .field("exit", &self.exit.is_some())
            .finish()
    }
}

/// Visitor record: one hook pair per node kind
pub struct Visitor<S> {
    /// Hooks for [`NodeKind::Program`]
    pub program: Hooks<S>,
    /// Hooks for [`NodeKind::ExpressionStatement`]
    pub expression_statement: Hooks<S>,
    /// Hooks for [`NodeKind::GroupingStatement`]
    pub grouping_statement: Hooks<S>,
    /// Hooks for [`NodeKind::NumberLiteral`]
    pub number_literal: Hooks<S>,
    /// Hooks for [`NodeKind::OperandLiteral`]
    pub operand_literal: Hooks<S>,
}

impl<S> Visitor<S> {
    /// A visitor with no hooks
    pub fn new() -> Self {
        Self {
            program: Hooks::none(),
            expression_statement: Hooks::none(),
            grouping_statement: Hooks::none(),
            number_literal: Hooks::none(),
            operand_literal: Hooks::none(),
        }
    }

    /// Set the enter hook for a node kind
    pub fn on_enter(mut self, kind: NodeKind, hook: Hook<S>) -> Self {
        self.hooks_mut(kind).enter = Some(hook);
        self
    }

    /// Set the exit hook for a node kind
    pub fn on_exit(mut self, kind: NodeKind, hook: Hook<S>) -> Self {
        self.hooks_mut(kind).exit = Some(hook);
        self
    }

    /// The hook pair registered for a node kind
    pub fn hooks(&self, kind: NodeKind) -> &Hooks<S> {
        match kind {
            NodeKind::Program => &self.program,
            NodeKind::ExpressionStatement => &self.expression_statement,
            NodeKind::GroupingStatement => &self.grouping_statement,
            NodeKind::NumberLiteral => &self.number_literal,
            NodeKind::OperandLiteral => &self.operand_literal,
        }
    }

    fn hooks_mut(&mut self, kind: NodeKind) -> &mut Hooks<S> {
        match kind {
            NodeKind::Program => &mut self.program,
            NodeKind::ExpressionStatement => &mut self.expression_statement,
            NodeKind::GroupingStatement => &mut self.grouping_statement,
            NodeKind::NumberLiteral => &mut self.number_literal,
            NodeKind::OperandLiteral => &mut self.operand_literal,
        }
    }
}

impl<S> Default for Visitor<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Visitor<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Visitor<S> {}

impl<S> fmt::Debug for Visitor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visitor")
            .field("program", &self.program)
            .field("expression_statement", &self.expression_statement)
            .field("grouping_statement", &self.grouping_statement)
            .field("number_literal", &self.number_literal)
            .field("operand_literal", &self.operand_literal)
            .finish()
    }
}

/// Pending work for the traverser
enum Step<'n> {
    Enter(Node<'n>, Option<Node<'n>>),
    Exit(Node<'n>, Option<Node<'n>>),
}

/// Depth-first walker driving a [`Visitor`]
#[derive(Debug)]
pub struct Traverser<'v, S> {
    visitor: &'v Visitor<S>,
}

impl<'v, S> Traverser<'v, S> {
    /// Create a traverser for a visitor
    pub fn new(visitor: &'v Visitor<S>) -> Self {
        Self { visitor }
    }

    /// Walk `root` and everything below it
    ///
    /// The root is visited with no parent. The walk keeps its own stack, so
    /// tree depth is not bounded by the call stack.
    pub fn traverse(&self, root: Node<'_>, state: &mut S) {
        let mut work = vec![Step::Enter(root, None)];

        while let Some(step) = work.pop() {
            match step {
                Step::Enter(node, parent) => {
                    if let Some(enter) = self.visitor.hooks(node.kind()).enter {
                        enter(state, node, parent);
                    }
                    work.push(Step::Exit(node, parent));
                    // Reversed so the first child is popped first
                    work.extend(node.children().rev().map(|child| Step::Enter(child, Some(node))));
                }
                Step::Exit(node, parent) => {
                    if let Some(exit) = self.visitor.hooks(node.kind()).exit {
                        exit(state, node, parent);
                    }
                }
            }
        }
    }
}

/// Walk `root` with `visitor`, threading `state` through every hook
pub fn traverse<S>(root: Node<'_>, visitor: &Visitor<S>, state: &mut S) {
    Traverser::new(visitor).traverse(root, state);
}
