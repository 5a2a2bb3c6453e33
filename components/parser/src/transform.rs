//! Lowering from AST to postfix instructions

use postfix_system::{Instruction, PostfixChunk};

use crate::ast::Program;
use crate::traverse::{traverse, Node, NodeKind, Visitor};

/// Visitor state that lowers a program into postfix order
///
/// Each compound node opens an accumulation context on a stack. Numbers go
/// into the innermost context; closing an expression appends its operator.
/// A closed context is flushed into its parent, or into the output once the
/// outermost one closes, so a nested operand never overtakes its left sibling.
#[derive(Debug, Default)]
pub struct Transformer {
    output: PostfixChunk,
    contexts: Vec<Vec<Instruction>>,
}

impl Transformer {
    /// Create a transformer with empty output
    pub fn new() -> Self {
        Self::default()
    }

    /// The hook record driving the lowering
    pub fn visitor() -> Visitor<Transformer> {
        Visitor::new()
            .on_enter(NodeKind::ExpressionStatement, Self::open_context)
            .on_exit(NodeKind::ExpressionStatement, Self::close_expression)
            .on_enter(NodeKind::GroupingStatement, Self::open_context)
            .on_exit(NodeKind::GroupingStatement, Self::close_grouping)
            .on_enter(NodeKind::NumberLiteral, Self::push_number)
    }

    /// Lower a whole program
    pub fn transform(mut self, program: &Program) -> PostfixChunk {
        traverse(Node::Program(program), &Self::visitor(), &mut self);
        self.output
    }

    /// Number of contexts currently open
    pub fn depth(&self) -> usize {
        self.contexts.len()
    }

    /// Instructions flushed so far
    pub fn output(&self) -> &PostfixChunk {
        &self.output
    }

    fn open_context(&mut self, _node: Node<'_>, _parent: Option<Node<'_>>) {
        self.contexts.push(Vec::new());
    }

    fn push_number(&mut self, node: Node<'_>, _parent: Option<Node<'_>>) {
        if let Node::NumberLiteral(literal) = node {
            self.append(Instruction::Number(literal.value.clone()));
        }
    }

    fn close_expression(&mut self, node: Node<'_>, _parent: Option<Node<'_>>) {
        if let Node::ExpressionStatement(expr) = node {
            self.append(Instruction::Operator(expr.op()));
        }
        self.close_context();
    }

    fn close_grouping(&mut self, _node: Node<'_>, _parent: Option<Node<'_>>) {
        self.close_context();
    }

    fn append(&mut self, instruction: Instruction) {
        match self.contexts.last_mut() {
            Some(context) => context.push(instruction),
            None => self.output.emit(instruction),
        }
    }

    fn close_context(&mut self) {
        if let Some(context) = self.contexts.pop() {
            match self.contexts.last_mut() {
                Some(parent) => parent.extend(context),
                None => self.output.extend(context),
            }
        }
    }
}

/// Lower a program into postfix instructions
pub fn transform(program: &Program) -> PostfixChunk {
    Transformer::new().transform(program)
}
