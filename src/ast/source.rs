//! Source AST: the tree built directly by the parser.
//!
//! Call nodes hold a bare function name and a list of parameters.

use crate::ast::NodeKind;

/// Which kind of literal a [`ValueLiteral`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Number,
    String,
}

impl LiteralKind {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            LiteralKind::Number => NodeKind::NumberLiteral,
            LiteralKind::String => NodeKind::StringLiteral,
        }
    }
}

/// Numeric or string leaf.
///
/// The value is kept as written in the source; numbers are never evaluated.
/// The same leaf type appears unchanged in the target AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLiteral {
    pub kind: LiteralKind,
    pub value: String,
}

impl ValueLiteral {
    pub fn number(value: impl Into<String>) -> Self {
        ValueLiteral {
            kind: LiteralKind::Number,
            value: value.into(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        ValueLiteral {
            kind: LiteralKind::String,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind.node_kind()
    }
}

/// Parenthesized call form
///
/// # Example
/// ```text
/// (add 52 (sub 23 12))
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub name: String,
    pub params: Vec<Node>,
}

impl CallExpression {
    pub fn new(name: impl Into<String>, params: Vec<Node>) -> Self {
        CallExpression {
            name: name.into(),
            params,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::CallExpression
    }
}

/// Root of the source AST. Every top-level form is a call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<CallExpression>,
}

impl Program {
    pub fn new(body: Vec<CallExpression>) -> Self {
        Program { body }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

/// Any node of the source AST.
///
/// Only [`Node::Literal`] and [`Node::Call`] are valid in a parameter list.
/// The parser never produces anything else there, but trees can be built by
/// hand, and the transformer rejects a misplaced `Program`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(ValueLiteral),
    Call(CallExpression),
    Program(Program),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Literal(literal) => literal.kind(),
            Node::Call(call) => call.kind(),
            Node::Program(program) => program.kind(),
        }
    }
}

impl From<ValueLiteral> for Node {
    fn from(literal: ValueLiteral) -> Self {
        Node::Literal(literal)
    }
}

impl From<CallExpression> for Node {
    fn from(call: CallExpression) -> Self {
        Node::Call(call)
    }
}
