//! Target AST: the restructured tree produced by the transformer.
//!
//! Calls carry a typed [`Identifier`] callee and an `arguments` list, and
//! every top-level call is wrapped in an [`ExpressionStatement`].

use crate::ast::{NodeKind, ValueLiteral};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Expression>,
}

impl CallExpression {
    pub fn new(callee: Identifier, arguments: Vec<Expression>) -> Self {
        CallExpression { callee, arguments }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::CallExpression
    }
}

/// A node that may appear as a call argument or statement body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(ValueLiteral),
    Call(CallExpression),
}

impl Expression {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Literal(literal) => literal.kind(),
            Expression::Call(call) => call.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

impl ExpressionStatement {
    pub fn new(expression: Expression) -> Self {
        ExpressionStatement { expression }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::ExpressionStatement
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<ExpressionStatement>,
}

impl Program {
    pub fn new(body: Vec<ExpressionStatement>) -> Self {
        Program { body }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}
