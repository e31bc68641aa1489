use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    ast::{CallExpression, Node, NodeKind, Program, target},
    options::DEFAULT_MAX_DEPTH,
};

/// Errors raised while rewriting the source AST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A node variant with no rewrite rule in the position it was found
    ///
    /// # Example
    /// A source `Program` placed inside a call's `params`.
    #[error("Cannot classify node of kind {kind} while visiting call arguments")]
    ClassifyVisitFailure { kind: NodeKind },

    /// The tree nests calls deeper than the configured limit
    #[error("Nesting too deep: calls may nest at most {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Rewrites a source [`Program`] into a [`target::Program`].
///
/// # Rewrite rules
///
/// - `CallExpression { name, params }` → `CallExpression { callee: Identifier { name }, arguments }`
/// - `ValueLiteral { kind, value }` → copied unchanged
/// - each top-level call → wrapped in an `ExpressionStatement`
///
/// # Examples
/// ```text
/// (add 52 (sub 23 12))
/// ```
/// becomes a `Program` with one `ExpressionStatement` whose expression is a
/// call with callee `Identifier "add"` and arguments `NumberLiteral "52"` and
/// a nested call with callee `Identifier "sub"`.
#[derive(Debug, Clone)]
pub struct Transformer {
    max_depth: usize,
}

impl Default for Transformer {
    fn default() -> Self {
        Transformer::new()
    }
}

impl Transformer {
    pub fn new() -> Self {
        Transformer {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn transform_program(&self, program: &Program) -> Result<target::Program, TransformError> {
        let body = program
            .body
            .iter()
            .map(|call| {
                self.transform_call(call, 1)
                    .map(|call| target::ExpressionStatement::new(target::Expression::Call(call)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(statements = body.len(), "transformed program");
        Ok(target::Program::new(body))
    }

    /// Rewrite a single node as if it stood at the top of a call.
    pub fn transform_node(&self, node: &Node) -> Result<target::Expression, TransformError> {
        self.visit(node, 1)
    }

    fn visit(&self, node: &Node, depth: usize) -> Result<target::Expression, TransformError> {
        match node {
            Node::Literal(literal) => Ok(target::Expression::Literal(literal.clone())),
            Node::Call(call) => self.transform_call(call, depth).map(target::Expression::Call),
            Node::Program(_) => Err(TransformError::ClassifyVisitFailure { kind: node.kind() }),
        }
    }

    fn transform_call(
        &self,
        call: &CallExpression,
        depth: usize,
    ) -> Result<target::CallExpression, TransformError> {
        if depth > self.max_depth {
            return Err(TransformError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        let arguments = call
            .params
            .iter()
            .map(|param| self.visit(param, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(callee = %call.name, arguments = arguments.len(), depth, "rewrote call");
        Ok(target::CallExpression::new(
            target::Identifier::new(call.name.clone()),
            arguments,
        ))
    }
}

/// Rewrites a source [`Program`] with the default nesting limit.
pub fn transform(program: &Program) -> Result<target::Program, TransformError> {
    Transformer::new().transform_program(program)
}
