use std::fmt;

/// The kind a node reports about itself.
///
/// The display form is the exact `type` string written into serialized trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    NumberLiteral,
    StringLiteral,
    CallExpression,
    Program,
    Identifier,
    ExpressionStatement,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::Program => "Program",
            NodeKind::Identifier => "Identifier",
            NodeKind::ExpressionStatement => "ExpressionStatement",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
