//! JSON rendering of each pipeline stage's result.
//!
//! Every tree is converted into a [`serde_json::Value`] whose object fields
//! keep insertion order, so `type` always comes first followed by the node's
//! fields in the order they are declared.
//!
//! # Field names
//!
//! | Node                   | Fields                              |
//! |------------------------|-------------------------------------|
//! | token                  | `type`, `value`                     |
//! | literal                | `type`, `value`                     |
//! | source call            | `type`, `name`, `params`            |
//! | target call            | `type`, `callee`, `arguments`       |
//! | identifier             | `type`, `name`                      |
//! | expression statement   | `type`, `expression`                |
//! | program                | `type`, `body`                      |
//!
//! # Examples
//!
//! ```
//! use tiny_compiler::{compile, output::{target_to_json, to_json}};
//!
//! let program = compile("(add 1 2)").unwrap();
//! let json = to_json(&target_to_json(&program));
//! assert!(json.starts_with(r#"{"type":"Program","body":[{"type":"ExpressionStatement""#));
//! ```

use serde_json::{Value, json};

use crate::ast::{CallExpression, Node, Program, Token, ValueLiteral, target};

pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|token| {
                json!({
                    "type": token.kind.as_str(),
                    "value": token.text,
                })
            })
            .collect(),
    )
}

fn literal_to_json(literal: &ValueLiteral) -> Value {
    json!({
        "type": literal.kind().as_str(),
        "value": literal.value,
    })
}

fn source_call_to_json(call: &CallExpression) -> Value {
    json!({
        "type": call.kind().as_str(),
        "name": call.name,
        "params": call.params.iter().map(source_node_to_json).collect::<Vec<_>>(),
    })
}

pub fn source_node_to_json(node: &Node) -> Value {
    match node {
        Node::Literal(literal) => literal_to_json(literal),
        Node::Call(call) => source_call_to_json(call),
        Node::Program(program) => source_to_json(program),
    }
}

/// Render the parser's output.
pub fn source_to_json(program: &Program) -> Value {
    json!({
        "type": program.kind().as_str(),
        "body": program.body.iter().map(source_call_to_json).collect::<Vec<_>>(),
    })
}

fn target_call_to_json(call: &target::CallExpression) -> Value {
    json!({
        "type": call.kind().as_str(),
        "callee": {
            "type": call.callee.kind().as_str(),
            "name": call.callee.name,
        },
        "arguments": call.arguments.iter().map(expression_to_json).collect::<Vec<_>>(),
    })
}

pub fn expression_to_json(expression: &target::Expression) -> Value {
    match expression {
        target::Expression::Literal(literal) => literal_to_json(literal),
        target::Expression::Call(call) => target_call_to_json(call),
    }
}

/// Render the transformer's output.
pub fn target_to_json(program: &target::Program) -> Value {
    let body: Vec<Value> = program
        .body
        .iter()
        .map(|statement| {
            json!({
                "type": statement.kind().as_str(),
                "expression": expression_to_json(&statement.expression),
            })
        })
        .collect();

    json!({
        "type": program.kind().as_str(),
        "body": body,
    })
}

/// Compact JSON text with no extra whitespace.
pub fn to_json(value: &Value) -> String {
    value.to_string()
}

/// JSON text with 2-space indentation.
pub fn to_json_pretty(value: &Value) -> String {
    // Serializing a `Value` to a string has no failure path.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
