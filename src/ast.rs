//! # Tiny Compiler - Abstract Syntax Trees
//!
//! This module defines the tokens and the two trees that flow through the
//! compiler pipeline for a small Lisp-style language made of nested function
//! calls with numeric and string leaves.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[kind]** - The node kind every node reports about itself
//! - **[source]** - The tree built by the parser (`name` + `params`)
//! - **[target]** - The tree built by the transformer (`callee` + `arguments`)
//!
//! ## Quick Start
//!
//! ```text
//! (add 52 (sub 23 12))
//! ```
//!
//! The parser turns this into a source `Program` holding one `CallExpression`
//! named `add` whose params are `NumberLiteral "52"` and a nested
//! `CallExpression` named `sub`.
//!
//! ## Source vs. Target
//!
//! | Source                             | Target                                                  |
//! |------------------------------------|---------------------------------------------------------|
//! | `Program { body: [Call] }`         | `Program { body: [ExpressionStatement] }`               |
//! | `CallExpression { name, params }`  | `CallExpression { callee: Identifier, arguments }`      |
//! | `ValueLiteral { kind, value }`     | `ValueLiteral { kind, value }` (copied verbatim)         |
//!
//! Both trees are exclusively owned values with no back-references.
pub mod kind;
pub mod source;
pub mod target;
pub mod tokens;

pub use kind::NodeKind;
pub use source::{CallExpression, LiteralKind, Node, Program, ValueLiteral};
pub use tokens::{Token, TokenKind};
