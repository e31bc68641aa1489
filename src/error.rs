//! Pipeline-level error that names the stage which failed.

use std::fmt;

use thiserror::Error;

use crate::{lexer::LexError, lexer::Position, parser::ParseError, transform::TransformError};

pub type CompileResult<T> = Result<T, CompileError>;

/// The pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Lexer,
    Parser,
    Transformer,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lexer => f.write_str("lexer"),
            Stage::Parser => f.write_str("parser"),
            Stage::Transformer => f.write_str("transformer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("lexer error: {0}")]
    Lex(#[from] LexError),

    #[error("parser error: {0}")]
    Parse(#[from] ParseError),

    #[error("transformer error: {0}")]
    Transform(#[from] TransformError),
}

impl CompileError {
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Lex(_) => Stage::Lexer,
            CompileError::Parse(_) => Stage::Parser,
            CompileError::Transform(_) => Stage::Transformer,
        }
    }

    /// Where in the input the failure was detected. The transformer works on
    /// trees and has no source position.
    pub fn position(&self) -> Option<Position> {
        match self {
            CompileError::Lex(e) => Some(e.position()),
            CompileError::Parse(e) => Some(e.position()),
            CompileError::Transform(_) => None,
        }
    }
}
