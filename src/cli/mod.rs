//! CLI support for tiny-compiler
//!
//! Provides programmatic access to the `tinyc` command so the pipeline can be
//! driven and its diagnostics rendered without going through a process.

mod diagnostic;
mod emit;

pub use diagnostic::render_diagnostic;
pub use emit::{EmitOptions, EmitStage, execute_emit};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Any pipeline failure
    #[error(transparent)]
    Compile(#[from] crate::CompileError),

    /// Reading the source failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No source argument and nothing piped on stdin
    #[error("No input provided. Pass a source expression or pipe it to stdin.")]
    NoInput,
}
