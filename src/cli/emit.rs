//! Run the pipeline up to a chosen stage and render its result as JSON

use tracing::info;

use super::CliError;
use crate::{CompilerOptions, Parser, Transformer, output, tokenize};

/// Which pipeline result to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EmitStage {
    /// The token stream
    Tokens,
    /// The source AST built by the parser
    Ast,
    /// The restructured AST built by the transformer
    #[default]
    Target,
}

/// Options for the emit command
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Source text to compile
    pub source: String,
    /// Stage whose result is emitted
    pub stage: EmitStage,
    /// Pipeline configuration
    pub compiler: CompilerOptions,
}

/// Execute the pipeline, stopping after `options.stage`
pub fn execute_emit(options: &EmitOptions) -> Result<serde_json::Value, CliError> {
    let max_depth = options.compiler.max_depth;
    info!(stage = ?options.stage, max_depth, "compiling");

    let tokens = tokenize(&options.source).map_err(crate::CompileError::from)?;
    if options.stage == EmitStage::Tokens {
        return Ok(output::tokens_to_json(&tokens));
    }

    let program = Parser::new(&tokens)
        .with_max_depth(max_depth)
        .parse_program()
        .map_err(crate::CompileError::from)?;
    if options.stage == EmitStage::Ast {
        return Ok(output::source_to_json(&program));
    }

    let target = Transformer::new()
        .with_max_depth(max_depth)
        .transform_program(&program)
        .map_err(crate::CompileError::from)?;
    Ok(output::target_to_json(&target))
}
