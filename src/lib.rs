pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod options;
pub mod output;
pub mod parser;
pub mod transform;

pub use ast::{Node, NodeKind, Program, Token, TokenKind};
pub use error::{CompileError, CompileResult, Stage};
pub use lexer::{LexError, Lexer, Position, tokenize};
pub use options::CompilerOptions;
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser, parse};
pub use transform::{TransformError, Transformer, transform};

/// Runs the whole pipeline (lexer, parser, transformer) with default options.
pub fn compile(input: &str) -> CompileResult<ast::target::Program> {
    compile_with(input, &CompilerOptions::default())
}

pub fn compile_with(
    input: &str,
    options: &CompilerOptions,
) -> CompileResult<ast::target::Program> {
    let tokens = tokenize(input)?;
    let program = Parser::new(&tokens)
        .with_max_depth(options.max_depth)
        .parse_program()?;
    let target = Transformer::new()
        .with_max_depth(options.max_depth)
        .transform_program(&program)?;
    Ok(target)
}
