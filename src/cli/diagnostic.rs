//! Caret diagnostics pointing at the offending source character

use crate::CompileError;

/// Format `error` for a terminal.
///
/// Errors that carry a position print the offending source line with a caret
/// under the failing column:
///
/// ```text
/// (add 1a)
///       ^ lexer error: Invalid number syntax: unexpected 'a' at line 1, column 7
/// ```
pub fn render_diagnostic(source: &str, error: &CompileError) -> String {
    let Some(position) = error.position() else {
        return error.to_string();
    };

    let line = source.lines().nth(position.line.saturating_sub(1)).unwrap_or("");
    let marker = format!("{}^", " ".repeat(position.column.saturating_sub(1)));
    format!("{}\n{} {}", line, marker, error)
}
