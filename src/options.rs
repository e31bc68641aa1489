//! Pipeline configuration.

/// Default bound on call nesting for the parser and transformer.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings shared by every stage of a compile run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Deepest call nesting accepted before the run fails. A top-level call
    /// is at depth 1.
    pub max_depth: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompilerOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
