use std::fmt;

use crate::lexer::Position;

/// Lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Opening or closing parenthesis
    ///
    /// # Examples
    /// ```text
    /// (
    /// )
    /// ```
    Paren,

    /// Run of decimal digits
    ///
    /// # Examples
    /// ```text
    /// 52
    /// 007
    /// ```
    Number,

    /// Double-quoted string literal; the token text excludes the quotes
    ///
    /// # Examples
    /// ```text
    /// "foo"
    /// ""
    /// ```
    String,

    /// Function name
    ///
    /// Starts with an ASCII letter and runs until the next whitespace.
    ///
    /// # Examples
    /// ```text
    /// add
    /// concat
    /// ```
    Name,
}

impl TokenKind {
    /// Lower-case name used in serialized token streams.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Paren => "paren",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Name => "name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit together with where it starts in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == ")"
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "{} \"{}\"", self.kind, self.text),
            _ => write!(f, "{} `{}`", self.kind, self.text),
        }
    }
}
