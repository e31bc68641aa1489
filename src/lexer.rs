use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::ast::{Token, TokenKind};

/// Location of a character in the source text.
///
/// `offset` counts characters from the start of input (0-based); `line` and
/// `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    /// Start of input.
    pub fn start() -> Self {
        Position::new(0, 1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors that abort tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A digit run contains a character that is neither a digit nor a delimiter
    #[error("Invalid number syntax: unexpected '{found}' at {position}")]
    InvalidNumberSyntax { found: char, position: Position },

    /// A string literal reaches end of input without a closing quote
    #[error("Unterminated string starting at {position}: missing closing quote")]
    UnterminatedString { position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::InvalidNumberSyntax { position, .. } => *position,
            LexError::UnterminatedString { position } => *position,
        }
    }
}

/// Whitespace class that separates tokens: space, tab, newline, carriage
/// return and form feed.
fn is_blank(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn location(&self) -> Position {
        Position::new(self.position, self.line, self.column)
    }

    fn advance(&mut self) {
        if self.current_char() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    /// Digits up to the next whitespace, `)` or end of input.
    fn read_number(&mut self, start: Position) -> Result<Token, LexError> {
        let mut number = String::new();

        while let Some(ch) = self.current_char() {
            if is_blank(ch) || ch == ')' {
                break;
            }
            if !ch.is_ascii_digit() {
                return Err(LexError::InvalidNumberSyntax {
                    found: ch,
                    position: self.location(),
                });
            }
            number.push(ch);
            self.advance();
        }

        Ok(Token::new(TokenKind::Number, number, start))
    }

    /// Everything between the quotes, verbatim. No escape sequences.
    fn read_string(&mut self, start: Position) -> Result<Token, LexError> {
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == '"' {
                return Ok(Token::new(TokenKind::String, result, start));
            }
            result.push(ch);
        }

        Err(LexError::UnterminatedString { position: start })
    }

    /// A name runs until whitespace; parens directly after it are absorbed.
    fn read_name(&mut self, start: Position) -> Token {
        let mut name = String::new();
        while let Some(ch) = self.current_char() {
            if is_blank(ch) {
                break;
            }
            name.push(ch);
            self.advance();
        }
        Token::new(TokenKind::Name, name, start)
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        while let Some(ch) = self.current_char() {
            let start = self.location();
            match ch {
                '(' | ')' => {
                    self.advance();
                    return Ok(Some(Token::new(TokenKind::Paren, ch.to_string(), start)));
                }
                '"' => return self.read_string(start).map(Some),
                c if is_blank(c) => self.advance(),
                c if c.is_ascii_digit() => return self.read_number(start).map(Some),
                c if c.is_ascii_alphabetic() => return Ok(Some(self.read_name(start))),
                c => {
                    trace!(character = %c, %start, "skipping unrecognized character");
                    self.advance();
                }
            }
        }
        Ok(None)
    }

    /// Drains the lexer into a token vector.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            trace!(%token, position = %token.position, "token");
            tokens.push(token);
        }
        debug!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }
}

/// Scans `input` into an ordered token sequence.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_paren_and_name() {
    let mut lexer = Lexer::new("(add");
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenKind::Paren, "(", Position::new(0, 1, 1)))
    );
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenKind::Name, "add", Position::new(1, 1, 2)))
    );
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_positions_track_newlines() {
    let tokens = tokenize("(add\n  1)").unwrap();
    assert_eq!(tokens[2].text, "1");
    assert_eq!(tokens[2].position, Position::new(7, 2, 3));
}

#[test]
fn test_number_at_end_of_input() {
    let tokens = tokenize("42").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "42");
}
