use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    ast::{CallExpression, Node, Program, Token, TokenKind, ValueLiteral},
    lexer::Position,
    options::DEFAULT_MAX_DEPTH,
};

/// Structural errors found while assembling the source AST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unbalanced parentheses, a call without a name, or a token that cannot
    /// appear where it was found
    #[error("Malformed expression at {position}: {message}")]
    MalformedExpression { message: String, position: Position },

    /// Calls are nested deeper than the configured limit
    #[error("Nesting too deep at {position}: calls may nest at most {limit} levels")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ParseError {
    fn malformed(message: impl Into<String>, position: Position) -> Self {
        ParseError::MalformedExpression {
            message: message.into(),
            position,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::MalformedExpression { position, .. } => *position,
            ParseError::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Recursive-descent parser over a fully materialized token slice.
///
/// A single cursor is shared by every level of recursion, so a nested call
/// consumes exactly its own tokens up to and including its matching `)` and
/// the caller resumes right after it.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            position: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deeply calls may nest. A top-level call is at depth 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Parse every top-level call form.
    ///
    /// Stray names, numbers and strings between forms are skipped. A stray
    /// `)` means the parens are unbalanced and is rejected.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while let Some(token) = self.current_token() {
            if token.is_open_paren() {
                body.push(self.parse_call(1)?);
            } else if token.is_close_paren() {
                return Err(ParseError::malformed(
                    "unmatched ')' at top level",
                    token.position,
                ));
            } else {
                trace!(%token, "skipping top-level token");
                self.advance();
            }
        }

        debug!(calls = body.len(), "parsed program");
        Ok(Program::new(body))
    }

    /// Parse `( name arg* )` starting at the current `(`.
    fn parse_call(&mut self, depth: usize) -> Result<CallExpression, ParseError> {
        let open = match self.current_token() {
            Some(token) if token.is_open_paren() => token.position,
            Some(token) => {
                return Err(ParseError::malformed(
                    format!("expected '(', found {}", token),
                    token.position,
                ));
            }
            None => {
                return Err(ParseError::malformed(
                    "expected '(', found end of input",
                    self.end_position(),
                ));
            }
        };
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                position: open,
            });
        }
        self.advance(); // consume '('

        let name = match self.current_token() {
            Some(token) if token.kind == TokenKind::Name => {
                self.advance();
                token.text.clone()
            }
            Some(token) => {
                return Err(ParseError::malformed(
                    format!("expected a function name after '(', found {}", token),
                    token.position,
                ));
            }
            None => {
                return Err(ParseError::malformed(
                    "expected a function name after '(', found end of input",
                    open,
                ));
            }
        };

        let mut params: Vec<Node> = Vec::new();
        loop {
            let Some(token) = self.current_token() else {
                return Err(ParseError::malformed(
                    format!("unclosed '(' in call to `{}`", name),
                    open,
                ));
            };

            match token.kind {
                TokenKind::Number => {
                    params.push(ValueLiteral::number(token.text.clone()).into());
                    self.advance();
                }
                TokenKind::String => {
                    params.push(ValueLiteral::string(token.text.clone()).into());
                    self.advance();
                }
                TokenKind::Paren if token.is_open_paren() => {
                    params.push(self.parse_call(depth + 1)?.into());
                }
                TokenKind::Paren => {
                    self.advance(); // consume ')'
                    break;
                }
                TokenKind::Name => {
                    return Err(ParseError::malformed(
                        format!("unexpected {} in arguments of `{}`", token, name),
                        token.position,
                    ));
                }
            }
        }

        trace!(name = %name, params = params.len(), depth, "parsed call");
        Ok(CallExpression::new(name, params))
    }

    fn end_position(&self) -> Position {
        self.tokens
            .last()
            .map(|token| token.position)
            .unwrap_or_default()
    }
}

/// Assembles a token sequence into a source [`Program`].
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
