//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the entry points for
//! parsing. The parser owns the tokenizer and a single lookahead slot; it
//! only ever asks for the next token after it has committed to consuming the
//! current one.
//!
//! Recursion depth is bounded. Statements, assignment-expressions, unary
//! operands and `new` each count as one level of nesting. Grouping
//! parentheses, computed-member brackets and argument lists count one more
//! level on top of the assignment-expression they contain, since each of
//! those re-enters the whole precedence ladder.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt;

/// Default bound on how deeply statements and expressions may nest.
pub const NESTING_DEPTH_LIMIT: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// All state is reset at the start of every [`Parser::parse`] call, so an
/// instance can be reused for any number of sequential parses, including
/// after a failed one.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Source of tokens, pulled one at a time
    tokenizer: Tokenizer,
    /// The next unconsumed token, `None` once the input is exhausted
    lookahead: Option<Token>,
    /// Current nesting depth
    depth: usize,
    /// Nesting depth at which parsing fails
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser::with_max_depth(NESTING_DEPTH_LIMIT)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Parser {
            tokenizer: Tokenizer::default(),
            lookahead: None,
            depth: 0,
            max_depth,
        }
    }

    /// Parses a complete program.
    ///
    /// # Arguments
    ///
    /// * `source` - The whole program text
    ///
    /// # Returns
    ///
    /// The `Program` node, or the first lexical or syntax error encountered.
    pub fn parse(&mut self, source: &str) -> Result<Program, Error> {
        tracing::debug!(bytes = source.len(), "parsing program");

        self.tokenizer.init(source);
        self.lookahead = None;
        self.depth = 0;

        let result = self.parse_program();

        match &result {
            Ok(program) => tracing::debug!(statements = program.body.len(), "parsed program"),
            Err(error) => tracing::debug!(%error, "parse failed"),
        }

        result
    }

    fn parse_program(&mut self) -> Result<Program, Error> {
        self.lookahead = self.tokenizer.next_token()?;

        let mut body = vec![parse_stmt(self)?];

        while self.has_tokens() {
            body.push(parse_stmt(self)?);
        }

        Ok(Program { body })
    }

    /// Returns the lookahead token without consuming it.
    pub fn lookahead(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Returns the kind of the lookahead token.
    pub fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Whether the lookahead token is of the given kind.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.lookahead_kind() == Some(kind)
    }

    /// Whether there is any input left to parse.
    pub fn has_tokens(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Consumes the lookahead if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The consumed token. Fails without advancing if the input has ended
    /// or the lookahead is of another kind.
    pub fn consume(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.lookahead.take() {
            None => Err(Error::new(ErrorImpl::UnexpectedEndOfInput {
                expected: expected_kind.to_string(),
            })),
            Some(token) if token.kind != expected_kind => {
                let error = Error::new(ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    expected: expected_kind.to_string(),
                });
                self.lookahead = Some(token);
                Err(error)
            }
            Some(token) => {
                self.lookahead = self.tokenizer.next_token()?;
                Ok(token)
            }
        }
    }

    /// Like [`Parser::consume`], but a mismatching token is reported with
    /// the given message instead of the expected kind.
    pub fn consume_detailed(
        &mut self,
        expected_kind: TokenKind,
        message: &str,
    ) -> Result<Token, Error> {
        match &self.lookahead {
            Some(token) if token.kind != expected_kind => {
                Err(Error::new(ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: message.to_string(),
                }))
            }
            _ => self.consume(expected_kind),
        }
    }

    /// Consumes the lookahead only if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Result<Option<Token>, Error> {
        if self.at(kind) {
            self.consume(kind).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Builds the error for a lookahead that cannot start `expected`.
    pub fn unexpected(&self, expected: &str) -> Error {
        match &self.lookahead {
            None => Error::new(ErrorImpl::UnexpectedEndOfInput {
                expected: expected.to_string(),
            }),
            Some(token) => Error::new(ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: format!("expected {}", expected),
            }),
        }
    }

    /// Runs `handler` one nesting level deeper.
    pub fn nested<T, F>(&mut self, handler: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        if self.depth + 1 > self.max_depth {
            return Err(Error::new(ErrorImpl::NestingDepthExceeded {
                limit: self.max_depth,
            }));
        }

        self.depth += 1;
        let result = handler(self);
        self.depth -= 1;

        result
    }
}

/// Parses a program with a fresh parser and the default nesting limit.
pub fn parse(source: &str) -> Result<Program, Error> {
    Parser::new().parse(source)
}
