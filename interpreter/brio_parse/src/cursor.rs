//! Token cursor for navigating the lexer's output.
//!
//! One token of lookahead: `current` is the token under consideration,
//! `previous` the one most recently consumed. The trailing `Eof` sentinel
//! guarantees `current()` is always valid; `advance()` never moves past it.

use crate::ParseError;
use brio_ir::{Token, TokenKind};
use tracing::trace;

pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the token stream.
    ///
    /// `tokens` must end with the `Eof` sentinel the lexer always appends.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token stream must be Eof-terminated"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The token under consideration.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// The most recently consumed token.
    #[inline]
    pub fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// True if the current token is the given kind (payloads ignored).
    /// Always false at end of input.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        !self.is_at_end() && self.current().kind.same_kind(kind)
    }

    /// Consume the current token and return it. At end of input the cursor
    /// stays put and the sentinel is returned.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = token.kind.display_name(),
            line = token.line,
            "advance"
        );
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is the given kind.
    pub fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Require the current token to be `kind`, consuming it; otherwise a
    /// recoverable failure anchored at the current token.
    pub fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error(message))
    }

    /// A recoverable failure anchored at the current token.
    pub fn error(&self, message: &str) -> ParseError {
        ParseError::at(self.current(), message)
    }
}
