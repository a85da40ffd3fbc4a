//! Recursive descent parser for Brio.
//!
//! One token of lookahead over the lexer's output, grammar precedence from
//! assignment down to primary, and local error recovery: a failed
//! declaration is reported to the diagnostic sink, the token stream is
//! synchronized to the next statement boundary, and parsing resumes. The
//! returned statement list is whatever parsed; failure is observable only
//! through the sink's `had_error` flag.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet};

use brio_diagnostic::Diagnostics;
use brio_ir::{Stmt, Token, TokenKind};

/// Parse a token stream into the statement sequence.
///
/// Every declaration-level error is reported to `diagnostics`; statements
/// that parsed cleanly are returned regardless.
pub fn parse(tokens: &[Token], diagnostics: &mut Diagnostics) -> Vec<Stmt> {
    Parser::new(tokens, diagnostics).parse_program()
}

/// Parser state.
pub struct Parser<'a, 'd> {
    cursor: Cursor<'a>,
    diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Parser<'a, 'd> {
    pub fn new(tokens: &'a [Token], diagnostics: &'d mut Diagnostics) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            diagnostics,
        }
    }

    /// Parse declarations until end of input.
    pub fn parse_program(mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        statements
    }

    // Cursor delegation - keeps the grammar code reading at one level.

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn match_kind(&mut self, kind: &TokenKind) -> bool {
        self.cursor.match_kind(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind, message)
    }

    #[inline]
    fn error(&self, message: &str) -> ParseError {
        self.cursor.error(message)
    }
}

#[cfg(test)]
mod tests;
