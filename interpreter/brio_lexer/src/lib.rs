//! Lexer for Brio source text.
//!
//! A single left-to-right pass over the source bytes with a two-cursor
//! window (token start, current position) and a line counter. Tokens are
//! produced by maximal munch; lexical errors go to the shared diagnostic
//! sink and scanning always continues to end of input, so one pass can
//! surface several errors.

mod cursor;
mod keywords;

use brio_diagnostic::Diagnostics;
use brio_ir::{Token, TokenKind};
use cursor::Cursor;

/// Scan `source` into the full token list, terminated by an `Eof` token.
///
/// Errors are reported to `diagnostics`; the token list is returned either
/// way, with offending characters skipped.
pub fn lex(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    Scanner::new(source, diagnostics).scan_tokens()
}

struct Scanner<'a, 'd> {
    cursor: Cursor<'a>,
    /// Byte offset where the token being scanned starts.
    start: u32,
    line: u32,
    tokens: Vec<Token>,
    diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Scanner<'a, 'd> {
    fn new(source: &'a str, diagnostics: &'d mut Diagnostics) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            start: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics,
        }
    }

    fn scan_tokens(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            b'(' => self.add_token(TokenKind::LParen),
            b')' => self.add_token(TokenKind::RParen),
            b'{' => self.add_token(TokenKind::LBrace),
            b'}' => self.add_token(TokenKind::RBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            b'=' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                };
                self.add_token(kind);
            }
            b'<' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                };
                self.add_token(kind);
            }
            b'>' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                };
                self.add_token(kind);
            }
            b'/' => {
                if self.match_byte(b'/') {
                    // Line comment, discarded to end of line.
                    self.cursor.eat_while(|b| b != b'\n');
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            c if is_ident_start(c) => self.identifier(),
            _ => {
                // Skip the rest of the character so the next token starts
                // on a boundary, then keep scanning.
                self.cursor.eat_continuation_bytes();
                self.diagnostics.error(self.line, "Unexpected character");
            }
        }
    }

    /// A string literal. Newlines are permitted inside and counted.
    fn string(&mut self) {
        while !self.cursor.is_eof() && self.cursor.current() != b'"' {
            if self.cursor.current() == b'\n' {
                self.line += 1;
            }
            self.cursor.advance();
        }

        if self.cursor.is_eof() {
            self.diagnostics.error(self.line, "Unterminated string.");
            return;
        }

        // The closing quote.
        self.cursor.advance();

        let value = self
            .cursor
            .slice(self.start + 1, self.cursor.pos() - 1)
            .to_string();
        self.add_token(TokenKind::String(value));
    }

    /// A number literal: digits, optionally `.` digits. A trailing dot is
    /// left for the next token.
    fn number(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        let text = self.cursor.slice(self.start, self.cursor.pos());
        // The munch above only admits `digits` or `digits.digits`, both of
        // which always parse.
        let value = text.parse::<f64>().unwrap_or_default();
        self.add_token(TokenKind::Number(value));
    }

    fn identifier(&mut self) {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice(self.start, self.cursor.pos());
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Ident);
        self.add_token(kind);
    }

    /// Consume and return the current byte.
    fn advance(&mut self) -> u8 {
        let c = self.cursor.current();
        self.cursor.advance();
        c
    }

    /// One byte of lookahead: consume `expected` if it is next.
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.cursor.is_eof() || self.cursor.current() != expected {
            return false;
        }
        self.cursor.advance();
        true
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.cursor.slice(self.start, self.cursor.pos());
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}
