//! The parser's internal recoverable failure.

use brio_diagnostic::Diagnostic;
use brio_ir::Token;
use thiserror::Error;

/// A local parse failure, unwound with `?` to the nearest declaration
/// boundary where it is reported and recovery runs.
///
/// Not observable to callers of the parser beyond "this declaration failed";
/// the public failure signal is the diagnostic sink's `had_error` flag.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    pub line: u32,
    pub lexeme: String,
    pub at_end: bool,
    pub message: String,
}

impl ParseError {
    /// Build a failure anchored at `token`.
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            line: token.line,
            lexeme: token.lexeme.clone(),
            at_end: token.is_eof(),
            message: message.into(),
        }
    }

    /// Convert into the sink's diagnostic shape.
    pub fn into_diagnostic(self) -> Diagnostic {
        if self.at_end {
            Diagnostic::error_at_end(self.line, self.message)
        } else {
            Diagnostic::error_at(self.line, self.lexeme, self.message)
        }
    }
}
