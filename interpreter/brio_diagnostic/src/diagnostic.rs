//! The diagnostic value type and its rendered text contract.

use std::fmt;

/// Severity of a diagnostic, controlling its rendered shape.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Lexical or syntactic error, found before interpretation starts.
    Error,
    /// Error raised while a statement was executing.
    RuntimeError,
}

/// Where in the token stream a static error points.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub enum Locus {
    /// No token context (lexical errors).
    #[default]
    None,
    /// The end-of-input sentinel.
    AtEnd,
    /// A concrete source lexeme.
    Lexeme(String),
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locus::None => Ok(()),
            Locus::AtEnd => write!(f, " at end"),
            Locus::Lexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// A single reported error.
///
/// `Display` produces the exact text the console driver prints:
///
/// - static errors: `[line: {line}] Error {where}: {message}`, with
///   `{where}` empty, `" at end"`, or `" at '{lexeme}'"`;
/// - runtime errors: the message on one line, `[line {line}]` on the next.
#[derive(Clone, PartialEq, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: u32,
    pub locus: Locus,
    pub message: String,
}

impl Diagnostic {
    /// A lexical error with no token context.
    pub fn error(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            line,
            locus: Locus::None,
            message: message.into(),
        }
    }

    /// A syntax error anchored at a source lexeme.
    pub fn error_at(line: u32, lexeme: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            line,
            locus: Locus::Lexeme(lexeme.into()),
            message: message.into(),
        }
    }

    /// A syntax error anchored at the end-of-input sentinel.
    pub fn error_at_end(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            line,
            locus: Locus::AtEnd,
            message: message.into(),
        }
    }

    /// A runtime error carrying the offending token's line.
    pub fn runtime(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::RuntimeError,
            line,
            locus: Locus::None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(
                f,
                "[line: {}] Error {}: {}",
                self.line, self.locus, self.message
            ),
            Severity::RuntimeError => write!(f, "{}\n[line {}]", self.message, self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_lexical_error() {
        let d = Diagnostic::error(1, "Unexpected character");
        assert_eq!(d.to_string(), "[line: 1] Error : Unexpected character");
    }

    #[test]
    fn renders_error_at_lexeme() {
        let d = Diagnostic::error_at(2, "}", "Expect expression");
        assert_eq!(d.to_string(), "[line: 2] Error  at '}': Expect expression");
    }

    #[test]
    fn renders_error_at_end() {
        let d = Diagnostic::error_at_end(3, "Expect ')' after expression");
        assert_eq!(
            d.to_string(),
            "[line: 3] Error  at end: Expect ')' after expression"
        );
    }

    #[test]
    fn renders_runtime_error_on_two_lines() {
        let d = Diagnostic::runtime(4, "Operand must be a number");
        assert_eq!(d.to_string(), "Operand must be a number\n[line 4]");
    }
}
