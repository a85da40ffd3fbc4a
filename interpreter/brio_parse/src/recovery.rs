//! Error recovery: token sets and synchronization.
//!
//! After a declaration fails, the parser discards tokens until it is just
//! past a `;` or looking at a token that starts a new statement, then
//! resumes. One parse pass can therefore surface several independent
//! errors.

use crate::cursor::Cursor;
use brio_ir::TokenKind;

/// A set of token kinds using a bitset over discriminant indices for O(1)
/// membership testing. 39 token kinds fit in a `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// The empty set.
    #[inline]
    pub fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder pattern).
    #[inline]
    #[must_use]
    pub fn with(self, kind: &TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    /// O(1) membership test via bitwise AND.
    #[inline]
    pub fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Tokens that begin a new statement; synchronization stops in front of
/// them. `class`, `fun`, and `return` are reserved words with no statement
/// form yet, but they still mark a plausible statement boundary.
pub fn statement_start() -> TokenSet {
    TokenSet::new()
        .with(&TokenKind::Class)
        .with(&TokenKind::Fun)
        .with(&TokenKind::Var)
        .with(&TokenKind::For)
        .with(&TokenKind::If)
        .with(&TokenKind::While)
        .with(&TokenKind::Print)
        .with(&TokenKind::Return)
}

/// Discard tokens until past a `;` or in front of a statement start.
///
/// The token that triggered the failure is consumed first so recovery
/// always makes progress.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    let boundary = statement_start();
    cursor.advance();

    while !cursor.is_at_end() {
        if matches!(cursor.previous().kind, TokenKind::Semicolon) {
            return;
        }
        if boundary.contains(&cursor.current().kind) {
            return;
        }
        cursor.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brio_ir::Token;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_set_membership() {
        let set = TokenSet::new()
            .with(&TokenKind::Var)
            .with(&TokenKind::Print);
        assert!(set.contains(&TokenKind::Var));
        assert!(set.contains(&TokenKind::Print));
        assert!(!set.contains(&TokenKind::Plus));
        assert!(!TokenSet::new().contains(&TokenKind::Var));
        assert!(TokenSet::new().is_empty());
    }

    #[test]
    fn payload_variants_match_by_discriminant() {
        let set = TokenSet::new().with(&TokenKind::Number(0.0));
        assert!(set.contains(&TokenKind::Number(99.0)));
        assert!(!set.contains(&TokenKind::Ident));
    }

    #[test]
    fn synchronize_stops_past_semicolon() {
        let tokens = vec![
            Token::new(TokenKind::Plus, "+", 1),
            Token::new(TokenKind::Number(1.0), "1", 1),
            Token::new(TokenKind::Semicolon, ";", 1),
            Token::new(TokenKind::Number(2.0), "2", 1),
            Token::eof(1),
        ];
        let mut cursor = Cursor::new(&tokens);
        synchronize(&mut cursor);
        assert_eq!(cursor.current().lexeme, "2");
    }

    #[test]
    fn synchronize_stops_at_statement_start() {
        let tokens = vec![
            Token::new(TokenKind::Plus, "+", 1),
            Token::new(TokenKind::Number(1.0), "1", 1),
            Token::new(TokenKind::Print, "print", 2),
            Token::eof(2),
        ];
        let mut cursor = Cursor::new(&tokens);
        synchronize(&mut cursor);
        assert!(cursor.check(&TokenKind::Print));
    }

    #[test]
    fn synchronize_reaches_eof_when_no_boundary() {
        let tokens = vec![
            Token::new(TokenKind::Plus, "+", 1),
            Token::new(TokenKind::Number(1.0), "1", 1),
            Token::eof(1),
        ];
        let mut cursor = Cursor::new(&tokens);
        synchronize(&mut cursor);
        assert!(cursor.is_at_end());
    }
}
