//! The `lex` debug command: dump the token stream.

use super::{read_file, report};
use brio_diagnostic::Diagnostics;

/// Tokenize a file and print one token per line.
pub fn lex_file(path: &str) -> i32 {
    let Some(source) = read_file(path) else {
        return 1;
    };

    let mut diagnostics = Diagnostics::new();
    let tokens = brio_lexer::lex(&source, &mut diagnostics);
    for token in &tokens {
        println!("{token:?}");
    }

    report(&mut diagnostics);
    if diagnostics.had_error() {
        super::EXIT_STATIC_ERROR
    } else {
        0
    }
}
