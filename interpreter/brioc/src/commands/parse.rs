//! The `parse` debug command: dump the parenthesized AST.

use super::{read_file, report};
use brio_diagnostic::Diagnostics;

/// Parse a file and print the pretty-printed statement list.
pub fn parse_file(path: &str) -> i32 {
    let Some(source) = read_file(path) else {
        return 1;
    };

    let mut diagnostics = Diagnostics::new();
    let tokens = brio_lexer::lex(&source, &mut diagnostics);
    let statements = brio_parse::parse(&tokens, &mut diagnostics);

    let rendered = brio_fmt::print_program(&statements);
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    report(&mut diagnostics);
    if diagnostics.had_error() {
        super::EXIT_STATIC_ERROR
    } else {
        0
    }
}
