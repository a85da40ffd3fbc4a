//! CLI commands: one function per subcommand, plus shared plumbing.

mod lex;
mod parse;
mod repl;
mod run;

pub use lex::lex_file;
pub use parse::parse_file;
pub use repl::run_prompt;
pub use run::run_file;

use brio_diagnostic::Diagnostics;
use brio_eval::Interpreter;

/// Exit code for a run with lexical/syntax errors.
pub const EXIT_STATIC_ERROR: i32 = 65;
/// Exit code for a run with runtime errors.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// Lex, parse, and interpret one source text.
///
/// Any static error suppresses interpretation of the whole run; everything
/// lands in `diagnostics` for the caller to report.
pub(crate) fn run_source(
    source: &str,
    interpreter: &mut Interpreter,
    diagnostics: &mut Diagnostics,
) {
    let tokens = brio_lexer::lex(source, diagnostics);
    let statements = brio_parse::parse(&tokens, diagnostics);
    if !diagnostics.had_error() {
        interpreter.interpret(&statements, diagnostics);
    }
}

/// Print all pending diagnostics to stderr, in report order.
pub(crate) fn report(diagnostics: &mut Diagnostics) {
    for diagnostic in diagnostics.drain() {
        eprintln!("{diagnostic}");
    }
}

/// Map the sink's flags to the process exit code: static errors win over
/// runtime errors, success is 0.
pub(crate) fn exit_code(diagnostics: &Diagnostics) -> i32 {
    if diagnostics.had_error() {
        EXIT_STATIC_ERROR
    } else if diagnostics.had_runtime_error() {
        EXIT_RUNTIME_ERROR
    } else {
        0
    }
}

/// Read a source file as UTF-8, reporting failures to stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(err) => {
            eprintln!("error: could not read '{path}': {err}");
            None
        }
    }
}
