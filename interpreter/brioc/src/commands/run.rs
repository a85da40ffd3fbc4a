//! The `run` command: interpret a source file start to finish.

use super::{exit_code, read_file, report, run_source};
use brio_diagnostic::Diagnostics;
use brio_eval::Interpreter;

/// Run a Brio source file.
///
/// Returns the process exit code: 65 if any lexical/syntax error occurred,
/// 70 if any runtime error occurred, 0 otherwise.
pub fn run_file(path: &str) -> i32 {
    let Some(source) = read_file(path) else {
        return 1;
    };

    let mut diagnostics = Diagnostics::new();
    let mut interpreter = Interpreter::new();
    run_source(&source, &mut interpreter, &mut diagnostics);
    report(&mut diagnostics);
    exit_code(&diagnostics)
}
