//! The interactive prompt.

use super::{report, run_source};
use brio_diagnostic::Diagnostics;
use brio_eval::Interpreter;
use std::io::{BufRead, Write};

/// Read lines from stdin until end-of-input, running each independently.
///
/// The global environment persists across lines, so a `var` declared on one
/// line is visible on the next. The static error flag resets between lines;
/// the runtime flag, once set, stays set for the session.
pub fn run_prompt() -> i32 {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut diagnostics = Diagnostics::new();
    let mut interpreter = Interpreter::new();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        run_source(&line, &mut interpreter, &mut diagnostics);
        report(&mut diagnostics);
        diagnostics.reset_static();
    }

    0
}
