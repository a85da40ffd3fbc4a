//! The shared diagnostic sink.

use crate::{Diagnostic, Severity};

/// Ordered collector for every error the pipeline reports.
///
/// One sink instance is threaded through lex → parse → interpret for a run.
/// Static and runtime failure flags are independent: the interactive driver
/// resets the static flag between lines while the runtime flag, once set,
/// stays set for the life of the session.
#[derive(Default, Debug)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    had_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and raise the matching failure flag.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.had_error = true,
            Severity::RuntimeError => self.had_runtime_error = true,
        }
        self.entries.push(diagnostic);
    }

    /// Convenience for lexical errors with no token context.
    pub fn error(&mut self, line: u32, message: impl Into<String>) {
        self.report(Diagnostic::error(line, message));
    }

    /// Convenience for runtime errors.
    pub fn runtime_error(&mut self, line: u32, message: impl Into<String>) {
        self.report(Diagnostic::runtime(line, message));
    }

    /// True if any lexical or syntactic error was reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// True if any runtime error was reported.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clear the static error flag, leaving the runtime flag untouched.
    /// Called by the interactive driver before each new line.
    pub fn reset_static(&mut self) {
        self.had_error = false;
    }

    /// Hand all pending diagnostics to the driver, in report order.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_are_independent() {
        let mut sink = Diagnostics::new();
        sink.error(1, "Unexpected character");
        assert!(sink.had_error());
        assert!(!sink.had_runtime_error());

        sink.runtime_error(2, "Operand must be a number");
        assert!(sink.had_runtime_error());
    }

    #[test]
    fn reset_static_keeps_runtime_flag() {
        let mut sink = Diagnostics::new();
        sink.error(1, "Unexpected character");
        sink.runtime_error(1, "Undefined variable 'x'.");

        sink.reset_static();
        assert!(!sink.had_error());
        assert!(sink.had_runtime_error());
    }

    #[test]
    fn drain_empties_in_report_order() {
        let mut sink = Diagnostics::new();
        sink.error(1, "first");
        sink.error(2, "second");

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].message, "second");
        assert!(sink.is_empty());
        // Flags survive a drain; only reset_static clears the static flag.
        assert!(sink.had_error());
    }
}
