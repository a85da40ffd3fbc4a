//! Print handler for configurable output.
//!
//! `print` output is directed through a handler so the driver writes to
//! stdout while tests and the debug tooling capture into a buffer.
//! Enum dispatch rather than a trait object.

use parking_lot::Mutex;

/// Default handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Handler that captures output into a buffer, for assertions.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// All captured output so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// The handler the interpreter dispatches through.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer (tests, debug tooling).
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    pub fn stdout() -> Self {
        Self::Stdout(StdoutPrintHandler)
    }

    pub fn buffer() -> Self {
        Self::Buffer(BufferPrintHandler::new())
    }

    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for non-capturing handlers.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

impl Default for PrintHandlerImpl {
    fn default() -> Self {
        Self::stdout()
    }
}
