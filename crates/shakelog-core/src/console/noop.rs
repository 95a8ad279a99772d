//! No-op console implementation

use super::traits::Console;

/// A console that swallows everything
///
/// Useful for headless hosts and for tests that do not care about
/// pass-through output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpConsole;

impl NoOpConsole {
    /// Create a new no-op console
    pub fn new() -> Self {
        Self
    }
}

impl Console for NoOpConsole {
    fn log(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_console() {
        let console = NoOpConsole::new();

        // These should all do nothing without panicking
        console.log("log message");
        console.warn("warn message");
        console.error("error message");
    }
}
