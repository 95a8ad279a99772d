//! Stdout/stderr console implementation

use super::traits::Console;

/// A console that prints to stdout/stderr
///
/// Log lines go to stdout, warnings and errors to stderr. By default
/// lines pass through unchanged so intercepted output looks exactly
/// like it did before installation.
#[derive(Debug, Clone)]
pub struct StdioConsole {
    prefix: String,
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdioConsole {
    /// Create a console that passes lines through unchanged
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    /// Create a console that tags every line with a prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn compose(&self, message: &str) -> String {
        if self.prefix.is_empty() {
            message.to_string()
        } else {
            format!("{} {}", self.prefix, message)
        }
    }
}

impl Console for StdioConsole {
    fn log(&self, message: &str) {
        println!("{}", self.compose(message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.compose(message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.compose(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdio_console_creation() {
        let console = StdioConsole::new();
        assert_eq!(console.prefix, "");

        let custom = StdioConsole::with_prefix("[MyApp]");
        assert_eq!(custom.prefix, "[MyApp]");
    }

    #[test]
    fn test_compose() {
        let plain = StdioConsole::new();
        assert_eq!(plain.compose("line"), "line");

        let tagged = StdioConsole::with_prefix("[dev]");
        assert_eq!(tagged.compose("line"), "[dev] line");
    }

    #[test]
    fn test_stdio_console_logs() {
        // This test just verifies the console doesn't panic
        let console = StdioConsole::new();
        console.log("log message");
        console.warn("warn message");
        console.error("error message");
    }
}
