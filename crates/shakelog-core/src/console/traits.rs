//! Console trait definition

use std::sync::Arc;

/// Host console abstraction for pass-through output
///
/// Intercepted log calls are forwarded here before they reach the
/// persistent sink, so the developer keeps the console experience they
/// already had. The three methods mirror the console surface being
/// intercepted.
///
/// Implementations:
/// - `StdioConsole`: Prints to stdout/stderr
/// - `NoOpConsole`: Silent console for embedding
/// - `CaptureConsole`: Records calls for testing
pub trait Console: Send + Sync {
    /// Forward a plain log line
    fn log(&self, message: &str);

    /// Forward a warning line
    fn warn(&self, message: &str);

    /// Forward an error line
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped console
pub type SharedConsole = Arc<dyn Console>;
