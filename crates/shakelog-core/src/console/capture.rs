//! Recording console implementation

use std::sync::RwLock;

use super::traits::Console;

/// A console that records every call instead of printing
///
/// Tests use this to assert what reached the console, in what order,
/// without touching stdout/stderr.
#[derive(Debug, Default)]
pub struct CaptureConsole {
    calls: RwLock<Vec<(&'static str, String)>>,
}

impl CaptureConsole {
    /// Create a new recording console
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls as (kind, message) pairs, oldest first
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.read().unwrap().clone()
    }

    /// Just the recorded messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Number of recorded calls
    pub fn len(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.calls.read().unwrap().is_empty()
    }

    /// Drop all recorded calls
    pub fn clear(&self) {
        self.calls.write().unwrap().clear();
    }

    fn record(&self, kind: &'static str, message: &str) {
        self.calls.write().unwrap().push((kind, message.to_string()));
    }
}

impl Console for CaptureConsole {
    fn log(&self, message: &str) {
        self.record("log", message);
    }

    fn warn(&self, message: &str) {
        self.record("warn", message);
    }

    fn error(&self, message: &str) {
        self.record("error", message);
    }
}
