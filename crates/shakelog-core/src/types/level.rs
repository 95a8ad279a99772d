//! Log severity levels and threshold gating

use std::fmt;

/// Severity of a captured log record.
///
/// Levels are ordered by verbosity: `None` suppresses everything and
/// `Trace` is the chattiest. A record reaches the persistent sink when
/// its level is at or below the configured threshold, so a threshold of
/// [`LogLevel::Warn`] keeps errors and warnings and drops the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Log = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Whether a record at this level passes the given threshold.
    pub fn passes(self, threshold: LogLevel) -> bool {
        self != LogLevel::None && self <= threshold
    }

    /// Uppercase label used in formatted report lines.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "?",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Log => "LOG",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for LogLevel {
    /// The threshold in effect before any explicit configuration.
    fn default() -> Self {
        LogLevel::Log
    }
}
