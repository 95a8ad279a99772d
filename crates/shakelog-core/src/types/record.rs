//! A single captured log record

use chrono::{DateTime, Utc};

use super::level::LogLevel;

/// One captured console call, stamped at capture time.
///
/// Records exist only in memory on their way to the formatter. The
/// persistent sink stores formatted lines, never structured records.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Capture instant in UTC. Rendering applies the report offset.
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    /// Primary message, already stringified by the caller.
    pub message: String,
    /// Extra positional arguments beyond the primary message.
    pub extras: Vec<String>,
}

impl LogRecord {
    /// Create a record stamped with the current time and no extras.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            extras: Vec::new(),
        }
    }

    /// Attach extra positional arguments.
    pub fn with_extras(mut self, extras: Vec<String>) -> Self {
        self.extras = extras;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_extras() {
        let record = LogRecord::new(LogLevel::Log, "hello");
        assert_eq!(record.level, LogLevel::Log);
        assert_eq!(record.message, "hello");
        assert!(record.extras.is_empty());
    }

    #[test]
    fn test_with_extras() {
        let record = LogRecord::new(LogLevel::Error, "boom")
            .with_extras(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(record.extras, vec!["first", "second"]);
    }
}
