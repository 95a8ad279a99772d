//! Report line formatting
//!
//! Every persisted line follows one shape:
//!
//! `📠 [DD.MM.YYYY HH:MM:SS LEVEL]: ▸ message extras`
//!
//! Timestamps are rendered at a fixed UTC+3 offset regardless of host
//! timezone, so lines collected from different devices collate cleanly.

use chrono::{DateTime, FixedOffset, Utc};

use crate::types::{LogLevel, LogRecord};

/// Report timestamps are pinned to this offset (UTC+3).
const REPORT_UTC_OFFSET_SECS: i32 = 3 * 3600;

const LINE_MARKER: &str = "📠";
const MESSAGE_MARKER: &str = "▸";

/// Render one report line, newline-terminated.
///
/// Pure: the caller supplies the instant, so identical inputs always
/// produce an identical line. Extras are joined with `", "` after the
/// message; with no extras the line keeps a single trailing space
/// before the newline.
pub fn format_line(
    level: LogLevel,
    message: &str,
    extras: &[String],
    now: DateTime<Utc>,
) -> String {
    let offset = FixedOffset::east_opt(REPORT_UTC_OFFSET_SECS).expect("static offset is in range");
    let stamped = now.with_timezone(&offset);
    format!(
        "{} [{} {}]: {} {} {}\n",
        LINE_MARKER,
        stamped.format("%d.%m.%Y %H:%M:%S"),
        level.as_str(),
        MESSAGE_MARKER,
        message,
        extras.join(", "),
    )
}

/// Render a captured record using its own capture stamp.
pub fn format_record(record: &LogRecord) -> String {
    format_line(record.level, &record.message, &record.extras, record.time)
}
