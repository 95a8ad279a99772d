//! Shared data types

mod credentials;
mod level;
mod outcome;
mod record;

pub use credentials::{DiscordCredentials, SlackCredentials};
pub use level::LogLevel;
pub use outcome::{UploadFailure, UploadOutcome};
pub use record::LogRecord;
