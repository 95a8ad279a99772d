//! Delivery pipelines for shipping the captured log file

mod discord;
mod error;
mod permalink;
mod slack;

pub use discord::DiscordClient;
pub use error::{UploadError, UploadResult};
pub use permalink::{PermalinkError, PublicPermalink, PUBLIC_PERMALINK_HOST};
pub use slack::SlackClient;

/// Filename presented to the receiving services
///
/// Fixed regardless of where the platform keeps the file locally.
pub const LOG_UPLOAD_FILE_NAME: &str = "log.txt";

/// MIME type of the uploaded log file
pub const LOG_UPLOAD_MIME: &str = "text/plain";

/// Multipart field name carrying the file
pub const LOG_UPLOAD_FIELD: &str = "file";
