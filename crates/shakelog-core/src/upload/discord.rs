//! Discord delivery pipeline
//!
//! Discord needs a single multipart POST to the webhook URL. Before
//! spending any network traffic the pipeline asks the platform whether
//! the log file exists at all; a missing file short-circuits to
//! [`UploadOutcome::FileNotFound`] with zero requests made.

use super::error::UploadResult;
use super::{LOG_UPLOAD_FIELD, LOG_UPLOAD_FILE_NAME, LOG_UPLOAD_MIME};
use crate::console::SharedConsole;
use crate::platform::Platform;
use crate::transport::{FileAttachment, MultipartRequest, SharedTransport};
use crate::types::{DiscordCredentials, UploadFailure, UploadOutcome};

/// Client for shipping a log file to a Discord webhook
pub struct DiscordClient {
    transport: SharedTransport,
    console: SharedConsole,
}

impl DiscordClient {
    pub fn new(transport: SharedTransport, console: SharedConsole) -> Self {
        Self { transport, console }
    }

    /// Deliver the platform's log file to the webhook
    ///
    /// Any 2xx reply counts as delivered; webhooks answer 204 with no
    /// body by default. Non-2xx replies map to the create-message
    /// failure outcome.
    pub async fn upload(
        &self,
        credentials: &DiscordCredentials,
        platform: &dyn Platform,
    ) -> UploadResult<UploadOutcome> {
        if !platform.exists_file().await? {
            return Ok(UploadOutcome::FileNotFound);
        }

        let log_path = platform.log_path();
        self.console
            .log(&format!("[DiscordClient] uploading {}", log_path.display()));

        let attachment = FileAttachment::new(
            LOG_UPLOAD_FIELD,
            LOG_UPLOAD_FILE_NAME,
            LOG_UPLOAD_MIME,
            log_path,
        );
        let request = MultipartRequest::new(credentials.webhook_url.clone(), attachment);

        let response = self.transport.post_multipart(request).await?;
        if response.is_success() {
            Ok(UploadOutcome::Success)
        } else {
            Ok(UploadOutcome::error(UploadFailure::CreateMessage))
        }
    }
}
