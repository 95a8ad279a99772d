//! Slack delivery pipeline
//!
//! Delivery is a three-step exchange against the Slack Web API:
//!
//! 1. `files.upload` - multipart upload of the log file, authorized by
//!    the upload token sent as a form field
//! 2. `files.sharedPublicURL` - make the uploaded file public, yielding
//!    a permalink that is reshaped into a direct download link
//! 3. `chat.postMessage` - announce the download link in the channel
//!
//! Steps run strictly in order and each one consumes the previous
//! step's output, so a rejected step stops the pipeline immediately.

use std::path::Path;

use serde::Deserialize;
use serde_json::json;

use super::error::{UploadError, UploadResult};
use super::permalink::PublicPermalink;
use super::{LOG_UPLOAD_FIELD, LOG_UPLOAD_FILE_NAME, LOG_UPLOAD_MIME};
use crate::console::SharedConsole;
use crate::transport::{FileAttachment, JsonRequest, MultipartRequest, SharedTransport};
use crate::types::{SlackCredentials, UploadFailure, UploadOutcome};

const FILES_UPLOAD_URL: &str = "https://slack.com/api/files.upload";
const SHARED_PUBLIC_URL: &str = "https://slack.com/api/files.sharedPublicURL";
const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Sidebar color of the announcement attachment
const ATTACHMENT_COLOR: &str = "#f2c744";

#[derive(Debug, Deserialize)]
struct FilesUploadResponse {
    #[serde(default)]
    ok: bool,
    file: Option<UploadedFile>,
}

#[derive(Debug, Deserialize)]
struct UploadedFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SharedPublicResponse {
    file: Option<SharedFile>,
}

#[derive(Debug, Deserialize)]
struct SharedFile {
    permalink_public: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    #[serde(default)]
    ok: bool,
}

/// Client for shipping a log file into a Slack channel
pub struct SlackClient {
    transport: SharedTransport,
    console: SharedConsole,
}

impl SlackClient {
    pub fn new(transport: SharedTransport, console: SharedConsole) -> Self {
        Self { transport, console }
    }

    /// Run the full delivery pipeline for the log file at `log_path`
    ///
    /// Service rejections come back as an [`UploadOutcome`]; transport
    /// failures, unreadable attachments and malformed responses abort
    /// with an error instead.
    pub async fn upload(
        &self,
        credentials: &SlackCredentials,
        log_path: &Path,
    ) -> UploadResult<UploadOutcome> {
        let file_id = match self.upload_log_file(credentials, log_path).await? {
            Some(id) => id,
            None => return Ok(UploadOutcome::error(UploadFailure::UploadLogFile)),
        };

        let permalink = self.share_public(credentials, &file_id).await?;
        let link = PublicPermalink::parse(&permalink)?.direct_download_url(LOG_UPLOAD_FILE_NAME);

        if self.post_message(credentials, &link).await? {
            Ok(UploadOutcome::Success)
        } else {
            Ok(UploadOutcome::error(UploadFailure::CreateMessage))
        }
    }

    /// Step 1: upload the log file, returning its file id
    ///
    /// A service rejection yields `None`; the caller maps that to the
    /// upload failure outcome without touching the later steps.
    async fn upload_log_file(
        &self,
        credentials: &SlackCredentials,
        log_path: &Path,
    ) -> UploadResult<Option<String>> {
        let attachment = FileAttachment::new(
            LOG_UPLOAD_FIELD,
            LOG_UPLOAD_FILE_NAME,
            LOG_UPLOAD_MIME,
            log_path,
        );
        let request = MultipartRequest::new(FILES_UPLOAD_URL, attachment)
            .with_field("token", credentials.upload_token.clone());

        let response = self.transport.post_multipart(request).await?;
        let parsed: FilesUploadResponse = response.json()?;
        if !parsed.ok {
            return Ok(None);
        }

        let file = parsed
            .file
            .ok_or_else(|| UploadError::invalid_response("files.upload", "missing file id"))?;
        Ok(Some(file.id))
    }

    /// Step 2: share the file publicly, returning its public permalink
    async fn share_public(
        &self,
        credentials: &SlackCredentials,
        file_id: &str,
    ) -> UploadResult<String> {
        let request = JsonRequest::new(format!("{}?file={}", SHARED_PUBLIC_URL, file_id))
            .with_bearer(credentials.upload_token.clone());

        let response = self.transport.post_json(request).await?;
        let parsed: SharedPublicResponse = response.json()?;
        parsed
            .file
            .and_then(|file| file.permalink_public)
            .ok_or_else(|| {
                UploadError::invalid_response("files.sharedPublicURL", "missing public permalink")
            })
    }

    /// Step 3: announce the download link, returning whether Slack accepted
    async fn post_message(&self, credentials: &SlackCredentials, link: &str) -> UploadResult<bool> {
        let header = format!(":point_down: Log ({})", std::env::consts::OS.to_uppercase());
        let body = json!({
            "channel": credentials.channel,
            "attachments": [{
                "color": ATTACHMENT_COLOR,
                "blocks": [
                    {
                        "type": "header",
                        "text": {
                            "type": "plain_text",
                            "text": header,
                            "emoji": true,
                        },
                    },
                    {
                        "type": "section",
                        "text": {
                            "type": "mrkdwn",
                            "text": format!("<{}|Show logs>", link),
                        },
                    },
                ],
            }],
        });

        let request = JsonRequest::new(POST_MESSAGE_URL)
            .with_bearer(credentials.token.clone())
            .with_body(body);

        let response = self.transport.post_json(request).await?;
        let parsed: PostMessageResponse = response.json()?;
        if !parsed.ok {
            self.console.log(&format!(
                "[SlackClient] chat.postMessage rejected: {}",
                response.body
            ));
        }
        Ok(parsed.ok)
    }
}
