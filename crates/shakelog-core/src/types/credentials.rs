//! Credentials for the delivery destinations

/// Credentials for the Slack delivery pipeline.
///
/// Slack needs two tokens: `upload_token` authorizes the file-hosting
/// steps (upload and public sharing) and `token` authorizes posting the
/// announcement message into `channel`.
#[derive(Debug, Clone)]
pub struct SlackCredentials {
    /// Bot token used to post the announcement message.
    pub token: String,
    /// Token used for file upload and public-share calls.
    pub upload_token: String,
    /// Channel that receives the announcement message.
    pub channel: String,
}

impl SlackCredentials {
    pub fn new(
        token: impl Into<String>,
        upload_token: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            upload_token: upload_token.into(),
            channel: channel.into(),
        }
    }
}

/// Credentials for the Discord delivery pipeline.
///
/// Discord webhooks carry their own authorization in the URL, so this
/// is a single opaque endpoint.
#[derive(Debug, Clone)]
pub struct DiscordCredentials {
    pub webhook_url: String,
}

impl DiscordCredentials {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }
}
