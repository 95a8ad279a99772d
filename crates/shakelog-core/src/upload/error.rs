//! Upload error types

use thiserror::Error;

use super::permalink::PermalinkError;
use crate::platform::PlatformError;
use crate::transport::TransportError;

/// Errors that can occur while running a delivery pipeline
///
/// These are hard failures: the pipeline could not finish at all.
/// Service-level rejections are not errors; they come back as an
/// [`UploadOutcome`](crate::types::UploadOutcome) instead.
#[derive(Error, Debug)]
pub enum UploadError {
    /// Network or attachment IO failed mid-pipeline
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A platform capability failed
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// A response body was not parseable JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The public permalink had an unexpected shape
    #[error(transparent)]
    Permalink(#[from] PermalinkError),

    /// The response parsed but required fields were missing
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },
}

impl UploadError {
    /// Create an invalid response error
    pub fn invalid_response(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

pub type UploadResult<T> = Result<T, UploadError>;
