//! Core traits and types for HTTP delivery

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during transport operations
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network/HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading the attachment from disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// A file carried in a multipart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    /// Multipart field name for the file part
    pub field_name: String,
    /// Filename presented to the receiving service
    pub file_name: String,
    /// MIME type of the file contents
    pub mime: String,
    /// Where the file lives on disk
    pub path: PathBuf,
}

impl FileAttachment {
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: file_name.into(),
            mime: mime.into(),
            path: path.into(),
        }
    }
}

/// A multipart/form-data POST
#[derive(Debug, Clone)]
pub struct MultipartRequest {
    pub url: String,
    /// Bearer token for the Authorization header, if any
    pub bearer: Option<String>,
    /// Plain form fields, appended after the file part
    pub fields: Vec<(String, String)>,
    pub file: FileAttachment,
}

impl MultipartRequest {
    pub fn new(url: impl Into<String>, file: FileAttachment) -> Self {
        Self {
            url: url.into(),
            bearer: None,
            fields: Vec::new(),
            file,
        }
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// A JSON POST
#[derive(Debug, Clone)]
pub struct JsonRequest {
    pub url: String,
    /// Bearer token for the Authorization header, if any
    pub bearer: Option<String>,
    /// JSON body; `Value::Null` means no body
    pub body: Value,
}

impl JsonRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            bearer: None,
            body: Value::Null,
        }
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }
}

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Trait for posting requests to external services
///
/// The delivery pipelines speak to Slack and Discord exclusively
/// through this seam. Implementations can be:
/// - Real HTTP via reqwest (`ReqwestTransport`)
/// - Scripted responses for testing (`MockTransport`)
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Human-readable name of this transport
    fn name(&self) -> &str;

    /// Send a multipart/form-data POST
    async fn post_multipart(&self, request: MultipartRequest) -> TransportResult<HttpResponse>;

    /// Send a JSON POST
    async fn post_json(&self, request: JsonRequest) -> TransportResult<HttpResponse>;
}

/// Type alias for an Arc-wrapped transport
pub type SharedTransport = Arc<dyn HttpTransport>;
