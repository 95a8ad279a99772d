//! Reqwest-backed transport implementation

use async_trait::async_trait;
use reqwest::multipart;

use super::traits::{HttpResponse, HttpTransport, JsonRequest, MultipartRequest, TransportResult};

/// Transport that performs real HTTP via reqwest
///
/// Responses are read fully into memory before being handed back, so
/// callers see a plain status and body. No request timeout is
/// configured; a stalled service blocks its caller until the
/// connection drops.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    /// Create a transport with a default reqwest client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport reusing an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn post_multipart(&self, request: MultipartRequest) -> TransportResult<HttpResponse> {
        let bytes = tokio::fs::read(&request.file.path).await?;
        let part = multipart::Part::bytes(bytes)
            .file_name(request.file.file_name.clone())
            .mime_str(&request.file.mime)?;

        // The file part goes first, plain fields after, matching the
        // order the receiving services were built against.
        let mut form = multipart::Form::new().part(request.file.field_name.clone(), part);
        for (name, value) in &request.fields {
            form = form.text(name.clone(), value.clone());
        }

        let mut builder = self.client.post(&request.url).multipart(form);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse::new(status, body))
    }

    async fn post_json(&self, request: JsonRequest) -> TransportResult<HttpResponse> {
        let mut builder = self.client.post(&request.url);
        if !request.body.is_null() {
            builder = builder.json(&request.body);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse::new(status, body))
    }
}
