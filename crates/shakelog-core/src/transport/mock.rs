//! Mock transport for testing
//!
//! Provides deterministic, scripted responses without network
//! dependencies, and records every request for inspection.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::traits::{
    HttpResponse, HttpTransport, JsonRequest, MultipartRequest, TransportError, TransportResult,
};

/// A request the mock transport has seen
#[derive(Debug, Clone)]
pub enum RecordedRequest {
    Multipart(MultipartRequest),
    Json(JsonRequest),
}

impl RecordedRequest {
    /// URL of the recorded request, whichever shape it has
    pub fn url(&self) -> &str {
        match self {
            RecordedRequest::Multipart(request) => &request.url,
            RecordedRequest::Json(request) => &request.url,
        }
    }

    /// The multipart request, if this was one
    pub fn as_multipart(&self) -> Option<&MultipartRequest> {
        match self {
            RecordedRequest::Multipart(request) => Some(request),
            RecordedRequest::Json(_) => None,
        }
    }

    /// The JSON request, if this was one
    pub fn as_json(&self) -> Option<&JsonRequest> {
        match self {
            RecordedRequest::Json(request) => Some(request),
            RecordedRequest::Multipart(_) => None,
        }
    }
}

/// Mock transport with scripted responses
///
/// Responses are consumed in FIFO order regardless of request shape.
/// Running out of scripted responses yields an error, so a test that
/// makes more requests than it scripted fails loudly.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<TransportResult<HttpResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a mock with no scripted responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next response
    pub fn with_response(self, response: HttpResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Script the next exchange to fail with a transport error
    pub fn with_error(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// All requests seen so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests seen so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_response(&self) -> TransportResult<HttpResponse> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Other(
                    "mock transport has no scripted response left".to_string(),
                ))
            })
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn post_multipart(&self, request: MultipartRequest) -> TransportResult<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest::Multipart(request));
        self.next_response()
    }

    async fn post_json(&self, request: JsonRequest) -> TransportResult<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest::Json(request));
        self.next_response()
    }
}
