//! HTTP transport seam for the delivery pipelines

mod http;
mod mock;
mod traits;

pub use http::ReqwestTransport;
pub use mock::{MockTransport, RecordedRequest};
pub use traits::{
    FileAttachment, HttpResponse, HttpTransport, JsonRequest, MultipartRequest, SharedTransport,
    TransportError, TransportResult,
};
