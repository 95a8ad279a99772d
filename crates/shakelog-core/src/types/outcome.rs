//! Upload outcomes reported back to the host application

use std::fmt;

use serde::Serialize;

/// Failure code attached to an [`UploadOutcome::Error`].
///
/// The serialized form uses the wire codes hosts already dispatch on,
/// so the enum renames rather than deriving its variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UploadFailure {
    /// The file-hosting step rejected the log file.
    #[serde(rename = "errorUploadLogFile")]
    UploadLogFile,
    /// The message-creation step was rejected by the service.
    #[serde(rename = "errorCreateMessage")]
    CreateMessage,
}

impl UploadFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadFailure::UploadLogFile => "errorUploadLogFile",
            UploadFailure::CreateMessage => "errorCreateMessage",
        }
    }
}

impl fmt::Display for UploadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a delivery attempt, as reported to the host.
///
/// Service-level rejections (the API answered, but said no) surface as
/// `Error` with a failure code. Transport and IO problems do not map to
/// an outcome at all; those propagate as errors from the upload call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UploadOutcome {
    /// The log file was delivered and announced.
    Success,
    /// A service rejected one of the delivery steps.
    Error { message: UploadFailure },
    /// There was no log file to deliver.
    FileNotFound,
}

impl UploadOutcome {
    /// Shorthand for a service-rejection outcome.
    pub fn error(message: UploadFailure) -> Self {
        UploadOutcome::Error { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success)
    }
}
