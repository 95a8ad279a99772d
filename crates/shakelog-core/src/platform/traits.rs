//! Core traits and types for platform capabilities

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// How shake reporting is currently armed on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeArming {
    /// Whether the shake detector should fire at all
    pub enabled: bool,
    /// Whether any existing log file was removed when arming
    pub clear_on_arm: bool,
}

impl ShakeArming {
    pub fn new(enabled: bool, clear_on_arm: bool) -> Self {
        Self {
            enabled,
            clear_on_arm,
        }
    }
}

/// Errors that can occur during platform operations
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Platform not available: {0}")]
    NotAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Platform error: {0}")]
    Other(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Trait for device-local capabilities backing the bridge
///
/// One implementation per host platform owns the log file and the
/// shake detector. Implementations can be:
/// - File-backed for desktop and mobile hosts (`FilePlatform`)
/// - In-memory for testing (`MemoryPlatform`)
/// - Custom implementations (embedded hosts, remote sinks, etc.)
#[async_trait]
pub trait Platform: Send + Sync {
    /// Human-readable name of this platform
    fn name(&self) -> &str;

    /// Append one formatted line to the log file
    ///
    /// The caller supplies line termination; the platform writes bytes
    /// as given and creates the file on first write.
    async fn write_log(&self, line: &str) -> PlatformResult<()>;

    /// Absolute path of the log file, whether or not it exists yet
    fn log_path(&self) -> PathBuf;

    /// Remove the log file
    ///
    /// Deleting a file that does not exist is a success.
    async fn delete_log_file(&self) -> PlatformResult<()>;

    /// Whether the log file currently exists
    async fn exists_file(&self) -> PlatformResult<bool>;

    /// Arm or disarm shake reporting
    ///
    /// When `clear_on_arm` is set any existing log file is removed
    /// first, so the new session starts from an empty report.
    async fn arm_shake(&self, enabled: bool, clear_on_arm: bool) -> PlatformResult<()>;
}

/// Type alias for an Arc-wrapped platform
pub type SharedPlatform = Arc<dyn Platform>;
