//! File-backed platform implementation

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::traits::{Platform, PlatformResult, ShakeArming};

/// Platform backed by a log file on the local filesystem
///
/// Lines are appended in arrival order; the file and its parent
/// directory are created on first write. This implementation has no
/// shake sensor of its own, so `arm_shake` records the requested state
/// for the host to poll and honors the clear-on-arm contract.
#[derive(Debug)]
pub struct FilePlatform {
    path: PathBuf,
    arming: RwLock<Option<ShakeArming>>,
}

impl Default for FilePlatform {
    fn default() -> Self {
        Self::new(Self::default_log_path())
    }
}

impl FilePlatform {
    /// Create a platform writing to the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            arming: RwLock::new(None),
        }
    }

    /// Create a platform writing to the conventional per-app location
    ///
    /// Resolves to `<data dir>/<app name>/log.txt`, falling back to the
    /// system temp directory when no data directory is available.
    pub fn for_app(app_name: &str) -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
        Self::new(base.join(app_name).join("log.txt"))
    }

    /// Default log file location in the system temp directory
    pub fn default_log_path() -> PathBuf {
        std::env::temp_dir().join("shakelog-log.txt")
    }

    /// The arming state most recently requested via `arm_shake`
    pub fn arming(&self) -> Option<ShakeArming> {
        *self.arming.read().unwrap()
    }

    async fn ensure_parent(&self, path: &Path) -> PlatformResult<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Platform for FilePlatform {
    fn name(&self) -> &str {
        "file"
    }

    async fn write_log(&self, line: &str) -> PlatformResult<()> {
        self.ensure_parent(&self.path).await?;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    fn log_path(&self) -> PathBuf {
        self.path.clone()
    }

    async fn delete_log_file(&self) -> PlatformResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists_file(&self) -> PlatformResult<bool> {
        Ok(tokio::fs::try_exists(&self.path).await?)
    }

    async fn arm_shake(&self, enabled: bool, clear_on_arm: bool) -> PlatformResult<()> {
        if clear_on_arm {
            self.delete_log_file().await?;
        }
        *self.arming.write().unwrap() = Some(ShakeArming::new(enabled, clear_on_arm));
        Ok(())
    }
}
