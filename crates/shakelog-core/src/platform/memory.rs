//! In-memory platform implementation

use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::{Platform, PlatformError, PlatformResult, ShakeArming};

/// In-memory platform for testing and ephemeral use
///
/// The "log file" is a vector of lines, so tests can assert exactly
/// what reached the sink and in what order. Writes can be scripted to
/// fail for exercising the fire-and-forget path.
///
/// # Thread Safety
///
/// State lives behind `RwLock`s and is safe to share across tasks.
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    lines: RwLock<Vec<String>>,
    exists: RwLock<bool>,
    arming: RwLock<Option<ShakeArming>>,
    fail_writes: RwLock<bool>,
}

impl MemoryPlatform {
    /// Create a new empty platform with no log file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a platform whose log file already exists with content
    pub fn with_existing_log(lines: Vec<String>) -> Self {
        Self {
            lines: RwLock::new(lines),
            exists: RwLock::new(true),
            arming: RwLock::new(None),
            fail_writes: RwLock::new(false),
        }
    }

    /// All lines written so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().unwrap().clone()
    }

    /// Number of lines written so far
    pub fn line_count(&self) -> usize {
        self.lines.read().unwrap().len()
    }

    /// Script every subsequent write to fail
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().unwrap() = fail;
    }

    /// Force the file-exists flag, independent of written lines
    pub fn set_exists(&self, exists: bool) {
        *self.exists.write().unwrap() = exists;
    }

    /// The arming state most recently requested via `arm_shake`
    pub fn arming(&self) -> Option<ShakeArming> {
        *self.arming.read().unwrap()
    }
}

#[async_trait]
impl Platform for MemoryPlatform {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_log(&self, line: &str) -> PlatformResult<()> {
        if *self.fail_writes.read().unwrap() {
            return Err(PlatformError::Other("scripted write failure".to_string()));
        }
        self.lines.write().unwrap().push(line.to_string());
        *self.exists.write().unwrap() = true;
        Ok(())
    }

    fn log_path(&self) -> PathBuf {
        PathBuf::from("log.txt")
    }

    async fn delete_log_file(&self) -> PlatformResult<()> {
        self.lines.write().unwrap().clear();
        *self.exists.write().unwrap() = false;
        Ok(())
    }

    async fn exists_file(&self) -> PlatformResult<bool> {
        Ok(*self.exists.read().unwrap())
    }

    async fn arm_shake(&self, enabled: bool, clear_on_arm: bool) -> PlatformResult<()> {
        if clear_on_arm {
            self.delete_log_file().await?;
        }
        *self.arming.write().unwrap() = Some(ShakeArming::new(enabled, clear_on_arm));
        Ok(())
    }
}
