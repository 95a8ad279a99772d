//! Setup options for the bridge

use std::fmt;
use std::sync::Arc;

use crate::shake::ShakeHandler;
use crate::types::LogLevel;

/// Options controlling what [`setup`](super::DevTools::setup) installs
///
/// The defaults describe a dormant bridge: disabled, forwarding to the
/// console when enabled, persisting at the `Log` threshold, with no
/// shake callback.
pub struct SetupOptions {
    /// Master switch; when false setup does nothing at all
    pub enabled: bool,
    /// Keep any existing log file when arming shake reporting
    pub preserve_log: bool,
    /// Forward captured calls to the host console
    pub override_logs: bool,
    /// Persistence threshold for captured records
    pub level: LogLevel,
    /// Callback fired when the device is shaken
    pub on_shake: Option<ShakeHandler>,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            preserve_log: false,
            override_logs: true,
            level: LogLevel::default(),
            on_shake: None,
        }
    }
}

impl SetupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_preserve_log(mut self, preserve_log: bool) -> Self {
        self.preserve_log = preserve_log;
        self
    }

    pub fn with_override_logs(mut self, override_logs: bool) -> Self {
        self.override_logs = override_logs;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_on_shake(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_shake = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for SetupOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetupOptions")
            .field("enabled", &self.enabled)
            .field("preserve_log", &self.preserve_log)
            .field("override_logs", &self.override_logs)
            .field("level", &self.level)
            .field("on_shake", &self.on_shake.is_some())
            .finish()
    }
}
