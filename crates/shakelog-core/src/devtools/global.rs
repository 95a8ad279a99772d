//! Process-wide bridge instance and convenience entry points
//!
//! Hosts usually want exactly one bridge for the whole process. This
//! module keeps that instance and routes free functions and the
//! `dev_*!` macros to it. Nothing here panics when no bridge is
//! installed; capture calls become no-ops and fallible operations
//! report the platform as unavailable.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::{DevTools, SetupError, SetupOptions};
use crate::platform::{PlatformError, PlatformResult};
use crate::types::{DiscordCredentials, SlackCredentials, UploadOutcome};
use crate::upload::{UploadError, UploadResult};

/// Installed bridge instance, if any
static INSTALLED: Lazy<RwLock<Option<Arc<DevTools>>>> = Lazy::new(|| RwLock::new(None));

fn installed_instance() -> Option<Arc<DevTools>> {
    INSTALLED.read().clone()
}

fn not_installed() -> PlatformError {
    PlatformError::NotAvailable("no bridge installed".to_string())
}

/// Put a bridge into the process-wide slot
///
/// The first install wins; later calls return the already-installed
/// instance untouched. Hosts with custom platforms build their own
/// [`DevTools`] and install it before calling [`setup`].
pub fn install(tools: Arc<DevTools>) -> Arc<DevTools> {
    let mut slot = INSTALLED.write();
    match slot.as_ref() {
        Some(existing) => Arc::clone(existing),
        None => {
            *slot = Some(Arc::clone(&tools));
            tools
        }
    }
}

/// Set up the process-wide bridge, installing a default one if needed
pub async fn setup(options: SetupOptions) -> Result<(), SetupError> {
    let tools = match installed_instance() {
        Some(tools) => tools,
        None => install(Arc::new(DevTools::new())),
    };
    tools.setup(options).await
}

/// Capture a log-level line on the installed bridge
pub fn log(message: &str, extras: &[&str]) {
    if let Some(tools) = installed_instance() {
        tools.log(message, extras);
    }
}

/// Capture a warning line on the installed bridge
pub fn warn(message: &str, extras: &[&str]) {
    if let Some(tools) = installed_instance() {
        tools.warn(message, extras);
    }
}

/// Capture an error line on the installed bridge
pub fn error(message: &str, extras: &[&str]) {
    if let Some(tools) = installed_instance() {
        tools.error(message, extras);
    }
}

/// Capture a debug line on the installed bridge
pub fn debug(message: &str, extras: &[&str]) {
    if let Some(tools) = installed_instance() {
        tools.debug(message, extras);
    }
}

/// Capture a trace line on the installed bridge
pub fn trace(message: &str, extras: &[&str]) {
    if let Some(tools) = installed_instance() {
        tools.trace(message, extras);
    }
}

/// Remove the log file via the installed bridge
pub async fn delete_log_file() -> PlatformResult<()> {
    match installed_instance() {
        Some(tools) => tools.delete_log_file().await,
        None => Err(not_installed()),
    }
}

/// Path of the installed bridge's log file
pub fn log_file_path() -> Option<PathBuf> {
    installed_instance().map(|tools| tools.log_file_path())
}

/// Wait until queued lines have reached the sink
pub async fn flush() {
    if let Some(tools) = installed_instance() {
        tools.flush().await;
    }
}

/// Run the Slack delivery pipeline on the installed bridge
pub async fn send_dev_logs_to_slack(
    credentials: &SlackCredentials,
) -> UploadResult<UploadOutcome> {
    match installed_instance() {
        Some(tools) => tools.send_dev_logs_to_slack(credentials).await,
        None => Err(UploadError::Platform(not_installed())),
    }
}

/// Run the Discord delivery pipeline on the installed bridge
pub async fn send_dev_logs_to_discord(
    credentials: &DiscordCredentials,
) -> UploadResult<UploadOutcome> {
    match installed_instance() {
        Some(tools) => tools.send_dev_logs_to_discord(credentials).await,
        None => Err(UploadError::Platform(not_installed())),
    }
}

/// Fire the process-wide shake listener
///
/// Host shake detectors call this; tests use it to simulate a shake.
pub fn trigger_shake() {
    crate::shake::global().emit();
}

/// Whether a bridge is installed and set up
pub fn is_installed() -> bool {
    installed_instance()
        .map(|tools| tools.is_installed())
        .unwrap_or(false)
}

/// Remove the installed bridge and clear the shake listener (mainly for testing)
pub fn reset() {
    *INSTALLED.write() = None;
    crate::shake::reset();
}

/// Convenience macros for capturing through the installed bridge
#[macro_export]
macro_rules! dev_log {
    ($($arg:tt)*) => {
        $crate::devtools::log(&format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! dev_warn {
    ($($arg:tt)*) => {
        $crate::devtools::warn(&format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! dev_error {
    ($($arg:tt)*) => {
        $crate::devtools::error(&format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! dev_debug {
    ($($arg:tt)*) => {
        $crate::devtools::debug(&format!($($arg)*), &[])
    };
}

#[macro_export]
macro_rules! dev_trace {
    ($($arg:tt)*) => {
        $crate::devtools::trace(&format!($($arg)*), &[])
    };
}
