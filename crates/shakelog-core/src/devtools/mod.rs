//! Developer-tools bridge wiring capture, persistence and delivery
//!
//! [`DevTools`] ties the seams together: captured calls are forwarded
//! to the host console, formatted, and queued onto a single writer
//! task that appends them to the platform's log file in call order.
//! Delivery drains that queue before shipping the file, so a report
//! never misses the lines that prompted it.

mod global;
mod options;

pub use global::{
    debug, delete_log_file, error, flush, install, is_installed, log, log_file_path, reset,
    send_dev_logs_to_discord, send_dev_logs_to_slack, setup, trace, trigger_shake, warn,
};
pub use options::SetupOptions;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

use crate::console::{SharedConsole, StdioConsole};
use crate::format;
use crate::platform::{FilePlatform, PlatformError, PlatformResult, SharedPlatform};
use crate::shake::{self, ShakeListener};
use crate::transport::{ReqwestTransport, SharedTransport};
use crate::types::{DiscordCredentials, LogLevel, LogRecord, SlackCredentials, UploadOutcome};
use crate::upload::{DiscordClient, SlackClient, UploadResult};

/// Errors that can occur during setup
#[derive(Error, Debug)]
pub enum SetupError {
    /// Arming the shake detector failed
    #[error("Platform error during setup: {0}")]
    Platform(#[from] PlatformError),
}

enum WriterCommand {
    Line(String),
    Flush(oneshot::Sender<()>),
}

/// The developer-tools bridge
///
/// Construction wires production collaborators (stdio console, file
/// platform, reqwest transport, the process-wide shake listener); the
/// `with_*` builders swap any of them out. Swap collaborators before
/// the first captured call, because the writer task binds the platform
/// at first use.
pub struct DevTools {
    console: SharedConsole,
    platform: SharedPlatform,
    transport: SharedTransport,
    listener: Arc<ShakeListener>,
    level: RwLock<LogLevel>,
    intercepting: AtomicBool,
    installed: AtomicBool,
    writer: RwLock<Option<mpsc::UnboundedSender<WriterCommand>>>,
}

impl Default for DevTools {
    fn default() -> Self {
        Self::new()
    }
}

impl DevTools {
    /// Create a bridge with production collaborators
    pub fn new() -> Self {
        Self {
            console: Arc::new(StdioConsole::new()),
            platform: Arc::new(FilePlatform::default()),
            transport: Arc::new(ReqwestTransport::new()),
            listener: shake::global(),
            level: RwLock::new(LogLevel::default()),
            intercepting: AtomicBool::new(false),
            installed: AtomicBool::new(false),
            writer: RwLock::new(None),
        }
    }

    /// Replace the console seam
    pub fn with_console(mut self, console: SharedConsole) -> Self {
        self.console = console;
        self
    }

    /// Replace the platform seam
    pub fn with_platform(mut self, platform: SharedPlatform) -> Self {
        self.platform = platform;
        self
    }

    /// Replace the transport seam
    pub fn with_transport(mut self, transport: SharedTransport) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the shake listener (the process-wide one by default)
    pub fn with_listener(mut self, listener: Arc<ShakeListener>) -> Self {
        self.listener = listener;
        self
    }

    /// Install capture according to the given options
    ///
    /// Disabled options return immediately without installing anything.
    /// A second enabled setup on an already-installed bridge warns on
    /// the console and changes nothing, so callbacks never stack and
    /// lines are never captured twice.
    pub async fn setup(&self, options: SetupOptions) -> Result<(), SetupError> {
        self.console.log(&format!("[DevTools.setup] {:?}", options));
        if !options.enabled {
            return Ok(());
        }
        if self.installed.load(Ordering::SeqCst) {
            self.console
                .warn("[DevTools.setup] already installed, ignoring repeated setup");
            return Ok(());
        }

        if let Some(handler) = options.on_shake.clone() {
            self.platform
                .arm_shake(true, !options.preserve_log)
                .await?;
            self.listener.register(handler);
        }

        *self.level.write() = options.level;
        if options.override_logs {
            self.intercepting.store(true, Ordering::SeqCst);
        }
        self.ensure_writer();
        self.installed.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Capture a log-level line
    pub fn log(&self, message: &str, extras: &[&str]) {
        self.emit(LogLevel::Log, message, extras);
    }

    /// Capture a warning line
    pub fn warn(&self, message: &str, extras: &[&str]) {
        self.emit(LogLevel::Warn, message, extras);
    }

    /// Capture an error line
    pub fn error(&self, message: &str, extras: &[&str]) {
        self.emit(LogLevel::Error, message, extras);
    }

    /// Capture a debug line
    pub fn debug(&self, message: &str, extras: &[&str]) {
        self.emit(LogLevel::Debug, message, extras);
    }

    /// Capture a trace line
    pub fn trace(&self, message: &str, extras: &[&str]) {
        self.emit(LogLevel::Trace, message, extras);
    }

    /// Route one captured call: console first, then the write queue
    ///
    /// The console always sees the call while interception is on; the
    /// threshold only gates persistence. Failures anywhere on this
    /// path are swallowed, capture must never take the host down.
    fn emit(&self, level: LogLevel, message: &str, extras: &[&str]) {
        if self.is_intercepting() {
            self.forward_to_console(level, message, extras);
        }

        if !level.passes(self.level()) {
            return;
        }

        let extras: Vec<String> = extras.iter().map(|extra| extra.to_string()).collect();
        let record = LogRecord::new(level, message).with_extras(extras);
        let line = format::format_record(&record);
        if let Some(writer) = self.ensure_writer() {
            // A closed channel means the runtime shut down; the line
            // is dropped, and the slot is cleared so the next call
            // respawns the writer on whatever runtime is current then
            if writer.send(WriterCommand::Line(line)).is_err() {
                self.clear_writer(&writer);
            }
        }
    }

    fn forward_to_console(&self, level: LogLevel, message: &str, extras: &[&str]) {
        let composed = if extras.is_empty() {
            message.to_string()
        } else {
            format!("{} {}", message, extras.join(" "))
        };
        match level {
            LogLevel::Error => self.console.error(&composed),
            LogLevel::Warn => self.console.warn(&composed),
            _ => self.console.log(&composed),
        }
    }

    /// Hand out the write queue, spawning the writer task on first use
    ///
    /// Returns `None` when no tokio runtime is running; persistence
    /// stays a silent no-op until one is available.
    fn ensure_writer(&self) -> Option<mpsc::UnboundedSender<WriterCommand>> {
        {
            let slot = self.writer.read();
            if let Some(writer) = slot.as_ref() {
                return Some(writer.clone());
            }
        }

        let mut slot = self.writer.write();
        if slot.is_none() {
            let handle = match Handle::try_current() {
                Ok(handle) => handle,
                Err(_) => return None,
            };
            let (tx, rx) = mpsc::unbounded_channel();
            handle.spawn(run_writer(rx, Arc::clone(&self.platform)));
            *slot = Some(tx);
        }
        slot.as_ref().cloned()
    }

    /// Drop a writer handle whose channel has closed, unless another
    /// caller already replaced it
    fn clear_writer(&self, stale: &mpsc::UnboundedSender<WriterCommand>) {
        let mut slot = self.writer.write();
        if slot
            .as_ref()
            .is_some_and(|current| current.same_channel(stale))
        {
            *slot = None;
        }
    }

    /// Wait until every line queued so far has reached the sink
    pub async fn flush(&self) {
        let writer = match self.ensure_writer() {
            Some(writer) => writer,
            None => return,
        };
        let (tx, rx) = oneshot::channel();
        if writer.send(WriterCommand::Flush(tx)).is_err() {
            self.clear_writer(&writer);
            return;
        }
        let _ = rx.await;
    }

    /// Flush pending lines, then run the Slack delivery pipeline
    pub async fn send_dev_logs_to_slack(
        &self,
        credentials: &SlackCredentials,
    ) -> UploadResult<UploadOutcome> {
        self.flush().await;
        let client = SlackClient::new(Arc::clone(&self.transport), Arc::clone(&self.console));
        client.upload(credentials, &self.platform.log_path()).await
    }

    /// Flush pending lines, then run the Discord delivery pipeline
    pub async fn send_dev_logs_to_discord(
        &self,
        credentials: &DiscordCredentials,
    ) -> UploadResult<UploadOutcome> {
        self.flush().await;
        let client = DiscordClient::new(Arc::clone(&self.transport), Arc::clone(&self.console));
        client.upload(credentials, self.platform.as_ref()).await
    }

    /// Remove the log file
    pub async fn delete_log_file(&self) -> PlatformResult<()> {
        self.platform.delete_log_file().await
    }

    /// Path of the log file on this platform
    pub fn log_file_path(&self) -> PathBuf {
        self.platform.log_path()
    }

    /// Persistence threshold currently in effect
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Whether an enabled setup has completed on this bridge
    pub fn is_installed(&self) -> bool {
        self.installed.load(Ordering::SeqCst)
    }

    /// Whether captured calls are forwarded to the console
    pub fn is_intercepting(&self) -> bool {
        self.intercepting.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for DevTools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevTools")
            .field("platform", &self.platform.name())
            .field("transport", &self.transport.name())
            .field("level", &self.level())
            .field("installed", &self.is_installed())
            .field("intercepting", &self.is_intercepting())
            .finish()
    }
}

/// Drain loop for the ordered write queue
///
/// One task per bridge appends lines strictly in arrival order. Write
/// failures drop the line and keep draining.
async fn run_writer(mut rx: mpsc::UnboundedReceiver<WriterCommand>, platform: SharedPlatform) {
    while let Some(command) = rx.recv().await {
        match command {
            WriterCommand::Line(line) => {
                let _ = platform.write_log(&line).await;
            }
            WriterCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use crate::console::CaptureConsole;
    use crate::platform::{MemoryPlatform, Platform, ShakeArming};
    use crate::transport::{HttpResponse, MockTransport};
    use crate::types::UploadFailure;

    struct TestBridge {
        tools: DevTools,
        console: Arc<CaptureConsole>,
        platform: Arc<MemoryPlatform>,
        transport: Arc<MockTransport>,
        listener: Arc<ShakeListener>,
    }

    fn bridge() -> TestBridge {
        bridge_on(MemoryPlatform::new(), MockTransport::new())
    }

    fn bridge_on(platform: MemoryPlatform, transport: MockTransport) -> TestBridge {
        let console = Arc::new(CaptureConsole::new());
        let platform = Arc::new(platform);
        let transport = Arc::new(transport);
        let listener = Arc::new(ShakeListener::new());
        let tools = DevTools::new()
            .with_console(console.clone())
            .with_platform(platform.clone())
            .with_transport(transport.clone())
            .with_listener(listener.clone());
        TestBridge {
            tools,
            console,
            platform,
            transport,
            listener,
        }
    }

    fn enabled() -> SetupOptions {
        SetupOptions::new().with_enabled(true)
    }

    fn slack_credentials() -> SlackCredentials {
        SlackCredentials::new("post-tok", "upload-tok", "#dev")
    }

    fn slack_accepting_transport() -> MockTransport {
        MockTransport::new()
            .with_response(HttpResponse::ok(r#"{"ok":true,"file":{"id":"F1"}}"#))
            .with_response(HttpResponse::ok(
                r#"{"ok":true,"file":{"permalink_public":"https://slack-files.com/T1-F1-s1"}}"#,
            ))
            .with_response(HttpResponse::ok(r#"{"ok":true}"#))
    }

    #[tokio::test]
    async fn test_captured_calls_reach_sink_in_order() {
        let bridge = bridge();
        bridge.tools.setup(enabled()).await.expect("setup");

        bridge.tools.log("first", &[]);
        bridge.tools.warn("second", &[]);
        bridge.tools.error("third", &[]);
        bridge.tools.flush().await;

        let lines = bridge.platform.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("LOG") && lines[0].contains("first"));
        assert!(lines[1].contains("WARN") && lines[1].contains("second"));
        assert!(lines[2].contains("ERROR") && lines[2].contains("third"));
        assert!(lines[0].starts_with("📠 ["));
        assert!(lines[0].ends_with('\n'));
    }

    #[tokio::test]
    async fn test_console_sees_call_before_sink() {
        let bridge = bridge();
        bridge.tools.setup(enabled()).await.expect("setup");
        bridge.console.clear();

        bridge.tools.error("boom", &[]);

        // Forwarding is synchronous; the sink write is still queued
        assert_eq!(bridge.console.calls(), vec![("error", "boom".to_string())]);
        assert_eq!(bridge.platform.line_count(), 0);

        bridge.tools.flush().await;
        assert_eq!(bridge.platform.line_count(), 1);
    }

    #[tokio::test]
    async fn test_console_routing_by_level() {
        let bridge = bridge();
        bridge
            .tools
            .setup(enabled().with_level(LogLevel::Trace))
            .await
            .expect("setup");
        bridge.console.clear();

        bridge.tools.log("a", &[]);
        bridge.tools.warn("b", &[]);
        bridge.tools.error("c", &[]);
        bridge.tools.debug("d", &[]);
        bridge.tools.trace("e", &[]);

        let kinds: Vec<&'static str> = bridge
            .console
            .calls()
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, vec!["log", "warn", "error", "log", "log"]);
    }

    #[tokio::test]
    async fn test_extras_reach_console_and_sink() {
        let bridge = bridge();
        bridge.tools.setup(enabled()).await.expect("setup");
        bridge.console.clear();

        bridge.tools.log("msg", &["a", "b"]);
        bridge.tools.flush().await;

        assert_eq!(bridge.console.calls(), vec![("log", "msg a b".to_string())]);
        let lines = bridge.platform.lines();
        assert!(lines[0].contains("msg a, b"), "got: {}", lines[0]);
    }

    #[tokio::test]
    async fn test_threshold_gates_sink_but_not_console() {
        let bridge = bridge();
        bridge
            .tools
            .setup(enabled().with_level(LogLevel::Warn))
            .await
            .expect("setup");
        bridge.console.clear();

        bridge.tools.debug("verbose", &[]);
        bridge.tools.error("kept", &[]);
        bridge.tools.flush().await;

        assert_eq!(bridge.console.len(), 2);
        let lines = bridge.platform.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("kept"));
    }

    #[tokio::test]
    async fn test_disabled_setup_installs_nothing() {
        let bridge = bridge();
        bridge.tools.setup(SetupOptions::new()).await.expect("setup");

        assert!(!bridge.tools.is_installed());
        assert!(!bridge.tools.is_intercepting());
        assert!(!bridge.listener.is_registered());
        assert_eq!(bridge.platform.arming(), None);

        // Direct capture still persists at the default threshold
        bridge.console.clear();
        bridge.tools.log("direct", &[]);
        bridge.tools.flush().await;
        assert!(bridge.console.is_empty());
        assert_eq!(bridge.platform.line_count(), 1);
    }

    #[tokio::test]
    async fn test_override_logs_false_keeps_console_quiet() {
        let bridge = bridge();
        bridge
            .tools
            .setup(enabled().with_override_logs(false))
            .await
            .expect("setup");
        bridge.console.clear();

        bridge.tools.log("quiet", &[]);
        bridge.tools.flush().await;

        assert!(bridge.console.is_empty());
        assert_eq!(bridge.platform.line_count(), 1);
    }

    #[tokio::test]
    async fn test_repeated_setup_warns_and_keeps_first_install() {
        let bridge = bridge();
        bridge
            .tools
            .setup(enabled().with_level(LogLevel::Warn))
            .await
            .expect("setup");
        bridge.console.clear();

        bridge
            .tools
            .setup(enabled().with_level(LogLevel::Trace))
            .await
            .expect("setup");

        let warned = bridge
            .console
            .calls()
            .iter()
            .any(|(kind, message)| *kind == "warn" && message.contains("already installed"));
        assert!(warned);
        assert_eq!(bridge.tools.level(), LogLevel::Warn);
    }

    #[tokio::test]
    async fn test_shake_callback_and_arming() {
        let bridge = bridge();
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&fired);

        bridge
            .tools
            .setup(enabled().with_on_shake(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            }))
            .await
            .expect("setup");

        assert!(bridge.listener.is_registered());
        bridge.listener.emit();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // preserve_log defaults to false, so arming cleared the file
        assert_eq!(bridge.platform.arming(), Some(ShakeArming::new(true, true)));
    }

    #[tokio::test]
    async fn test_preserve_log_keeps_existing_file() {
        let bridge = bridge_on(
            MemoryPlatform::with_existing_log(vec!["old\n".to_string()]),
            MockTransport::new(),
        );

        bridge
            .tools
            .setup(enabled().with_preserve_log(true).with_on_shake(|| {}))
            .await
            .expect("setup");

        assert_eq!(
            bridge.platform.arming(),
            Some(ShakeArming::new(true, false))
        );
        assert_eq!(bridge.platform.lines(), vec!["old\n"]);
    }

    #[tokio::test]
    async fn test_setup_without_shake_clears_nothing() {
        let bridge = bridge_on(
            MemoryPlatform::with_existing_log(vec!["old\n".to_string()]),
            MockTransport::new(),
        );

        bridge.tools.setup(enabled()).await.expect("setup");

        assert_eq!(bridge.platform.arming(), None);
        assert!(!bridge.listener.is_registered());
        assert_eq!(bridge.platform.lines(), vec!["old\n"]);
    }

    #[tokio::test]
    async fn test_sink_failure_is_swallowed() {
        let bridge = bridge();
        bridge.tools.setup(enabled()).await.expect("setup");
        bridge.console.clear();
        bridge.platform.set_fail_writes(true);

        bridge.tools.log("doomed", &[]);
        bridge.tools.flush().await;

        // The console saw it; the sink quietly dropped it
        assert_eq!(bridge.console.len(), 1);
        assert_eq!(bridge.platform.line_count(), 0);
    }

    #[test]
    fn test_capture_without_runtime_is_silent() {
        let console = Arc::new(CaptureConsole::new());
        let platform = Arc::new(MemoryPlatform::new());
        let tools = DevTools::new()
            .with_console(console.clone())
            .with_platform(platform.clone());

        // No tokio runtime here, so there is no writer to queue onto
        tools.log("dropped", &[]);
        assert_eq!(platform.line_count(), 0);
    }

    #[tokio::test]
    async fn test_default_threshold_applies_before_setup() {
        let bridge = bridge();

        bridge.tools.debug("hidden", &[]);
        bridge.tools.log("kept", &[]);
        bridge.tools.flush().await;

        assert_eq!(bridge.tools.level(), LogLevel::Log);
        let lines = bridge.platform.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("kept"));
    }

    #[tokio::test]
    async fn test_slack_delivery_flushes_queue_first() {
        let bridge = bridge_on(MemoryPlatform::new(), slack_accepting_transport());
        bridge.tools.setup(enabled()).await.expect("setup");

        bridge.tools.log("pending", &[]);
        let outcome = bridge
            .tools
            .send_dev_logs_to_slack(&slack_credentials())
            .await
            .expect("pipeline");

        assert_eq!(outcome, UploadOutcome::Success);
        assert_eq!(bridge.platform.line_count(), 1);
        assert_eq!(bridge.transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_discord_delivery_sees_flushed_lines() {
        // The platform starts with no file; the queued line has to
        // land before the exists check or this would be FileNotFound
        let bridge = bridge_on(
            MemoryPlatform::new(),
            MockTransport::new().with_response(HttpResponse::new(204, "")),
        );
        bridge.tools.setup(enabled()).await.expect("setup");

        bridge.tools.log("pending", &[]);
        let outcome = bridge
            .tools
            .send_dev_logs_to_discord(&DiscordCredentials::new("https://discord.test/hook"))
            .await
            .expect("pipeline");

        assert_eq!(outcome, UploadOutcome::Success);
        assert_eq!(bridge.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_discord_delivery_without_log_is_file_not_found() {
        let bridge = bridge();
        bridge.tools.setup(enabled()).await.expect("setup");

        let outcome = bridge
            .tools
            .send_dev_logs_to_discord(&DiscordCredentials::new("https://discord.test/hook"))
            .await
            .expect("pipeline");

        assert_eq!(outcome, UploadOutcome::FileNotFound);
        assert_eq!(bridge.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_slack_rejection_surfaces_as_outcome() {
        let bridge = bridge_on(
            MemoryPlatform::new(),
            MockTransport::new().with_response(HttpResponse::ok(r#"{"ok":false}"#)),
        );
        bridge.tools.setup(enabled()).await.expect("setup");

        let outcome = bridge
            .tools
            .send_dev_logs_to_slack(&slack_credentials())
            .await
            .expect("pipeline");

        assert_eq!(
            outcome,
            UploadOutcome::error(UploadFailure::UploadLogFile)
        );
    }

    #[tokio::test]
    async fn test_delete_and_path_proxies() {
        let bridge = bridge();
        bridge.tools.setup(enabled()).await.expect("setup");

        bridge.tools.log("line", &[]);
        bridge.tools.flush().await;
        assert_eq!(bridge.platform.line_count(), 1);

        bridge.tools.delete_log_file().await.expect("delete");
        assert_eq!(bridge.platform.line_count(), 0);
        assert_eq!(bridge.tools.log_file_path(), bridge.platform.log_path());
    }

    #[tokio::test]
    async fn test_debug_formatting() {
        let bridge = bridge();
        let rendered = format!("{:?}", bridge.tools);
        assert!(rendered.contains("DevTools"));
        assert!(rendered.contains("memory"));
        assert!(rendered.contains("mock"));
    }
}
