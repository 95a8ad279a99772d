//! Shakelog Core
//!
//! Runtime-agnostic developer-tools bridge for shake-to-report logging.
//! Captured log calls are forwarded to the host console, formatted into
//! timestamped report lines, and appended to a device-local log file.
//! A shake of the device (or anything else the host wires up) hands the
//! developer a way to ship that file to Slack or Discord.
//!
//! ## Typical wiring
//!
//! ```rust,ignore
//! use shakelog_core::devtools::{self, DevTools, SetupOptions};
//! use shakelog_core::platform::FilePlatform;
//! use std::sync::Arc;
//!
//! let tools = Arc::new(DevTools::new().with_platform(Arc::new(FilePlatform::for_app("my-app"))));
//! devtools::install(tools);
//! devtools::setup(
//!     SetupOptions::new()
//!         .with_enabled(cfg!(debug_assertions))
//!         .with_on_shake(|| println!("shaken, offer the report dialog")),
//! )
//! .await?;
//!
//! // Anywhere in the app
//! shakelog_core::dev_log!("checkout started for {}", order_id);
//!
//! // From the report dialog
//! let outcome = devtools::send_dev_logs_to_slack(&credentials).await?;
//! ```

pub mod types;
pub mod format;
pub mod console;
pub mod platform;
pub mod shake;
pub mod transport;
pub mod upload;
pub mod devtools;

// Re-export commonly used types
pub use types::{
    DiscordCredentials, LogLevel, LogRecord, SlackCredentials, UploadFailure, UploadOutcome,
};

pub use console::{CaptureConsole, Console, NoOpConsole, SharedConsole, StdioConsole};

pub use platform::{
    FilePlatform, MemoryPlatform, Platform, PlatformError, PlatformResult, ShakeArming,
    SharedPlatform,
};

pub use shake::{ShakeHandler, ShakeListener};

pub use transport::{
    HttpResponse, HttpTransport, MockTransport, ReqwestTransport, SharedTransport, TransportError,
    TransportResult,
};

pub use upload::{
    DiscordClient, PermalinkError, PublicPermalink, SlackClient, UploadError, UploadResult,
};

pub use devtools::{
    install, send_dev_logs_to_discord, send_dev_logs_to_slack, setup, trigger_shake, DevTools,
    SetupError, SetupOptions,
};

pub use format::{format_line, format_record};
