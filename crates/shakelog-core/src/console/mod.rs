//! Console abstractions for pass-through output

mod capture;
mod noop;
mod stdio;
mod traits;

pub use capture::CaptureConsole;
pub use noop::NoOpConsole;
pub use stdio::StdioConsole;
pub use traits::{Console, SharedConsole};
