//! Platform capabilities backing the bridge

mod file;
mod memory;
mod traits;

pub use file::FilePlatform;
pub use memory::MemoryPlatform;
pub use traits::{Platform, PlatformError, PlatformResult, ShakeArming, SharedPlatform};
