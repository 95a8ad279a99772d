//! Shake listener with a single replaceable callback slot

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Callback invoked when the device is shaken
pub type ShakeHandler = Arc<dyn Fn() + Send + Sync>;

/// Holds at most one shake callback
///
/// Registering a new handler replaces the previous one, so repeated
/// setup never stacks callbacks. Firing with no handler registered is
/// a no-op.
#[derive(Default)]
pub struct ShakeListener {
    handler: RwLock<Option<ShakeHandler>>,
}

impl ShakeListener {
    /// Create a listener with no handler registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a handler, replacing any previous one
    pub fn register(&self, handler: ShakeHandler) {
        *self.handler.write() = Some(handler);
    }

    /// Remove the current handler, if any
    pub fn clear(&self) {
        *self.handler.write() = None;
    }

    /// Whether a handler is currently registered
    pub fn is_registered(&self) -> bool {
        self.handler.read().is_some()
    }

    /// Fire the current handler
    ///
    /// The handler is cloned out before the call, so a handler that
    /// re-registers does not deadlock the listener.
    pub fn emit(&self) {
        let handler = self.handler.read().clone();
        if let Some(handler) = handler {
            handler();
        }
    }
}

impl std::fmt::Debug for ShakeListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShakeListener")
            .field("registered", &self.is_registered())
            .finish()
    }
}

/// Process-wide listener wired to the host's shake detector
static GLOBAL_LISTENER: Lazy<Arc<ShakeListener>> = Lazy::new(|| Arc::new(ShakeListener::new()));

/// Handle to the process-wide listener
///
/// Hosts route their shake detector here; there is one slot per
/// process by construction.
pub fn global() -> Arc<ShakeListener> {
    Arc::clone(&GLOBAL_LISTENER)
}

/// Clear the process-wide listener (mainly for testing)
pub fn reset() {
    GLOBAL_LISTENER.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_without_handler_is_noop() {
        let listener = ShakeListener::new();
        assert!(!listener.is_registered());
        listener.emit();
    }

    #[test]
    fn test_register_and_emit() {
        let listener = ShakeListener::new();
        let count = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&count);
        listener.register(Arc::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        listener.emit();
        listener.emit();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_new_handler_replaces_previous() {
        let listener = ShakeListener::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&first);
        listener.register(Arc::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        let seen = Arc::clone(&second);
        listener.register(Arc::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        listener.emit();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_removes_handler() {
        let listener = ShakeListener::new();
        let count = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&count);
        listener.register(Arc::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
        listener.clear();

        listener.emit();
        assert!(!listener.is_registered());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_global_is_one_slot() {
        let first = global();
        let second = global();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
