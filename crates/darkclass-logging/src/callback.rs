//! Host status callback management

use darkclass_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Host callback receiving `(level, target, message)` for each forwarded event
pub type StatusCallback = Arc<dyn Fn(LogLevel, &str, &str) + Send + Sync>;

/// Global callback manager
static CALLBACK_MANAGER: OnceCell<StatusCallbackManager> = OnceCell::new();

/// Holds the host's status callback and the minimum level forwarded to it
pub struct StatusCallbackManager {
    callback: RwLock<Option<StatusCallback>>,
    level: AtomicU8,
}

impl StatusCallbackManager {
    pub fn new() -> Self {
        Self {
            callback: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the global callback manager instance
    pub fn global() -> &'static StatusCallbackManager {
        CALLBACK_MANAGER.get_or_init(StatusCallbackManager::new)
    }

    pub fn set_callback<F>(&self, callback: F)
    where
        F: Fn(LogLevel, &str, &str) + Send + Sync + 'static,
    {
        *self.callback.write() = Some(Arc::new(callback));
    }

    pub fn clear_callback(&self) {
        *self.callback.write() = None;
    }

    pub fn has_callback(&self) -> bool {
        self.callback.read().is_some()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Invoke the callback if one is set and `level` is enabled.
    ///
    /// The lock is released before the call, so the callback may log.
    pub fn log(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        let callback = match self.callback.read().as_ref() {
            Some(cb) => Arc::clone(cb),
            None => return,
        };

        callback(level, target, message);
    }
}

impl Default for StatusCallbackManager {
    fn default() -> Self {
        Self::new()
    }
}
