//! Runtime log level changes

use darkclass_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

type FilterHandle = reload::Handle<LevelFilter, Registry>;

#[derive(Default)]
struct ReloadState {
    handle: Option<FilterHandle>,
    level: Option<LogLevel>,
}

/// Swaps the level filter installed by [`crate::init_logging`]
#[derive(Default)]
pub struct ReloadHandle {
    state: Mutex<ReloadState>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide handle used by `init_logging` and `set_log_level`
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Install the filter handle; `level` is what the filter starts with
    pub fn set_handle(&self, handle: FilterHandle, level: LogLevel) {
        let mut state = self.state.lock();
        state.handle = Some(handle);
        state.level = Some(level);
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().handle.is_some()
    }

    /// Level of the installed filter, `None` before initialization
    pub fn current_level(&self) -> Option<LogLevel> {
        self.state.lock().level
    }

    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let mut state = self.state.lock();
        let Some(handle) = state.handle.as_ref() else {
            return Err("logging not initialized".to_string());
        };

        handle
            .reload(level_filter(level))
            .map_err(|e| format!("failed to change log level to {}: {}", level, e))?;
        state.level = Some(level);
        Ok(())
    }
}

pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
