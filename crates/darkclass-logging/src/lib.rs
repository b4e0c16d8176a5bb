//! darkclass-logging - Tracing to host status bridge
//!
//! This crate provides:
//! - [`StatusLayer`] tracing layer that forwards events to a host status callback
//! - [`StatusCallbackManager`] holding the callback and the forwarding level
//! - [`ReloadHandle`] for changing the global level after initialization

mod callback;
mod layer;
mod reload;

pub use callback::{StatusCallback, StatusCallbackManager};
pub use darkclass_core::LogLevel;
pub use layer::{StatusLayer, init_logging};
pub use reload::ReloadHandle;

/// Change the level of both the console filter and status forwarding
pub fn set_log_level(level: LogLevel) -> Result<(), String> {
    StatusCallbackManager::global().set_level(level);
    ReloadHandle::global().reload_level(level)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        LogLevel, ReloadHandle, StatusCallbackManager, StatusLayer, init_logging, set_log_level,
    };
}
