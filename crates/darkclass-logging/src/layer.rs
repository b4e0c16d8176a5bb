//! Tracing layer that forwards to the host status callback

use crate::callback::StatusCallbackManager;
use crate::reload::{ReloadHandle, level_filter};
use darkclass_core::LogLevel;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Tracing layer that forwards log events to the status callback
pub struct StatusLayer {
    manager: &'static StatusCallbackManager,
}

impl StatusLayer {
    /// Create a layer using the global callback manager
    pub fn new() -> Self {
        Self {
            manager: StatusCallbackManager::global(),
        }
    }

    /// Create a layer with a specific callback manager
    pub fn with_manager(manager: &'static StatusCallbackManager) -> Self {
        Self { manager }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for StatusLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for StatusLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        if !self.manager.is_enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        self.manager.log(level, metadata.target(), &message);
    }
}

/// Extracts the message field from tracing events
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(value.to_string());
        }
    }
}

/// Initialize logging: a reloadable level filter, a console layer on stderr
/// and the status layer.
///
/// `RUST_LOG`, when set, narrows the console output further. Returns false
/// if a global subscriber was already installed.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    StatusCallbackManager::global().set_level(level);

    let (filter, handle) = tracing_subscriber::reload::Layer::new(level_filter(level));
    ReloadHandle::global().set_handle(handle, level);

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")));

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(StatusLayer::new())
        .try_init()
        .is_ok()
}
