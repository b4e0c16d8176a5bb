//! darkclass-core - Dark class generation and reverse extraction
//!
//! This crate provides the generation engine:
//! - [`FieldSpec`] parsing of raw `"type name [key]"` field lines
//! - [`TypeClassifier`] deciding the code shape and storage of each field type
//! - [`ClassGenerator`] emitting the enum, holder class and accessor class
//! - [`extract`] recovering a [`ClassSpec`] from previously generated source
//! - [`Session`] as the thin adapter a host window drives
//!
//! # Example
//!
//! ```
//! use darkclass_core::{ClassSpec, GenerationOptions, StaticTypeTable, generate};
//!
//! let spec = ClassSpec::new("", "player_data", ["int health", "string name"]);
//! let code = generate(&spec, &StaticTypeTable::default());
//!
//! assert!(code.contains("enum PlayerDataField"));
//! assert!(code.contains("public static PlayerData New(int health, string name)"));
//! ```

mod catalog;
mod config;
mod emitter;
mod error;
mod extract;
mod field;
mod generator;
pub mod naming;
mod session;
mod spec;
mod types;

pub use catalog::{CatalogEntry, ContainerKind, HostTypeCatalog, TokenKind, TypeDeclKind};
pub use config::DarkClassConfig;
pub use emitter::CodeEmitter;
pub use error::{DarkClassError, DarkClassResult};
pub use extract::{ExtractedSpec, extract};
pub use field::{FieldSpec, parse_field, split_argument_list};
pub use generator::{ClassGenerator, generate, generate_with_indent};
pub use session::{OutputSink, Session, SessionError, SourceReader};
pub use spec::{ClassSpec, GenerationOptions, StorageMode};
pub use types::{
    ColorKind, FnTypeLookup, PrimitiveKind, StaticTypeTable, Storage, TypeClassifier, TypeLookup,
    TypeShape, VectorKind,
};

/// Log levels shared by the core, the logging bridge and the CLI
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Parse a config-style level name (`"info"`, `"WARN"`, ...).
    ///
    /// Unknown names fall back to `Info`.
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            "off" | "none" => LogLevel::Off,
            _ => LogLevel::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassGenerator, ClassSpec, DarkClassConfig, DarkClassError, DarkClassResult,
        ExtractedSpec, FieldSpec, GenerationOptions, HostTypeCatalog, LogLevel, OutputSink,
        Session, SourceReader, StaticTypeTable, StorageMode, TypeLookup, extract, generate,
    };
}
