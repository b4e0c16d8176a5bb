//! # darkclass
//!
//! Generates "dark class" sources for UdonSharp: a field enum, a holder class
//! whose instances are really `DataList`s (or `object[]`s) and an extension
//! class with typed accessors, so scripts get class-like data without
//! declaring a real class.
//!
//! ## Quick Start
//!
//! ```
//! use darkclass::prelude::*;
//!
//! let spec = ClassSpec::new("Game", "player_data", ["int health", "string name"]);
//! let code = generate(&spec, &StaticTypeTable::default());
//!
//! let recovered = extract(&code);
//! assert_eq!(recovered.class_name, "PlayerData");
//! assert_eq!(recovered.fields, vec!["int health", "string name"]);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`darkclass_core`] - Field parsing, type classification, generation and extraction
//! - [`darkclass_logging`] - Tracing setup and host status forwarding

pub use darkclass_core::{
    CatalogEntry, ClassGenerator, ClassSpec, CodeEmitter, DarkClassConfig, DarkClassError,
    DarkClassResult, ExtractedSpec, FieldSpec, FnTypeLookup, GenerationOptions, HostTypeCatalog,
    LogLevel, OutputSink, Session, SessionError, SourceReader, StaticTypeTable, StorageMode,
    TypeClassifier, TypeLookup, TypeShape, extract, generate, generate_with_indent, naming,
    parse_field,
};

pub use darkclass_logging::{
    ReloadHandle, StatusCallbackManager, StatusLayer, init_logging, set_log_level,
};

pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use darkclass::prelude::*;` for the generation entry points, the
/// spec and option types, the lookup strategies and the session adapter.
pub mod prelude {
    pub use crate::{
        ClassSpec, DarkClassConfig, DarkClassError, DarkClassResult, ExtractedSpec,
        GenerationOptions, HostTypeCatalog, LogLevel, OutputSink, Session, SourceReader,
        StaticTypeTable, StorageMode, TypeLookup, extract, generate, init_logging,
    };
}
