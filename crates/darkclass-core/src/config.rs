//! Generator configuration

use crate::LogLevel;
use crate::catalog::{CatalogEntry, HostTypeCatalog, TokenKind, TypeDeclKind};
use crate::emitter::DEFAULT_INDENT;
use crate::error::{DarkClassError, DarkClassResult};
use crate::spec::GenerationOptions;
use crate::types::{StaticTypeTable, TypeLookup};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by every generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DarkClassConfig {
    /// Indent unit of generated code
    #[serde(default = "default_indent_unit")]
    pub indent_unit: String,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Type names the host knows to be enumerations
    #[serde(default)]
    pub enum_types: Vec<String>,

    /// Extra type names needing boxed storage
    #[serde(default)]
    pub reference_types: Vec<String>,

    /// Host type catalog file; switches classification to catalog lookups
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Use the embedded Unity/VRChat catalog behind `catalog`
    #[serde(default)]
    pub use_builtin_catalog: bool,

    /// Defaults for specs that do not carry their own options
    #[serde(default)]
    pub options: GenerationOptions,
}

fn default_indent_unit() -> String {
    DEFAULT_INDENT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DarkClassConfig {
    fn default() -> Self {
        Self {
            indent_unit: default_indent_unit(),
            log_level: default_log_level(),
            enum_types: Vec::new(),
            reference_types: Vec::new(),
            catalog: None,
            use_builtin_catalog: false,
            options: GenerationOptions::default(),
        }
    }
}

impl DarkClassConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml(content: &str) -> DarkClassResult<Self> {
        toml::from_str(content).map_err(|e| DarkClassError::Config(e.to_string()))
    }

    /// Create configuration from JSON bytes; empty input gives the defaults
    pub fn from_json(bytes: &[u8]) -> DarkClassResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes).map_err(|e| DarkClassError::Config(e.to_string()))
    }

    /// Load a `.json` or TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> DarkClassResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            let text =
                String::from_utf8(content).map_err(|e| DarkClassError::Config(e.to_string()))?;
            Self::from_toml(&text)
        }
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::parse_lenient(&self.log_level)
    }

    pub fn uses_catalog(&self) -> bool {
        self.use_builtin_catalog || self.catalog.is_some()
    }

    /// String-set lookup with the configured enums and extra reference types
    pub fn static_table(&self) -> StaticTypeTable {
        StaticTypeTable::new()
            .with_enums(self.enum_types.iter().cloned())
            .with_reference_types(self.reference_types.iter().cloned())
    }

    /// Catalog snapshot. Entries are ordered configured names, catalog file,
    /// built-in catalog; the first entry for a name wins.
    pub fn host_catalog(&self) -> DarkClassResult<HostTypeCatalog> {
        let extras = self
            .enum_types
            .iter()
            .map(|name| CatalogEntry::new(name, TypeDeclKind::Enum))
            .chain(self.reference_types.iter().map(|name| {
                let mut entry = CatalogEntry::new(name, TypeDeclKind::Class);
                entry.token = TokenKind::Reference;
                entry
            }))
            .collect();
        let mut catalog = HostTypeCatalog::new(extras);

        if let Some(path) = &self.catalog {
            catalog = catalog.merged(HostTypeCatalog::from_file(path)?);
        }
        if self.use_builtin_catalog {
            catalog = catalog.merged(HostTypeCatalog::builtin()?);
        }

        Ok(catalog)
    }

    /// The lookup strategy this configuration selects
    pub fn type_lookup(&self) -> DarkClassResult<Box<dyn TypeLookup>> {
        if self.uses_catalog() {
            Ok(Box::new(self.host_catalog()?))
        } else {
            Ok(Box::new(self.static_table()))
        }
    }
}
