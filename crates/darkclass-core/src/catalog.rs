//! Host type catalog
//!
//! A one-time snapshot of host type facts that answers [`TypeLookup`]
//! queries the way a live reflection scan would: enums, Unity objects and
//! interfaces are boxed, `DataList`/`DataDictionary` families are not, and
//! every other known type is decided by what wrapping a default instance
//! yields. The snapshot is built once and never refreshed.

use crate::error::{DarkClassError, DarkClassResult};
use crate::types::TypeLookup;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../data/host_types.toml");

/// Declaration kind of a host type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDeclKind {
    #[default]
    Class,
    Struct,
    Enum,
    Interface,
}

/// Data container family a host type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    #[default]
    None,
    DataList,
    DataDictionary,
}

/// Token kind produced when a default instance is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    #[default]
    Value,
    Reference,
}

/// One host type in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Simple type name as written in field specs
    pub name: String,

    #[serde(default)]
    pub kind: TypeDeclKind,

    /// Derives from the engine's object base type
    #[serde(default)]
    pub unity_object: bool,

    #[serde(default)]
    pub container: ContainerKind,

    /// A zero-argument instance can be created
    #[serde(default = "default_constructible")]
    pub constructible: bool,

    #[serde(default)]
    pub token: TokenKind,
}

fn default_constructible() -> bool {
    true
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, kind: TypeDeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            unity_object: false,
            container: ContainerKind::None,
            constructible: true,
            token: TokenKind::Value,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    types: Vec<CatalogEntry>,
}

/// Immutable snapshot of host type facts
#[derive(Debug, Clone, Default)]
pub struct HostTypeCatalog {
    entries: Vec<CatalogEntry>,
}

impl HostTypeCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        tracing::debug!(types = entries.len(), "host type catalog built");
        Self { entries }
    }

    /// Catalog of common Unity and VRChat SDK types shipped with the crate
    pub fn builtin() -> DarkClassResult<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from TOML (`[[types]]` tables)
    pub fn from_toml(content: &str) -> DarkClassResult<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| DarkClassError::Catalog(e.to_string()))?;
        Ok(Self::new(file.types))
    }

    /// Load a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> DarkClassResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Combine two snapshots; entries of `other` come after this one's
    pub fn merged(mut self, other: HostTypeCatalog) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry used for a name: the `DataList` family member if several share
    /// the name, otherwise the first one
    fn resolve(&self, name: &str) -> Option<&CatalogEntry> {
        let mut matching = self.entries.iter().filter(|e| e.name == name);
        let first = matching.next()?;
        if first.container == ContainerKind::DataList {
            return Some(first);
        }
        Some(
            matching
                .find(|e| e.container == ContainerKind::DataList)
                .unwrap_or(first),
        )
    }

    /// Wrap-probe of a default instance; failure to construct means boxed
    fn probe(entry: &CatalogEntry) -> bool {
        if !entry.constructible {
            tracing::warn!(
                type_name = %entry.name,
                "cannot create a default instance, treating as reference"
            );
            return true;
        }
        entry.token == TokenKind::Reference
    }
}

impl TypeLookup for HostTypeCatalog {
    fn is_enum(&self, type_name: &str) -> bool {
        self.entries
            .iter()
            .find(|e| e.name == type_name)
            .is_some_and(|e| e.kind == TypeDeclKind::Enum)
    }

    fn is_reference(&self, type_name: &str) -> bool {
        let Some(entry) = self.resolve(type_name) else {
            return false;
        };

        if entry.unity_object
            || matches!(entry.kind, TypeDeclKind::Enum | TypeDeclKind::Interface)
        {
            return true;
        }

        if entry.container != ContainerKind::None {
            return false;
        }

        Self::probe(entry)
    }
}
