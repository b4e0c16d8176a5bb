//! Class specification and generation options

use crate::error::{DarkClassError, DarkClassResult};
use crate::field::{FieldSpec, parse_field};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Backing storage of the generated holder class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageMode {
    /// Derives from `DataList`; slots are `DataToken`s
    #[default]
    DataList,
    /// Legacy `object[]` buffer re-cast as an `UdonSharpBehaviour`
    ObjectArray,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::DataList => write!(f, "data-list"),
            StorageMode::ObjectArray => write!(f, "object-array"),
        }
    }
}

/// Independent switches controlling the generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(default = "default_true")]
    pub generate_set_accessors: bool,

    /// Factory takes a `DataDictionary` instead of one parameter per field
    #[serde(default)]
    pub json_deserialize_mode: bool,

    /// Vector/color components are read by index instead of by letter key
    #[serde(default)]
    pub vector_color_as_indexed_list: bool,

    #[serde(default)]
    pub storage: StorageMode,
}

fn default_true() -> bool {
    true
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            generate_set_accessors: true,
            json_deserialize_mode: false,
            vector_color_as_indexed_list: false,
            storage: StorageMode::DataList,
        }
    }
}

impl GenerationOptions {
    pub fn with_set_accessors(mut self, enabled: bool) -> Self {
        self.generate_set_accessors = enabled;
        self
    }

    pub fn with_json_deserialize(mut self, enabled: bool) -> Self {
        self.json_deserialize_mode = enabled;
        self
    }

    pub fn with_vector_as_list(mut self, enabled: bool) -> Self {
        self.vector_color_as_indexed_list = enabled;
        self
    }

    pub fn with_storage(mut self, storage: StorageMode) -> Self {
        self.storage = storage;
        self
    }
}

/// Everything needed to generate one class.
///
/// Fields are raw lines as the host edits them; they are parsed at generation
/// time and invalid lines are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassSpec {
    #[serde(default)]
    pub namespace: String,

    #[serde(default, rename = "class")]
    pub class_name: String,

    #[serde(default)]
    pub fields: Vec<String>,

    #[serde(default)]
    pub options: GenerationOptions,
}

impl ClassSpec {
    pub fn new<I, S>(namespace: impl Into<String>, class_name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a spec file (`namespace`, `class`, `fields`, `[options]`)
    pub fn from_toml(content: &str) -> DarkClassResult<Self> {
        toml::from_str(content).map_err(|e| DarkClassError::Spec(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> DarkClassResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> DarkClassResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Parsed fields in declaration order, invalid lines dropped
    pub fn valid_fields(&self) -> Vec<FieldSpec> {
        self.fields.iter().filter_map(|raw| parse_field(raw)).collect()
    }

    /// Raw lines that would be skipped during generation
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|raw| parse_field(raw).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Whether the class name survives PascalCase, i.e. is not blank
    pub fn has_class_name(&self) -> bool {
        !self.class_name.trim().is_empty()
    }

    /// Host gate: a non-blank class name, at least one field line, and a
    /// non-empty first line
    pub fn can_generate(&self) -> bool {
        self.has_class_name() && self.fields.first().is_some_and(|first| !first.is_empty())
    }
}
