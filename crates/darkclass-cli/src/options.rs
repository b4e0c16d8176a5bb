//! Generation flags shared by `generate` and `regenerate`

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use darkclass::{DarkClassConfig, GenerationOptions, StorageMode};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "darkclass.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageArg {
    DataList,
    ObjectArray,
}

impl From<StorageArg> for StorageMode {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::DataList => StorageMode::DataList,
            StorageArg::ObjectArray => StorageMode::ObjectArray,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct OptionArgs {
    /// Do not generate set accessors
    #[arg(long)]
    pub no_set: bool,

    /// Factory takes a DataDictionary (JSON deserialize mode)
    #[arg(long)]
    pub json: bool,

    /// Read vector/color components by index instead of by key
    #[arg(long)]
    pub vector_as_list: bool,

    /// Backing storage of the generated class
    #[arg(long, value_enum)]
    pub storage: Option<StorageArg>,

    /// Host type catalog (TOML) used to classify field types
    #[arg(long, value_name = "TOML")]
    pub catalog: Option<PathBuf>,

    /// Use the built-in host type catalog
    #[arg(long)]
    pub builtin_catalog: bool,

    /// Extra enum type name (repeatable)
    #[arg(long = "enum", value_name = "TYPE")]
    pub enums: Vec<String>,
}

impl OptionArgs {
    /// Flags switch options on top of `base`; absent flags keep its values
    pub fn apply(&self, base: GenerationOptions) -> GenerationOptions {
        let mut options = base;
        if self.no_set {
            options.generate_set_accessors = false;
        }
        if self.json {
            options.json_deserialize_mode = true;
        }
        if self.vector_as_list {
            options.vector_color_as_indexed_list = true;
        }
        if let Some(storage) = self.storage {
            options.storage = storage.into();
        }
        options
    }

    /// Fold the type lookup flags into the loaded configuration
    pub fn apply_to_config(&self, config: &mut DarkClassConfig) {
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if self.builtin_catalog {
            config.use_builtin_catalog = true;
        }
        config.enum_types.extend(self.enums.iter().cloned());
        config.options = self.apply(config.options);
    }
}

/// Load `path`, or `darkclass.toml` when present, or the defaults
pub fn load_config(path: Option<&Path>) -> Result<DarkClassConfig> {
    match path {
        Some(path) => DarkClassConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {:?}", path)),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            DarkClassConfig::from_file(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("Failed to load config: {}", DEFAULT_CONFIG_FILE))
        }
        None => Ok(DarkClassConfig::default()),
    }
}
