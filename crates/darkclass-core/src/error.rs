//! Error types for the fallible edges of darkclass
//!
//! Generation and extraction never fail; these errors cover loading
//! configuration, spec files and host type catalogs.

use thiserror::Error;

/// Result type alias for darkclass operations
pub type DarkClassResult<T> = Result<T, DarkClassError>;

/// Error type for darkclass operations
#[derive(Error, Debug)]
pub enum DarkClassError {
    /// Configuration file could not be parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Class spec file could not be parsed
    #[error("spec error: {0}")]
    Spec(String),

    /// Host type catalog could not be parsed
    #[error("type catalog error: {0}")]
    Catalog(String),

    /// Serialization of an extracted spec failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DarkClassError {
    /// Stable numeric code; the `darkclass` binary exits with it.
    ///
    /// Codes start at 2 so that 1 stays the generic failure status.
    pub fn error_code(&self) -> u32 {
        match self {
            DarkClassError::Config(_) => 2,
            DarkClassError::Spec(_) => 3,
            DarkClassError::Catalog(_) => 4,
            DarkClassError::Serialization(_) => 5,
            DarkClassError::Io(_) => 6,
        }
    }
}

impl From<toml::ser::Error> for DarkClassError {
    fn from(err: toml::ser::Error) -> Self {
        DarkClassError::Serialization(err.to_string())
    }
}
