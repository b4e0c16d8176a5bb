//! Field spec parsing
//!
//! A field spec is one raw line of the host's field list:
//! `"<type> <name>"` or, for JSON decoding, `"<type> <name> <key>"`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static ARGUMENT_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("argument separator pattern is valid"));

/// One parsed field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Declared type, verbatim (e.g. `int`, `Vector3`, `string[]`)
    pub ty: String,

    /// Declared name, verbatim; accessors use its PascalCase form
    pub name: String,

    /// Alternate JSON lookup key, only used in JSON mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_key: Option<String>,
}

impl FieldSpec {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            alt_key: None,
        }
    }

    pub fn with_alt_key(mut self, key: impl Into<String>) -> Self {
        self.alt_key = Some(key.into());
        self
    }

    /// Key used to look the field up in a JSON decode source
    pub fn json_key(&self) -> &str {
        self.alt_key.as_deref().unwrap_or(&self.name)
    }

    /// Render back to a field line.
    ///
    /// The alternate key is only written when `with_alt_key` is set.
    pub fn to_field_line(&self, with_alt_key: bool) -> String {
        match (&self.alt_key, with_alt_key) {
            (Some(key), true) => format!("{} {} {}", self.ty, self.name, key),
            _ => format!("{} {}", self.ty, self.name),
        }
    }
}

impl std::fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_field_line(true))
    }
}

/// Parse one raw field line.
///
/// Returns `None` when the trimmed line has fewer than two whitespace-separated
/// tokens. Tokens after the key are ignored. Type and name syntax is not
/// validated.
pub fn parse_field(raw: &str) -> Option<FieldSpec> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = WHITESPACE.split(trimmed).collect();
    match tokens.as_slice() {
        [ty, name] => Some(FieldSpec::new(*ty, *name)),
        [ty, name, key, ..] => Some(FieldSpec::new(*ty, *name).with_alt_key(*key)),
        _ => None,
    }
}

/// Split a factory argument list (`"int a, string b"`) into field lines.
pub fn split_argument_list(raw: &str) -> Vec<String> {
    ARGUMENT_SEPARATOR.split(raw).map(str::to_string).collect()
}
