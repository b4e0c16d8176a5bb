//! Reverse extraction of a class spec from generated source
//!
//! Best-effort regex recovery, not a C# parser. The text is flattened to a
//! single line and the first match of each pattern wins, so a file holding
//! several generated classes yields the first one.

use crate::field::split_argument_list;
use crate::spec::{ClassSpec, GenerationOptions};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static NAMESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"namespace\s+(\S+)\s+").expect("namespace pattern is valid"));

#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+class\s+(\S+)\s+:").expect("class pattern is valid"));

/// Namespace, class name and raw field lines recovered from source text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedSpec {
    pub namespace: String,

    #[serde(rename = "class")]
    pub class_name: String,

    pub fields: Vec<String>,
}

impl ExtractedSpec {
    /// Nothing usable was found
    pub fn is_empty(&self) -> bool {
        self.class_name.is_empty()
    }

    pub fn into_class_spec(self, options: GenerationOptions) -> ClassSpec {
        ClassSpec {
            namespace: self.namespace,
            class_name: self.class_name,
            fields: self.fields,
            options,
        }
    }
}

/// Recover namespace, class name and field lines from `text`.
///
/// Never fails: a missing namespace or class yields an empty string, and no
/// fields are looked for without a class name.
pub fn extract(text: &str) -> ExtractedSpec {
    let flattened = text.replace("\r\n", "\n").replace('\n', " ");

    let namespace = first_capture(&NAMESPACE, &flattened);
    let class_name = first_capture(&CLASS, &flattened);
    let fields = if class_name.is_empty() {
        Vec::new()
    } else {
        extract_fields(&flattened, &class_name)
    };

    tracing::debug!(
        namespace = %namespace,
        class = %class_name,
        fields = fields.len(),
        "extracted class spec"
    );

    ExtractedSpec {
        namespace,
        class_name,
        fields,
    }
}

fn first_capture(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Argument list of the first `public static <Class> New(...)`
fn extract_fields(text: &str, class_name: &str) -> Vec<String> {
    let pattern = format!(
        r"public\s+static\s+{}\s+New\s*\(([^)]+)\)",
        regex::escape(class_name)
    );
    let factory = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(error = %e, "factory pattern rejected, no fields recovered");
            return Vec::new();
        }
    };

    let arguments = first_capture(&factory, text);
    if arguments.is_empty() {
        return Vec::new();
    }
    split_argument_list(&arguments)
}
