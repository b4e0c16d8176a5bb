//! `check` command: validate a spec file without generating

use anyhow::{Context, Result};
use darkclass::ClassSpec;
use std::path::PathBuf;

/// Spec file looked up when `--spec` is absent
pub const DEFAULT_SPEC_FILE: &str = "darkclass-spec.toml";

/// Outcome of validating a spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub class_name: String,
    pub valid_fields: usize,
    pub skipped: Vec<String>,
}

/// Validate `spec`; fails when generation would be refused
pub fn check_spec(spec: &ClassSpec) -> Result<CheckReport> {
    if !spec.has_class_name() {
        anyhow::bail!("Class name cannot be empty");
    }
    if !spec.can_generate() {
        anyhow::bail!("The first field line cannot be empty");
    }

    let valid_fields = spec.valid_fields().len();
    if valid_fields == 0 {
        anyhow::bail!("No valid field lines (expected \"type name [key]\")");
    }

    Ok(CheckReport {
        class_name: darkclass::naming::to_pascal_case(&spec.class_name),
        valid_fields,
        skipped: spec
            .invalid_fields()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Check command implementation
pub fn run(spec_path: Option<PathBuf>) -> Result<()> {
    let path = spec_path.unwrap_or_else(|| PathBuf::from(DEFAULT_SPEC_FILE));

    println!("Checking spec: {}", path.display());

    let spec = ClassSpec::from_file(&path)
        .with_context(|| format!("Failed to load spec: {:?}", path))?;
    let report = check_spec(&spec)?;

    println!("  Class: {}", report.class_name);
    println!("  Fields: {}", report.valid_fields);
    for line in &report.skipped {
        println!("  Skipped: {:?}", line);
    }
    println!("Spec is valid!");

    Ok(())
}
