//! `extract` command

use anyhow::{Context, Result};
use clap::ValueEnum;
use darkclass::{ExtractedSpec, extract};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Toml,
    Json,
}

/// Extract command implementation
pub fn run(file: &Path, format: Format) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read script: {:?}", file))?;

    let extracted = extract(&text);
    if extracted.is_empty() {
        anyhow::bail!("No generated class found in {:?}", file);
    }

    println!("{}", render(&extracted, format)?);
    Ok(())
}

/// Render the recovered spec in the requested format
pub fn render(extracted: &ExtractedSpec, format: Format) -> Result<String> {
    match format {
        Format::Toml => toml::to_string(extracted).context("Failed to serialize spec as TOML"),
        Format::Json => {
            serde_json::to_string_pretty(extracted).context("Failed to serialize spec as JSON")
        }
    }
}
