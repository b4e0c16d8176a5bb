//! `generate` and `regenerate` commands

use crate::options::OptionArgs;
use anyhow::{Context, Result};
use darkclass::{ClassSpec, DarkClassConfig, Session, generate_with_indent};
use std::path::{Path, PathBuf};

/// What to generate, as given on the command line
#[derive(Debug, Default)]
pub struct Request {
    pub spec: Option<PathBuf>,
    pub class: Option<String>,
    pub namespace: String,
    pub fields: Vec<String>,
    pub output: Option<PathBuf>,
}

impl Request {
    /// Resolve the class spec: a spec file's own options replace the config
    /// defaults, extra `--field` lines are appended, and flags apply last.
    pub fn class_spec(&self, options: &OptionArgs, config: &DarkClassConfig) -> Result<ClassSpec> {
        let mut spec = match (&self.spec, &self.class) {
            (Some(path), _) => ClassSpec::from_file(path)
                .with_context(|| format!("Failed to load spec: {:?}", path))?,
            (None, Some(class)) => {
                ClassSpec::new(self.namespace.as_str(), class.as_str(), Vec::<String>::new())
                    .with_options(config.options)
            }
            (None, None) => anyhow::bail!("Either --spec or --class is required"),
        };

        spec.fields.extend(self.fields.iter().cloned());
        spec.options = options.apply(spec.options);

        if !spec.can_generate() {
            anyhow::bail!("A class name and a non-empty first field are required");
        }
        for skipped in spec.invalid_fields() {
            tracing::warn!(field = skipped, "skipping malformed field");
        }

        Ok(spec)
    }
}

/// Generate command implementation
pub fn run(request: Request, options: &OptionArgs, mut config: DarkClassConfig) -> Result<()> {
    options.apply_to_config(&mut config);
    let spec = request.class_spec(options, &config)?;
    let lookup = config
        .type_lookup()
        .context("Failed to load host type catalog")?;

    let code = generate_with_indent(&spec, lookup.as_ref(), &config.indent_unit);
    tracing::info!(class = %spec.class_name, fields = spec.valid_fields().len(), "generated");

    write_output(request.output.as_deref(), &code)
}

/// Regenerate command implementation
pub fn regenerate(
    file: &Path,
    output: Option<&Path>,
    options: &OptionArgs,
    mut config: DarkClassConfig,
) -> Result<()> {
    options.apply_to_config(&mut config);
    let code = regenerate_source(file, &config)?;
    write_output(output, &code)
}

/// Load `file` into a session and generate it with the configured options
pub fn regenerate_source(file: &Path, config: &DarkClassConfig) -> Result<String> {
    let mut session = Session::new()
        .with_indent_unit(config.indent_unit.as_str())
        .with_options(config.options);

    let reader = || std::fs::read_to_string(file);
    let applied = session
        .load(&reader)
        .with_context(|| format!("Failed to read {:?}", file))?;
    if !applied {
        anyhow::bail!("No generated class found in {:?}", file);
    }

    let lookup = config
        .type_lookup()
        .context("Failed to load host type catalog")?;
    let mut code = String::new();
    let mut sink = |text: &str| code = text.to_string();
    session
        .generate(lookup.as_ref(), &mut sink)
        .context("Loaded script has no usable fields")?;

    Ok(code)
}

fn write_output(output: Option<&Path>, code: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, code)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            tracing::info!(path = %path.display(), "wrote generated class");
        }
        None => print!("{}", code),
    }
    Ok(())
}
