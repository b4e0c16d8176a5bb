//! Host session adapter
//!
//! The state an interactive host edits between button presses: the class
//! spec, the last generated text and which source file was loaded last.
//! Side effects (reading a script, showing or copying the result) go
//! through the injected [`SourceReader`] and [`OutputSink`].

use crate::emitter::DEFAULT_INDENT;
use crate::extract::{ExtractedSpec, extract};
use crate::generator::generate_with_indent;
use crate::spec::{ClassSpec, GenerationOptions};
use crate::types::TypeLookup;
use thiserror::Error;

/// Field line a fresh session starts with
const DEFAULT_FIELD: &str = "int value";

/// Errors from session operations
#[derive(Error, Debug)]
pub enum SessionError {
    /// Generation requested while the gate is closed
    #[error("a class name and a non-empty first field are required")]
    NotReady,

    /// The source reader failed
    #[error("failed to read source: {0}")]
    Source(String),
}

/// Receives generated code (text area, clipboard, file, ...)
pub trait OutputSink {
    fn publish(&mut self, code: &str);
}

impl<F: FnMut(&str)> OutputSink for F {
    fn publish(&mut self, code: &str) {
        self(code)
    }
}

/// Supplies the raw text of a previously generated script
pub trait SourceReader {
    fn read_source(&self) -> std::io::Result<String>;
}

impl<F: Fn() -> std::io::Result<String>> SourceReader for F {
    fn read_source(&self) -> std::io::Result<String> {
        self()
    }
}

/// Editable generator state for one host window
#[derive(Debug, Clone)]
pub struct Session {
    spec: ClassSpec,
    indent_unit: String,
    last_loaded_source: Option<String>,
    generated: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            spec: ClassSpec::new("", "", [DEFAULT_FIELD]),
            indent_unit: DEFAULT_INDENT.to_string(),
            last_loaded_source: None,
            generated: String::new(),
        }
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.spec.options = options;
        self
    }

    pub fn spec(&self) -> &ClassSpec {
        &self.spec
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.spec.namespace = namespace.into();
    }

    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.spec.class_name = class_name.into();
    }

    pub fn options_mut(&mut self) -> &mut GenerationOptions {
        &mut self.spec.options
    }

    // Field list editing

    pub fn fields(&self) -> &[String] {
        &self.spec.fields
    }

    pub fn add_field(&mut self, raw: impl Into<String>) {
        self.spec.fields.push(raw.into());
    }

    pub fn remove_field(&mut self, index: usize) -> Option<String> {
        (index < self.spec.fields.len()).then(|| self.spec.fields.remove(index))
    }

    /// Replace one line; false when `index` is out of range
    pub fn set_field(&mut self, index: usize, raw: impl Into<String>) -> bool {
        match self.spec.fields.get_mut(index) {
            Some(slot) => {
                *slot = raw.into();
                true
            }
            None => false,
        }
    }

    /// Drag-reorder: take the line at `from` and insert it at `to`
    pub fn move_field(&mut self, from: usize, to: usize) -> bool {
        let len = self.spec.fields.len();
        if from >= len || to >= len {
            return false;
        }
        let line = self.spec.fields.remove(from);
        self.spec.fields.insert(to, line);
        true
    }

    // Generation

    pub fn can_generate(&self) -> bool {
        self.spec.can_generate()
    }

    /// Generate, remember and publish the code
    pub fn generate(
        &mut self,
        lookup: &dyn TypeLookup,
        sink: &mut dyn OutputSink,
    ) -> Result<&str, SessionError> {
        if !self.can_generate() {
            return Err(SessionError::NotReady);
        }

        self.generated = generate_with_indent(&self.spec, lookup, &self.indent_unit);
        sink.publish(&self.generated);
        tracing::info!(class = %self.spec.class_name, "code generated");

        Ok(&self.generated)
    }

    /// Text of the last successful generation
    pub fn generated(&self) -> &str {
        &self.generated
    }

    // Loading

    pub fn last_loaded_source(&self) -> Option<&str> {
        self.last_loaded_source.as_deref()
    }

    /// Read a script and take over its namespace, class name and fields.
    ///
    /// Returns whether anything was applied: nothing changes unless a class
    /// name was found, and the field list is kept when none were found.
    pub fn load(&mut self, source: &dyn SourceReader) -> Result<bool, SessionError> {
        let text = source
            .read_source()
            .map_err(|e| SessionError::Source(e.to_string()))?;
        Ok(self.apply(extract(&text)))
    }

    /// [`Session::load`] only when `name` differs from the last loaded source
    pub fn load_if_changed(
        &mut self,
        name: &str,
        source: &dyn SourceReader,
    ) -> Result<bool, SessionError> {
        if name.is_empty() || self.last_loaded_source.as_deref() == Some(name) {
            return Ok(false);
        }
        self.last_loaded_source = Some(name.to_string());
        self.load(source)
    }

    fn apply(&mut self, extracted: ExtractedSpec) -> bool {
        if extracted.is_empty() {
            tracing::warn!("no generated class found in source");
            return false;
        }

        tracing::info!(
            class = %extracted.class_name,
            fields = extracted.fields.len(),
            "loaded class parameters"
        );
        self.spec.namespace = extracted.namespace;
        self.spec.class_name = extracted.class_name;
        if !extracted.fields.is_empty() {
            self.spec.fields = extracted.fields;
        }
        true
    }
}

#[cfg(test)]
#[path = "session/session_tests.rs"]
mod session_tests;
