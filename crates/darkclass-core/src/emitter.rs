//! Indent-tracking text builder used by the class generator.

/// Default indent unit: one tab
pub const DEFAULT_INDENT: &str = "\t";

const LINE_END: &str = "\n";

/// Builds generated source text line by line.
///
/// Depth never goes negative: [`CodeEmitter::outdent`] at depth 0 is a no-op.
#[derive(Debug, Clone)]
pub struct CodeEmitter {
    buffer: String,
    depth: usize,
    indent_unit: String,
}

impl Default for CodeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEmitter {
    pub fn new() -> Self {
        Self::with_indent_unit(DEFAULT_INDENT)
    }

    pub fn with_indent_unit(unit: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent_unit: unit.into(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn outdent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn push_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent_unit);
        }
    }

    /// Indented text followed by a line terminator
    pub fn append_line(&mut self, text: &str) {
        self.push_indent();
        self.append_line_raw(text);
    }

    /// Text and a line terminator, no indent
    pub fn append_line_raw(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push_str(LINE_END);
    }

    /// Indented text without a line terminator
    pub fn append(&mut self, text: &str) {
        self.push_indent();
        self.append_raw(text);
    }

    pub fn append_raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Current indent followed by a line terminator
    pub fn blank_line(&mut self) {
        self.append_line("");
    }

    /// Run `body` one level deeper
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent();
        body(self);
        self.outdent();
    }

    /// Text emitted so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
