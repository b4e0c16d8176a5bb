//! Dark class generation
//!
//! Emits, in order: the using header, an optional namespace scope, the index
//! enum, the holder class with its `New` factory, and the static accessor
//! class. Every phase walks the same list of valid fields, so enum members,
//! factory slots and accessors always line up.
//!
//! # Storage modes
//!
//! | Mode | Holder base | Slot container | Boxed write | Boxed read |
//! |------|-------------|----------------|-------------|------------|
//! | `DataList` | `DataList` | `DataToken[]` | `new DataToken(v)` | `.Reference` |
//! | `ObjectArray` | `UdonSharpBehaviour` | `object[]` | `v` | cast only |

mod json;

use crate::emitter::{CodeEmitter, DEFAULT_INDENT};
use crate::field::{FieldSpec, parse_field};
use crate::naming::{enum_name, extension_class_name, to_pascal_case};
use crate::spec::{ClassSpec, GenerationOptions, StorageMode};
use crate::types::{TypeClassifier, TypeLookup};

/// Generate the dark class source for `spec` with the default tab indent.
pub fn generate(spec: &ClassSpec, lookup: &dyn TypeLookup) -> String {
    ClassGenerator::new(spec, lookup).generate()
}

/// Generate with a custom indent unit (e.g. four spaces).
pub fn generate_with_indent(spec: &ClassSpec, lookup: &dyn TypeLookup, indent_unit: &str) -> String {
    ClassGenerator::new(spec, lookup)
        .with_indent_unit(indent_unit)
        .generate()
}

/// Emits one class spec.
///
/// Fields are parsed once at construction; malformed lines are logged at
/// debug level and left out of every phase.
pub struct ClassGenerator<'a> {
    namespace: &'a str,
    class_name: String,
    enum_name: String,
    fields: Vec<FieldSpec>,
    options: GenerationOptions,
    classifier: TypeClassifier<'a>,
    indent_unit: String,
}

impl<'a> ClassGenerator<'a> {
    pub fn new(spec: &'a ClassSpec, lookup: &'a dyn TypeLookup) -> Self {
        let fields = spec
            .fields
            .iter()
            .filter_map(|raw| {
                let parsed = parse_field(raw);
                if parsed.is_none() {
                    tracing::debug!(field = %raw, "skipping malformed field");
                }
                parsed
            })
            .collect();

        Self {
            namespace: spec.namespace.trim(),
            class_name: to_pascal_case(&spec.class_name),
            enum_name: enum_name(&spec.class_name),
            fields,
            options: spec.options,
            classifier: TypeClassifier::new(lookup),
            indent_unit: DEFAULT_INDENT.to_string(),
        }
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Valid fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Run all phases on a fresh emitter
    pub fn generate(&self) -> String {
        tracing::debug!(
            class = %self.class_name,
            fields = self.fields.len(),
            storage = %self.options.storage,
            json = self.options.json_deserialize_mode,
            "generating dark class"
        );

        let mut out = CodeEmitter::with_indent_unit(self.indent_unit.as_str());
        self.emit_header(&mut out);
        self.emit_namespace_scope(&mut out);
        out.finish()
    }

    fn is_object_array(&self) -> bool {
        self.options.storage == StorageMode::ObjectArray
    }

    /// Enum-indexed slot expression, e.g. `(int)PlayerDataField.Health`
    fn slot(&self, member: &str) -> String {
        format!("(int){}.{}", self.enum_name, member)
    }

    fn emit_header(&self, out: &mut CodeEmitter) {
        match self.options.storage {
            StorageMode::DataList => {
                out.append_line("using UnityEngine;");
                out.append_line("using VRC.SDK3.Data;");
            }
            StorageMode::ObjectArray => {
                out.append_line("using UdonSharp;");
                out.append_line("using UnityEngine;");
                if self.options.json_deserialize_mode {
                    out.append_line("using VRC.SDK3.Data;");
                }
            }
        }
        out.blank_line();
    }

    fn emit_namespace_scope(&self, out: &mut CodeEmitter) {
        let has_namespace = !self.namespace.is_empty();
        if has_namespace {
            out.append_line(&format!("namespace {}", self.namespace));
            out.append_line("{");
            out.indent();
        }

        self.emit_enum(out);
        out.blank_line();
        self.emit_main_class(out);
        out.blank_line();
        self.emit_extension_class(out);

        if has_namespace {
            out.outdent();
            out.append_line("}");
        }
    }

    fn emit_enum(&self, out: &mut CodeEmitter) {
        let comment = if self.is_object_array() {
            "// Enum for assigning index of field objects"
        } else {
            "// Enum for assigning index of field DataTokens"
        };
        out.append_line(comment);
        out.append_line(&format!("enum {}", self.enum_name));
        out.append_line("{");
        out.indented(|out| {
            for field in &self.fields {
                out.append_line(&format!("{},", to_pascal_case(&field.name)));
            }
            out.blank_line();
            out.append_line("Count");
        });
        out.append_line("}");
    }

    fn emit_main_class(&self, out: &mut CodeEmitter) {
        if self.is_object_array() {
            out.append_line("[AddComponentMenu(\"\")]");
            out.append_line(&format!(
                "public class {} : UdonSharpBehaviour",
                self.class_name
            ));
        } else {
            out.append_line(&format!("public class {} : DataList", self.class_name));
        }
        out.append_line("{");
        out.indented(|out| {
            out.append_line("// Constructor");
            if self.options.json_deserialize_mode {
                self.emit_load_comment(out);
                self.emit_json_constructor(out);
            } else {
                self.emit_default_constructor(out);
            }
        });
        out.append_line("}");
    }

    fn emit_default_constructor(&self, out: &mut CodeEmitter) {
        out.append(&format!("public static {} New(", self.class_name));
        out.append_raw(&self.parameter_list(false));
        out.append_line_raw(")");

        out.append_line("{");
        out.indented(|out| self.emit_slot_assignments(out));
        out.append_line("}");
    }

    /// `"int a, string b"`; alternate keys included on request
    fn parameter_list(&self, with_alt_keys: bool) -> String {
        self.fields
            .iter()
            .map(|f| f.to_field_line(with_alt_keys))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Slot container allocation, one assignment per field, and the return
    fn emit_slot_assignments(&self, out: &mut CodeEmitter) {
        let buffer = if self.is_object_array() { "buff" } else { "data" };
        let element = if self.is_object_array() {
            "object"
        } else {
            "DataToken"
        };
        out.append_line(&format!(
            "var {buffer} = new {element}[{}];",
            self.slot("Count")
        ));
        out.blank_line();

        for field in &self.fields {
            let value = self.wrapped(&field.ty, &field.name);
            out.append_line(&format!(
                "{buffer}[{}] = {value};",
                self.slot(&to_pascal_case(&field.name))
            ));
        }

        out.blank_line();
        if self.is_object_array() {
            out.append_line(&format!("return ({})(object)buff;", self.class_name));
        } else {
            out.append_line(&format!("return ({})new DataList(data);", self.class_name));
        }
    }

    /// Value as written into a slot: boxed types are wrapped in token storage
    fn wrapped(&self, ty: &str, value: &str) -> String {
        if !self.is_object_array() && self.classifier.is_boxed(ty) {
            format!("new DataToken({value})")
        } else {
            value.to_string()
        }
    }

    fn emit_extension_class(&self, out: &mut CodeEmitter) {
        out.append_line(&format!(
            "public static class {}",
            extension_class_name(&self.class_name)
        ));
        out.append_line("{");
        out.indented(|out| {
            out.append_line("// Get methods");
            for field in &self.fields {
                self.emit_getter(out, field);
            }

            if self.options.generate_set_accessors {
                out.blank_line();
                out.append_line("// Set methods");
                for field in &self.fields {
                    self.emit_setter(out, field);
                }
            }
        });
        out.append_line("}");
    }

    fn emit_getter(&self, out: &mut CodeEmitter, field: &FieldSpec) {
        let member = to_pascal_case(&field.name);
        let slot = self.slot(&member);
        let ty = &field.ty;

        out.append_line(&format!(
            "public static {ty} {member}(this {} instance)",
            self.class_name
        ));
        let body = if self.is_object_array() {
            format!("=> ({ty})((object[])(object)instance)[{slot}];")
        } else if self.classifier.is_boxed(ty) {
            format!("=> ({ty})instance[{slot}].Reference;")
        } else {
            format!("=> ({ty})instance[{slot}];")
        };
        out.indented(|out| out.append_line(&body));
    }

    fn emit_setter(&self, out: &mut CodeEmitter, field: &FieldSpec) {
        let member = to_pascal_case(&field.name);
        let slot = self.slot(&member);
        let ty = &field.ty;

        out.append_line(&format!(
            "public static void {member}(this {} instance, {ty} arg)",
            self.class_name
        ));
        let body = if self.is_object_array() {
            format!("=> ((object[])(object)instance)[{slot}] = arg;")
        } else {
            format!("=> instance[{slot}] = {};", self.wrapped(ty, "arg"))
        };
        out.indented(|out| out.append_line(&body));
    }
}

#[cfg(test)]
#[path = "generator/generator_tests.rs"]
mod generator_tests;
