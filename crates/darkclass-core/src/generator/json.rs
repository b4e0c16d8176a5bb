//! JSON-deserializing factory: `New(DataDictionary dic)`

use super::ClassGenerator;
use crate::emitter::CodeEmitter;
use crate::field::FieldSpec;
use crate::types::{PrimitiveKind, TypeClassifier, TypeShape};

/// Where a decoded value is read from and written to
#[derive(Clone, Copy)]
enum DecodeSite<'f> {
    /// Top-level field: `var n = ... dic["key"] ...`
    Field { key: &'f str },
    /// Array element inside the copy loop: `n[i] = ... nList[i] ...`
    Element,
}

impl DecodeSite<'_> {
    fn source(self, name: &str) -> String {
        match self {
            DecodeSite::Field { key } => format!("dic[\"{key}\"]"),
            DecodeSite::Element => format!("{name}List[i]"),
        }
    }

    fn target(self, name: &str) -> String {
        match self {
            DecodeSite::Field { .. } => format!("var {name} = "),
            DecodeSite::Element => format!("{name}[i] = "),
        }
    }

    fn is_element(self) -> bool {
        matches!(self, DecodeSite::Element)
    }
}

impl ClassGenerator<'_> {
    /// Equivalent direct-parameter signature, kept so the file can be loaded
    /// back with its alternate keys
    pub(super) fn emit_load_comment(&self, out: &mut CodeEmitter) {
        out.append_line("// This comments for loading this script by generator : ");
        out.append(&format!("// public static {} New(", self.class_name));
        out.append_raw(&self.parameter_list(true));
        out.append_line_raw(")");
    }

    pub(super) fn emit_json_constructor(&self, out: &mut CodeEmitter) {
        out.append_line(&format!(
            "public static {} New(DataDictionary dic)",
            self.class_name
        ));
        out.append_line("{");
        out.indented(|out| {
            for field in &self.fields {
                self.emit_field_decode(out, field);
            }
            out.blank_line();

            out.append_line(if self.is_object_array() {
                "// Make field objects"
            } else {
                "// Make DataTokens"
            });
            self.emit_slot_assignments(out);
        });
        out.append_line("}");
    }

    fn emit_field_decode(&self, out: &mut CodeEmitter, field: &FieldSpec) {
        let key = field.json_key();
        match TypeClassifier::array_element(&field.ty) {
            Some(element) => self.emit_array_decode(out, element, &field.name, key),
            None => self.emit_value_decode(out, &field.ty, &field.name, DecodeSite::Field { key }),
        }
    }

    fn emit_array_decode(&self, out: &mut CodeEmitter, element: &str, name: &str, key: &str) {
        out.blank_line();
        out.append_line(&format!("var {name}List = dic[\"{key}\"].DataList;"));
        out.append_line(&format!("var {name}Count = {name}List.Count;"));
        out.append_line(&format!("var {name} = new {element}[{name}Count];"));
        out.append_line(&format!("for (int i = 0; i < {name}Count; i++)"));
        out.append_line("{");
        self.emit_value_decode(out, element, name, DecodeSite::Element);
        out.append_line("}");
    }

    fn emit_value_decode(&self, out: &mut CodeEmitter, ty: &str, name: &str, site: DecodeSite<'_>) {
        let source = site.source(name);
        let read = match self.classifier.shape(ty) {
            TypeShape::Vector(kind) => {
                return self.emit_component_decode(out, ty, name, site, kind.components(), kind.cast());
            }
            TypeShape::Color(kind) => {
                return self.emit_component_decode(out, ty, name, site, kind.components(), kind.cast());
            }
            TypeShape::Enum => format!("({ty})(int){source}.Number;"),
            TypeShape::Primitive(PrimitiveKind::Bool) => format!("{source}.Boolean;"),
            TypeShape::Primitive(PrimitiveKind::Char) => format!("{source}.String[0];"),
            TypeShape::Primitive(PrimitiveKind::String) => format!("{source}.String;"),
            TypeShape::Primitive(PrimitiveKind::Numeric) => format!("({ty}){source}.Number;"),
            TypeShape::Container => format!("{source}.{ty};"),
            // Arrays of arrays are not decoded element-wise
            TypeShape::Reference | TypeShape::Array(_) => format!("({ty}){source}.Reference;"),
            TypeShape::Nested => format!("{ty}.New({source}.DataDictionary);"),
        };

        let line = format!("{}{read}", site.target(name));
        if site.is_element() {
            out.indented(|out| out.append_line(&line));
        } else {
            out.append_line(&line);
        }
    }

    /// Rebuild a vector or color from its lettered components
    fn emit_component_decode(
        &self,
        out: &mut CodeEmitter,
        ty: &str,
        name: &str,
        site: DecodeSite<'_>,
        components: &[&str],
        cast: &str,
    ) {
        let as_list = self.options.vector_color_as_indexed_list;
        let data = format!("{name}Data");
        let container = if as_list { "DataList" } else { "DataDictionary" };

        if site.is_element() {
            out.indent();
        } else {
            out.blank_line();
        }

        out.append_line(&format!("var {data} = {}.{container};", site.source(name)));

        let mut arguments = Vec::with_capacity(components.len());
        for (index, component) in components.iter().enumerate() {
            let local = format!("{name}{}", component.to_ascii_uppercase());
            let lookup = if as_list {
                format!("[{index}]")
            } else {
                format!("[\"{component}\"]")
            };
            out.append_line(&format!("var {local} = {cast}{data}{lookup}.Number;"));
            arguments.push(local);
        }

        out.append_line(&format!(
            "{}new {ty}({});",
            site.target(name),
            arguments.join(", ")
        ));

        if site.is_element() {
            out.outdent();
        }
    }
}
