//! Type classification for field types.
//!
//! Two independent questions are answered for every declared type string:
//!
//! - **shape** ([`TypeShape`]): how the JSON constructor decodes it (array
//!   loop, per-component vector/color rebuild, enum cast, primitive read,
//!   nested `New(...)` call, ...)
//! - **storage** ([`Storage`]): whether the value must be wrapped before it
//!   goes into an indexed slot and unwrapped through `.Reference` on read
//!
//! Host knowledge (which names are enums, which need boxing) comes from an
//! injected [`TypeLookup`]. [`StaticTypeTable`] is the always-available
//! string-set strategy; [`crate::HostTypeCatalog`] is the richer one.
//!
//! # Shape precedence
//!
//! | Order | Check | Shape |
//! |-------|-------|-------|
//! | 1 | `T[]` | `Array(T)` |
//! | 2 | `Vector2/3/4`, `Quaternion` | `Vector` |
//! | 3 | `Color`, `Color32` | `Color` |
//! | 4 | lookup says enum | `Enum` |
//! | 5 | `DataList`, `DataDictionary` | `Container` |
//! | 6 | storage is boxed | `Reference` |
//! | 7 | `bool char string` + numerics | `Primitive` |
//! | 8 | anything else | `Nested` |
//!
//! Boxing is checked before the primitive names, so `decimal` (always boxed)
//! is read back through `.Reference` like any other boxed value.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static ARRAY_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\[\s*\]$").expect("array type pattern is valid"));

#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static EMPTY_BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*\]").expect("bracket pattern is valid"));

static VECTOR_COMPONENTS: [&str; 4] = ["x", "y", "z", "w"];
static COLOR_COMPONENTS: [&str; 4] = ["r", "g", "b", "a"];

const NUMERIC_TYPES: &[&str] = &[
    "byte", "sbyte", "decimal", "int", "uint", "long", "ulong", "short", "ushort", "float",
    "double",
];

/// Host types that box into a reference token, for lookups without reflection.
const DEFAULT_REFERENCE_TYPES: &[&str] = &[
    "object",
    "decimal",
    "GameObject",
    "Transform",
    "Component",
    "Behaviour",
    "MonoBehaviour",
    "UdonSharpBehaviour",
    "UdonBehaviour",
    "ScriptableObject",
    "Material",
    "Mesh",
    "Shader",
    "Texture",
    "Texture2D",
    "RenderTexture",
    "Sprite",
    "AudioClip",
    "AudioSource",
    "Animator",
    "Rigidbody",
    "Collider",
    "Renderer",
    "MeshRenderer",
    "Camera",
    "Light",
    "ParticleSystem",
    "VRCPlayerApi",
    "VRCUrl",
    "Vector2Int",
    "Vector3Int",
    "Rect",
    "Bounds",
    "Matrix4x4",
    "Ray",
    "LayerMask",
    "DateTime",
    "TimeSpan",
];

/// Fixed-component vector types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Vector2,
    Vector3,
    Vector4,
    Quaternion,
}

impl VectorKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Vector2" => Some(VectorKind::Vector2),
            "Vector3" => Some(VectorKind::Vector3),
            "Vector4" => Some(VectorKind::Vector4),
            "Quaternion" => Some(VectorKind::Quaternion),
            _ => None,
        }
    }

    pub fn component_count(self) -> usize {
        match self {
            VectorKind::Vector2 => 2,
            VectorKind::Vector3 => 3,
            VectorKind::Vector4 | VectorKind::Quaternion => 4,
        }
    }

    /// Component letters in constructor order
    pub fn components(self) -> &'static [&'static str] {
        &VECTOR_COMPONENTS[..self.component_count()]
    }

    pub fn cast(self) -> &'static str {
        "(float)"
    }
}

/// Fixed-component color types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Color,
    Color32,
}

impl ColorKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Color" => Some(ColorKind::Color),
            "Color32" => Some(ColorKind::Color32),
            _ => None,
        }
    }

    pub fn component_count(self) -> usize {
        4
    }

    pub fn components(self) -> &'static [&'static str] {
        &COLOR_COMPONENTS
    }

    /// `Color` holds floats, `Color32` holds bytes
    pub fn cast(self) -> &'static str {
        match self {
            ColorKind::Color => "(float)",
            ColorKind::Color32 => "(byte)",
        }
    }
}

/// Primitive scalar categories and how the decode source is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `bool`, read via `.Boolean`
    Bool,
    /// `char`, read via `.String[0]`
    Char,
    /// `string`, read via `.String`
    String,
    /// any numeric type, read via `(T)….Number`
    Numeric,
}

impl PrimitiveKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(PrimitiveKind::Bool),
            "char" => Some(PrimitiveKind::Char),
            "string" => Some(PrimitiveKind::String),
            n if NUMERIC_TYPES.contains(&n) => Some(PrimitiveKind::Numeric),
            _ => None,
        }
    }
}

/// Decode shape of a declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// Single-level array; holds the element type
    Array(String),
    Vector(VectorKind),
    Color(ColorKind),
    Enum,
    Primitive(PrimitiveKind),
    /// `DataList` or `DataDictionary`, read directly from the token
    Container,
    /// Opaque boxed host type, read via `.Reference`
    Reference,
    /// Another generated class, decoded through its own `New(DataDictionary)`
    Nested,
}

/// Slot storage of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Stored as the value itself
    Inline,
    /// Wrapped in a token on write, unwrapped through `.Reference` on read
    Boxed,
}

/// Host knowledge consulted during classification
pub trait TypeLookup {
    /// Is `type_name` an enumeration in the host?
    fn is_enum(&self, type_name: &str) -> bool;

    /// Does `type_name` need boxed storage in the host?
    fn is_reference(&self, type_name: &str) -> bool;
}

impl<T: TypeLookup + ?Sized> TypeLookup for &T {
    fn is_enum(&self, type_name: &str) -> bool {
        (**self).is_enum(type_name)
    }

    fn is_reference(&self, type_name: &str) -> bool {
        (**self).is_reference(type_name)
    }
}

/// Lookup backed by plain string sets.
///
/// Needs no reflection: enums are the user-supplied names, boxed types are a
/// fixed allow-list plus the vector and color names plus the enum names.
#[derive(Debug, Clone)]
pub struct StaticTypeTable {
    enum_types: BTreeSet<String>,
    reference_types: BTreeSet<String>,
}

impl StaticTypeTable {
    /// Table with the built-in reference allow-list and no enums
    pub fn new() -> Self {
        Self {
            enum_types: BTreeSet::new(),
            reference_types: DEFAULT_REFERENCE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Add names the host knows to be enumerations
    pub fn with_enums<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_types.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add names that need boxed storage on top of the built-in list
    pub fn with_reference_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reference_types
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn enum_types(&self) -> impl Iterator<Item = &str> {
        self.enum_types.iter().map(String::as_str)
    }
}

impl Default for StaticTypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeLookup for StaticTypeTable {
    fn is_enum(&self, type_name: &str) -> bool {
        self.enum_types.contains(type_name)
    }

    fn is_reference(&self, type_name: &str) -> bool {
        self.reference_types.contains(type_name)
            || VectorKind::from_name(type_name).is_some()
            || ColorKind::from_name(type_name).is_some()
            || self.enum_types.contains(type_name)
    }
}

/// Lookup built from two injected predicates
pub struct FnTypeLookup<E, R> {
    is_enum: E,
    is_reference: R,
}

impl<E, R> FnTypeLookup<E, R>
where
    E: Fn(&str) -> bool,
    R: Fn(&str) -> bool,
{
    pub fn new(is_enum: E, is_reference: R) -> Self {
        Self {
            is_enum,
            is_reference,
        }
    }
}

impl<E, R> TypeLookup for FnTypeLookup<E, R>
where
    E: Fn(&str) -> bool,
    R: Fn(&str) -> bool,
{
    fn is_enum(&self, type_name: &str) -> bool {
        (self.is_enum)(type_name)
    }

    fn is_reference(&self, type_name: &str) -> bool {
        (self.is_reference)(type_name)
    }
}

/// Classifies declared type strings against a lookup
#[derive(Clone, Copy)]
pub struct TypeClassifier<'a> {
    lookup: &'a dyn TypeLookup,
}

impl<'a> TypeClassifier<'a> {
    pub fn new(lookup: &'a dyn TypeLookup) -> Self {
        Self { lookup }
    }

    /// Element type of a single-level array type, if `ty` is one
    pub fn array_element(ty: &str) -> Option<&str> {
        ARRAY_TYPE
            .captures(ty.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Decode shape of `ty`
    pub fn shape(&self, ty: &str) -> TypeShape {
        if let Some(inner) = Self::array_element(ty) {
            return TypeShape::Array(inner.to_string());
        }
        if let Some(kind) = VectorKind::from_name(ty) {
            return TypeShape::Vector(kind);
        }
        if let Some(kind) = ColorKind::from_name(ty) {
            return TypeShape::Color(kind);
        }
        if self.lookup.is_enum(ty) {
            return TypeShape::Enum;
        }
        if matches!(ty, "DataList" | "DataDictionary") {
            return TypeShape::Container;
        }
        if self.is_boxed(ty) {
            return TypeShape::Reference;
        }
        if let Some(kind) = PrimitiveKind::from_name(ty) {
            return TypeShape::Primitive(kind);
        }
        TypeShape::Nested
    }

    /// Slot storage of `ty`
    pub fn storage(&self, ty: &str) -> Storage {
        let boxed = EMPTY_BRACKETS.is_match(ty)
            || ty == "object"
            || ty == "decimal"
            || self.lookup.is_reference(ty);

        if boxed {
            Storage::Boxed
        } else {
            Storage::Inline
        }
    }

    pub fn is_boxed(&self, ty: &str) -> bool {
        self.storage(ty) == Storage::Boxed
    }
}
