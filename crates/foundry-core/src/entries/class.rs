//! Class metadata entries.

use super::CallableDef;

/// Marker substring found in runtime-generated (anonymous) class names.
///
/// A compiled reference to such a name is meaningless outside the runtime
/// instance that created the type, so definitions targeting one are
/// rejected outright.
pub const ANONYMOUS_MARKER: &str = "@anonymous";

/// Check whether a class name is a runtime-generated anonymous name.
pub fn is_anonymous_name(name: &str) -> bool {
    name.contains(ANONYMOUS_MARKER)
}

/// What kind of type a class entry describes.
///
/// Only `Concrete` types are instantiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// A concrete, directly constructible class.
    #[default]
    Concrete,
    /// An abstract class.
    Abstract,
    /// An interface.
    Interface,
    /// A host built-in that cannot be constructed directly.
    Builtin,
}

/// Visibility modifier for class members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A registered field of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    /// Field name.
    pub name: String,
    /// Field visibility.
    pub visibility: Visibility,
}

impl FieldEntry {
    /// Create a field entry.
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
        }
    }

    /// Create a public field entry.
    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    /// Create a private field entry.
    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    /// Whether the field is publicly writable.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Registry entry for a class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassEntry {
    /// Class name.
    pub name: String,
    /// Type kind (determines instantiability).
    pub kind: TypeKind,
    /// Constructor, if the class declares one.
    pub constructor: Option<CallableDef>,
    /// Declared methods.
    pub methods: Vec<CallableDef>,
    /// Declared fields.
    pub fields: Vec<FieldEntry>,
}

impl ClassEntry {
    /// Create a class entry of the given kind.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constructor: None,
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Create a concrete class entry.
    pub fn concrete(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Concrete)
    }

    // === Builder Methods ===

    /// Set the constructor.
    pub fn with_constructor(mut self, constructor: CallableDef) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Add a method.
    pub fn with_method(mut self, method: CallableDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldEntry) -> Self {
        self.fields.push(field);
        self
    }

    // === Query Methods ===

    /// Whether the class can be constructed directly.
    pub fn is_instantiable(&self) -> bool {
        self.kind == TypeKind::Concrete
    }

    /// The constructor, if declared.
    pub fn constructor(&self) -> Option<&CallableDef> {
        self.constructor.as_ref()
    }

    /// Look up a declared method by name.
    pub fn method(&self, name: &str) -> Option<&CallableDef> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }
}
