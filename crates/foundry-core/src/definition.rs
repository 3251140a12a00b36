//! Object definitions: the declarative recipe for building one object.
//!
//! An [`ObjectDefinition`] names a target class, carries positional
//! constructor bindings, field bindings, method-call bindings, and an
//! optional lazy flag. Definitions are authored upstream and are read-only
//! to the compiler; the only derivation is [`ObjectDefinition::to_eager`],
//! which copies the definition with the lazy flag cleared.

use rustc_hash::FxHashMap;

use crate::value::BoundValue;

/// A sparse positional binding set: parameter position to bound value.
///
/// Positions without a binding fall back to the parameter's declared
/// default during resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentBindings {
    values: FxHashMap<u32, BoundValue>,
}

impl ArgumentBindings {
    /// Create an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value at a parameter position (builder form).
    pub fn bind(mut self, position: u32, value: BoundValue) -> Self {
        self.values.insert(position, value);
        self
    }

    /// Bind a value at a parameter position.
    pub fn insert(&mut self, position: u32, value: BoundValue) {
        self.values.insert(position, value);
    }

    /// Get the binding at a position, if any.
    pub fn get(&self, position: u32) -> Option<&BoundValue> {
        self.values.get(&position)
    }

    /// Number of explicit bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no positions are bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A field assignment to perform after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    /// Owning class override; `None` means the definition's target class.
    class_override: Option<String>,
    /// Field name.
    field: String,
    /// Value to assign.
    value: BoundValue,
}

impl FieldBinding {
    /// Create a binding for a field on the definition's target class.
    pub fn new(field: impl Into<String>, value: BoundValue) -> Self {
        Self {
            class_override: None,
            field: field.into(),
            value,
        }
    }

    /// Create a binding for a field on an explicitly named class.
    pub fn on_class(
        class: impl Into<String>,
        field: impl Into<String>,
        value: BoundValue,
    ) -> Self {
        Self {
            class_override: Some(class.into()),
            field: field.into(),
            value,
        }
    }

    /// Owning class override, if any.
    pub fn class_override(&self) -> Option<&str> {
        self.class_override.as_deref()
    }

    /// Field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Bound value.
    pub fn value(&self) -> &BoundValue {
        &self.value
    }
}

/// A method call to perform after construction and field assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodBinding {
    /// Method name on the target class.
    method: String,
    /// Positional argument bindings.
    arguments: ArgumentBindings,
}

impl MethodBinding {
    /// Create a method binding with no explicit arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: ArgumentBindings::new(),
        }
    }

    /// Bind an argument at a parameter position (builder form).
    pub fn with_argument(mut self, position: u32, value: BoundValue) -> Self {
        self.arguments.insert(position, value);
        self
    }

    /// Method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Positional argument bindings.
    pub fn arguments(&self) -> &ArgumentBindings {
        &self.arguments
    }
}

/// Declarative recipe for constructing and initializing one object.
///
/// Field and method bindings preserve declaration order; the compiler emits
/// their instructions in exactly that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDefinition {
    /// Logical container-entry name, used in diagnostics.
    entry_name: String,
    /// Target class name.
    class_name: String,
    /// Defer construction behind a forwarding placeholder.
    lazy: bool,
    /// Positional constructor bindings.
    constructor_bindings: ArgumentBindings,
    /// Field assignments, in declaration order.
    field_bindings: Vec<FieldBinding>,
    /// Method calls, in declaration order.
    method_bindings: Vec<MethodBinding>,
}

impl ObjectDefinition {
    /// Create a definition with an explicit entry name.
    pub fn new(entry_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            entry_name: entry_name.into(),
            class_name: class_name.into(),
            lazy: false,
            constructor_bindings: ArgumentBindings::new(),
            field_bindings: Vec::new(),
            method_bindings: Vec::new(),
        }
    }

    /// Create a definition whose entry name is the class name.
    pub fn for_class(class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        Self::new(class_name.clone(), class_name)
    }

    // === Builder Methods ===

    /// Mark the definition lazy.
    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    /// Bind a constructor argument at a parameter position.
    pub fn bind_constructor_argument(mut self, position: u32, value: BoundValue) -> Self {
        self.constructor_bindings.insert(position, value);
        self
    }

    /// Replace the constructor binding set.
    pub fn with_constructor_bindings(mut self, bindings: ArgumentBindings) -> Self {
        self.constructor_bindings = bindings;
        self
    }

    /// Append a field binding.
    pub fn with_field(mut self, binding: FieldBinding) -> Self {
        self.field_bindings.push(binding);
        self
    }

    /// Append a method binding.
    pub fn with_method(mut self, binding: MethodBinding) -> Self {
        self.method_bindings.push(binding);
        self
    }

    // === Query Methods ===

    /// Logical container-entry name.
    pub fn entry_name(&self) -> &str {
        &self.entry_name
    }

    /// Target class name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Whether construction is deferred behind a placeholder.
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// Positional constructor bindings.
    pub fn constructor_bindings(&self) -> &ArgumentBindings {
        &self.constructor_bindings
    }

    /// Field bindings, in declaration order.
    pub fn field_bindings(&self) -> &[FieldBinding] {
        &self.field_bindings
    }

    /// Method bindings, in declaration order.
    pub fn method_bindings(&self) -> &[MethodBinding] {
        &self.method_bindings
    }

    /// Derive an eager copy: identical bindings, lazy flag cleared.
    ///
    /// The original definition is left untouched so callers that still need
    /// the lazy variant can keep using it.
    pub fn to_eager(&self) -> Self {
        let mut eager = self.clone();
        eager.lazy = false;
        eager
    }
}
