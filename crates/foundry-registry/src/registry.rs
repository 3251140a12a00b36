//! TypeRegistry - registration-backed type introspection.
//!
//! This module provides [`TypeRegistry`], the storage for all class
//! metadata the construction compiler introspects. The host environment has
//! no runtime reflection, so every class a definition may target is
//! recorded ahead of compilation through an explicit registration step.
//!
//! # Storage Model
//!
//! Class entries are stored in a single map keyed by class name. Lookups
//! are read-only, side-effect-free, and repeatable; compiling the same
//! definition twice against an unchanged registry yields identical results.
//!
//! # Thread Safety
//!
//! `TypeRegistry` is **not thread-safe** by design. The typical usage
//! pattern has two phases:
//!
//! - **Registration phase**: the registry is populated single-threaded
//!   during host setup.
//! - **Compilation phase**: the registry becomes effectively read-only and
//!   may be shared by reference across parallel compilations of distinct
//!   definitions. Callers needing concurrent registration must wrap it in
//!   their own synchronization.

use rustc_hash::FxHashMap;

use foundry_core::{ClassEntry, FieldEntry, RegistrationError};

/// Registration-backed store of class metadata.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    classes: FxHashMap<String, ClassEntry>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class entry.
    ///
    /// Each class name may be registered once; re-registering is an error
    /// rather than a silent overwrite so that compiled output can never
    /// disagree with an earlier compilation.
    pub fn register(&mut self, class: ClassEntry) -> Result<(), RegistrationError> {
        if self.classes.contains_key(&class.name) {
            return Err(RegistrationError::DuplicateClass(class.name));
        }
        self.classes.insert(class.name.clone(), class);
        Ok(())
    }

    /// Look up a class by name.
    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.get(name)
    }

    /// Whether a class with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Look up a field on a named class.
    ///
    /// Returns `None` when either the class or the field is unknown.
    pub fn field(&self, class_name: &str, field_name: &str) -> Option<&FieldEntry> {
        self.class(class_name)?.field(field_name)
    }

    /// Number of registered classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundry_core::{CallableDef, TypeKind, Visibility};

    #[test]
    fn new_registry_is_empty() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.class_count(), 0);
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = TypeRegistry::new();
        registry
            .register(ClassEntry::concrete("Logger").with_method(CallableDef::new("open")))
            .unwrap();

        assert!(registry.contains("Logger"));
        assert!(!registry.contains("Writer"));

        let class = registry.class("Logger").unwrap();
        assert!(class.is_instantiable());
        assert!(class.method("open").is_some());
    }

    #[test]
    fn duplicate_class_error() {
        let mut registry = TypeRegistry::new();
        registry.register(ClassEntry::concrete("Logger")).unwrap();

        let result = registry.register(ClassEntry::new("Logger", TypeKind::Abstract));
        assert_eq!(
            result,
            Err(RegistrationError::DuplicateClass("Logger".to_string()))
        );
        // The original entry is untouched.
        assert!(registry.class("Logger").unwrap().is_instantiable());
    }

    #[test]
    fn field_lookup_through_registry() {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                ClassEntry::concrete("Logger")
                    .with_field(FieldEntry::public("level"))
                    .with_field(FieldEntry::new("handle", Visibility::Protected)),
            )
            .unwrap();

        assert!(registry.field("Logger", "level").unwrap().is_public());
        assert!(!registry.field("Logger", "handle").unwrap().is_public());
        assert!(registry.field("Logger", "missing").is_none());
        assert!(registry.field("Writer", "level").is_none());
    }
}
