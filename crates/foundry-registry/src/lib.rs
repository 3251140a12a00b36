//! Registration-backed type introspection for the foundry compiler.
//!
//! The construction compiler needs a read-only capability to enumerate a
//! class's constructor and method parameters and to check field existence
//! and visibility. This crate satisfies that capability with an explicit
//! registration step: hosts record [`ClassEntry`] metadata in a
//! [`TypeRegistry`] ahead of compilation.

mod registry;

pub use registry::TypeRegistry;

// Re-export the entry types hosts need for registration.
pub use foundry_core::{
    CallableDef, ClassEntry, FieldEntry, ParamDef, ParamDefault, RegistrationError, TypeKind,
    Visibility,
};
