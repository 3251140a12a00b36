//! Registration metadata entries.
//!
//! The compiler never reflects over live types; instead, a registration
//! step records each class's constructor, methods, and fields ahead of
//! compilation, using the entry types in this module. The registry stores
//! them and answers the compiler's read-only introspection queries.

mod callable;
mod class;

pub use callable::{CallableDef, ParamDef, ParamDefault};
pub use class::{
    ANONYMOUS_MARKER, ClassEntry, FieldEntry, TypeKind, Visibility, is_anonymous_name,
};
