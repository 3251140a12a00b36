//! Foundry - an object construction compiler.
//!
//! Foundry translates a declarative description of how to build and
//! initialize an object (target class, constructor arguments, field
//! assignments, post-construction method calls, and an optional lazy flag)
//! into a linear sequence of construction instructions. Binding resolution
//! and validation happen once, at compile time; executing or emitting the
//! instructions is left to the host.
//!
//! # Example
//!
//! ```
//! use foundry::{
//!     BasicValueCompiler, BoundValue, CallableDef, ClassEntry, FieldBinding, FieldEntry,
//!     ObjectCompiler, ObjectDefinition, ParamDef, TypeRegistry,
//! };
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register(
//!         ClassEntry::concrete("Logger")
//!             .with_constructor(
//!                 CallableDef::new("Logger::__construct")
//!                     .with_param(ParamDef::required("name"))
//!                     .with_param(ParamDef::with_default("level", BoundValue::int(3))),
//!             )
//!             .with_field(FieldEntry::public("prefix")),
//!     )
//!     .unwrap();
//!
//! let definition = ObjectDefinition::for_class("Logger")
//!     .bind_constructor_argument(0, BoundValue::str("app"))
//!     .with_field(FieldBinding::new("prefix", BoundValue::str("[app] ")));
//!
//! let values = BasicValueCompiler::new(&registry);
//! let compiler = ObjectCompiler::new(&registry, &values);
//! let instructions = compiler.compile(&definition).unwrap();
//! assert_eq!(instructions.len(), 2); // construct, then assign prefix
//! ```

pub use foundry_core::{
    ANONYMOUS_MARKER, ArgumentBindings, BoundValue, CallableDef, ClassEntry, CompileError,
    DefinitionError, FieldBinding, FieldEntry, Instruction, LazyHandle, Literal, MethodBinding,
    ObjectDefinition, Operand, ParamDef, ParamDefault, RegistrationError, TypeKind, ValueCompiler,
    Visibility, is_anonymous_name,
};

pub use foundry_compiler::{BasicValueCompiler, ObjectCompiler, resolve_parameters};
pub use foundry_registry::TypeRegistry;
