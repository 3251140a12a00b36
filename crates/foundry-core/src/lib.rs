//! Core data model for the foundry object construction compiler.
//!
//! This crate defines everything the compiler and registry crates share:
//!
//! - [`definition`]: the declarative recipe for building one object
//!   ([`ObjectDefinition`] and its bindings)
//! - [`entries`]: registration metadata the registry stores and the
//!   compiler introspects ([`ClassEntry`], [`CallableDef`], …)
//! - [`instruction`]: the compiled output ([`Instruction`] sequences)
//! - [`value`]: bound values, operands, and the [`ValueCompiler`] seam
//! - [`lazy`]: the deferred-initialization handle ([`LazyHandle`])
//! - [`error`]: the error taxonomy ([`CompileError`], [`DefinitionError`],
//!   [`RegistrationError`])

pub mod definition;
pub mod entries;
pub mod error;
pub mod instruction;
pub mod lazy;
pub mod value;

pub use definition::{ArgumentBindings, FieldBinding, MethodBinding, ObjectDefinition};
pub use entries::{
    ANONYMOUS_MARKER, CallableDef, ClassEntry, FieldEntry, ParamDef, ParamDefault, TypeKind,
    Visibility, is_anonymous_name,
};
pub use error::{CompileError, DefinitionError, RegistrationError};
pub use instruction::Instruction;
pub use lazy::LazyHandle;
pub use value::{BoundValue, Literal, Operand, ValueCompiler};
