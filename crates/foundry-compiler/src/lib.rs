//! Foundry Construction Compiler
//!
//! Compiles declarative [`ObjectDefinition`]s into linear instruction
//! sequences, resolving every binding against registered class metadata up
//! front so that nothing remains to be matched or validated on the hot
//! path.
//!
//! ## Modules
//!
//! - [`object`]: the construction compiler ([`ObjectCompiler`]) and a
//!   ready-made value-compiling collaborator ([`BasicValueCompiler`])
//! - [`resolver`]: standalone parameter resolution
//!   ([`resolve_parameters`])
//!
//! [`ObjectDefinition`]: foundry_core::ObjectDefinition

pub mod object;
pub mod resolver;

pub use object::{BasicValueCompiler, ObjectCompiler};
pub use resolver::resolve_parameters;

// Re-export the error types from core for convenience.
pub use foundry_core::{CompileError, DefinitionError};
