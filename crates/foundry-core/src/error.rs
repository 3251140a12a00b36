//! Unified error types for object construction compilation.
//!
//! This module provides a consistent error type hierarchy for the two phases
//! of the pipeline: registry population and definition compilation.
//!
//! ## Error Hierarchy
//!
//! ```text
//! RegistrationError - registry population errors
//! CompileError      - compilation errors (top-level for the compiler)
//! └── DefinitionError - authoring mistakes in a definition (recoverable)
//! ```
//!
//! ## Recoverable vs. fatal
//!
//! A [`DefinitionError`] is an expected authoring mistake: the host should
//! surface it to the definition's author and may continue compiling other
//! entries. The remaining [`CompileError`] variants are structural mismatches
//! between a definition and the registered class metadata that no resolution
//! strategy can repair; the host should treat them as aborting the whole
//! compilation pass. [`CompileError::is_recoverable`] distinguishes the two.

use thiserror::Error;

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur while populating a type registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A class with this name was already registered.
    #[error("duplicate class: {0}")]
    DuplicateClass(String),
}

// ============================================================================
// Definition Errors (recoverable)
// ============================================================================

/// An invalid definition: the authored recipe cannot be satisfied.
///
/// These errors are attributable to a specific container entry or callable
/// and should be reported back to whoever authored the definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The definition's target class is not registered.
    #[error("entry \"{entry}\" cannot be compiled: the class doesn't exist")]
    ClassNotFound {
        /// Logical name of the container entry.
        entry: String,
    },

    /// The definition's target class exists but cannot be constructed
    /// (abstract class, interface, or uninstantiable built-in).
    #[error("entry \"{entry}\" cannot be compiled: the class is not instantiable")]
    ClassNotInstantiable {
        /// Logical name of the container entry.
        entry: String,
    },

    /// A required parameter has neither an explicit binding nor a default.
    #[error("parameter \"{parameter}\" of {callable}() has no value defined or guessable")]
    UnresolvedParameter {
        /// The callable whose parameter list was being resolved.
        callable: String,
        /// The parameter that could not be resolved.
        parameter: String,
    },

    /// A parameter is declared optional but its default value cannot be
    /// retrieved from the registry.
    #[error("the default value of parameter \"{parameter}\" of {callable}() cannot be read from the registry")]
    UnreadableDefault {
        /// The callable whose parameter list was being resolved.
        callable: String,
        /// The parameter whose default is opaque.
        parameter: String,
    },
}

impl DefinitionError {
    /// Create a "class doesn't exist" error for an entry.
    pub fn class_not_found(entry: impl Into<String>) -> Self {
        DefinitionError::ClassNotFound {
            entry: entry.into(),
        }
    }

    /// Create a "class is not instantiable" error for an entry.
    pub fn class_not_instantiable(entry: impl Into<String>) -> Self {
        DefinitionError::ClassNotInstantiable {
            entry: entry.into(),
        }
    }

    /// Create an unresolved-parameter error.
    pub fn unresolved_parameter(
        callable: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        DefinitionError::UnresolvedParameter {
            callable: callable.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an unreadable-default error.
    pub fn unreadable_default(callable: impl Into<String>, parameter: impl Into<String>) -> Self {
        DefinitionError::UnreadableDefault {
            callable: callable.into(),
            parameter: parameter.into(),
        }
    }

    /// Get the logical entry name this error is attributed to, if any.
    ///
    /// Parameter-resolution errors name a callable rather than an entry.
    pub fn entry(&self) -> Option<&str> {
        match self {
            DefinitionError::ClassNotFound { entry }
            | DefinitionError::ClassNotInstantiable { entry } => Some(entry),
            DefinitionError::UnresolvedParameter { .. }
            | DefinitionError::UnreadableDefault { .. } => None,
        }
    }
}

// ============================================================================
// Compile Errors
// ============================================================================

/// Errors returned by the construction compiler and parameter resolver.
///
/// Compilation is all-or-nothing per definition: no partial instruction
/// sequence is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// An authoring mistake in the definition (recoverable per entry).
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// The target class name is a runtime-generated anonymous name.
    ///
    /// A compiled reference to such a name would be meaningless outside the
    /// runtime instance that generated it, so these are rejected before any
    /// other validation.
    #[error("cannot compile a definition for the anonymous class \"{name}\"")]
    AnonymousClass {
        /// The synthetic class name.
        name: String,
    },

    /// A field binding targets a field that is not publicly writable.
    ///
    /// No workaround is attempted; writable access to non-public fields is
    /// an explicit non-goal.
    #[error("cannot compile access to the non-public field {class}::{field}")]
    NonPublicField {
        /// The class owning the field.
        class: String,
        /// The field name.
        field: String,
    },

    /// A field binding references a field (or an owning class) that does
    /// not exist.
    #[error("field {class}::{field} does not exist")]
    UnknownField {
        /// The class the binding resolved against.
        class: String,
        /// The missing field name.
        field: String,
    },

    /// A method binding references a method the target class does not have.
    #[error("method {class}::{method}() does not exist")]
    UnknownMethod {
        /// The target class.
        class: String,
        /// The missing method name.
        method: String,
    },
}

impl CompileError {
    /// Whether this error is a per-entry authoring mistake the host can
    /// report and recover from, as opposed to a structural mismatch that
    /// should abort the whole compilation pass.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CompileError::Definition(_))
    }
}
