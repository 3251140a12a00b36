//! Bound values and compiled operands.
//!
//! A [`BoundValue`] is what a definition author writes into a binding: a
//! literal, a reference to another container entry, or a nested inline
//! definition. An [`Operand`] is the compiled form of one of those values,
//! ready to appear in an instruction.
//!
//! Turning a bound value into an operand is the job of a [`ValueCompiler`]
//! collaborator. The construction compiler treats bound values as opaque
//! beyond "compiles to an operand", so drivers with a richer value language
//! (environment lookups, factories, decorated entries) plug in their own
//! implementation.

use std::fmt;
use std::sync::Arc;

use crate::definition::ObjectDefinition;
use crate::error::CompileError;
use crate::instruction::Instruction;

/// A literal value in a binding.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Int(i) => write!(f, "{i}"),
            Literal::Float(x) => write!(f, "{x}"),
            Literal::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A value supplied for a parameter, field, or method argument.
///
/// Nested definitions are held behind an [`Arc`] so that a single value can
/// be bound at several positions (or in several definitions) without
/// duplication; the resolver clones handles, never the definition itself.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    /// A literal value.
    Literal(Literal),
    /// A reference to another container entry, by logical name.
    Reference(String),
    /// A nested inline definition, compiled into a sub-sequence.
    Definition(Arc<ObjectDefinition>),
}

impl BoundValue {
    /// Shorthand for a null literal.
    pub fn null() -> Self {
        BoundValue::Literal(Literal::Null)
    }

    /// Shorthand for an integer literal.
    pub fn int(value: i64) -> Self {
        BoundValue::Literal(Literal::Int(value))
    }

    /// Shorthand for a string literal.
    pub fn str(value: impl Into<String>) -> Self {
        BoundValue::Literal(Literal::Str(value.into()))
    }

    /// Shorthand for a boolean literal.
    pub fn bool(value: bool) -> Self {
        BoundValue::Literal(Literal::Bool(value))
    }

    /// Shorthand for a reference to another entry.
    pub fn reference(entry: impl Into<String>) -> Self {
        BoundValue::Reference(entry.into())
    }

    /// Shorthand for a nested definition.
    pub fn definition(definition: ObjectDefinition) -> Self {
        BoundValue::Definition(Arc::new(definition))
    }
}

/// A compiled value, usable as an instruction operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal operand.
    Literal(Literal),
    /// A reference to another container entry, resolved at execution time.
    EntryRef(String),
    /// An inline sub-construction: executing the sequence yields the value.
    ///
    /// Shared behind an [`Arc`] so one compiled sub-object can back several
    /// operands.
    SubObject(Arc<[Instruction]>),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(lit) => write!(f, "{lit}"),
            Operand::EntryRef(entry) => write!(f, "ref({entry})"),
            Operand::SubObject(seq) => write!(f, "object(<{} instructions>)", seq.len()),
        }
    }
}

/// Collaborator that compiles bound values into operands.
///
/// Implementations must be side-effect-free from the compiler's point of
/// view: compiling the same value twice with unchanged inputs must yield
/// structurally identical operands.
pub trait ValueCompiler {
    /// Compile a bound value into an instruction operand.
    fn compile_value(&self, value: &BoundValue) -> Result<Operand, CompileError>;
}
