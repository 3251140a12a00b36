//! Construction instructions.
//!
//! The compiler's output artifact is an ordered `Vec<Instruction>`.
//! Executed in order, the sequence reproduces construct, assign-fields,
//! invoke-methods semantics identical to writing that initialization by
//! hand. The sequence has no identity beyond its order and is consumed
//! exactly once by a downstream executor or code emitter.

use std::fmt;

use crate::value::Operand;

/// One step in constructing and initializing an object.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Construct an instance of `class` with the given arguments.
    Construct {
        /// Target class name.
        class: String,
        /// Resolved constructor arguments, one per formal parameter.
        args: Vec<Operand>,
    },

    /// Assign a value to a public field of the constructed instance.
    AssignField {
        /// Field name.
        field: String,
        /// Value to assign.
        value: Operand,
    },

    /// Invoke a method on the constructed instance.
    InvokeMethod {
        /// Method name.
        method: String,
        /// Resolved arguments, one per formal parameter.
        args: Vec<Operand>,
    },

    /// Install a forwarding placeholder for a lazy definition.
    ///
    /// The placeholder is returned to the caller immediately; on first
    /// member access the initializer sequence runs once, the real instance
    /// replaces the forwarding target, and the deferred-initialization hook
    /// is cleared so later accesses go directly to the instance.
    InstallLazyPlaceholder {
        /// Target class name the placeholder stands in for.
        class: String,
        /// The fully compiled eager sequence.
        initializer: Vec<Instruction>,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Construct { class, args } => {
                write!(f, "construct {class}(")?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Instruction::AssignField { field, value } => {
                write!(f, "set {field} = {value}")
            }
            Instruction::InvokeMethod { method, args } => {
                write!(f, "call {method}(")?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Instruction::InstallLazyPlaceholder { class, initializer } => {
                write!(
                    f,
                    "lazy {class} <{} deferred instructions>",
                    initializer.len()
                )
            }
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Operand]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Literal;

    #[test]
    fn display_construct() {
        let instruction = Instruction::Construct {
            class: "Logger".to_string(),
            args: vec![
                Operand::Literal(Literal::Int(5)),
                Operand::Literal(Literal::Str("app".to_string())),
            ],
        };
        assert_eq!(instruction.to_string(), "construct Logger(5, \"app\")");
    }

    #[test]
    fn display_assign_and_invoke() {
        let assign = Instruction::AssignField {
            field: "level".to_string(),
            value: Operand::EntryRef("log.level".to_string()),
        };
        assert_eq!(assign.to_string(), "set level = ref(log.level)");

        let invoke = Instruction::InvokeMethod {
            method: "open".to_string(),
            args: vec![],
        };
        assert_eq!(invoke.to_string(), "call open()");
    }

    #[test]
    fn display_lazy_placeholder() {
        let instruction = Instruction::InstallLazyPlaceholder {
            class: "Logger".to_string(),
            initializer: vec![Instruction::Construct {
                class: "Logger".to_string(),
                args: vec![],
            }],
        };
        assert_eq!(
            instruction.to_string(),
            "lazy Logger <1 deferred instructions>"
        );
    }
}
