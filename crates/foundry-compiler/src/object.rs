//! The construction compiler.
//!
//! [`ObjectCompiler::compile`] turns an [`ObjectDefinition`] into a linear
//! instruction sequence: one `Construct`, then one `AssignField` per field
//! binding, then one `InvokeMethod` per method binding, in declaration
//! order. Lazy definitions compile to a single `InstallLazyPlaceholder`
//! wrapping the eager sequence of a derived copy of the definition.
//!
//! Compilation is all-or-nothing: every input of every instruction is
//! validated before the sequence is returned, and the first violated
//! invariant aborts the compile.

use std::cell::RefCell;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use foundry_core::{
    BoundValue, CompileError, DefinitionError, Instruction, ObjectDefinition, Operand,
    ValueCompiler, is_anonymous_name,
};
use foundry_registry::TypeRegistry;

use crate::resolver::resolve_parameters;

/// Compiles object definitions against a type registry.
pub struct ObjectCompiler<'a> {
    registry: &'a TypeRegistry,
    values: &'a dyn ValueCompiler,
}

impl<'a> ObjectCompiler<'a> {
    /// Create a compiler over a registry and a value-compiling collaborator.
    pub fn new(registry: &'a TypeRegistry, values: &'a dyn ValueCompiler) -> Self {
        Self { registry, values }
    }

    /// Compile a definition into an ordered instruction sequence.
    pub fn compile(&self, definition: &ObjectDefinition) -> Result<Vec<Instruction>, CompileError> {
        let class_name = definition.class_name();

        // Anonymous names are rejected before any other validation; a
        // compiled reference to one would be meaningless outside the
        // runtime instance that generated the type.
        if is_anonymous_name(class_name) {
            return Err(CompileError::AnonymousClass {
                name: class_name.to_string(),
            });
        }

        let class = self
            .registry
            .class(class_name)
            .ok_or_else(|| DefinitionError::class_not_found(definition.entry_name()))?;
        if !class.is_instantiable() {
            return Err(DefinitionError::class_not_instantiable(definition.entry_name()).into());
        }

        if definition.is_lazy() {
            // Compile the eager form of a derived copy; the caller's
            // definition keeps its lazy flag.
            let eager = definition.to_eager();
            let initializer = self.compile(&eager)?;
            return Ok(vec![Instruction::InstallLazyPlaceholder {
                class: class_name.to_string(),
                initializer,
            }]);
        }

        let mut instructions = Vec::with_capacity(
            1 + definition.field_bindings().len() + definition.method_bindings().len(),
        );

        let args = resolve_parameters(
            self.values,
            class.constructor(),
            definition.constructor_bindings(),
        )?;
        instructions.push(Instruction::Construct {
            class: class_name.to_string(),
            args,
        });

        for binding in definition.field_bindings() {
            let owner = binding.class_override().unwrap_or(class_name);
            let field = self.registry.field(owner, binding.field()).ok_or_else(|| {
                CompileError::UnknownField {
                    class: owner.to_string(),
                    field: binding.field().to_string(),
                }
            })?;
            if !field.is_public() {
                return Err(CompileError::NonPublicField {
                    class: owner.to_string(),
                    field: binding.field().to_string(),
                });
            }
            let value = self.values.compile_value(binding.value())?;
            instructions.push(Instruction::AssignField {
                field: binding.field().to_string(),
                value,
            });
        }

        for binding in definition.method_bindings() {
            let method =
                class
                    .method(binding.method())
                    .ok_or_else(|| CompileError::UnknownMethod {
                        class: class_name.to_string(),
                        method: binding.method().to_string(),
                    })?;
            let args = resolve_parameters(self.values, Some(method), binding.arguments())?;
            instructions.push(Instruction::InvokeMethod {
                method: binding.method().to_string(),
                args,
            });
        }

        Ok(instructions)
    }
}

/// A ready-made [`ValueCompiler`] over a type registry.
///
/// Literals pass through, references become entry-reference operands, and
/// nested definitions are compiled recursively into sub-object operands.
/// Sub-object compilation is memoized per definition handle, so a single
/// shared definition bound at several positions compiles to operands
/// backed by the same instruction sequence allocation.
///
/// Drivers with a richer value language supply their own implementation
/// instead.
pub struct BasicValueCompiler<'a> {
    registry: &'a TypeRegistry,
    // Keyed by definition address; each entry also pins the definition
    // handle so the address cannot be reused while the cache lives.
    compiled: RefCell<FxHashMap<*const ObjectDefinition, CachedSequence>>,
}

struct CachedSequence {
    _definition: Arc<ObjectDefinition>,
    sequence: Arc<[Instruction]>,
}

impl<'a> BasicValueCompiler<'a> {
    /// Create a value compiler over a registry.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            compiled: RefCell::new(FxHashMap::default()),
        }
    }
}

impl ValueCompiler for BasicValueCompiler<'_> {
    fn compile_value(&self, value: &BoundValue) -> Result<Operand, CompileError> {
        match value {
            BoundValue::Literal(lit) => Ok(Operand::Literal(lit.clone())),
            BoundValue::Reference(entry) => Ok(Operand::EntryRef(entry.clone())),
            BoundValue::Definition(definition) => {
                let key = Arc::as_ptr(definition);
                if let Some(cached) = self.compiled.borrow().get(&key) {
                    return Ok(Operand::SubObject(cached.sequence.clone()));
                }
                let compiler = ObjectCompiler::new(self.registry, self);
                let sequence: Arc<[Instruction]> = compiler.compile(definition)?.into();
                self.compiled.borrow_mut().insert(
                    key,
                    CachedSequence {
                        _definition: definition.clone(),
                        sequence: sequence.clone(),
                    },
                );
                Ok(Operand::SubObject(sequence))
            }
        }
    }
}
