//! Parameter resolution.
//!
//! Matches a callable's formal parameter list against an explicit positional
//! binding set, falling back to declared defaults. Exposed on its own
//! because drivers also need it outside full object construction (for
//! example, resolving arguments for a factory-style binding).

use foundry_core::{
    ArgumentBindings, CallableDef, CompileError, DefinitionError, Operand, ParamDefault,
    ValueCompiler,
};

/// Resolve a callable's parameters into an ordered argument list.
///
/// Per formal parameter, in declaration order:
///
/// 1. An explicit binding at the parameter's position is used verbatim.
/// 2. Otherwise the parameter's declared default is used; an opaque default
///    (declared optional but not retrievable) fails with
///    [`DefinitionError::UnreadableDefault`].
/// 3. Otherwise the parameter is required and unbound: resolution fails
///    immediately with [`DefinitionError::UnresolvedParameter`], without
///    examining later parameters.
///
/// On success the returned list's length equals the callable's parameter
/// count exactly. `callable == None` means "no callable to resolve against"
/// and yields an empty list without error.
pub fn resolve_parameters(
    values: &dyn ValueCompiler,
    callable: Option<&CallableDef>,
    bindings: &ArgumentBindings,
) -> Result<Vec<Operand>, CompileError> {
    let Some(callable) = callable else {
        return Ok(Vec::new());
    };

    let mut args = Vec::with_capacity(callable.param_count());
    for param in callable.params() {
        let value = match bindings.get(param.position()) {
            Some(bound) => bound,
            None => match param.default() {
                ParamDefault::Value(default) => default,
                ParamDefault::Opaque => {
                    return Err(
                        DefinitionError::unreadable_default(callable.name(), param.name()).into(),
                    );
                }
                ParamDefault::Required => {
                    return Err(
                        DefinitionError::unresolved_parameter(callable.name(), param.name())
                            .into(),
                    );
                }
            },
        };
        args.push(values.compile_value(value)?);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundry_core::{BoundValue, Literal, ParamDef};

    /// Compiles literals and references; enough for resolver tests.
    struct StubValues;

    impl ValueCompiler for StubValues {
        fn compile_value(&self, value: &BoundValue) -> Result<Operand, CompileError> {
            match value {
                BoundValue::Literal(lit) => Ok(Operand::Literal(lit.clone())),
                BoundValue::Reference(entry) => Ok(Operand::EntryRef(entry.clone())),
                BoundValue::Definition(_) => unimplemented!("not needed in resolver tests"),
            }
        }
    }

    fn two_param_callable() -> CallableDef {
        CallableDef::new("Logger::__construct")
            .with_param(ParamDef::required("a"))
            .with_param(ParamDef::with_default("b", BoundValue::int(10)))
    }

    #[test]
    fn no_callable_yields_empty_list() {
        let bindings = ArgumentBindings::new().bind(0, BoundValue::int(1));
        let args = resolve_parameters(&StubValues, None, &bindings).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn explicit_binding_beats_default() {
        let callable = two_param_callable();
        let bindings = ArgumentBindings::new()
            .bind(0, BoundValue::int(5))
            .bind(1, BoundValue::int(99));

        let args = resolve_parameters(&StubValues, Some(&callable), &bindings).unwrap();
        assert_eq!(
            args,
            vec![
                Operand::Literal(Literal::Int(5)),
                Operand::Literal(Literal::Int(99)),
            ]
        );
    }

    #[test]
    fn default_fills_unbound_optional() {
        let callable = two_param_callable();
        let bindings = ArgumentBindings::new().bind(0, BoundValue::int(5));

        let args = resolve_parameters(&StubValues, Some(&callable), &bindings).unwrap();
        assert_eq!(args.len(), callable.param_count());
        assert_eq!(args[1], Operand::Literal(Literal::Int(10)));
    }

    #[test]
    fn unbound_required_parameter_fails() {
        let callable = two_param_callable();
        let bindings = ArgumentBindings::new().bind(1, BoundValue::int(99));

        let err = resolve_parameters(&StubValues, Some(&callable), &bindings).unwrap_err();
        assert_eq!(
            err,
            CompileError::Definition(DefinitionError::unresolved_parameter(
                "Logger::__construct",
                "a"
            ))
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn opaque_default_fails_when_unbound() {
        let callable = CallableDef::new("strftime").with_param(ParamDef::opaque_default("format"));
        let bindings = ArgumentBindings::new();

        let err = resolve_parameters(&StubValues, Some(&callable), &bindings).unwrap_err();
        assert_eq!(
            err,
            CompileError::Definition(DefinitionError::unreadable_default("strftime", "format"))
        );
    }

    #[test]
    fn opaque_default_is_fine_with_explicit_binding() {
        let callable = CallableDef::new("strftime").with_param(ParamDef::opaque_default("format"));
        let bindings = ArgumentBindings::new().bind(0, BoundValue::str("%Y"));

        let args = resolve_parameters(&StubValues, Some(&callable), &bindings).unwrap();
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn fails_on_first_unresolvable_parameter() {
        // Both parameters are unresolvable; the error must name the first.
        let callable = CallableDef::new("f")
            .with_param(ParamDef::required("first"))
            .with_param(ParamDef::required("second"));

        let err =
            resolve_parameters(&StubValues, Some(&callable), &ArgumentBindings::new()).unwrap_err();
        assert_eq!(
            err,
            CompileError::Definition(DefinitionError::unresolved_parameter("f", "first"))
        );
    }

    #[test]
    fn length_matches_parameter_count() {
        let callable = CallableDef::new("f")
            .with_param(ParamDef::with_default("a", BoundValue::null()))
            .with_param(ParamDef::with_default("b", BoundValue::bool(true)))
            .with_param(ParamDef::with_default("c", BoundValue::str("x")));

        let args =
            resolve_parameters(&StubValues, Some(&callable), &ArgumentBindings::new()).unwrap();
        assert_eq!(args.len(), 3);
    }
}
