//! Callable metadata: constructors and methods.

use crate::value::BoundValue;

/// Default-value declaration for a formal parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamDefault {
    /// No default: the parameter must receive an explicit binding.
    Required,
    /// Declared default value, usable when no binding is supplied.
    Value(BoundValue),
    /// Declared optional, but the default cannot be retrieved (typically a
    /// host-builtin routine whose defaults are not introspectable).
    /// Resolving such a parameter without an explicit binding fails.
    Opaque,
}

/// A formal parameter of a registered callable.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDef {
    /// Parameter name.
    name: String,
    /// Zero-based position in the declaration order.
    position: u32,
    /// Default-value declaration.
    default: ParamDefault,
}

impl ParamDef {
    /// A required parameter.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            default: ParamDefault::Required,
        }
    }

    /// An optional parameter with an introspectable default.
    pub fn with_default(name: impl Into<String>, default: BoundValue) -> Self {
        Self {
            name: name.into(),
            position: 0,
            default: ParamDefault::Value(default),
        }
    }

    /// An optional parameter whose default cannot be retrieved.
    pub fn opaque_default(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            default: ParamDefault::Opaque,
        }
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based declaration position.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Default-value declaration.
    pub fn default(&self) -> &ParamDefault {
        &self.default
    }

    /// Whether the parameter may be left unbound.
    pub fn is_optional(&self) -> bool {
        !matches!(self.default, ParamDefault::Required)
    }
}

/// A registered callable: a constructor or a method.
///
/// Parameters are kept in declaration order; positions are assigned as
/// parameters are appended.
#[derive(Debug, Clone, PartialEq)]
pub struct CallableDef {
    /// Qualified callable name, used in diagnostics (e.g. `Logger::open`).
    name: String,
    /// Formal parameters in declaration order.
    params: Vec<ParamDef>,
}

impl CallableDef {
    /// Create a callable with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter; its position is the current parameter count.
    pub fn with_param(mut self, mut param: ParamDef) -> Self {
        param.position = self.params.len() as u32;
        self.params.push(param);
        self
    }

    /// Qualified callable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formal parameters in declaration order.
    pub fn params(&self) -> &[ParamDef] {
        &self.params
    }

    /// Number of formal parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_declaration_order() {
        let callable = CallableDef::new("Logger::__construct")
            .with_param(ParamDef::required("name"))
            .with_param(ParamDef::with_default("level", BoundValue::int(3)))
            .with_param(ParamDef::opaque_default("flags"));

        let positions: Vec<_> = callable.params().iter().map(|p| p.position()).collect();
        assert_eq!(positions, [0, 1, 2]);
        assert_eq!(callable.param_count(), 3);
    }

    #[test]
    fn optionality() {
        assert!(!ParamDef::required("a").is_optional());
        assert!(ParamDef::with_default("b", BoundValue::null()).is_optional());
        assert!(ParamDef::opaque_default("c").is_optional());
    }
}
