//! Callable signatures: parameters and function types.

use serde::Serialize;

use crate::ty::Type;

/// How an argument binds to a parameter at a call site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ParameterCategory {
    /// Only by position (declared before a `/` marker).
    PositionalOnly,
    /// By position or by keyword.
    Positional,
    /// Only by keyword (declared after `*` or `*args`).
    KeywordOnly,
    /// `*args`: collects surplus positional arguments.
    VarPositional,
    /// `**kwargs`: collects surplus keyword arguments.
    VarKeyword,
}

impl ParameterCategory {
    /// Whether the parameter absorbs a variable number of arguments.
    pub fn is_variadic(self) -> bool {
        matches!(self, Self::VarPositional | Self::VarKeyword)
    }
}

/// A single declared parameter of a callable.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub category: ParameterCategory,
    pub param_type: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, category: ParameterCategory, param_type: Type) -> Self {
        Parameter {
            name: name.into(),
            category,
            param_type,
        }
    }

    /// A positional-or-keyword parameter.
    pub fn positional(name: impl Into<String>, param_type: Type) -> Self {
        Self::new(name, ParameterCategory::Positional, param_type)
    }
}

/// A function signature.
///
/// Parameters are kept in declaration order. The name is optional (lambdas
/// and synthesized callables have none), and so is the return type: a
/// function whose return type was never annotated or inferred simply has
/// none, regardless of its parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionType {
    pub func_name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Box<Type>>,
}

impl FunctionType {
    /// An anonymous function with no parameters and no return type.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        FunctionType {
            func_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Append one parameter after the existing ones.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_return_type(mut self, return_type: Type) -> Self {
        self.return_type = Some(Box::new(return_type));
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.func_name.as_deref()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn return_type(&self) -> Option<&Type> {
        self.return_type.as_deref()
    }

    /// Number of declared parameters, variadic ones included.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn param_by_name(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
