//! Type representation for the Jac type system.
//!
//! Defines the closed `Type` enum and the container kinds that carry no
//! shared state: modules, overload sets and unions. Functions live in
//! [`crate::function`], classes in [`crate::class`], and the canonical text
//! of every kind in [`crate::render`].

use std::path::PathBuf;

use serde::Serialize;

use crate::class::ClassType;
use crate::function::FunctionType;

/// The kind of a [`Type`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeCategory {
    Unbound,
    Unknown,
    Never,
    Any,
    TypeVar,
    Module,
    Function,
    Overloaded,
    Union,
    Class,
}

/// A Jac type.
///
/// Values are built once by the analyzer and read by every later phase.
/// The leaf kinds carry no payload and are compared by kind:
/// - `Unbound`: a name whose type has not been resolved yet
/// - `Unknown`: resolution was attempted and failed
/// - `Never`: the bottom type
/// - `Any`: the unconstrained type
/// - `TypeVar`: a generic type-parameter placeholder
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Unbound,
    Unknown,
    Never,
    Any,
    TypeVar,
    Module(ModuleType),
    Function(FunctionType),
    Overloaded(OverloadedType),
    Union(UnionType),
    Class(ClassType),
}

impl Type {
    pub fn unbound() -> Type {
        Type::Unbound
    }

    pub fn unknown() -> Type {
        Type::Unknown
    }

    pub fn never() -> Type {
        Type::Never
    }

    pub fn any() -> Type {
        Type::Any
    }

    pub fn type_var() -> Type {
        Type::TypeVar
    }

    /// Create a union type. Members are kept exactly as given.
    pub fn union(types: Vec<Type>) -> Type {
        Type::Union(UnionType::new(types))
    }

    pub fn category(&self) -> TypeCategory {
        match self {
            Type::Unbound => TypeCategory::Unbound,
            Type::Unknown => TypeCategory::Unknown,
            Type::Never => TypeCategory::Never,
            Type::Any => TypeCategory::Any,
            Type::TypeVar => TypeCategory::TypeVar,
            Type::Module(_) => TypeCategory::Module,
            Type::Function(_) => TypeCategory::Function,
            Type::Overloaded(_) => TypeCategory::Overloaded,
            Type::Union(_) => TypeCategory::Union,
            Type::Class(_) => TypeCategory::Class,
        }
    }

    pub fn is_unbound(&self) -> bool {
        matches!(self, Type::Unbound)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Type::Unknown)
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Type::Never)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Type::Any)
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            Type::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(func) => Some(func),
            _ => None,
        }
    }
}

impl From<ModuleType> for Type {
    fn from(module: ModuleType) -> Self {
        Type::Module(module)
    }
}

impl From<FunctionType> for Type {
    fn from(func: FunctionType) -> Self {
        Type::Function(func)
    }
}

impl From<OverloadedType> for Type {
    fn from(overloaded: OverloadedType) -> Self {
        Type::Overloaded(overloaded)
    }
}

impl From<UnionType> for Type {
    fn from(union: UnionType) -> Self {
        Type::Union(union)
    }
}

impl From<ClassType> for Type {
    fn from(class: ClassType) -> Self {
        Type::Class(class)
    }
}

/// A compiled unit, identified by module name and/or source file.
///
/// Both fields may be absent for a synthetic or not-yet-resolved module.
/// When both are present the name is what identifies the module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleType {
    pub mod_name: Option<String>,
    pub file_uri: Option<PathBuf>,
}

impl ModuleType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        ModuleType {
            mod_name: Some(name.into()),
            file_uri: None,
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        ModuleType {
            mod_name: None,
            file_uri: Some(path.into()),
        }
    }

    pub fn with_file_uri(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_uri = Some(path.into());
        self
    }
}

/// The candidate signatures of one overloaded callable.
///
/// Order is declaration order; picking a candidate is the resolver's job.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverloadedType {
    pub overloads: Vec<FunctionType>,
}

impl OverloadedType {
    pub fn new(overloads: Vec<FunctionType>) -> Self {
        OverloadedType { overloads }
    }

    pub fn push(&mut self, overload: FunctionType) {
        self.overloads.push(overload);
    }

    pub fn overloads(&self) -> &[FunctionType] {
        &self.overloads
    }

    pub fn len(&self) -> usize {
        self.overloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overloads.is_empty()
    }
}

/// An ordered set of alternative types.
///
/// Members are stored as given: duplicates stay, and a nested union stays a
/// single member. Callers that want set semantics normalize before building.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnionType {
    pub types: Vec<Type>,
}

impl UnionType {
    pub fn new(types: Vec<Type>) -> Self {
        UnionType { types }
    }

    pub fn members(&self) -> &[Type] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_constructors_match_variants() {
        assert!(Type::unbound().is_unbound());
        assert!(Type::unknown().is_unknown());
        assert!(Type::never().is_never());
        assert!(Type::any().is_any());
        assert_eq!(Type::type_var(), Type::TypeVar);
        assert!(!Type::any().is_unknown());
    }

    #[test]
    fn categories() {
        assert_eq!(Type::Unbound.category(), TypeCategory::Unbound);
        assert_eq!(Type::TypeVar.category(), TypeCategory::TypeVar);
        assert_eq!(
            Type::from(ModuleType::new()).category(),
            TypeCategory::Module
        );
        assert_eq!(
            Type::from(FunctionType::new()).category(),
            TypeCategory::Function
        );
        assert_eq!(
            Type::from(OverloadedType::default()).category(),
            TypeCategory::Overloaded
        );
        assert_eq!(Type::union(vec![]).category(), TypeCategory::Union);
    }

    #[test]
    fn union_keeps_duplicates_and_nesting() {
        let inner = Type::union(vec![Type::Never, Type::Unknown]);
        let union = UnionType::new(vec![Type::Any, Type::Any, inner.clone()]);
        assert_eq!(union.len(), 3);
        assert_eq!(union.members()[2], inner);
        assert!(UnionType::default().is_empty());
    }

    #[test]
    fn overloads_count_duplicates() {
        let mut overloaded = OverloadedType::default();
        assert!(overloaded.is_empty());
        overloaded.push(FunctionType::named("test"));
        overloaded.push(FunctionType::named("test"));
        assert_eq!(overloaded.len(), 2);
        assert_eq!(overloaded.overloads()[0], overloaded.overloads()[1]);
    }

    #[test]
    fn module_builders() {
        let module = ModuleType::named("geometry").with_file_uri("/src/geometry.jac");
        assert_eq!(module.mod_name.as_deref(), Some("geometry"));
        assert_eq!(module.file_uri, Some(PathBuf::from("/src/geometry.jac")));
        assert_eq!(ModuleType::new(), ModuleType::default());
    }

    #[test]
    fn downcasts() {
        let func = Type::from(FunctionType::named("f"));
        assert_eq!(func.as_function().and_then(|f| f.name()), Some("f"));
        assert!(func.as_class().is_none());
        assert!(Type::Any.as_function().is_none());
    }

    #[test]
    fn category_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&TypeCategory::Overloaded).unwrap(),
            "\"Overloaded\""
        );
    }
}
