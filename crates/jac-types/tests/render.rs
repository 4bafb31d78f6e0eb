//! Integration tests for the canonical rendering of Jac types.
//!
//! The rendered text shows up in error messages and editor hovers, so every
//! kind is pinned to its exact output here.

use std::path::PathBuf;
use std::sync::Arc;

use jac_common::MemberScope;
use jac_types::{
    ClassDetailsShared, ClassType, FunctionType, ModuleType, OverloadedType, Parameter,
    ParameterCategory, Type, UnionType,
};

// ── Helpers ────────────────────────────────────────────────────────────

fn any_param(name: &str) -> Parameter {
    Parameter::new(name, ParameterCategory::Positional, Type::Any)
}

// ── Leaf Markers ───────────────────────────────────────────────────────

#[test]
fn test_unbound_type_str() {
    assert_eq!(Type::unbound().render(), "<Unbound>");
}

#[test]
fn test_unknown_type_str() {
    assert_eq!(Type::unknown().render(), "<Unknown>");
}

#[test]
fn test_never_type_str() {
    assert_eq!(Type::never().render(), "<Never>");
}

#[test]
fn test_any_type_str() {
    assert_eq!(Type::any().render(), "<Any>");
}

#[test]
fn test_type_var_type_str() {
    assert_eq!(Type::type_var().render(), "<TypeVar>");
}

// ── Modules ────────────────────────────────────────────────────────────

#[test]
fn test_module_type_str() {
    let named = ModuleType::named("test_module");
    assert_eq!(named.to_string(), "<module test_module>");

    let by_path = ModuleType::from_path(PathBuf::from("/path/to/module.jac"));
    assert_eq!(by_path.to_string(), "<module /path/to/module.jac>");

    assert_eq!(ModuleType::new().to_string(), "<module>");
}

#[test]
fn test_module_name_takes_precedence() {
    let module = ModuleType {
        mod_name: Some("pkg.mod".into()),
        file_uri: Some(PathBuf::from("/pkg/mod.jac")),
    };
    assert_eq!(Type::from(module).render(), "<module pkg.mod>");
}

// ── Functions ──────────────────────────────────────────────────────────

#[test]
fn test_function_no_parameters() {
    let func = FunctionType::named("test_func");
    assert_eq!(func.to_string(), "<function test_func()>");
}

#[test]
fn test_function_with_parameters() {
    let func = FunctionType::named("add")
        .with_parameters(vec![any_param("x"), any_param("y")])
        .with_return_type(Type::Any);
    assert_eq!(func.to_string(), "<function add(x: <Any>, y: <Any>) -> <Any>>");
}

#[test]
fn test_function_return_type_only() {
    let func = FunctionType::named("get_value").with_return_type(Type::Any);
    assert_eq!(func.to_string(), "<function get_value() -> <Any>>");
}

#[test]
fn test_function_parameters_without_return_type() {
    let func = FunctionType::named("log").with_parameters(vec![
        any_param("msg"),
        Parameter::new("rest", ParameterCategory::VarPositional, Type::Unknown),
    ]);
    assert_eq!(func.to_string(), "<function log(msg: <Any>, rest: <Unknown>)>");
}

#[test]
fn test_anonymous_function() {
    assert_eq!(
        Type::from(FunctionType::new()).render(),
        "<function <anonymous>()>"
    );
}

// ── Overloads ──────────────────────────────────────────────────────────

#[test]
fn test_overloaded_type_str() {
    assert_eq!(
        OverloadedType::default().to_string(),
        "<overload 0 overloads>"
    );

    let overloaded = OverloadedType::new(vec![
        FunctionType::named("test"),
        FunctionType::named("test"),
    ]);
    assert_eq!(overloaded.to_string(), "<overload 2 overloads>");
}

// ── Unions ─────────────────────────────────────────────────────────────

#[test]
fn test_empty_union() {
    assert_eq!(UnionType::new(vec![]).to_string(), "<Union>");
}

#[test]
fn test_union_keeps_duplicates() {
    let union = UnionType::new(vec![Type::Any, Type::Any]);
    assert_eq!(union.to_string(), "<Any> | <Any>");
}

#[test]
fn test_union_preserves_order() {
    let union = Type::union(vec![Type::Unknown, Type::Never, Type::Any]);
    assert_eq!(union.render(), "<Unknown> | <Never> | <Any>");
}

// ── Classes ────────────────────────────────────────────────────────────

#[test]
fn test_class_type_str() {
    let shared = ClassDetailsShared::new("TestClass", Arc::new(MemberScope::new())).unwrap();
    let class_type = ClassType::new(shared);
    assert_eq!(class_type.to_string(), "<class TestClass>");
    assert_eq!(
        Type::from(class_type.clone_as_instance()).render(),
        "<class TestClass>"
    );
}

// ── Mixed ──────────────────────────────────────────────────────────────

#[test]
fn test_rendering_is_idempotent() {
    let shared = ClassDetailsShared::new("Node", Arc::new(MemberScope::new())).unwrap();
    let node = Type::from(ClassType::new(shared).clone_as_instance());
    let ty = Type::from(
        FunctionType::named("visit")
            .with_parameter(Parameter::positional("node", node))
            .with_return_type(Type::union(vec![Type::Any, Type::Never])),
    );
    let first = ty.render();
    assert_eq!(first, ty.render());
    insta::assert_snapshot!(first, @"<function visit(node: <class Node>) -> <Any> | <Never>>");
}

#[test]
fn test_class_inside_union_and_overload() {
    let shared = ClassDetailsShared::new("Point", Arc::new(MemberScope::new())).unwrap();
    let point = Type::from(ClassType::new(shared));
    let union = Type::union(vec![point.clone(), Type::from(ModuleType::named("geo"))]);
    assert_eq!(union.render(), "<class Point> | <module geo>");

    let ctor = FunctionType::named("__init__").with_parameter(Parameter::positional("self", point));
    let overloaded = OverloadedType::new(vec![ctor.clone(), ctor]);
    assert_eq!(Type::from(overloaded).render(), "<overload 2 overloads>");
}
