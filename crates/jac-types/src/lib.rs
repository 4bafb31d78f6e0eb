//! Jac type representation.
//!
//! This crate defines the values the semantic analyzer assigns to
//! declarations and expressions, and the canonical text those values render
//! to. It does no inference, subtype checking or overload resolution; those
//! phases consume the shapes defined here.
//!
//! # Architecture
//!
//! - [`ty`]: the `Type` enum, leaf markers, module, overload and union types
//! - [`function`]: parameters and function signatures
//! - [`class`]: class types and their shared, sealable metadata
//! - [`render`]: canonical `Display` form of every kind
//! - [`error`]: failures when building class metadata

pub mod class;
pub mod error;
pub mod function;
pub mod render;
pub mod ty;

pub use class::{ClassDetailsShared, ClassFlavor, ClassType};
pub use error::TypeError;
pub use function::{FunctionType, Parameter, ParameterCategory};
pub use ty::{ModuleType, OverloadedType, Type, TypeCategory, UnionType};
