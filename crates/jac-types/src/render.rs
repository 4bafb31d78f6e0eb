//! Canonical text of every type kind.
//!
//! This is the form used in diagnostics and hover text, so it is a stable
//! contract:
//!
//! ```text
//! <Unbound>  <Unknown>  <Never>  <Any>  <TypeVar>
//! <module>   <module NAME>   <module PATH>
//! <function NAME(p: T, q: U) -> R>      (name defaults to <anonymous>)
//! <overload N overloads>
//! T | U | V                             (empty union: <Union>)
//! <class NAME>
//! ```
//!
//! Rendering reads only immutable data and never fails.

use std::fmt;

use crate::class::ClassType;
use crate::function::{FunctionType, Parameter};
use crate::ty::{ModuleType, OverloadedType, Type, UnionType};

impl Type {
    /// The canonical text of this type.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unbound => write!(f, "<Unbound>"),
            Type::Unknown => write!(f, "<Unknown>"),
            Type::Never => write!(f, "<Never>"),
            Type::Any => write!(f, "<Any>"),
            Type::TypeVar => write!(f, "<TypeVar>"),
            Type::Module(m) => write!(f, "{}", m),
            Type::Function(func) => write!(f, "{}", func),
            Type::Overloaded(o) => write!(f, "{}", o),
            Type::Union(u) => write!(f, "{}", u),
            Type::Class(c) => write!(f, "{}", c),
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.mod_name {
            write!(f, "<module {}>", name)
        } else if let Some(path) = &self.file_uri {
            write!(f, "<module {}>", path.display())
        } else {
            write!(f, "<module>")
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.param_type)
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}(", self.name().unwrap_or("<anonymous>"))?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ")")?;
        if let Some(ret) = &self.return_type {
            write!(f, " -> {}", ret)?;
        }
        write!(f, ">")
    }
}

impl fmt::Display for OverloadedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<overload {} overloads>", self.len())
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.types.is_empty() {
            return write!(f, "<Union>");
        }
        for (i, t) in self.types.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class {}>", self.class_name())
    }
}
