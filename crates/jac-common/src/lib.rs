//! Shared types for the Jac compiler.
//!
//! Holds the pieces that several compiler phases agree on without owning:
//! declaration handles and the lookup surface a scope must expose to the
//! type system.

pub mod scope;

pub use scope::{DeclId, MemberScope, NameMap, OverloadMap, ScopeCapability, SymbolTable};
