//! Scope lookup interface shared between the analyzer and the type system.
//!
//! The analyzer owns the real scope tree. Class types only need to look
//! names up in a class body, so they depend on the [`SymbolTable`] trait
//! rather than on any concrete scope node. [`MemberScope`] is a small
//! map-backed implementation for synthetic classes and tests.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Handle to a declaration owned by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DeclId(pub u32);

/// Name to the declaration that currently binds it.
pub type NameMap = FxHashMap<String, DeclId>;

/// Name to every declaration bound under it, in declaration order.
pub type OverloadMap = FxHashMap<String, Vec<DeclId>>;

/// One piece of the lookup surface a class scope must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScopeCapability {
    /// The plain name -> declaration map.
    NamesInScope,
    /// The overload-aware name -> declarations map.
    NamesInScopeOverload,
}

impl fmt::Display for ScopeCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamesInScope => write!(f, "`names_in_scope`"),
            Self::NamesInScopeOverload => write!(f, "`names_in_scope_overload`"),
        }
    }
}

/// The lookup surface of a scope, as seen by the type system.
///
/// Both maps are optional at the trait level because not every scope node
/// the analyzer hands around carries them. A scope used as a class body must
/// return `Some` from both; see [`SymbolTable::missing_capability`].
pub trait SymbolTable: fmt::Debug + Send + Sync {
    /// The name -> declaration map, if this scope has one.
    fn names_in_scope(&self) -> Option<&NameMap> {
        None
    }

    /// The overload-aware name -> declarations map, if this scope has one.
    fn names_in_scope_overload(&self) -> Option<&OverloadMap> {
        None
    }

    /// The first capability this scope lacks, or `None` if it is complete.
    fn missing_capability(&self) -> Option<ScopeCapability> {
        if self.names_in_scope().is_none() {
            Some(ScopeCapability::NamesInScope)
        } else if self.names_in_scope_overload().is_none() {
            Some(ScopeCapability::NamesInScopeOverload)
        } else {
            None
        }
    }

    /// Look up the declaration currently bound to `name`.
    fn lookup(&self, name: &str) -> Option<DeclId> {
        self.names_in_scope()?.get(name).copied()
    }

    /// All declarations bound to `name`, oldest first. Empty if none.
    fn lookup_overloads(&self, name: &str) -> &[DeclId] {
        self.names_in_scope_overload()
            .and_then(|map| map.get(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// An in-memory class body scope.
///
/// Redeclaring a name rebinds it in the plain map and appends to its
/// overload list, so the plain map always reflects the latest declaration.
#[derive(Debug, Clone, Default)]
pub struct MemberScope {
    names: NameMap,
    overloads: OverloadMap,
}

impl MemberScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` as `decl`.
    ///
    /// Returns the declaration previously bound to `name`, if any.
    pub fn declare(&mut self, name: impl Into<String>, decl: DeclId) -> Option<DeclId> {
        let name = name.into();
        self.overloads.entry(name.clone()).or_default().push(decl);
        self.names.insert(name, decl)
    }

    /// Number of distinct names in the scope.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl SymbolTable for MemberScope {
    fn names_in_scope(&self) -> Option<&NameMap> {
        Some(&self.names)
    }

    fn names_in_scope_overload(&self) -> Option<&OverloadMap> {
        Some(&self.overloads)
    }
}
