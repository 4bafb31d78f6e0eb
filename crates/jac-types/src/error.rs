//! Errors raised while building class metadata.
//!
//! Every other type kind is infallible to construct, and rendering never
//! fails, so these are the only errors the crate produces.

use jac_common::ScopeCapability;

/// A failure while constructing or populating class metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The scope handed in as a class body lacks part of the lookup surface.
    #[error("scope for class `{class_name}` does not provide {capability}")]
    MissingScopeCapability {
        class_name: String,
        capability: ScopeCapability,
    },

    /// The class was already sealed when a mutation was attempted.
    #[error("class `{class_name}` is sealed and can no longer be modified")]
    SealedClass { class_name: String },

    /// An MRO was supplied whose first entry is not the class itself.
    #[error("MRO of class `{class_name}` must start with the class itself, found `{found}`")]
    MroOrder { class_name: String, found: String },

    /// The class was listed again among its own ancestors.
    #[error("class `{class_name}` appears among its own ancestors")]
    MroCycle { class_name: String },
}
