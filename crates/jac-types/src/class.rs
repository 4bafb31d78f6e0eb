//! Class types and the metadata block they share.
//!
//! A [`ClassDetailsShared`] describes one class body: its name, its member
//! scope and its method resolution order. Any number of [`ClassType`]
//! values point at the same block (the class object, its instances, each
//! generic specialization), so a change to the block made while the class
//! is being analyzed is seen through all of them.
//!
//! ## Lifecycle
//!
//! - The block is created as soon as the class declaration is seen.
//! - Bases and the MRO are filled in while the class body is analyzed.
//! - [`ClassDetailsShared::seal`] freezes it. Later mutations fail with
//!   [`TypeError::SealedClass`], and readers no longer contend with a writer.

use std::fmt;
use std::sync::{Arc, Weak};

use jac_common::{DeclId, SymbolTable};
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::error::TypeError;
use crate::ty::Type;

/// The part of a class block that is filled in during analysis.
#[derive(Default)]
struct ClassState {
    /// Whether the MRO has been started. The class itself heads it
    /// implicitly and is not stored.
    linearized: bool,
    /// The MRO after the class itself, nearest ancestor first. Held strongly;
    /// the block itself is rejected here, and cyclic hierarchies never reach
    /// linearization.
    ancestors: Vec<Arc<ClassDetailsShared>>,
    /// Declared bases, in source order.
    base_classes: Vec<Type>,
    sealed: bool,
}

/// Metadata shared by every [`ClassType`] of one class body.
pub struct ClassDetailsShared {
    class_name: String,
    symbol_table: Arc<dyn SymbolTable>,
    /// Back-reference used to put the class itself at the head of its MRO.
    this: Weak<ClassDetailsShared>,
    state: RwLock<ClassState>,
}

impl ClassDetailsShared {
    /// Create the metadata block for a class body.
    ///
    /// Fails if `symbol_table` does not expose both the plain and the
    /// overload-aware name maps. The MRO starts out empty.
    pub fn new(
        class_name: impl Into<String>,
        symbol_table: Arc<dyn SymbolTable>,
    ) -> Result<Arc<Self>, TypeError> {
        let class_name = class_name.into();
        if let Some(capability) = symbol_table.missing_capability() {
            warn!(class = %class_name, %capability, "class scope rejected");
            return Err(TypeError::MissingScopeCapability {
                class_name,
                capability,
            });
        }
        trace!(class = %class_name, "class details created");
        Ok(Arc::new_cyclic(|this| ClassDetailsShared {
            class_name,
            symbol_table,
            this: this.clone(),
            state: RwLock::new(ClassState::default()),
        }))
    }

    /// Create the block with its MRO already known.
    ///
    /// `ancestors` excludes the class itself. An empty list leaves the MRO
    /// empty, as [`ClassDetailsShared::new`] does; otherwise the MRO is the
    /// new class followed by `ancestors`.
    pub fn with_mro(
        class_name: impl Into<String>,
        symbol_table: Arc<dyn SymbolTable>,
        ancestors: Vec<ClassType>,
    ) -> Result<Arc<Self>, TypeError> {
        let shared = Self::new(class_name, symbol_table)?;
        if !ancestors.is_empty() {
            let mut mro = Vec::with_capacity(ancestors.len() + 1);
            mro.push(ClassType::new(Arc::clone(&shared)));
            mro.extend(ancestors);
            shared.set_mro(mro)?;
        }
        Ok(shared)
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn symbol_table(&self) -> &dyn SymbolTable {
        self.symbol_table.as_ref()
    }

    /// Look up a member declared directly in the class body.
    pub fn lookup_symbol(&self, name: &str) -> Option<DeclId> {
        self.symbol_table.lookup(name)
    }

    /// Every declaration of `name` in the class body, oldest first.
    pub fn lookup_overloads(&self, name: &str) -> Vec<DeclId> {
        self.symbol_table.lookup_overloads(name).to_vec()
    }

    /// The current MRO, the class itself first. Empty until it is set.
    pub fn mro(&self) -> Vec<ClassType> {
        let state = self.state.read();
        if !state.linearized {
            return Vec::new();
        }
        self.this
            .upgrade()
            .into_iter()
            .chain(state.ancestors.iter().cloned())
            .map(ClassType::new)
            .collect()
    }

    pub fn mro_len(&self) -> usize {
        let state = self.state.read();
        if state.linearized {
            state.ancestors.len() + 1
        } else {
            0
        }
    }

    /// Replace the MRO.
    ///
    /// A non-empty MRO must start with this class, and the class must not
    /// appear again further down. An empty one resets the MRO.
    pub fn set_mro(&self, mro: Vec<ClassType>) -> Result<(), TypeError> {
        let mut state = self.state.write();
        self.ensure_unsealed(&state)?;
        let linearized = !mro.is_empty();
        let mut entries = mro.into_iter();
        let mut ancestors = Vec::new();
        if let Some(first) = entries.next() {
            self.check_mro_head(&first)?;
            for class in entries {
                self.check_ancestor(&class)?;
                ancestors.push(class.shared);
            }
        }
        debug!(class = %self.class_name, mro_len = ancestors.len() + usize::from(linearized), "mro set");
        state.linearized = linearized;
        state.ancestors = ancestors;
        Ok(())
    }

    /// Append one entry to the MRO. The first entry must be this class.
    pub fn push_mro(&self, class: &ClassType) -> Result<(), TypeError> {
        let mut state = self.state.write();
        self.ensure_unsealed(&state)?;
        if state.linearized {
            self.check_ancestor(class)?;
            trace!(class = %self.class_name, ancestor = %class.class_name(), "mro entry added");
            state.ancestors.push(Arc::clone(&class.shared));
        } else {
            self.check_mro_head(class)?;
            state.linearized = true;
        }
        Ok(())
    }

    pub fn base_classes(&self) -> Vec<Type> {
        self.state.read().base_classes.clone()
    }

    pub fn add_base_class(&self, base: Type) -> Result<(), TypeError> {
        let mut state = self.state.write();
        self.ensure_unsealed(&state)?;
        trace!(class = %self.class_name, base = %base, "base class added");
        state.base_classes.push(base);
        Ok(())
    }

    /// Freeze the block. Sealing twice is a no-op.
    ///
    /// Takes the same lock as the mutators, so no write lands after this
    /// returns.
    pub fn seal(&self) {
        let mut state = self.state.write();
        if !state.sealed {
            state.sealed = true;
            debug!(
                class = %self.class_name,
                mro_len = state.ancestors.len() + usize::from(state.linearized),
                "class sealed"
            );
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.state.read().sealed
    }

    fn ensure_unsealed(&self, state: &ClassState) -> Result<(), TypeError> {
        if state.sealed {
            warn!(class = %self.class_name, "mutation of sealed class rejected");
            return Err(TypeError::SealedClass {
                class_name: self.class_name.clone(),
            });
        }
        Ok(())
    }

    fn is_self(&self, class: &ClassType) -> bool {
        std::ptr::eq(Arc::as_ptr(&class.shared), self)
    }

    fn check_mro_head(&self, first: &ClassType) -> Result<(), TypeError> {
        if self.is_self(first) {
            Ok(())
        } else {
            Err(TypeError::MroOrder {
                class_name: self.class_name.clone(),
                found: first.class_name().to_string(),
            })
        }
    }

    fn check_ancestor(&self, class: &ClassType) -> Result<(), TypeError> {
        if self.is_self(class) {
            Err(TypeError::MroCycle {
                class_name: self.class_name.clone(),
            })
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for ClassDetailsShared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // MRO entries are listed by name; the first one is this block.
        let mro: Vec<String> = self
            .mro()
            .iter()
            .map(|c| c.class_name().to_string())
            .collect();
        f.debug_struct("ClassDetailsShared")
            .field("class_name", &self.class_name)
            .field("mro", &mro)
            .field("sealed", &self.is_sealed())
            .finish_non_exhaustive()
    }
}

/// Whether a class type denotes the class object or a value of the class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassFlavor {
    /// The class itself, which can be called to make instances.
    Instantiable,
    /// An instance of the class.
    Instance,
}

/// A reference to a class body.
///
/// Equality is identity: two class types are equal when they share the same
/// metadata block and have the same flavor.
#[derive(Clone)]
pub struct ClassType {
    shared: Arc<ClassDetailsShared>,
    flavor: ClassFlavor,
}

impl ClassType {
    /// The class object for `shared`.
    pub fn new(shared: Arc<ClassDetailsShared>) -> Self {
        ClassType {
            shared,
            flavor: ClassFlavor::Instantiable,
        }
    }

    pub fn shared(&self) -> &Arc<ClassDetailsShared> {
        &self.shared
    }

    pub fn class_name(&self) -> &str {
        self.shared.class_name()
    }

    pub fn flavor(&self) -> ClassFlavor {
        self.flavor
    }

    pub fn is_instantiable(&self) -> bool {
        self.flavor == ClassFlavor::Instantiable
    }

    pub fn is_instance(&self) -> bool {
        self.flavor == ClassFlavor::Instance
    }

    /// The instance type of this class, sharing the same metadata.
    pub fn clone_as_instance(&self) -> Self {
        ClassType {
            shared: Arc::clone(&self.shared),
            flavor: ClassFlavor::Instance,
        }
    }

    /// The class object of this class, sharing the same metadata.
    pub fn clone_as_instantiable(&self) -> Self {
        ClassType {
            shared: Arc::clone(&self.shared),
            flavor: ClassFlavor::Instantiable,
        }
    }

    /// Whether both types come from the same class body, whatever their
    /// flavor or specialization.
    pub fn is_same_generic_class(&self, other: &ClassType) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Whether the class is declared under `name`.
    ///
    /// Only the bare name is compared; a user class named `int` matches
    /// `"int"` too, so telling builtins apart also needs the defining module.
    pub fn has_name(&self, name: &str) -> bool {
        self.class_name() == name
    }
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_generic_class(other) && self.flavor == other.flavor
    }
}

impl fmt::Debug for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassType")
            .field("class_name", &self.class_name())
            .field("flavor", &self.flavor)
            .finish()
    }
}
