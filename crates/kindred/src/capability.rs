//! # Capability Identity
//!
//! A capability is a named, versionless contract (see [`crate::contracts`]
//! for the contracts themselves). The registry, the error messages, and
//! the untyped query surface all need to talk about capabilities as
//! *values*, so each contract gets an uninhabited marker type here and an
//! erased [`CapabilityRef`] handle built from it.
//!
//! ```rust
//! use kindred::capability::{Capability, CapabilityRef, MonadCap};
//!
//! assert_eq!(MonadCap::name(), "Monad");
//! let r = CapabilityRef::of::<MonadCap>();
//! assert_eq!(r.name(), "Monad");
//! ```

use std::any::TypeId;
use std::fmt;

/// A named capability contract, identified by its marker type.
pub trait Capability: 'static {
    /// Human-readable name for error messages and traces.
    fn name() -> &'static str;
}

macro_rules! capability_markers {
    ($($(#[$doc:meta])* $marker:ident => $name:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug)]
            pub enum $marker {}

            impl Capability for $marker {
                fn name() -> &'static str {
                    $name
                }
            }
        )*
    };
}

capability_markers! {
    /// Sequencing: `pure` and `flat_map`.
    MonadCap => "Monad",
    /// Lifting and mapping: `pure` and `map`.
    ApplicativeCap => "Applicative",
    /// Container-level combination: `empty` and `combine`.
    MonoidCap => "Monoid",
    /// Presence: `to_maybe`, `present`, `to_either`.
    OptionalCap => "Optional",
    /// Reduction: `fold_left` and the folds derived from it.
    FoldableCap => "Foldable",
    /// Effectful traversal into a target applicative.
    TraverseCap => "Traverse",
    /// Pairing: `zip2` and the operations derived from it.
    ZipCap => "Zip",
    /// Side effects that leave the container unchanged.
    TapCap => "Tap",
}

/// An erased capability handle: identity plus display name.
///
/// Used by the untyped resolution surface, where the capability being
/// asked about is runtime data rather than a type parameter.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilityRef {
    pub(crate) id: TypeId,
    name: &'static str,
}

impl CapabilityRef {
    pub fn of<C: Capability>() -> Self {
        Self {
            id: TypeId::of::<C>(),
            name: C::name(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for CapabilityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CapabilityRef").field(&self.name).finish()
    }
}

impl fmt::Display for CapabilityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
