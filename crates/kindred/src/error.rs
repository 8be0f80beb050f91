//! # Error Types
//!
//! Dispatch failures are programmer errors: asking for a capability a type
//! never registered, registering two different bundles for the same type,
//! or finding an instance of the wrong concrete shape where the type-level
//! association promised another.
//!
//! Domain failures are *not* errors here — they travel as ordinary values
//! (`Either::Left`, `Maybe::Empty`) and are eliminated explicitly at call
//! sites. `DispatchError` is reserved for misuse of the dispatch core
//! itself, surfaced synchronously at the point of first use and never
//! retried.

use thiserror::Error;

/// Errors raised by the instance registry and dispatch resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Resolution failed: no instance of the capability is registered for
    /// the type, directly or through its declared ancestry.
    #[error("No {capability} instance registered for {brand}")]
    CapabilityNotFound {
        capability: &'static str,
        brand: &'static str,
    },

    /// A second, structurally different bundle was registered for an
    /// already-populated type. Fatal; never recovered.
    #[error("Conflicting {capability} registration for {brand}")]
    ConflictingInstance {
        brand: &'static str,
        capability: &'static str,
    },

    /// A resolved instance does not have the concrete type the brand
    /// declares for this capability.
    #[error("Instance type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}
