//! # Kindred - Capability Dispatch for Container Families
//!
//! A generic polymorphism engine: a closed set of behavioral capabilities
//! (`Monad`, `Foldable`, `Optional`, `Traverse`, `Zip`, `Tap`, plus the
//! `Applicative`/`Monoid` dependencies they lean on) that container
//! families opt into, and the algebraic container types built on top:
//!
//! - **Kinds**: brand types standing in for unapplied container families
//!   (`kind`)
//! - **Capabilities**: named contracts with required and derived
//!   operations (`capability`, `contracts`)
//! - **Dispatch**: a registry resolving `(capability, type)` to exactly
//!   one instance, with lazy memoize-once population, ancestry fallback
//!   and a write-once binding cache (`registry`)
//! - **Containers**: `Maybe`, `Either`, `List` (`maybe`, `either`,
//!   `list`)
//! - **Generic operations**: `zip`, `unzip`, `apzip`, `tap` and friends,
//!   written once against capabilities (`ops`)
//!
//! ## Design Philosophy
//!
//! Capabilities resolve at the type level, never through inheritance:
//! containers are plain sum/sequence types eliminated by matching, and
//! behavior is attached from outside by registering instances. Where
//! Rust's trait system can check a capability at compile time, it does;
//! the registry carries the runtime half — which capabilities a type
//! actually registered, singleton instance identity, and eager
//! `CapabilityNotFound` errors for everything else.
//!
//! ## Example
//!
//! ```rust
//! use kindred::{ops, InstanceRegistry, List, Maybe};
//!
//! let reg = InstanceRegistry::new();
//!
//! let scores = List::of([("ada", 3), ("grace", 5)]);
//! let (names, points) = ops::unzip(&reg, scores).unwrap();
//! assert_eq!(names, List::of(["ada", "grace"]));
//!
//! let best = points.fold_left(Maybe::Empty, |acc: Maybe<i32>, n| {
//!     acc.filter(|m| *m >= n).or_else(|| Maybe::Just(n))
//! });
//! assert_eq!(best, Maybe::Just(5));
//! ```

pub mod capability;
pub mod contracts;
pub mod either;
pub mod error;
pub mod kind;
pub mod list;
pub mod maybe;
pub mod ops;
pub mod registry;

// Re-export key types at crate root for convenience
pub use capability::{
    ApplicativeCap, Capability, CapabilityRef, FoldableCap, MonadCap, MonoidCap, OptionalCap,
    TapCap, TraverseCap, ZipCap,
};
pub use contracts::{Applicative, Foldable, Monad, Monoid, Optional, Tap, Traverse, Zip};
pub use either::{Either, EitherKind};
pub use error::DispatchError;
pub use kind::{Branded, Kind, Of};
pub use list::{List, ListKind};
pub use maybe::{Maybe, MaybeKind};
pub use registry::{BrandRef, InstanceBundle, InstanceRegistry, Instances};
