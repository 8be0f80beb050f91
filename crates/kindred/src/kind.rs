//! # Kinds - Container Families as Types
//!
//! Rust has no higher-kinded types: we can implement a trait for
//! `Maybe<i64>` but not for the partially applied `Maybe`. Each container
//! family is therefore represented by an uninhabited *brand* type carrying
//! a generic associated type `Of<A>` — the family applied to an element
//! type. Capability contracts and the instance registry are keyed on
//! brands, never on fully applied containers.
//!
//! ## Example
//!
//! ```rust
//! use kindred::kind::{Branded, Kind};
//! use kindred::maybe::{Maybe, MaybeKind};
//!
//! // The brand stands in for the unapplied `Maybe`.
//! let fa: <MaybeKind as Kind>::Of<i64> = Maybe::Just(1);
//!
//! // And every concrete container knows its brand.
//! fn brand_name<V: Branded>(_: &V) -> &'static str {
//!     <V::Brand as Kind>::name()
//! }
//! assert_eq!(brand_name(&fa), "Maybe");
//! ```

/// A container family: `Maybe`, `Either<L, _>`, `List`.
///
/// Implemented by uninhabited brand types, because a trait cannot be
/// implemented for a partially applied type directly.
pub trait Kind: Sized + 'static {
    /// The family applied to element type `A`.
    type Of<A>;

    /// Human-readable family name for error messages and traces.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shorthand for a brand applied to an element type.
pub type Of<K, A> = <K as Kind>::Of<A>;

/// Links a concrete container value type back to its brand.
///
/// This is what lets generic operations be called directly on values:
/// `ops::tap(&reg, Maybe::Just(1), ..)` infers the brand from the value
/// instead of requiring a turbofished brand parameter.
///
/// The two conversions are identities for every lawful implementation
/// (`Of<Brand, Elem>` *is* `Self`); they exist so generic code can move
/// between the two spellings of the same type.
pub trait Branded: Sized + 'static {
    /// The container family this value belongs to.
    type Brand: Kind;
    /// The element type held by this value.
    type Elem;

    fn into_of(self) -> Of<Self::Brand, Self::Elem>;
    fn from_of(of: Of<Self::Brand, Self::Elem>) -> Self;
}
