//! # Maybe - Optional Values
//!
//! `Maybe<A>` is `Just(a)` or `Empty`, terminal once constructed. It is
//! both a container in its own right and the projection target of the
//! [`crate::contracts::Optional`] capability: anything presence-like can
//! answer "give me your value as a `Maybe`".
//!
//! Named `Maybe` because `Option` would collide with the standard
//! library.
//!
//! ## Example
//!
//! ```rust
//! use kindred::maybe::Maybe;
//!
//! let found = Maybe::Just(5).filter(|n| *n > 3);
//! assert_eq!(found, Maybe::Just(5));
//!
//! let nothing: Maybe<i64> = Maybe::Just(2).filter(|n| *n > 3);
//! assert_eq!(nothing, Maybe::Empty);
//!
//! assert_eq!(nothing.to_either("missing"), kindred::either::Either::Left("missing"));
//! ```

use std::fmt;

use crate::capability::{
    ApplicativeCap, FoldableCap, MonadCap, MonoidCap, OptionalCap, TapCap, TraverseCap, ZipCap,
};
use crate::contracts::{Applicative, Foldable, Monad, Monoid, Optional, Traverse, Zip};
use crate::either::Either;
use crate::kind::{Branded, Kind, Of};
use crate::list::List;
use crate::registry::{
    HasApplicative, HasFoldable, HasMonad, HasMonoid, HasOptional, HasTap, HasTraverse, HasZip,
    InstanceBundle, Instances,
};

/// An optional value: `Just(a)` or `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<A> {
    Just(A),
    Empty,
}

use self::Maybe::{Empty, Just};

impl<A> Maybe<A> {
    /// Wrap a value that is definitely present.
    pub fn just(a: A) -> Self {
        Just(a)
    }

    pub fn empty() -> Self {
        Empty
    }

    /// Treat Rust's native "no value" as `Empty`.
    pub fn from_option(opt: Option<A>) -> Self {
        match opt {
            Some(a) => Just(a),
            None => Empty,
        }
    }

    /// Treat a fallible call's failure as `Empty` rather than
    /// propagating it. The error value is discarded.
    pub fn from_result<E>(result: Result<A, E>) -> Self {
        match result {
            Ok(a) => Just(a),
            Err(_) => Empty,
        }
    }

    pub fn present(&self) -> bool {
        matches!(self, Just(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    /// The universal eliminator; everything else routes through a match
    /// equivalent to this.
    pub fn cata<B>(self, on_empty: impl FnOnce() -> B, on_just: impl FnOnce(A) -> B) -> B {
        match self {
            Just(a) => on_just(a),
            Empty => on_empty(),
        }
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Maybe<B> {
        match self {
            Just(a) => Just(f(a)),
            Empty => Empty,
        }
    }

    pub fn flat_map<B>(self, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
        match self {
            Just(a) => f(a),
            Empty => Empty,
        }
    }

    /// Keep `Just` only if the predicate holds.
    pub fn filter(self, pred: impl FnOnce(&A) -> bool) -> Self {
        match self {
            Just(a) if pred(&a) => Just(a),
            _ => Empty,
        }
    }

    pub fn exists(&self, pred: impl FnOnce(&A) -> bool) -> bool {
        match self {
            Just(a) => pred(a),
            Empty => false,
        }
    }

    pub fn or_else(self, fallback: impl FnOnce() -> Maybe<A>) -> Maybe<A> {
        match self {
            Just(a) => Just(a),
            Empty => fallback(),
        }
    }

    pub fn get_or_else(self, default: impl FnOnce() -> A) -> A {
        self.cata(default, |a| a)
    }

    /// The value, or the supplied error when `Empty`.
    pub fn get_or_raise<E>(self, err: impl FnOnce() -> E) -> Result<A, E> {
        match self {
            Just(a) => Ok(a),
            Empty => Err(err()),
        }
    }

    /// Zero-or-one-element sequence.
    pub fn to_list(self) -> List<A> {
        match self {
            Just(a) => List::of([a]),
            Empty => List::new(),
        }
    }

    /// Present values go `Right`; absence becomes `Left(left)`.
    pub fn to_either<L>(self, left: L) -> Either<L, A> {
        match self {
            Just(a) => Either::Right(a),
            Empty => Either::Left(left),
        }
    }

    pub fn to_option(self) -> Option<A> {
        match self {
            Just(a) => Some(a),
            Empty => None,
        }
    }

    pub fn as_ref(&self) -> Maybe<&A> {
        match self {
            Just(a) => Just(a),
            Empty => Empty,
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(opt: Option<A>) -> Self {
        Maybe::from_option(opt)
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Just(a) => write!(f, "Just({})", a),
            Empty => write!(f, "Empty"),
        }
    }
}

// ============================================================================
// Brand and capability instances
// ============================================================================

/// The `Maybe` family brand.
#[derive(Debug)]
pub enum MaybeKind {}

impl Kind for MaybeKind {
    type Of<A> = Maybe<A>;

    fn name() -> &'static str {
        "Maybe"
    }
}

impl<A: 'static> Branded for Maybe<A> {
    type Brand = MaybeKind;
    type Elem = A;

    fn into_of(self) -> Of<MaybeKind, A> {
        self
    }

    fn from_of(of: Of<MaybeKind, A>) -> Self {
        of
    }
}

/// `Monad` instance: `pure` is `Just`, `flat_map` short-circuits `Empty`.
#[derive(Debug, Clone, Copy)]
pub struct MaybeMonad;

impl Monad<MaybeKind> for MaybeMonad {
    fn pure<A>(&self, a: A) -> Maybe<A> {
        Just(a)
    }

    fn flat_map<A, B>(&self, fa: Maybe<A>, f: impl FnMut(A) -> Maybe<B>) -> Maybe<B> {
        fa.flat_map(f)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaybeApplicative;

impl Applicative<MaybeKind> for MaybeApplicative {
    fn pure<A>(&self, a: A) -> Maybe<A> {
        Just(a)
    }

    fn map<A, B>(&self, fa: Maybe<A>, f: impl FnMut(A) -> B) -> Maybe<B> {
        fa.map(f)
    }
}

/// First-`Just`-wins monoid with `Empty` as identity.
#[derive(Debug, Clone, Copy)]
pub struct MaybeMonoid;

impl Monoid<MaybeKind> for MaybeMonoid {
    fn empty<A>(&self) -> Maybe<A> {
        Empty
    }

    fn combine<A>(&self, left: Maybe<A>, right: Maybe<A>) -> Maybe<A> {
        left.or_else(|| right)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaybeOptional;

impl Optional<MaybeKind> for MaybeOptional {
    fn to_maybe<A>(&self, fa: Maybe<A>) -> Maybe<A> {
        fa
    }

    fn present<A>(&self, fa: &Maybe<A>) -> bool {
        fa.present()
    }
}

/// `Foldable` instance; the generic fold defaults specialize to
/// zero-or-one-element semantics, and the single-element shortcuts
/// override them without changing what they return.
#[derive(Debug, Clone, Copy)]
pub struct MaybeFoldable;

impl Foldable<MaybeKind> for MaybeFoldable {
    fn fold_left<A, B>(&self, fa: Maybe<A>, z: B, mut f: impl FnMut(B, A) -> B) -> B {
        match fa {
            Just(a) => f(z, a),
            Empty => z,
        }
    }

    fn find<A>(&self, fa: Maybe<A>, pred: impl FnMut(&A) -> bool) -> Maybe<A> {
        let mut pred = pred;
        fa.filter(|a| pred(a))
    }

    fn filter<A>(
        &self,
        fa: Maybe<A>,
        pred: impl FnMut(&A) -> bool,
        _monoid: &impl Monoid<MaybeKind>,
        _ap: &impl Applicative<MaybeKind>,
    ) -> Maybe<A> {
        let mut pred = pred;
        fa.filter(|a| pred(a))
    }
}

/// `Traverse` instance: lift the contained value into the target
/// applicative, short-circuiting `Empty` to `pure(Empty)`.
#[derive(Debug, Clone, Copy)]
pub struct MaybeTraverse;

impl Traverse<MaybeKind> for MaybeTraverse {
    fn traverse<A, B, G: Kind>(
        &self,
        fa: Maybe<A>,
        mut f: impl FnMut(A) -> Of<G, B>,
        ap: &impl Applicative<G>,
    ) -> Of<G, Maybe<B>> {
        match fa {
            Just(a) => ap.map(f(a), Just),
            Empty => ap.pure(Empty),
        }
    }
}

/// `Zip` instance: both sides must be `Just`.
#[derive(Debug, Clone, Copy)]
pub struct MaybeZip;

impl Zip<MaybeKind> for MaybeZip {
    fn zip2<A, B>(&self, fa: Maybe<A>, fb: Maybe<B>) -> Maybe<(A, B)> {
        match (fa, fb) {
            (Just(a), Just(b)) => Just((a, b)),
            _ => Empty,
        }
    }
}

impl Instances for MaybeKind {
    fn bundle() -> InstanceBundle {
        InstanceBundle::new()
            .with::<MonadCap, _>(MaybeMonad)
            .with::<ApplicativeCap, _>(MaybeApplicative)
            .with::<MonoidCap, _>(MaybeMonoid)
            .with::<OptionalCap, _>(MaybeOptional)
            .with::<FoldableCap, _>(MaybeFoldable)
            .with::<TraverseCap, _>(MaybeTraverse)
            .with::<ZipCap, _>(MaybeZip)
            .with::<TapCap, _>(MaybeMonad)
    }
}

impl HasMonad for MaybeKind {
    type MonadI = MaybeMonad;
}
impl HasApplicative for MaybeKind {
    type ApplicativeI = MaybeApplicative;
}
impl HasMonoid for MaybeKind {
    type MonoidI = MaybeMonoid;
}
impl HasOptional for MaybeKind {
    type OptionalI = MaybeOptional;
}
impl HasFoldable for MaybeKind {
    type FoldableI = MaybeFoldable;
}
impl HasTraverse for MaybeKind {
    type TraverseI = MaybeTraverse;
}
impl HasZip for MaybeKind {
    type ZipI = MaybeZip;
}
impl HasTap for MaybeKind {
    type TapI = MaybeMonad;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result_discards_errors() {
        let ok: Result<i64, &str> = Ok(3);
        let err: Result<i64, &str> = Err("boom");
        assert_eq!(Maybe::from_result(ok), Just(3));
        assert_eq!(Maybe::from_result(err), Empty);
    }

    #[test]
    fn cata_eliminates_both_states() {
        assert_eq!(Just(2).cata(|| 0, |n| n * 10), 20);
        assert_eq!(Maybe::<i64>::Empty.cata(|| 0, |n| n * 10), 0);
    }

    #[test]
    fn or_else_prefers_the_first_just() {
        assert_eq!(Just(1).or_else(|| Just(2)), Just(1));
        assert_eq!(Empty.or_else(|| Just(2)), Just(2));
    }

    #[test]
    fn get_or_raise_surfaces_the_supplied_error() {
        assert_eq!(Just(1).get_or_raise(|| "missing"), Ok(1));
        assert_eq!(Maybe::<i64>::Empty.get_or_raise(|| "missing"), Err("missing"));
    }

    #[test]
    fn to_list_has_zero_or_one_elements() {
        assert_eq!(Just(7).to_list(), List::of([7]));
        assert_eq!(Maybe::<i64>::Empty.to_list(), List::new());
    }

    #[test]
    fn traverse_short_circuits_empty() {
        let half = |n: i64| {
            if n % 2 == 0 {
                Just(n / 2)
            } else {
                Empty
            }
        };
        let t = MaybeTraverse;
        assert_eq!(t.traverse(Just(4), half, &MaybeApplicative), Just(Just(2)));
        assert_eq!(t.traverse(Just(3), half, &MaybeApplicative), Empty);
        assert_eq!(
            t.traverse(Maybe::<i64>::Empty, half, &MaybeApplicative),
            Just(Empty)
        );
    }

    #[test]
    fn display_matches_construction() {
        assert_eq!(Just(5).to_string(), "Just(5)");
        assert_eq!(Maybe::<i64>::Empty.to_string(), "Empty");
    }
}
