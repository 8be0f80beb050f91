//! # Capability Contracts
//!
//! One trait per capability, generic over the container brand. Methods
//! without bodies are the required operations every instance must supply;
//! provided methods are default operations derivable purely from the
//! required ones. Instances may override a default with a shortcut, but an
//! override must not change observable semantics — this is a design
//! invariant, not mechanically enforced.
//!
//! A default that needs a *sibling* capability for the same brand takes
//! that instance as a parameter (`Zip::unzip` folds through `Foldable` +
//! `Monoid` + `Applicative`). The resolution-driven forms of these
//! operations live in [`crate::ops`], which looks the collaborators up in
//! an [`crate::registry::InstanceRegistry`] and delegates here.
//!
//! ## Example
//!
//! ```rust
//! use kindred::contracts::Monad;
//! use kindred::maybe::{Maybe, MaybeMonad};
//!
//! // `map` is derived from the required `pure` + `flat_map`.
//! let doubled = MaybeMonad.map(Maybe::Just(21), |n| n * 2);
//! assert_eq!(doubled, Maybe::Just(42));
//! ```

use crate::either::Either;
use crate::kind::{Kind, Of};
use crate::maybe::Maybe;

/// Sequencing of computations within a container family.
pub trait Monad<K: Kind> {
    /// Lift a bare value into the container.
    fn pure<A>(&self, a: A) -> Of<K, A>;

    /// Sequence: feed each held value to `f` and flatten the result.
    fn flat_map<A, B>(&self, fa: Of<K, A>, f: impl FnMut(A) -> Of<K, B>) -> Of<K, B>;

    /// Derived: `flat_map` into `pure`.
    fn map<A, B>(&self, fa: Of<K, A>, mut f: impl FnMut(A) -> B) -> Of<K, B> {
        self.flat_map(fa, |a| self.pure(f(a)))
    }
}

/// Lifting and structure-preserving mapping.
///
/// Declared dependency of [`Traverse`] (the target context) and of every
/// fold that rebuilds a container (`filter`, `with_index`, `unzip`).
pub trait Applicative<K: Kind> {
    fn pure<A>(&self, a: A) -> Of<K, A>;

    fn map<A, B>(&self, fa: Of<K, A>, f: impl FnMut(A) -> B) -> Of<K, B>;
}

/// Container-level combination, polymorphic in the element type.
///
/// `empty` is the identity of `combine`; together they let folds rebuild
/// a container one element at a time.
pub trait Monoid<K: Kind> {
    fn empty<A>(&self) -> Of<K, A>;

    fn combine<A>(&self, left: Of<K, A>, right: Of<K, A>) -> Of<K, A>;
}

/// Presence: containers that hold at most one meaningful value.
pub trait Optional<K: Kind> {
    /// Project onto `Maybe`, discarding any failure payload.
    fn to_maybe<A>(&self, fa: Of<K, A>) -> Maybe<A>;

    /// Whether a value is present.
    fn present<A>(&self, fa: &Of<K, A>) -> bool;

    /// Derived: present values go `Right`, absence becomes `Left(left)`.
    fn to_either<A, L>(&self, fa: Of<K, A>, left: L) -> Either<L, A> {
        match self.to_maybe(fa) {
            Maybe::Just(a) => Either::Right(a),
            Maybe::Empty => Either::Left(left),
        }
    }
}

/// Reduction of a container to a single accumulated value.
///
/// Everything here is a left fold. `find`, `find_map` and `index_where`
/// reduce to a `Maybe` and need nothing else; `filter` and `with_index`
/// rebuild a container of the same family and therefore take the brand's
/// `Monoid` and `Applicative` instances.
pub trait Foldable<K: Kind> {
    /// `f(f(f(z, e0), e1), e2)...`
    fn fold_left<A, B>(&self, fa: Of<K, A>, z: B, f: impl FnMut(B, A) -> B) -> B;

    /// Derived: first element satisfying `pred`.
    fn find<A>(&self, fa: Of<K, A>, mut pred: impl FnMut(&A) -> bool) -> Maybe<A> {
        self.fold_left(fa, Maybe::Empty, |acc, a| match acc {
            Maybe::Just(_) => acc,
            Maybe::Empty if pred(&a) => Maybe::Just(a),
            Maybe::Empty => Maybe::Empty,
        })
    }

    /// Derived: first `Just` produced by `f`.
    fn find_map<A, B>(&self, fa: Of<K, A>, mut f: impl FnMut(A) -> Maybe<B>) -> Maybe<B> {
        self.fold_left(fa, Maybe::Empty, |acc, a| {
            if acc.present() {
                acc
            } else {
                f(a)
            }
        })
    }

    /// Derived: index of the first element satisfying `pred`.
    fn index_where<A>(&self, fa: Of<K, A>, mut pred: impl FnMut(&A) -> bool) -> Maybe<usize> {
        let (_, found) = self.fold_left(fa, (0usize, Maybe::Empty), |(i, found), a| {
            if found.present() {
                (i, found)
            } else if pred(&a) {
                (i + 1, Maybe::Just(i))
            } else {
                (i + 1, Maybe::Empty)
            }
        });
        found
    }

    /// Derived: keep elements satisfying `pred`, preserving order.
    fn filter<A>(
        &self,
        fa: Of<K, A>,
        mut pred: impl FnMut(&A) -> bool,
        monoid: &impl Monoid<K>,
        ap: &impl Applicative<K>,
    ) -> Of<K, A> {
        self.fold_left(fa, monoid.empty(), |acc, a| {
            if pred(&a) {
                monoid.combine(acc, ap.pure(a))
            } else {
                acc
            }
        })
    }

    /// Derived: pair each element with its zero-based position.
    fn with_index<A>(
        &self,
        fa: Of<K, A>,
        monoid: &impl Monoid<K>,
        ap: &impl Applicative<K>,
    ) -> Of<K, (usize, A)> {
        let (_, out) = self.fold_left(fa, (0usize, monoid.empty()), |(i, acc), a| {
            (i + 1, monoid.combine(acc, ap.pure((i, a))))
        });
        out
    }
}

/// Effectful traversal: map each element into a target applicative
/// context `G` and collect the container inside `G`.
pub trait Traverse<K: Kind> {
    fn traverse<A, B, G: Kind>(
        &self,
        fa: Of<K, A>,
        f: impl FnMut(A) -> Of<G, B>,
        ap: &impl Applicative<G>,
    ) -> Of<G, Of<K, B>>;
}

/// Pairing of containers from the same family.
pub trait Zip<K: Kind> {
    /// Pair two containers element-wise.
    fn zip2<A, B>(&self, fa: Of<K, A>, fb: Of<K, B>) -> Of<K, (A, B)>;

    /// Derived: three-way pairing through nested `zip2`.
    fn zip3<A, B, C>(
        &self,
        fa: Of<K, A>,
        fb: Of<K, B>,
        fc: Of<K, C>,
        ap: &impl Applicative<K>,
    ) -> Of<K, (A, B, C)> {
        ap.map(self.zip2(self.zip2(fa, fb), fc), |((a, b), c)| (a, b, c))
    }

    /// Derived: pair each element with its image under `f`.
    fn apzip<A, B>(
        &self,
        fa: Of<K, A>,
        f: impl FnMut(A) -> B,
        monad: &impl Monad<K>,
    ) -> Of<K, (A, B)>
    where
        Of<K, A>: Clone,
    {
        let fb = monad.map(fa.clone(), f);
        self.zip2(fa, fb)
    }

    /// Derived: split a container of pairs into two containers, folding
    /// each projection into a monoid accumulator via the applicative's
    /// `pure`.
    fn unzip<A, B>(
        &self,
        fab: Of<K, (A, B)>,
        foldable: &impl Foldable<K>,
        monoid: &impl Monoid<K>,
        ap: &impl Applicative<K>,
    ) -> (Of<K, A>, Of<K, B>) {
        foldable.fold_left(
            fab,
            (monoid.empty(), monoid.empty()),
            |(left, right), (a, b)| {
                (
                    monoid.combine(left, ap.pure(a)),
                    monoid.combine(right, ap.pure(b)),
                )
            },
        )
    }
}

/// Side effects that leave the container unchanged.
///
/// Every `Monad` instance taps: run `f` on each held value, discard its
/// result, and re-wrap the value with `pure`.
pub trait Tap<K: Kind>: Monad<K> {
    fn tap<A, B>(&self, fa: Of<K, A>, mut f: impl FnMut(&A) -> B) -> Of<K, A> {
        self.flat_map(fa, |a| {
            f(&a);
            self.pure(a)
        })
    }
}

impl<K: Kind, M: Monad<K>> Tap<K> for M {}
