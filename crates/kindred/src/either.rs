//! # Either - Two-Channel Values
//!
//! `Either<L, R>` is `Left(l)` or `Right(r)`, mutually exclusive and
//! fixed at construction. The bias is right-associated: `map` and
//! `flat_map` act on `Right` and pass `Left` through untouched, which
//! makes `Left` the short-circuiting failure channel.
//!
//! Domain failures carried in `Left` are ordinary values, not errors:
//! they propagate structurally and are eliminated only through explicit
//! `cata` / `recover_with` / `get_or_raise` calls.
//!
//! ## Example
//!
//! ```rust
//! use kindred::either::Either::{self, Left, Right};
//!
//! fn parse(s: &str) -> Either<String, i64> {
//!     Either::from_result(s.parse().map_err(|_| format!("not a number: {s}")))
//! }
//!
//! let sum = parse("20").zip(parse("22")).map(|(a, b)| a + b);
//! assert_eq!(sum, Right(42));
//!
//! let failed = parse("20").zip(parse("x"));
//! assert_eq!(failed, Left("not a number: x".to_string()));
//! ```

use std::fmt;

use crate::capability::{ApplicativeCap, MonadCap, OptionalCap, TapCap, ZipCap};
use crate::contracts::{Applicative, Monad, Optional, Zip};
use crate::kind::{Branded, Kind, Of};
use crate::list::List;
use crate::maybe::Maybe;
use crate::registry::{
    HasApplicative, HasMonad, HasOptional, HasTap, HasZip, InstanceBundle, Instances,
};
use std::marker::PhantomData;

/// A value in exactly one of two channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

use self::Either::{Left, Right};

impl<L, R> Either<L, R> {
    pub fn left(l: L) -> Self {
        Left(l)
    }

    pub fn right(r: R) -> Self {
        Right(r)
    }

    /// `Ok` goes `Right`, `Err` goes `Left`.
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Right(r),
            Err(l) => Left(l),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    /// The universal eliminator: all other operations route through the
    /// match this expresses.
    pub fn cata<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Left(l) => on_left(l),
            Right(r) => on_right(r),
        }
    }

    /// Map the right channel; `Left` passes through.
    pub fn map<B>(self, f: impl FnOnce(R) -> B) -> Either<L, B> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(f(r)),
        }
    }

    /// Sequence on the right channel; `Left` short-circuits.
    pub fn flat_map<B>(self, f: impl FnOnce(R) -> Either<L, B>) -> Either<L, B> {
        match self {
            Left(l) => Left(l),
            Right(r) => f(r),
        }
    }

    /// Map the left channel; `Right` passes through.
    pub fn lmap<M>(self, f: impl FnOnce(L) -> M) -> Either<M, R> {
        match self {
            Left(l) => Left(f(l)),
            Right(r) => Right(r),
        }
    }

    /// Turn a `Left` into whatever `f` produces; `Right` is untouched.
    pub fn recover_with(self, f: impl FnOnce(L) -> Either<L, R>) -> Either<L, R> {
        match self {
            Left(l) => f(l),
            Right(r) => Right(r),
        }
    }

    /// Pair the right channels; first left wins.
    ///
    /// `Right ⊗ Right` pairs the values, a left `self` short-circuits to
    /// itself, and otherwise the other side's `Left` is returned.
    pub fn zip<B>(self, other: Either<L, B>) -> Either<L, (R, B)> {
        match (self, other) {
            (Right(r), Right(b)) => Right((r, b)),
            (Left(l), _) => Left(l),
            (_, Left(l)) => Left(l),
        }
    }

    /// Run a side effect on the left channel, returning self unchanged.
    pub fn leffect<B>(self, f: impl FnOnce(&L) -> B) -> Self {
        if let Left(l) = &self {
            f(l);
        }
        self
    }

    /// Project onto `Maybe`; the left value is discarded.
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Left(_) => Maybe::Empty,
            Right(r) => Maybe::Just(r),
        }
    }

    /// Zero-or-one-element sequence from the right channel.
    pub fn to_list(self) -> List<R> {
        self.to_maybe().to_list()
    }

    /// The right value, or the left value surfaced as the error.
    pub fn get_or_raise(self) -> Result<R, L> {
        match self {
            Left(l) => Err(l),
            Right(r) => Ok(r),
        }
    }

    /// Eliminate by mapping the left channel onto the right's type.
    pub fn right_or_map(self, f: impl FnOnce(L) -> R) -> R {
        self.cata(f, |r| r)
    }

    /// Eliminate by mapping the right channel onto the left's type.
    pub fn left_or_map(self, f: impl FnOnce(R) -> L) -> L {
        self.cata(|l| l, f)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Left(l) => write!(f, "Left({})", l),
            Right(r) => write!(f, "Right({})", r),
        }
    }
}

// ============================================================================
// Brand and capability instances
// ============================================================================

/// The `Either<L, _>` family brand; one brand per left type.
pub struct EitherKind<L>(PhantomData<L>);

impl<L: 'static> Kind for EitherKind<L> {
    type Of<A> = Either<L, A>;
}

impl<L: 'static, R: 'static> Branded for Either<L, R> {
    type Brand = EitherKind<L>;
    type Elem = R;

    fn into_of(self) -> Of<EitherKind<L>, R> {
        self
    }

    fn from_of(of: Of<EitherKind<L>, R>) -> Self {
        of
    }
}

/// `Monad` instance: `pure` is `Right`, `flat_map` short-circuits `Left`.
#[derive(Debug, Clone, Copy)]
pub struct EitherMonad;

impl<L: 'static> Monad<EitherKind<L>> for EitherMonad {
    fn pure<A>(&self, a: A) -> Either<L, A> {
        Right(a)
    }

    fn flat_map<A, B>(&self, fa: Either<L, A>, f: impl FnMut(A) -> Either<L, B>) -> Either<L, B> {
        fa.flat_map(f)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EitherApplicative;

impl<L: 'static> Applicative<EitherKind<L>> for EitherApplicative {
    fn pure<A>(&self, a: A) -> Either<L, A> {
        Right(a)
    }

    fn map<A, B>(&self, fa: Either<L, A>, f: impl FnMut(A) -> B) -> Either<L, B> {
        fa.map(f)
    }
}

/// `Optional` instance: presence is the right channel.
#[derive(Debug, Clone, Copy)]
pub struct EitherOptional;

impl<L: 'static> Optional<EitherKind<L>> for EitherOptional {
    fn to_maybe<A>(&self, fa: Either<L, A>) -> Maybe<A> {
        fa.to_maybe()
    }

    fn present<A>(&self, fa: &Either<L, A>) -> bool {
        fa.is_right()
    }
}

/// `Zip` instance: first-left-wins, as [`Either::zip`].
#[derive(Debug, Clone, Copy)]
pub struct EitherZip;

impl<L: 'static> Zip<EitherKind<L>> for EitherZip {
    fn zip2<A, B>(&self, fa: Either<L, A>, fb: Either<L, B>) -> Either<L, (A, B)> {
        fa.zip(fb)
    }
}

// No Foldable, Monoid or Traverse: an `Either` brand has no lawful empty
// value, so fold-and-rebuild operations (`unzip`, `filter`) resolve to
// `CapabilityNotFound` rather than inventing one.
impl<L: 'static> Instances for EitherKind<L> {
    fn bundle() -> InstanceBundle {
        InstanceBundle::new()
            .with::<MonadCap, _>(EitherMonad)
            .with::<ApplicativeCap, _>(EitherApplicative)
            .with::<OptionalCap, _>(EitherOptional)
            .with::<ZipCap, _>(EitherZip)
            .with::<TapCap, _>(EitherMonad)
    }
}

impl<L: 'static> HasMonad for EitherKind<L> {
    type MonadI = EitherMonad;
}
impl<L: 'static> HasApplicative for EitherKind<L> {
    type ApplicativeI = EitherApplicative;
}
impl<L: 'static> HasOptional for EitherKind<L> {
    type OptionalI = EitherOptional;
}
impl<L: 'static> HasZip for EitherKind<L> {
    type ZipI = EitherZip;
}
impl<L: 'static> HasTap for EitherKind<L> {
    type TapI = EitherMonad;
}
