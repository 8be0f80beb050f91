//! # List - Ordered Immutable Sequences
//!
//! An ordered, finite sequence with structural, order-sensitive equality.
//! Every transformation returns a new `List`; the underlying storage is
//! never mutated in place once a value is handed out. Index-taking
//! operations accept negative indices measured from the end and answer
//! `Empty` instead of panicking on out-of-range access.
//!
//! ## Example
//!
//! ```rust
//! use kindred::list::List;
//! use kindred::maybe::Maybe;
//!
//! let xs = List::of([3, 1, 3, 2, 1]);
//! assert_eq!(xs.clone().distinct(), List::of([3, 1, 2]));
//! assert_eq!(xs.lift(-1), Maybe::Just(1));
//! assert_eq!(xs.lift(9), Maybe::Empty);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::capability::{ApplicativeCap, FoldableCap, MonadCap, MonoidCap, TapCap, ZipCap};
use crate::contracts::{Applicative, Foldable, Monad, Monoid, Zip};
use crate::kind::{Branded, Kind, Of};
use crate::maybe::Maybe;
use crate::registry::{
    HasApplicative, HasFoldable, HasMonad, HasMonoid, HasTap, HasZip, InstanceBundle, Instances,
};

/// An ordered, finite, immutable-by-convention sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List<A> {
    items: Vec<A>,
}

impl<A> List<A> {
    /// The empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build from anything iterable.
    pub fn of(items: impl IntoIterator<Item = A>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.items.iter()
    }

    /// The element at `index`, never panicking. Negative indices count
    /// from the end, Python-style: `-1` is the last element.
    pub fn lift(&self, index: isize) -> Maybe<A>
    where
        A: Clone,
    {
        let len = self.items.len() as isize;
        let i = if index < 0 { index + len } else { index };
        if (0..len).contains(&i) {
            Maybe::Just(self.items[i as usize].clone())
        } else {
            Maybe::Empty
        }
    }

    pub fn head(&self) -> Maybe<A>
    where
        A: Clone,
    {
        self.lift(0)
    }

    pub fn last(&self) -> Maybe<A>
    where
        A: Clone,
    {
        self.lift(-1)
    }

    pub fn map<B>(self, f: impl FnMut(A) -> B) -> List<B> {
        List::of(self.items.into_iter().map(f))
    }

    pub fn flat_map<B>(self, f: impl FnMut(A) -> List<B>) -> List<B> {
        List::of(self.items.into_iter().flat_map(f))
    }

    /// Concatenate one level of nesting, preserving order.
    pub fn flatten<B>(self) -> List<B>
    where
        A: IntoIterator<Item = B>,
    {
        List::of(self.items.into_iter().flatten())
    }

    pub fn filter(self, mut pred: impl FnMut(&A) -> bool) -> Self {
        List::of(self.items.into_iter().filter(|a| pred(a)))
    }

    pub fn filter_not(self, mut pred: impl FnMut(&A) -> bool) -> Self {
        self.filter(|a| !pred(a))
    }

    /// First element satisfying `pred`.
    pub fn find(&self, mut pred: impl FnMut(&A) -> bool) -> Maybe<A>
    where
        A: Clone,
    {
        Maybe::from_option(self.items.iter().find(|a| pred(a)).cloned())
    }

    pub fn exists(&self, mut pred: impl FnMut(&A) -> bool) -> bool {
        self.items.iter().any(|a| pred(a))
    }

    pub fn contains(&self, value: &A) -> bool
    where
        A: PartialEq,
    {
        self.items.contains(value)
    }

    /// Keep the first occurrence of each equal value, preserving the
    /// original relative order.
    pub fn distinct(self) -> Self
    where
        A: Clone + Eq + Hash,
    {
        let mut seen = HashSet::new();
        List::of(
            self.items
                .into_iter()
                .filter(|a| seen.insert(a.clone())),
        )
    }

    /// Stable partition into `(matching, non_matching)`, both preserving
    /// the original order.
    pub fn split(self, mut pred: impl FnMut(&A) -> bool) -> (Self, Self) {
        let (matching, rest): (Vec<A>, Vec<A>) = self.items.into_iter().partition(|a| pred(a));
        (List::of(matching), List::of(rest))
    }

    /// Index of the first element satisfying `pred`.
    pub fn index_where(&self, mut pred: impl FnMut(&A) -> bool) -> Maybe<usize> {
        Maybe::from_option(self.items.iter().position(|a| pred(a)))
    }

    pub fn index_of(&self, target: &A) -> Maybe<usize>
    where
        A: PartialEq,
    {
        self.index_where(|a| a == target)
    }

    /// `f(f(f(z, e0), e1), e2)...`
    pub fn fold_left<B>(self, z: B, f: impl FnMut(B, A) -> B) -> B {
        self.items.into_iter().fold(z, f)
    }

    pub fn reversed(self) -> Self {
        List::of(self.items.into_iter().rev())
    }

    /// Render elements separated by `sep`.
    pub fn join(&self, sep: &str) -> String
    where
        A: fmt::Display,
    {
        self.items
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Prepend an element.
    pub fn cons(self, item: A) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items);
        Self { items }
    }

    /// Append another list.
    pub fn concat(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Drop every element equal to `el`.
    pub fn without(self, el: &A) -> Self
    where
        A: PartialEq,
    {
        self.filter(|a| a != el)
    }

    /// Pair each element with its zero-based position.
    pub fn with_index(self) -> List<(usize, A)> {
        List::of(self.items.into_iter().enumerate())
    }

    /// Log the display string at debug level and return self unchanged.
    pub fn debug(self, prefix: &str) -> Self
    where
        A: fmt::Display,
    {
        if prefix.is_empty() {
            log::debug!("{}", self);
        } else {
            log::debug!("{} {}", prefix, self);
        }
        self
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Vec<A>> for List<A> {
    fn from(items: Vec<A>) -> Self {
        Self { items }
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        List::of(iter)
    }
}

impl<A> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<A: fmt::Display> fmt::Display for List<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({})", self.join(", "))
    }
}

// ============================================================================
// Brand and capability instances
// ============================================================================

/// The `List` family brand.
#[derive(Debug)]
pub enum ListKind {}

impl Kind for ListKind {
    type Of<A> = List<A>;

    fn name() -> &'static str {
        "List"
    }
}

impl<A: 'static> Branded for List<A> {
    type Brand = ListKind;
    type Elem = A;

    fn into_of(self) -> Of<ListKind, A> {
        self
    }

    fn from_of(of: Of<ListKind, A>) -> Self {
        of
    }
}

/// `Monad` instance: `pure` is a single-element list, `flat_map`
/// concatenates in order.
#[derive(Debug, Clone, Copy)]
pub struct ListMonad;

impl Monad<ListKind> for ListMonad {
    fn pure<A>(&self, a: A) -> List<A> {
        List::of([a])
    }

    fn flat_map<A, B>(&self, fa: List<A>, f: impl FnMut(A) -> List<B>) -> List<B> {
        fa.flat_map(f)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListApplicative;

impl Applicative<ListKind> for ListApplicative {
    fn pure<A>(&self, a: A) -> List<A> {
        List::of([a])
    }

    fn map<A, B>(&self, fa: List<A>, f: impl FnMut(A) -> B) -> List<B> {
        fa.map(f)
    }
}

/// Concatenation monoid with the empty list as identity.
#[derive(Debug, Clone, Copy)]
pub struct ListMonoid;

impl Monoid<ListKind> for ListMonoid {
    fn empty<A>(&self) -> List<A> {
        List::new()
    }

    fn combine<A>(&self, left: List<A>, right: List<A>) -> List<A> {
        left.concat(right)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListFoldable;

impl Foldable<ListKind> for ListFoldable {
    fn fold_left<A, B>(&self, fa: List<A>, z: B, f: impl FnMut(B, A) -> B) -> B {
        fa.fold_left(z, f)
    }
}

/// `Zip` instance: element-wise pairing, truncated to the shorter side.
#[derive(Debug, Clone, Copy)]
pub struct ListZip;

impl Zip<ListKind> for ListZip {
    fn zip2<A, B>(&self, fa: List<A>, fb: List<B>) -> List<(A, B)> {
        List::of(fa.into_iter().zip(fb))
    }
}

// No Optional (a sequence is not presence-like) and no Traverse.
impl Instances for ListKind {
    fn bundle() -> InstanceBundle {
        InstanceBundle::new()
            .with::<MonadCap, _>(ListMonad)
            .with::<ApplicativeCap, _>(ListApplicative)
            .with::<MonoidCap, _>(ListMonoid)
            .with::<FoldableCap, _>(ListFoldable)
            .with::<ZipCap, _>(ListZip)
            .with::<TapCap, _>(ListMonad)
    }
}

impl HasMonad for ListKind {
    type MonadI = ListMonad;
}
impl HasApplicative for ListKind {
    type ApplicativeI = ListApplicative;
}
impl HasMonoid for ListKind {
    type MonoidI = ListMonoid;
}
impl HasFoldable for ListKind {
    type FoldableI = ListFoldable;
}
impl HasZip for ListKind {
    type ZipI = ListZip;
}
impl HasTap for ListKind {
    type TapI = ListMonad;
}
