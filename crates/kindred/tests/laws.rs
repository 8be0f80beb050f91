//! Algebraic laws for the registered instances:
//! - Monad laws (left identity, right identity, associativity) for
//!   Maybe, Either and List
//! - zip/unzip round-trip for containers of pairs
//! - Monoid identity for the container monoids
//!
//! These are property tests: the laws must hold for every value, not
//! just the handful a table-driven test would pick.

use proptest::prelude::*;

use kindred::contracts::{Monad, Monoid, Zip};
use kindred::either::{Either, EitherMonad};
use kindred::list::{List, ListMonad, ListMonoid};
use kindred::maybe::{Maybe, MaybeMonad, MaybeMonoid};
use kindred::ops;
use kindred::registry::InstanceRegistry;

fn maybe_of(opt: Option<i64>) -> Maybe<i64> {
    Maybe::from_option(opt)
}

fn either_of(res: Result<i64, String>) -> Either<String, i64> {
    Either::from_result(res)
}

// Test functions for the law statements; chosen so both paths through
// each container are exercised.
fn half(n: i64) -> Maybe<i64> {
    if n % 2 == 0 {
        Maybe::Just(n / 2)
    } else {
        Maybe::Empty
    }
}

fn offset(n: i64) -> Maybe<i64> {
    Maybe::Just(n.wrapping_add(1))
}

fn checked(n: i64) -> Either<String, i64> {
    if n >= 0 {
        Either::Right(n)
    } else {
        Either::Left(format!("negative: {n}"))
    }
}

fn doubled(n: i64) -> Either<String, i64> {
    Either::Right(n.wrapping_mul(2))
}

fn repeat(n: i64) -> List<i64> {
    List::of([n, n.wrapping_mul(10)])
}

fn keep_even(n: i64) -> List<i64> {
    if n % 2 == 0 {
        List::of([n])
    } else {
        List::new()
    }
}

proptest! {
    // ------------------------------------------------------------------
    // Maybe monad laws
    // ------------------------------------------------------------------

    #[test]
    fn maybe_left_identity(a in any::<i64>()) {
        let m = MaybeMonad;
        prop_assert_eq!(m.flat_map(m.pure(a), half), half(a));
    }

    #[test]
    fn maybe_right_identity(fa in proptest::option::of(any::<i64>())) {
        let m = MaybeMonad;
        let fa = maybe_of(fa);
        prop_assert_eq!(m.flat_map(fa, |a| m.pure(a)), fa);
    }

    #[test]
    fn maybe_associativity(fa in proptest::option::of(any::<i64>())) {
        let m = MaybeMonad;
        let fa = maybe_of(fa);
        let nested = m.flat_map(m.flat_map(fa, half), offset);
        let flat = m.flat_map(fa, |a| m.flat_map(half(a), offset));
        prop_assert_eq!(nested, flat);
    }

    // ------------------------------------------------------------------
    // Either monad laws
    // ------------------------------------------------------------------

    #[test]
    fn either_left_identity(a in any::<i64>()) {
        let m = EitherMonad;
        prop_assert_eq!(m.flat_map(m.pure(a), checked), checked(a));
    }

    #[test]
    fn either_right_identity(fa in prop_oneof![
        any::<i64>().prop_map(|n| Ok(n)),
        ".{0,8}".prop_map(|s| Err(s)),
    ]) {
        let m = EitherMonad;
        let fa = either_of(fa);
        prop_assert_eq!(m.flat_map(fa.clone(), |a| m.pure(a)), fa);
    }

    #[test]
    fn either_associativity(fa in prop_oneof![
        any::<i64>().prop_map(|n| Ok(n)),
        ".{0,8}".prop_map(|s| Err(s)),
    ]) {
        let m = EitherMonad;
        let fa = either_of(fa);
        let nested = m.flat_map(m.flat_map(fa.clone(), checked), doubled);
        let flat = m.flat_map(fa, |a| m.flat_map(checked(a), doubled));
        prop_assert_eq!(nested, flat);
    }

    // ------------------------------------------------------------------
    // List monad laws
    // ------------------------------------------------------------------

    #[test]
    fn list_left_identity(a in any::<i64>()) {
        let m = ListMonad;
        prop_assert_eq!(m.flat_map(m.pure(a), repeat), repeat(a));
    }

    #[test]
    fn list_right_identity(xs in proptest::collection::vec(any::<i64>(), 0..16)) {
        let m = ListMonad;
        let fa = List::of(xs);
        prop_assert_eq!(m.flat_map(fa.clone(), |a| m.pure(a)), fa);
    }

    #[test]
    fn list_associativity(xs in proptest::collection::vec(any::<i64>(), 0..16)) {
        let m = ListMonad;
        let fa = List::of(xs);
        let nested = m.flat_map(m.flat_map(fa.clone(), repeat), keep_even);
        let flat = m.flat_map(fa, |a| m.flat_map(repeat(a), keep_even));
        prop_assert_eq!(nested, flat);
    }

    // ------------------------------------------------------------------
    // zip / unzip round-trips
    // ------------------------------------------------------------------

    #[test]
    fn list_zip_unzip_round_trips(pairs in proptest::collection::vec(any::<(i64, i64)>(), 0..16)) {
        let reg = InstanceRegistry::new();
        let fa = List::of(pairs);
        let (xs, ys) = ops::unzip(&reg, fa.clone()).unwrap();
        prop_assert_eq!(ops::zip(&reg, xs, ys).unwrap(), fa);
    }

    #[test]
    fn maybe_zip_unzip_round_trips(pair in proptest::option::of(any::<(i64, i64)>())) {
        let reg = InstanceRegistry::new();
        let fa = maybe_pair(pair);
        let (xs, ys) = ops::unzip(&reg, fa).unwrap();
        prop_assert_eq!(ops::zip(&reg, xs, ys).unwrap(), fa);
    }

    // ------------------------------------------------------------------
    // Monoid identity
    // ------------------------------------------------------------------

    #[test]
    fn list_monoid_identity(xs in proptest::collection::vec(any::<i64>(), 0..16)) {
        let m = ListMonoid;
        let fa = List::of(xs);
        prop_assert_eq!(m.combine(m.empty(), fa.clone()), fa.clone());
        prop_assert_eq!(m.combine(fa.clone(), m.empty()), fa);
    }

    #[test]
    fn maybe_monoid_identity(fa in proptest::option::of(any::<i64>())) {
        let m = MaybeMonoid;
        let fa = maybe_of(fa);
        prop_assert_eq!(m.combine(m.empty(), fa), fa);
        prop_assert_eq!(m.combine(fa, m.empty()), fa);
    }

    // ------------------------------------------------------------------
    // zip against the native Either short-circuit
    // ------------------------------------------------------------------

    #[test]
    fn either_zip_matches_the_instance(
        a in prop_oneof![any::<i64>().prop_map(Ok), ".{0,8}".prop_map(Err)],
        b in prop_oneof![any::<i64>().prop_map(Ok), ".{0,8}".prop_map(Err)],
    ) {
        let z = kindred::either::EitherZip;
        let (fa, fb) = (either_of(a), either_of(b));
        prop_assert_eq!(z.zip2(fa.clone(), fb.clone()), fa.zip(fb));
    }
}

fn maybe_pair(pair: Option<(i64, i64)>) -> Maybe<(i64, i64)> {
    Maybe::from_option(pair)
}
