//! Container behavior through the generic operation surface: the
//! dispatch resolver is exercised by every call here, with the expected
//! values written out as tables for Maybe, Either and List.

use kindred::contracts::{Optional, Traverse};
use kindred::either::{Either, EitherApplicative, EitherOptional};
use kindred::list::List;
use kindred::maybe::{Maybe, MaybeTraverse};
use kindred::ops;
use kindred::registry::InstanceRegistry;

use kindred::either::Either::{Left, Right};
use kindred::maybe::Maybe::{Empty, Just};

// ============================================================================
// zip / zip3 / apzip
// ============================================================================

#[test]
fn zip_pairs_across_families() {
    let reg = InstanceRegistry::new();

    assert_eq!(
        ops::zip(&reg, Just(1), Just("a")).unwrap(),
        Just((1, "a"))
    );
    assert_eq!(ops::zip(&reg, Just(1), Maybe::<&str>::Empty).unwrap(), Empty);

    assert_eq!(
        ops::zip(&reg, List::of([1, 2, 3]), List::of(["a", "b"])).unwrap(),
        List::of([(1, "a"), (2, "b")])
    );
}

#[test]
fn either_zip_is_first_left_wins() {
    let reg = InstanceRegistry::new();
    let ok = |n: i64| Either::<String, i64>::Right(n);
    let fail = |s: &str| Either::<String, i64>::Left(s.to_string());

    assert_eq!(ops::zip(&reg, ok(1), ok(2)).unwrap(), Right((1, 2)));
    assert_eq!(
        ops::zip(&reg, fail("x"), ok(2)).unwrap(),
        Left("x".to_string())
    );
    assert_eq!(
        ops::zip(&reg, ok(1), fail("y")).unwrap(),
        Left("y".to_string())
    );
    assert_eq!(
        ops::zip(&reg, fail("x"), fail("y")).unwrap(),
        Left("x".to_string())
    );
}

#[test]
fn zip3_flattens_the_tuple() {
    let reg = InstanceRegistry::new();

    assert_eq!(
        ops::zip3(&reg, List::of([1, 2]), List::of(["a", "b"]), List::of([true, false]))
            .unwrap(),
        List::of([(1, "a", true), (2, "b", false)])
    );
    assert_eq!(
        ops::zip3(&reg, Just(1), Just(2), Just(3)).unwrap(),
        Just((1, 2, 3))
    );
}

#[test]
fn apzip_pairs_elements_with_their_images() {
    let reg = InstanceRegistry::new();

    assert_eq!(
        ops::apzip(&reg, List::of([1, 2]), |n| n * 10).unwrap(),
        List::of([(1, 10), (2, 20)])
    );
    assert_eq!(ops::apzip(&reg, Just(4), |n| n + 1).unwrap(), Just((4, 5)));
    assert_eq!(
        ops::apzip(&reg, Maybe::<i64>::Empty, |n| n + 1).unwrap(),
        Empty
    );
}

// ============================================================================
// unzip
// ============================================================================

#[test]
fn unzip_splits_pairs_in_order() {
    let reg = InstanceRegistry::new();

    let (nums, names) = ops::unzip(&reg, List::of([(1, "a"), (2, "b"), (3, "c")])).unwrap();
    assert_eq!(nums, List::of([1, 2, 3]));
    assert_eq!(names, List::of(["a", "b", "c"]));

    let (l, r) = ops::unzip(&reg, Just((7, "x"))).unwrap();
    assert_eq!(l, Just(7));
    assert_eq!(r, Just("x"));

    let (l, r) = ops::unzip(&reg, Maybe::<(i64, i64)>::Empty).unwrap();
    assert_eq!(l, Empty);
    assert_eq!(r, Empty);
}

// ============================================================================
// tap
// ============================================================================

#[test]
fn tap_returns_the_container_unchanged() {
    let reg = InstanceRegistry::new();

    let mut seen = Vec::new();
    let tapped = ops::tap(&reg, Either::<String, i64>::Right(5), |n| {
        seen.push(*n);
        "ignored"
    })
    .unwrap();
    assert_eq!(tapped, Right(5));
    assert_eq!(seen, vec![5], "side effect runs exactly once with the value");

    let mut count = 0;
    let tapped = ops::tap(&reg, Either::<String, i64>::Left("e".into()), |_| count += 1).unwrap();
    assert_eq!(tapped, Left("e".to_string()));
    assert_eq!(count, 0, "no value, no side effect");
}

#[test]
fn tap_visits_every_list_element_once() {
    let reg = InstanceRegistry::new();

    let mut seen = Vec::new();
    let tapped = ops::tap(&reg, List::of([1, 2, 3]), |n| seen.push(*n)).unwrap();
    assert_eq!(tapped, List::of([1, 2, 3]));
    assert_eq!(seen, vec![1, 2, 3]);
}

// ============================================================================
// filter / with_index / find / fold_left through the resolver
// ============================================================================

#[test]
fn filter_rebuilds_through_the_monoid() {
    let reg = InstanceRegistry::new();

    assert_eq!(
        ops::filter(&reg, List::of([1, 2, 3, 4]), |n| n % 2 == 0).unwrap(),
        List::of([2, 4])
    );
    assert_eq!(ops::filter(&reg, Just(5), |n| *n > 3).unwrap(), Just(5));
    assert_eq!(ops::filter(&reg, Just(2), |n| *n > 3).unwrap(), Empty);
}

#[test]
fn with_index_counts_from_zero() {
    let reg = InstanceRegistry::new();

    assert_eq!(
        ops::with_index(&reg, List::of(["a", "b"])).unwrap(),
        List::of([(0, "a"), (1, "b")])
    );
    assert_eq!(ops::with_index(&reg, Just("a")).unwrap(), Just((0, "a")));
}

#[test]
fn find_and_fold_left_reduce_generically() {
    let reg = InstanceRegistry::new();

    assert_eq!(
        ops::find(&reg, List::of([1, 8, 3]), |n| *n > 5).unwrap(),
        Just(8)
    );
    assert_eq!(
        ops::find(&reg, List::of([1, 2]), |n| *n > 5).unwrap(),
        Empty
    );
    assert_eq!(
        ops::fold_left(&reg, List::of([1, 2, 3]), 0, |acc, n| acc + n).unwrap(),
        6
    );
    assert_eq!(
        ops::fold_left(&reg, Just(10), 1, |acc, n| acc + n).unwrap(),
        11
    );
}

// ============================================================================
// Behavior tables: Maybe / Either / List
// ============================================================================

#[test]
fn maybe_to_either_supplies_the_left() {
    assert_eq!(Just(5).to_either("err"), Right(5));
    assert_eq!(Maybe::<i64>::Empty.to_either("err"), Left("err"));
}

#[test]
fn optional_instance_agrees_with_the_inherent_conversions() {
    let opt = EitherOptional;
    assert_eq!(opt.to_maybe(Either::<String, i64>::Right(3)), Just(3));
    assert_eq!(opt.to_maybe(Either::<String, i64>::Left("e".into())), Empty);
    assert!(opt.present(&Either::<String, i64>::Right(3)));
    assert!(!opt.present(&Either::<String, i64>::Left("e".into())));

    // The derived to_either rebuilds the left from the supplied value.
    assert_eq!(
        opt.to_either(Either::<String, i64>::Right(3), 0),
        Right(3)
    );
    assert_eq!(
        opt.to_either(Either::<String, i64>::Left("e".into()), 0),
        Left(0)
    );
}

#[test]
fn list_distinct_and_lift_tables() {
    assert_eq!(List::of([3, 1, 3, 2, 1]).distinct(), List::of([3, 1, 2]));
    assert_eq!(List::of([1, 2, 3]).lift(-1), Just(3));
    assert_eq!(List::of([1, 2, 3]).lift(5), Empty);
}

#[test]
fn maybe_traverse_into_either() {
    let t = MaybeTraverse;
    let check = |n: i64| {
        if n >= 0 {
            Either::<String, i64>::Right(n)
        } else {
            Either::Left(format!("negative: {n}"))
        }
    };

    assert_eq!(
        t.traverse(Just(4), check, &EitherApplicative),
        Right(Just(4))
    );
    assert_eq!(
        t.traverse(Just(-4), check, &EitherApplicative),
        Left("negative: -4".to_string())
    );
    // Empty short-circuits to pure(Empty) in the target context.
    assert_eq!(
        t.traverse(Maybe::<i64>::Empty, check, &EitherApplicative),
        Right(Empty)
    );
}
