//! Tour of the capability dispatch core.
//!
//! Run with: cargo run --example capability_tour
//!
//! This example demonstrates:
//! - Resolving instances through the registry, typed and untyped
//! - Generic operations (`zip`, `unzip`, `tap`) over different families
//! - Eager `CapabilityNotFound` errors for unregistered capabilities

use kindred::capability::{CapabilityRef, OptionalCap};
use kindred::contracts::Monad;
use kindred::list::{List, ListKind};
use kindred::maybe::Maybe;
use kindred::ops;
use kindred::registry::{BrandRef, InstanceRegistry};

fn main() {
    // One registry for the whole process; bundles populate lazily on
    // first resolution and are read-only afterwards.
    let reg = InstanceRegistry::new();

    println!("=== Capability Tour ===\n");

    // -------------------------------------------------------------------------
    // Typed resolution
    // -------------------------------------------------------------------------
    println!("1. Typed resolution");
    println!("-------------------");

    let monad = reg.monad::<ListKind>().expect("List registers Monad");
    let singleton = monad.pure("solo");
    println!("ListMonad::pure(\"solo\") = {}", singleton);
    println!();

    // -------------------------------------------------------------------------
    // Generic operations over different families
    // -------------------------------------------------------------------------
    println!("2. Generic operations");
    println!("---------------------");

    let pairs = ops::zip(&reg, List::of([1, 2, 3]), List::of(["a", "b", "c"]))
        .expect("List registers Zip");
    println!("zip = {:?}", pairs);

    let (nums, names) = ops::unzip(&reg, pairs).expect("List registers Foldable/Monoid");
    println!("unzip = ({}, {})", nums, names);

    let tapped = ops::tap(&reg, Maybe::Just(42), |n| println!("tap sees {}", n))
        .expect("Maybe registers Tap");
    println!("tap returned {} unchanged", tapped);
    println!();

    // -------------------------------------------------------------------------
    // Missing capabilities fail eagerly
    // -------------------------------------------------------------------------
    println!("3. Missing capabilities");
    println!("-----------------------");

    // A List is not presence-like: it registers no Optional instance.
    let missing = reg.resolve(CapabilityRef::of::<OptionalCap>(), BrandRef::of::<ListKind>());
    match missing {
        Ok(_) => println!("unexpected instance"),
        Err(e) => println!("as expected: {}", e),
    }
}
