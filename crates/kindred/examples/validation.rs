//! Form validation on the Either failure channel.
//!
//! Run with: cargo run --example validation
//!
//! This example demonstrates:
//! - Left as the short-circuiting failure channel
//! - First-left-wins zip over validated fields
//! - Local recovery with `recover_with` and final elimination with `cata`

use kindred::either::Either::{self, Left, Right};
use kindred::list::List;

fn parse_age(raw: &str) -> Either<String, u32> {
    Either::from_result(raw.parse().map_err(|_| format!("bad age: {raw:?}")))
}

fn parse_name(raw: &str) -> Either<String, String> {
    if raw.trim().is_empty() {
        Left("name must not be empty".to_string())
    } else {
        Right(raw.trim().to_string())
    }
}

fn describe(raw_name: &str, raw_age: &str) -> String {
    parse_name(raw_name)
        .zip(parse_age(raw_age))
        .map(|(name, age)| format!("{name}, {age} years old"))
        .cata(|err| format!("rejected: {err}"), |line| line)
}

fn main() {
    println!("=== Validation ===\n");

    let submissions = List::of([
        ("Ada", "36"),
        ("", "44"),
        ("Grace", "not-a-number"),
        ("", "also-bad"),
    ]);

    for (name, age) in submissions {
        println!("{:12} {:14} -> {}", name, age, describe(name, age));
    }

    // First-left-wins: the name error shadows the age error.
    let both_bad = parse_name("").zip(parse_age("also-bad"));
    println!("\nboth bad -> {}", both_bad.clone().left_or_map(|_| String::new()));

    // Recovery happens locally, as a value transformation.
    let recovered = both_bad.recover_with(|_| Right(("anonymous".to_string(), 0)));
    println!("recovered -> {:?}", recovered);
}
