//! Parse a batch of raw values, requiring every one to be valid.
//!
//! Demonstrates the boundary adapters: `attempt` converts each fallible
//! parse into presence/absence, and `sequential` collapses the batch,
//! short-circuiting at the first bad element.

use perhaps::{attempt, Maybe, Sequential};

fn parse_all(raw: &[&str]) -> Maybe<Vec<i32>> {
    raw.iter()
        .map(|s| attempt(|| s.parse::<i32>()))
        .sequential()
}

fn main() {
    let clean = ["1", "2", "3"];
    let dirty = ["1", "foo", "3"];

    println!("{:?} -> {:?}", clean, parse_all(&clean));
    println!("{:?} -> {:?}", dirty, parse_all(&dirty));

    let total = parse_all(&clean)
        .map(|values| values.iter().sum::<i32>())
        .get_or_else(|| 0);
    println!("total of clean input: {total}");
}
