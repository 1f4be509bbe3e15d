use super::{IdGenerator, DEFAULT_PREFIX};
use std::collections::HashSet;

#[test]
fn test_first_identifier_uses_default_prefix() {
    let mut ids = IdGenerator::default();
    assert_eq!(ids.prefix(), DEFAULT_PREFIX);
    assert_eq!(ids.next(), "toc_e1");
    assert_eq!(ids.next(), "toc_e2");
}

#[test]
fn test_identifiers_are_distinct_and_increasing() {
    let mut ids = IdGenerator::new("h");
    let generated: Vec<String> = (0..50).map(|_| ids.next()).collect();

    let unique: HashSet<&String> = generated.iter().collect();
    assert_eq!(unique.len(), 50, "Every identifier should be unique");

    let numbers: Vec<u64> = generated
        .iter()
        .map(|id| id.trim_start_matches('h').parse().unwrap())
        .collect();
    assert!(
        numbers.windows(2).all(|w| w[0] < w[1]),
        "Identifiers should increase in generation order: {numbers:?}"
    );
    assert_eq!(ids.counter(), 50);
}

#[test]
fn test_seeded_generator_continues_after_seed() {
    let mut ids = IdGenerator::seeded("sec-", 41);
    assert_eq!(ids.next(), "sec-42");
}
