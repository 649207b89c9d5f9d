// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use trove::Trove;
use trove_test_utils::{assert_exact_partition, Person};

#[test]
fn test_every_true_when_all_match() {
    let trove = Trove::new(vec![2, 4, 6]);
    assert!(trove.every(|n| n % 2 == 0));
}

#[test]
fn test_every_short_circuits_on_first_failure() {
    let trove = Trove::new(vec![2, 3, 4]);
    let mut calls = 0;

    let all_even = trove.every(|n| {
        calls += 1;
        n % 2 == 0
    });

    assert!(!all_even);
    assert_eq!(calls, 2);
}

#[test]
fn test_every_vacuously_true_on_empty() {
    let trove = Trove::<i32>::new(vec![]);
    assert!(trove.every(|_| false));
}

#[test]
fn test_some_true_on_first_match() {
    let trove = Trove::new(vec![1, 2, 3]);
    let mut calls = 0;

    let any_even = trove.some(|n| {
        calls += 1;
        n % 2 == 0
    });

    assert!(any_even);
    assert_eq!(calls, 2);
}

#[test]
fn test_some_false_on_empty() {
    let trove = Trove::<i32>::new(vec![]);
    assert!(!trove.some(|_| true));
}

#[test]
fn test_filter_keeps_matching_in_order() {
    let trove = Trove::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(trove.filter(|n| n % 2 == 1), vec![1, 3, 5]);
}

#[test]
fn test_reject_keeps_failing_in_order() {
    let trove = Trove::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(trove.reject(|n| n % 2 == 1), vec![2, 4]);
}

#[test]
fn test_filter_and_reject_partition_exactly() {
    // Arrange
    let source = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let trove = Trove::new(source.clone());
    let is_big = |n: &i32| *n >= 4;

    // Act
    let passed = trove.filter(is_big);
    let failed = trove.reject(is_big);

    // Assert
    assert!(passed.iter().all(is_big));
    assert!(!failed.iter().any(is_big));
    assert_exact_partition(&source, &passed, &failed);
}

#[test]
fn test_partition_matches_filter_plus_reject() {
    let trove = Trove::new(vec![1, 2, 3, 4]);
    let pred = |n: &i32| *n > 2;

    let (passed, failed) = trove.partition(pred);

    assert_eq!(passed, trove.filter(pred));
    assert_eq!(failed, trove.reject(pred));
}

#[test]
fn test_partition_on_empty_yields_two_empty_halves() {
    let trove = Trove::<i32>::new(vec![]);
    let (passed, failed) = trove.partition(|_| true);
    assert!(passed.is_empty());
    assert!(failed.is_empty());
}

#[test]
fn test_contains_uses_compare_equality() {
    let alice = Person::new("Alice".to_string(), 25);
    let trove = Trove::new(vec![alice.clone(), Person::new("Bob".to_string(), 30)]);

    assert!(trove.contains(&alice));
    assert!(!trove.contains(&Person::new("Alice".to_string(), 26)));
}

#[test]
fn test_contains_false_on_empty() {
    let trove = Trove::<i32>::new(vec![]);
    assert!(!trove.contains(&1));
}

#[test]
fn test_filter_leaves_source_unchanged() {
    let trove = Trove::new(vec![1, 2, 3]);
    let _ = trove.filter(|n| *n > 1);
    assert_eq!(trove.as_slice(), &[1, 2, 3]);
}
