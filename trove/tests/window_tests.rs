// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use trove::Trove;

#[test]
fn test_take_while_emits_matching_prefix() {
    let trove = Trove::new(vec![2, 4, 6, 1, 8]);
    assert_eq!(trove.take_while(|n| n % 2 == 0), vec![2, 4, 6]);
}

#[test]
fn test_take_while_latch_never_reopens() {
    // 8 and 10 match again after the 1, but the latch has closed
    let trove = Trove::new(vec![2, 1, 8, 10]);
    assert_eq!(trove.take_while(|n| n % 2 == 0), vec![2]);
}

#[test]
fn test_take_while_with_failing_head_is_empty() {
    let trove = Trove::new(vec![1, 2, 4]);
    assert!(trove.take_while(|n| n % 2 == 0).is_empty());
}

#[test]
fn test_take_while_prefix_plus_remainder_reconstructs_source() {
    // Arrange
    let source = vec![2, 4, 5, 6, 7];
    let trove = Trove::new(source.clone());
    let even = |n: &i32| n % 2 == 0;

    // Act
    let prefix = trove.take_while(even);
    let remainder = &source[prefix.len()..];

    // Assert
    let mut rebuilt = prefix.clone();
    rebuilt.extend_from_slice(remainder);
    assert_eq!(rebuilt, source);
}

#[test]
fn test_take_until_excludes_the_matching_element() {
    let trove = Trove::new(vec![1, 3, 4, 5]);
    assert_eq!(trove.take_until(|n| n % 2 == 0), vec![1, 3]);
}

#[test]
fn test_take_until_never_matching_takes_everything() {
    let trove = Trove::new(vec![1, 3, 5]);
    assert_eq!(trove.take_until(|n| n % 2 == 0), vec![1, 3, 5]);
}

#[test]
fn test_skip_while_drops_matching_prefix_only() {
    // 6 matches again after the 5 but is emitted anyway
    let trove = Trove::new(vec![2, 4, 5, 6]);
    assert_eq!(trove.skip_while(|n| n % 2 == 0), vec![5, 6]);
}

#[test]
fn test_skip_while_all_matching_drops_everything() {
    let trove = Trove::new(vec![2, 4, 6]);
    assert!(trove.skip_while(|n| n % 2 == 0).is_empty());
}

#[test]
fn test_skip_until_emits_from_first_match_inclusive() {
    // 5 fails the predicate again later but is emitted anyway
    let trove = Trove::new(vec![1, 3, 4, 5]);
    assert_eq!(trove.skip_until(|n| n % 2 == 0), vec![4, 5]);
}

#[test]
fn test_skip_until_never_matching_drops_everything() {
    let trove = Trove::new(vec![1, 3, 5]);
    assert!(trove.skip_until(|n| n % 2 == 0).is_empty());
}

#[test]
fn test_windowing_on_empty_is_empty() {
    let trove = Trove::<i32>::new(vec![]);
    assert!(trove.take_while(|_| true).is_empty());
    assert!(trove.take_until(|_| false).is_empty());
    assert!(trove.skip_while(|_| false).is_empty());
    assert!(trove.skip_until(|_| true).is_empty());
}

#[test]
fn test_windowing_leaves_source_unchanged() {
    let trove = Trove::new(vec![1, 2, 3]);
    let _ = trove.skip_while(|n| *n < 2);
    assert_eq!(trove.as_slice(), &[1, 2, 3]);
}
