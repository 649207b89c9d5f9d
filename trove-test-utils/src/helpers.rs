// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;

use crate::person::Person;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a random ascii name of the given length.
#[must_use]
pub fn random_name(len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[fastrand::usize(..LETTERS.len())] as char)
        .collect()
}

/// Generates `count` random people with ages in `[1, 100)`.
///
/// Ages start at 1 so no generated person collides with the nil sentinel.
#[must_use]
pub fn random_people(count: usize) -> Vec<Person> {
    (0..count)
        .map(|_| Person::new(random_name(10), fastrand::u32(1..100)))
        .collect()
}

/// Asserts that `passed` and `failed` partition `original` exactly: every
/// element of the original appears in exactly one half, in its original
/// relative order.
///
/// # Panics
///
/// Panics when an element is missing from both halves or when either half
/// carries elements the original does not.
pub fn assert_exact_partition<T>(original: &[T], passed: &[T], failed: &[T])
where
    T: PartialEq + Debug,
{
    let mut remaining_passed = passed.iter();
    let mut remaining_failed = failed.iter();
    let mut next_passed = remaining_passed.next();
    let mut next_failed = remaining_failed.next();

    for item in original {
        if next_passed == Some(item) {
            next_passed = remaining_passed.next();
        } else if next_failed == Some(item) {
            next_failed = remaining_failed.next();
        } else {
            panic!("element {item:?} of the original sequence is missing from both halves");
        }
    }

    assert!(
        next_passed.is_none() && next_failed.is_none(),
        "partition halves contain elements the original does not"
    );
}
