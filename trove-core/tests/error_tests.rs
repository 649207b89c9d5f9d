// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use trove_core::TroveError;

#[test]
fn test_index_out_of_range_display() {
    let error = TroveError::index_out_of_range(5, 3);
    assert_eq!(error.to_string(), "index 5 out of range for length 3");
}

#[test]
fn test_empty_collection_display() {
    let error = TroveError::empty_collection("average");
    assert_eq!(
        error.to_string(),
        "cannot compute average of an empty collection"
    );
}

#[test]
fn test_constructors_match_variants() {
    assert_eq!(
        TroveError::index_out_of_range(2, 2),
        TroveError::IndexOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(
        TroveError::empty_collection("avg"),
        TroveError::EmptyCollection { operation: "avg" }
    );
}

#[test]
fn test_errors_are_comparable_and_cloneable() {
    let error = TroveError::index_out_of_range(0, 0);
    let copy = error.clone();
    assert_eq!(error, copy);
}

#[test]
fn test_error_implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&TroveError::empty_collection("average"));
}
