// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;

/// A trait for types with a total order between values of the same type.
///
/// This is the equality and ordering primitive of the capability contract.
/// Operations such as `contains` and `unique` rely exclusively on
/// [`compare`](Comparable::compare) to decide whether two elements belong to
/// the same equivalence class; no `Hash` or `Eq` implementation is consulted.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use trove_core::Comparable;
///
/// #[derive(Clone)]
/// struct Account {
///     id: u64,
/// }
///
/// impl Comparable for Account {
///     fn compare(&self, other: &Self) -> Ordering {
///         self.id.cmp(&other.id)
///     }
/// }
///
/// let a = Account { id: 1 };
/// let b = Account { id: 2 };
/// assert_eq!(a.compare(&b), Ordering::Less);
/// assert!(!a.equals(&b));
/// ```
pub trait Comparable {
    /// Compares `self` against `other`, returning the usual three-way result.
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns `true` when `self` and `other` compare equal.
    fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}
