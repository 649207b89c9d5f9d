// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The `Trove<T>` container: construction and index-based access.

use trove_core::{Result, Sentinel, TroveError};

/// An ordered, owned sequence of elements with an expressive query surface.
///
/// A `Trove` takes ownership of the `Vec` it is built from; nothing is
/// copied on construction. Insertion order is significant: it drives
/// [`first`](Trove::first), [`nth`](Trove::nth), the windowing operations
/// and the relative order inside every non-mutating result.
///
/// The operations are grouped by the capability they need:
///
/// - plain access and callback-driven operations require nothing beyond
///   `Clone` where results are handed out by value
/// - membership and deduplication require [`Comparable`](trove_core::Comparable)
/// - aggregation requires [`Measured`](trove_core::Measured)
/// - empty-case results of `first`/`max`/`min` require
///   [`Sentinel`](trove_core::Sentinel)
///
/// # Examples
///
/// ```
/// use trove::Trove;
///
/// let trove = Trove::new(vec![10, 20, 30]);
/// assert_eq!(trove.len(), 3);
/// assert_eq!(trove.nth(1).unwrap(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trove<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Default for Trove<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Trove<T> {
    /// Wraps the given sequence without copying it.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the number of elements currently owned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the trove holds no elements.
    ///
    /// An empty trove is a fully valid state; every aggregate has defined
    /// behavior for it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the underlying storage as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the trove and returns the owned storage.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Trove<T> {
    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TroveError::IndexOutOfRange`] when `index >= len()`.
    /// Out-of-range access is a checked failure, never a panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![7]);
    /// assert_eq!(trove.nth(0).unwrap(), 7);
    /// assert!(trove.nth(1).is_err());
    /// ```
    pub fn nth(&self, index: usize) -> Result<T> {
        match self.items.get(index) {
            Some(item) => Ok(item.clone()),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, len = self.items.len(), "nth out of range");
                Err(TroveError::index_out_of_range(index, self.items.len()))
            }
        }
    }
}

impl<T: Sentinel + Clone> Trove<T> {
    /// Returns the element at position 0, or the nil sentinel when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// assert_eq!(Trove::new(vec![4, 5]).first(), 4);
    /// assert_eq!(Trove::<i32>::new(vec![]).first(), 0);
    /// ```
    #[must_use]
    pub fn first(&self) -> T {
        match self.items.first() {
            Some(item) => item.clone(),
            None => T::nil(),
        }
    }
}

impl<T> From<Vec<T>> for Trove<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Trove<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Trove<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Trove<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
