// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! In-place reordering by a caller-supplied numeric key.

use crate::Trove;

impl<T> Trove<T> {
    /// Reorders the trove's own storage by the numeric key `key_fn`
    /// assigns each element, ascending, or descending when `descending`
    /// is set.
    ///
    /// This is the only operation that mutates the container's storage.
    /// The sort is **unstable**: when two elements produce equal keys,
    /// their relative order after sorting is unspecified. Returns the same
    /// trove for call chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let mut trove = Trove::new(vec![3, 1, 2]);
    /// trove.sort(|n| i64::from(*n), false);
    /// assert_eq!(trove.as_slice(), &[1, 2, 3]);
    ///
    /// trove.sort(|n| i64::from(*n), true);
    /// assert_eq!(trove.as_slice(), &[3, 2, 1]);
    /// ```
    pub fn sort<K>(&mut self, mut key_fn: K, descending: bool) -> &mut Self
    where
        K: FnMut(&T) -> i64,
    {
        self.items.sort_unstable_by(|a, b| {
            let ordering = key_fn(a).cmp(&key_fn(b));
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        self
    }
}
