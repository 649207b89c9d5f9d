// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-driven queries: quantifiers, filtering and membership.

use trove_core::Comparable;

use crate::Trove;

impl<T> Trove<T> {
    /// Returns `true` when every element satisfies `pred`.
    ///
    /// Short-circuits on the first failing element. Vacuously `true` for an
    /// empty trove.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// assert!(Trove::new(vec![2, 4, 6]).every(|n| n % 2 == 0));
    /// assert!(!Trove::new(vec![2, 3]).every(|n| n % 2 == 0));
    /// assert!(Trove::<i32>::new(vec![]).every(|_| false));
    /// ```
    pub fn every<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(|item| pred(item))
    }

    /// Returns `true` when at least one element satisfies `pred`.
    ///
    /// Short-circuits on the first match. `false` for an empty trove.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// assert!(Trove::new(vec![1, 2, 3]).some(|n| *n == 2));
    /// assert!(!Trove::<i32>::new(vec![]).some(|_| true));
    /// ```
    pub fn some<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(|item| pred(item))
    }
}

impl<T: Clone> Trove<T> {
    /// Returns the elements satisfying `pred`, original order preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 2, 3, 4]);
    /// assert_eq!(trove.filter(|n| n % 2 == 0), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| pred(item))
            .cloned()
            .collect()
    }

    /// Returns the elements failing `pred`; the complement of
    /// [`filter`](Trove::filter).
    ///
    /// Together, `filter(p)` and `reject(p)` partition the trove exactly:
    /// every element lands in exactly one of the two results, keeping its
    /// relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 2, 3, 4]);
    /// assert_eq!(trove.reject(|n| n % 2 == 0), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn reject<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| !pred(item))
            .cloned()
            .collect()
    }

    /// Splits the trove into the elements passing and failing `pred`.
    ///
    /// Equivalent to calling [`filter`](Trove::filter) and
    /// [`reject`](Trove::reject) together, in one pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let (evens, odds) = Trove::new(vec![1, 2, 3, 4]).partition(|n| n % 2 == 0);
    /// assert_eq!(evens, vec![2, 4]);
    /// assert_eq!(odds, vec![1, 3]);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut pred: P) -> (Vec<T>, Vec<T>)
    where
        P: FnMut(&T) -> bool,
    {
        let mut passed = Vec::new();
        let mut failed = Vec::new();
        for item in &self.items {
            if pred(item) {
                passed.push(item.clone());
            } else {
                failed.push(item.clone());
            }
        }
        (passed, failed)
    }
}

impl<T: Comparable> Trove<T> {
    /// Returns `true` when some element compares equal to `value`.
    ///
    /// Membership is decided by [`Comparable::compare`] alone; `Eq` and
    /// `Hash` are never consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 2, 3]);
    /// assert!(trove.contains(&2));
    /// assert!(!trove.contains(&9));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.items.iter().any(|item| item.equals(value))
    }
}
