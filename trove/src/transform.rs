// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element-wise transformation, side effects, grouping and deduplication.

use std::collections::HashMap;

use trove_core::Comparable;

use crate::Trove;

impl<T: Clone> Trove<T> {
    /// Applies `f` to every element in order, producing a same-length
    /// sequence of the same element type.
    ///
    /// The callback receives a shared reference and returns a fresh value;
    /// the source trove is never altered. Changing the element type is not
    /// supported by this container.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 2, 3]);
    /// assert_eq!(trove.map(|n| n * 10), vec![10, 20, 30]);
    /// assert_eq!(trove.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&T) -> T,
    {
        self.items.iter().map(|item| f(item)).collect()
    }

    /// Invokes a side-effect function for each element in order.
    ///
    /// Returns the same trove so calls can be chained. The callback only
    /// sees shared references, so the trove's own contents cannot change
    /// through this operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let mut raw = Vec::new();
    /// let mut scaled = Vec::new();
    /// let trove = Trove::new(vec![1, 2]);
    /// trove.each(|n| raw.push(*n)).each(|n| scaled.push(n * 10));
    /// assert_eq!(raw, vec![1, 2]);
    /// assert_eq!(scaled, vec![10, 20]);
    /// ```
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            f(item);
        }
        self
    }

    /// Concatenates, in order, the sequence produced by `f` for each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 2]);
    /// assert_eq!(trove.flat_map(|n| vec![*n, n * 10]), vec![1, 10, 2, 20]);
    /// ```
    #[must_use]
    pub fn flat_map<F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&T) -> Vec<T>,
    {
        let mut out = Vec::new();
        for item in &self.items {
            out.extend(f(item));
        }
        out
    }

    /// Groups elements by the key `key_fn` assigns them.
    ///
    /// A key maps to all elements sharing it, preserving their original
    /// relative order within each group.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 2, 3, 4]);
    /// let groups = trove.group_by(|n| if n % 2 == 0 { "even".into() } else { "odd".into() });
    /// assert_eq!(groups["even"], vec![2, 4]);
    /// assert_eq!(groups["odd"], vec![1, 3]);
    /// ```
    #[must_use]
    pub fn group_by<K>(&self, mut key_fn: K) -> HashMap<String, Vec<T>>
    where
        K: FnMut(&T) -> String,
    {
        let mut groups: HashMap<String, Vec<T>> = HashMap::new();
        for item in &self.items {
            groups.entry(key_fn(item)).or_default().push(item.clone());
        }
        groups
    }

    /// Indexes elements by the key `key_fn` assigns them, last writer wins.
    ///
    /// When several elements share a key, the mapping keeps the one with
    /// the highest original index. Use [`group_by`](Trove::group_by) to
    /// keep all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![10, 11, 20]);
    /// let by_tens = trove.key_by(|n| (n / 10).to_string());
    /// assert_eq!(by_tens["1"], 11);
    /// assert_eq!(by_tens["2"], 20);
    /// ```
    #[must_use]
    pub fn key_by<K>(&self, mut key_fn: K) -> HashMap<String, T>
    where
        K: FnMut(&T) -> String,
    {
        let mut index: HashMap<String, T> = HashMap::new();
        for item in &self.items {
            index.insert(key_fn(item), item.clone());
        }
        index
    }
}

impl<T: Comparable + Clone> Trove<T> {
    /// Retains the first occurrence of each equivalence class, in original
    /// order.
    ///
    /// Equivalence is decided by [`Comparable::compare`], not by value
    /// identity, which costs O(n²) comparisons; `compare` is the only
    /// equality primitive the contract offers, so no hashing shortcut
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 2, 1, 3, 2]);
    /// assert_eq!(trove.unique(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn unique(&self) -> Vec<T> {
        let mut out: Vec<T> = Vec::new();
        for item in &self.items {
            if !out.iter().any(|seen| seen.equals(item)) {
                out.push(item.clone());
            }
        }
        out
    }
}
