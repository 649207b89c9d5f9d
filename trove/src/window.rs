// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prefix and suffix selection governed by a one-shot latch.
//!
//! All four operations make a single forward pass over the elements. Once
//! the latch flips from "still taking" or "still skipping" to "stopped",
//! it never re-opens: an element matching the predicate again later in the
//! sequence does not change the outcome.

use crate::Trove;

impl<T: Clone> Trove<T> {
    /// Emits elements from the start while `pred` holds.
    ///
    /// The first failing element stops the scan permanently; matching
    /// elements after it are excluded.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![2, 4, 5, 6]);
    /// assert_eq!(trove.take_while(|n| n % 2 == 0), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut out = Vec::new();
        for item in &self.items {
            if !pred(item) {
                break;
            }
            out.push(item.clone());
        }
        out
    }

    /// Emits elements from the start until `pred` first holds.
    ///
    /// The matching element itself is excluded and the scan stops
    /// permanently at that point.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 3, 4, 5]);
    /// assert_eq!(trove.take_until(|n| n % 2 == 0), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn take_until<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut out = Vec::new();
        for item in &self.items {
            if pred(item) {
                break;
            }
            out.push(item.clone());
        }
        out
    }

    /// Discards a prefix while `pred` holds.
    ///
    /// Once `pred` fails once, that element and everything after it is
    /// emitted, regardless of whether `pred` would hold again later.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![2, 4, 5, 6]);
    /// assert_eq!(trove.skip_while(|n| n % 2 == 0), vec![5, 6]);
    /// ```
    #[must_use]
    pub fn skip_while<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut skipping = true;
        let mut out = Vec::new();
        for item in &self.items {
            if skipping && pred(item) {
                continue;
            }
            skipping = false;
            out.push(item.clone());
        }
        out
    }

    /// Discards a prefix until `pred` first holds.
    ///
    /// From the first matching element onward (inclusive), everything is
    /// emitted, regardless of later predicate results.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// let trove = Trove::new(vec![1, 3, 4, 5]);
    /// assert_eq!(trove.skip_until(|n| n % 2 == 0), vec![4, 5]);
    /// ```
    #[must_use]
    pub fn skip_until<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut skipping = true;
        let mut out = Vec::new();
        for item in &self.items {
            if skipping && !pred(item) {
                continue;
            }
            skipping = false;
            out.push(item.clone());
        }
        out
    }
}
