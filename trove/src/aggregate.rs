// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Numeric aggregation over the element measures.

use num_traits::{One, Zero};
use trove_core::{Measured, Result, Sentinel, TroveError};

use crate::Trove;

impl<T: Measured> Trove<T> {
    /// Sums the measures of all elements.
    ///
    /// An empty trove sums to the additive identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// assert_eq!(Trove::new(vec![1, 2, 3, 4]).sum(), 10);
    /// assert_eq!(Trove::<i32>::new(vec![]).sum(), 0);
    /// ```
    #[must_use]
    pub fn sum(&self) -> T::Metric {
        self.items
            .iter()
            .fold(T::Metric::zero(), |acc, item| acc + item.measure())
    }

    /// Divides the sum of measures by the element count.
    ///
    /// Integer metrics truncate toward zero, matching native integer
    /// division. The element count is accumulated in metric space, so no
    /// lossy length conversion takes place.
    ///
    /// # Errors
    ///
    /// Returns [`TroveError::EmptyCollection`] when the trove is empty;
    /// the division has no defined result there.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// assert_eq!(Trove::new(vec![1, 2, 3, 4]).average().unwrap(), 2);
    /// assert!(Trove::<i32>::new(vec![]).average().is_err());
    /// ```
    pub fn average(&self) -> Result<T::Metric> {
        if self.items.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("average requested on an empty trove");
            return Err(TroveError::empty_collection("average"));
        }

        let count = self
            .items
            .iter()
            .fold(T::Metric::zero(), |acc, _| acc + T::Metric::one());

        Ok(self.sum() / count)
    }

    /// Shorthand for [`average`](Trove::average).
    ///
    /// # Errors
    ///
    /// Returns [`TroveError::EmptyCollection`] when the trove is empty.
    pub fn avg(&self) -> Result<T::Metric> {
        self.average()
    }
}

impl<T: Measured + Sentinel + Clone> Trove<T> {
    /// Returns the element with the greatest measure.
    ///
    /// A single left-to-right scan tracks the best element so far, seeded
    /// with the nil sentinel; the first element always claims the seat and
    /// later elements only take it over on a strictly greater measure, so
    /// ties keep the earliest element. An empty trove returns the nil
    /// sentinel rather than failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// assert_eq!(Trove::new(vec![2, 9, 4]).max(), 9);
    /// assert_eq!(Trove::<i32>::new(vec![]).max(), 0);
    /// ```
    #[must_use]
    pub fn max(&self) -> T {
        let mut best = T::nil();
        for item in &self.items {
            if best.is_nil() || item.measure() > best.measure() {
                best = item.clone();
            }
        }
        best
    }

    /// Returns the element with the smallest measure.
    ///
    /// Mirror image of [`max`](Trove::max): strict `<` comparisons only,
    /// ties keep the earliest element, empty input yields the nil sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use trove::Trove;
    ///
    /// assert_eq!(Trove::new(vec![2, 9, 4]).min(), 2);
    /// ```
    #[must_use]
    pub fn min(&self) -> T {
        let mut best = T::nil();
        for item in &self.items {
            if best.is_nil() || item.measure() < best.measure() {
                best = item.clone();
            }
        }
        best
    }
}
