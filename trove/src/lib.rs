// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Expressive query operations over in-memory sequences.
//!
//! The central type is [`Trove<T>`], an ordered, owned sequence of elements
//! offering transformation, filtering, aggregation, grouping, windowing and
//! ordering without hand-written loops. Elements opt into capabilities
//! through the contract traits of `trove-core`: [`Comparable`] for
//! equality and membership, [`Measured`] for numeric aggregation and
//! [`Sentinel`] for the empty-case result of `first`, `max` and `min`.
//!
//! Every operation runs synchronously on the calling thread. Only
//! [`Trove::sort`] reorders the container's own storage; all other
//! transformations return a fresh `Vec<T>` and leave the source unchanged.
//!
//! # Examples
//!
//! ```
//! use trove::Trove;
//!
//! let numbers = Trove::new(vec![3, 1, 4, 1, 5]);
//!
//! assert_eq!(numbers.sum(), 14);
//! assert_eq!(numbers.filter(|n| *n > 2), vec![3, 4, 5]);
//! assert_eq!(numbers.unique(), vec![3, 1, 4, 5]);
//! ```
//!
//! Domain types join in by implementing the contract:
//!
//! ```
//! use core::cmp::Ordering;
//! use trove::{Comparable, Measured, Sentinel, Trove};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Parcel {
//!     label: String,
//!     grams: u32,
//! }
//!
//! impl Comparable for Parcel {
//!     fn compare(&self, other: &Self) -> Ordering {
//!         self.label.cmp(&other.label)
//!     }
//! }
//!
//! impl Measured for Parcel {
//!     type Metric = u32;
//!
//!     fn measure(&self) -> u32 {
//!         self.grams
//!     }
//! }
//!
//! impl Sentinel for Parcel {
//!     fn nil() -> Self {
//!         Parcel { label: String::new(), grams: 0 }
//!     }
//!
//!     fn is_nil(&self) -> bool {
//!         self.label.is_empty()
//!     }
//! }
//!
//! let parcels = Trove::new(vec![
//!     Parcel { label: "a".into(), grams: 250 },
//!     Parcel { label: "b".into(), grams: 900 },
//! ]);
//!
//! assert_eq!(parcels.max().grams, 900);
//! ```
//!
//! # Module Organization
//!
//! - `trove` - the [`Trove<T>`] container, construction and access
//! - `aggregate` - `sum`, `average`, `max`, `min`
//! - `predicate` - `every`, `some`, `filter`, `reject`, `partition`, `contains`
//! - `transform` - `map`, `each`, `flat_map`, `group_by`, `key_by`, `unique`
//! - `window` - `take_while`, `take_until`, `skip_while`, `skip_until`
//! - `ordering` - in-place `sort`
//! - `list` - [`List<T>`], a minimal bounds-checked indexed container

mod aggregate;
pub mod list;
mod ordering;
mod predicate;
mod transform;
mod trove;
mod window;

pub use self::list::List;
pub use self::trove::Trove;
pub use trove_core::{Comparable, Element, Measured, Numeric, Result, Sentinel, TroveError};
