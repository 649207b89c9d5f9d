// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the trove collection toolkit.
//!
//! A single root [`TroveError`] covers every failure the toolkit can
//! surface. Failures are always returned synchronously to the immediate
//! caller; no operation retries internally.
//!
//! # Examples
//!
//! ```
//! use trove_core::{Result, TroveError};
//!
//! fn checked_lookup(len: usize, index: usize) -> Result<usize> {
//!     if index >= len {
//!         return Err(TroveError::index_out_of_range(index, len));
//!     }
//!     Ok(index)
//! }
//!
//! assert!(checked_lookup(3, 5).is_err());
//! ```

/// Root error type for all trove operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TroveError {
    /// An index-addressed access fell outside `[0, len)`.
    ///
    /// Returned instead of panicking, so out-of-range lookups stay
    /// catchable at the call site.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The collection length at the time of the access.
        len: usize,
    },

    /// An operation that divides by the element count ran on an empty
    /// collection.
    #[error("cannot compute {operation} of an empty collection")]
    EmptyCollection {
        /// Name of the aggregate that was requested.
        operation: &'static str,
    },
}

impl TroveError {
    /// Create an out-of-range error for the given index and length.
    #[must_use]
    pub const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an empty-collection error for the named aggregate.
    #[must_use]
    pub const fn empty_collection(operation: &'static str) -> Self {
        Self::EmptyCollection { operation }
    }
}

/// Specialized Result type for trove operations.
pub type Result<T> = core::result::Result<T, TroveError>;
