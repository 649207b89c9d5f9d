// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A minimal index-addressable container.
//!
//! [`List<T>`] is a plain resizable-array wrapper: get, set, insert,
//! remove, append and prepend by index, nothing more. It carries none of
//! the capability-bounded query surface of [`Trove`](crate::Trove); its
//! one commitment is that every index-addressed operation is
//! bounds-checked and fails with a typed error instead of panicking.

use trove_core::{Result, TroveError};

/// A bounds-checked resizable-array wrapper.
///
/// # Examples
///
/// ```
/// use trove::List;
///
/// let mut list = List::new(vec!["a", "b"]);
/// list.append("c").prepend("z");
/// assert_eq!(list.len(), 4);
/// assert_eq!(*list.get(0).unwrap(), "z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> List<T> {
    /// Wraps the given sequence without copying it.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `index` addresses an existing item.
    #[must_use]
    pub fn exists(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Borrows the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TroveError::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, len = self.items.len(), "get out of range");
            TroveError::index_out_of_range(index, self.items.len())
        })
    }

    /// Replaces the item at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`TroveError::IndexOutOfRange`] when `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<&mut Self> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(self)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, len, "set out of range");
                Err(TroveError::index_out_of_range(index, len))
            }
        }
    }

    /// Removes and returns the item at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns [`TroveError::IndexOutOfRange`] when `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, len = self.items.len(), "remove out of range");
            return Err(TroveError::index_out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Adds `value` at the end of the list.
    pub fn append(&mut self, value: T) -> &mut Self {
        self.items.push(value);
        self
    }

    /// Adds `value` at the beginning of the list.
    pub fn prepend(&mut self, value: T) -> &mut Self {
        self.items.insert(0, value);
        self
    }

    /// Adds `value` at `index`, shifting the tail right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`TroveError::IndexOutOfRange`] when `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut Self> {
        if index > self.items.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, len = self.items.len(), "insert out of range");
            return Err(TroveError::index_out_of_range(index, self.items.len()));
        }
        self.items.insert(index, value);
        Ok(self)
    }

    /// Borrows the underlying storage as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list and returns the owned storage.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}
