// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A trait for types with a distinguished "absent" value.
///
/// The sentinel stands in for "no result" without a separate optional
/// wrapper: `first`, `max` and `min` return it for an empty collection, and
/// the min/max scan uses [`is_nil`](Sentinel::is_nil) to recognize that the
/// running best has not been claimed by a real element yet.
///
/// Implementations must keep the two methods consistent:
/// `Self::nil().is_nil()` is required to hold.
///
/// # Examples
///
/// ```
/// use trove_core::Sentinel;
///
/// #[derive(Clone)]
/// struct Reading {
///     sensor: String,
///     value: i32,
/// }
///
/// impl Sentinel for Reading {
///     fn nil() -> Self {
///         Reading { sensor: String::new(), value: 0 }
///     }
///
///     fn is_nil(&self) -> bool {
///         self.sensor.is_empty()
///     }
/// }
///
/// assert!(Reading::nil().is_nil());
/// ```
pub trait Sentinel: Sized {
    /// Constructs the sentinel value.
    fn nil() -> Self;

    /// Reports whether this value is the sentinel.
    fn is_nil(&self) -> bool;
}
