// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trait bundling the full capability contract for collection elements.

use crate::{Comparable, Measured, Sentinel};

/// Combined trait naming the complete capability contract.
///
/// Most operations only need one capability and take the narrowest bound
/// ([`Comparable`] for membership tests, [`Measured`] for aggregation,
/// [`Sentinel`] for empty-case results). `Element` bundles all of them plus
/// `Clone` for call sites that exercise the whole surface, so a single
/// bound can be written instead of four.
///
/// # Trait Hierarchy Position
///
/// ```text
/// Comparable   Measured   Sentinel   Clone
///      └──────────┴──────────┴─────────┘
///                 Element (this trait)
/// ```
///
/// The blanket implementation makes every type satisfying the four bounds
/// an `Element` automatically; there is nothing to implement by hand.
///
/// # Examples
///
/// ```
/// use trove_core::Element;
///
/// fn should_replace<T: Element>(best: &T, candidate: &T) -> bool {
///     // Any contract capability is available through the one bound.
///     best.is_nil() || candidate.measure() > best.measure()
/// }
///
/// assert!(should_replace(&0_i32, &5_i32));
/// assert!(!should_replace(&7_i32, &5_i32));
/// ```
pub trait Element: Comparable + Measured + Sentinel + Clone {}

/// Blanket implementation for all types satisfying the contract.
impl<T> Element for T where T: Comparable + Measured + Sentinel + Clone {}
