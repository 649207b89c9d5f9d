// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::ops::{Add, Div};
use num_traits::{One, Zero};

/// Bound describing the arithmetic a metric type must support.
///
/// Aggregation needs an additive identity to seed `sum`, a multiplicative
/// identity to count elements in metric space for `average`, by-value
/// addition and division, and a partial order for min/max ranking. All
/// primitive integer and float types satisfy the bound out of the box via
/// `num-traits`.
///
/// The trait is blanket-implemented; it exists purely as a named alias so
/// operation signatures stay readable.
///
/// # Examples
///
/// ```
/// use trove_core::Numeric;
///
/// fn halve<N: Numeric>(n: N) -> N {
///     n / (N::one() + N::one())
/// }
///
/// assert_eq!(halve(10_i64), 5);
/// assert_eq!(halve(3.0_f64), 1.5);
/// ```
pub trait Numeric:
    Copy + PartialOrd + Zero + One + Add<Output = Self> + Div<Output = Self>
{
}

impl<N> Numeric for N where
    N: Copy + PartialOrd + Zero + One + Add<Output = Self> + Div<Output = Self>
{
}
