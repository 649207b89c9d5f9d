// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::numeric::Numeric;

/// A trait for types that project into a numeric measure.
///
/// The measure is what `sum`, `average`, `max` and `min` aggregate over.
/// The associated [`Metric`](Measured::Metric) type carries the numeric
/// representation; for plain numbers it is simply `Self`, while domain
/// types pick whichever field ranks them.
///
/// # Examples
///
/// ```
/// use trove_core::Measured;
///
/// #[derive(Clone)]
/// struct Invoice {
///     total_cents: i64,
/// }
///
/// impl Measured for Invoice {
///     type Metric = i64;
///
///     fn measure(&self) -> i64 {
///         self.total_cents
///     }
/// }
///
/// let invoice = Invoice { total_cents: 1250 };
/// assert_eq!(invoice.measure(), 1250);
/// ```
pub trait Measured {
    /// The numeric type this value projects into.
    type Metric: Numeric;

    /// Returns the numeric measure of this value.
    fn measure(&self) -> Self::Metric;
}
