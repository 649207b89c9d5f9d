// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Capability contract implementations for primitive types.
//!
//! Numbers measure as themselves and use zero as the nil sentinel, so a
//! collection of plain integers or floats aggregates without any wrapper
//! type. Strings only take part in comparison-based operations.

use core::cmp::Ordering;

use crate::{Comparable, Measured, Sentinel};

macro_rules! impl_integer_contract {
    ($($ty:ty),* $(,)?) => {$(
        impl Comparable for $ty {
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }

        impl Measured for $ty {
            type Metric = $ty;

            fn measure(&self) -> Self::Metric {
                *self
            }
        }

        impl Sentinel for $ty {
            fn nil() -> Self {
                0
            }

            fn is_nil(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

impl_integer_contract!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_contract {
    ($($ty:ty),* $(,)?) => {$(
        impl Comparable for $ty {
            // total_cmp so NaN does not poison ordering
            fn compare(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }

        impl Measured for $ty {
            type Metric = $ty;

            fn measure(&self) -> Self::Metric {
                *self
            }
        }

        impl Sentinel for $ty {
            fn nil() -> Self {
                0.0
            }

            fn is_nil(&self) -> bool {
                *self == 0.0
            }
        }
    )*};
}

impl_float_contract!(f32, f64);

impl Comparable for String {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl Comparable for &str {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}
