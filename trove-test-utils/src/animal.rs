// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;
use std::fmt::{self, Display};

use trove_core::{Comparable, Measured, Sentinel};

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

impl Animal {
    #[must_use]
    pub const fn new(name: String, legs: u32) -> Self {
        Self { name, legs }
    }
}

impl Comparable for Animal {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Measured for Animal {
    type Metric = u32;

    fn measure(&self) -> u32 {
        self.legs
    }
}

impl Sentinel for Animal {
    fn nil() -> Self {
        Self::default()
    }

    fn is_nil(&self) -> bool {
        self.name.is_empty() && self.legs == 0
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Animal[name={}, legs={}]", self.name, self.legs)
    }
}
