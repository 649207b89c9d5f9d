// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;
use std::fmt::{self, Display};

use trove_core::{Comparable, Measured, Sentinel};

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Plant {
    pub name: String,
    pub height: u32,
}

impl Plant {
    #[must_use]
    pub const fn new(name: String, height: u32) -> Self {
        Self { name, height }
    }
}

impl Comparable for Plant {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Measured for Plant {
    type Metric = u32;

    fn measure(&self) -> u32 {
        self.height
    }
}

impl Sentinel for Plant {
    fn nil() -> Self {
        Self::default()
    }

    fn is_nil(&self) -> bool {
        self.name.is_empty() && self.height == 0
    }
}

impl Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plant[name={}, height={}]", self.name, self.height)
    }
}
