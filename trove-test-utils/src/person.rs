// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;
use std::fmt::{self, Display};

use trove_core::{Comparable, Measured, Sentinel};

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    #[must_use]
    pub const fn new(name: String, age: u32) -> Self {
        Self { name, age }
    }
}

impl Comparable for Person {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Measured for Person {
    type Metric = u32;

    fn measure(&self) -> u32 {
        self.age
    }
}

impl Sentinel for Person {
    fn nil() -> Self {
        Self::default()
    }

    fn is_nil(&self) -> bool {
        self.name.is_empty() && self.age == 0
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person[name={}, age={}]", self.name, self.age)
    }
}
