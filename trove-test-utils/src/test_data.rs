// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;
use std::fmt::{self, Display};

use trove_core::{Comparable, Measured, Sentinel};

use crate::{animal::Animal, person::Person, plant::Plant};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl TestData {
    /// Name of the variant, handy as a grouping key.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Person(_) => "person",
            Self::Animal(_) => "animal",
            Self::Plant(_) => "plant",
        }
    }
}

impl Comparable for TestData {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Measured for TestData {
    type Metric = u32;

    fn measure(&self) -> u32 {
        match self {
            Self::Person(p) => p.measure(),
            Self::Animal(a) => a.measure(),
            Self::Plant(p) => p.measure(),
        }
    }
}

impl Sentinel for TestData {
    fn nil() -> Self {
        Self::Person(Person::nil())
    }

    fn is_nil(&self) -> bool {
        match self {
            Self::Person(p) => p.is_nil(),
            Self::Animal(a) => a.is_nil(),
            Self::Plant(p) => p.is_nil(),
        }
    }
}

pub fn person_alice() -> TestData {
    TestData::Person(Person::new("Alice".to_string(), 25))
}

pub fn person_bob() -> TestData {
    TestData::Person(Person::new("Bob".to_string(), 30))
}

pub fn person_charlie() -> TestData {
    TestData::Person(Person::new("Charlie".to_string(), 35))
}

pub fn person_diane() -> TestData {
    TestData::Person(Person::new("Diane".to_string(), 40))
}

pub fn animal_dog() -> TestData {
    TestData::Animal(Animal::new("Dog".to_string(), 4))
}

pub fn animal_spider() -> TestData {
    TestData::Animal(Animal::new("Spider".to_string(), 8))
}

pub fn animal_bird() -> TestData {
    TestData::Animal(Animal::new("Bird".to_string(), 2))
}

pub fn plant_rose() -> TestData {
    TestData::Plant(Plant::new("Rose".to_string(), 15))
}

pub fn plant_sunflower() -> TestData {
    TestData::Plant(Plant::new("Sunflower".to_string(), 180))
}

pub fn person(name: String, age: u32) -> TestData {
    TestData::Person(Person::new(name, age))
}

pub fn animal(name: String, legs: u32) -> TestData {
    TestData::Animal(Animal::new(name, legs))
}

pub fn plant(name: String, height: u32) -> TestData {
    TestData::Plant(Plant::new(name, height))
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person(p) => write!(f, "{}", p),
            TestData::Animal(a) => write!(f, "{}", a),
            TestData::Plant(p) => write!(f, "{}", p),
        }
    }
}
