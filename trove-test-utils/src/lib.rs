// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the trove collection toolkit.
//!
//! This crate provides domain fixture types implementing the full
//! capability contract, ready-made fixture values, random-data generators
//! and partition assertions. It is designed for use in development and
//! testing only, not for production code.
//!
//! # Key Types
//!
//! ## Fixtures
//!
//! - [`Person`] - name and age; measures as its age
//! - [`Animal`] - name and leg count; measures as its legs
//! - [`Plant`] - name and height; measures as its height
//!
//! Each fixture's nil sentinel is its all-default value, and comparison
//! follows the derived lexicographic order of its fields.
//!
//! ## `TestData`
//!
//! An enum mixing the three fixture kinds in one element type, for
//! scenarios exercising grouping and ordering across heterogeneous data:
//!
//! ```
//! use trove_test_utils::test_data::{person_alice, animal_dog};
//!
//! let alice = person_alice();
//! let dog = animal_dog();
//! assert_eq!(alice.kind(), "person");
//! assert_eq!(dog.kind(), "animal");
//! ```
//!
//! # Module Organization
//!
//! - `person`, `animal`, `plant` - specific fixture types
//! - `test_data` - the mixing enum and ready-made fixture values
//! - `helpers` - random-data generation and partition assertions

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod animal;
pub mod helpers;
pub mod person;
pub mod plant;
pub mod test_data;

pub use animal::Animal;
pub use helpers::{assert_exact_partition, random_name, random_people};
pub use person::Person;
pub use plant::Plant;
pub use test_data::TestData;
