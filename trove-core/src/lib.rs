// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod comparable;
pub mod element;
pub mod error;
pub mod measured;
pub mod numeric;
pub mod primitives;
pub mod sentinel;

pub use self::comparable::Comparable;
pub use self::element::Element;
pub use self::error::{Result, TroveError};
pub use self::measured::Measured;
pub use self::numeric::Numeric;
pub use self::sentinel::Sentinel;
