//! # Wordhood
//!
//! Generates every word reachable from a source word within an edit-distance
//! budget, for building fuzzy-search test queries and typo dictionaries.
//!
//! ## Features
//!
//! - Level-by-level expansion with deletion, substitution and insertion
//! - Configurable alphabet (lowercase ASCII by default)
//! - Frontier or cumulative result modes
//! - Optional parallel expansion of each level
//! - A benchmark harness for external search executables
//! - A CSV to Parquet converter for the harness datasets

pub mod alphabet;
pub mod bench;
pub mod cli;
pub mod convert;
pub mod error;
pub mod neighborhood;

pub mod prelude {
    pub use crate::alphabet::{Alphabet, DEFAULT_ALPHABET};
    pub use crate::error::{Result, WordhoodError};
    pub use crate::neighborhood::{
        Distance, ExpansionMode, NeighborhoodConfig, NeighborhoodGenerator, WordSet, generate,
    };
}
