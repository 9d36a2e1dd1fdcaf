//! Edit-distance neighborhood generation.
//!
//! The neighborhood of a word is produced breadth-first, one edit level at a
//! time, using single-character deletion, substitution and insertion over a
//! configurable [`Alphabet`](crate::alphabet::Alphabet).

pub mod edits;
pub mod generator;

pub use edits::{EditOperation, single_edits};
pub use generator::{
    Distance, ExpansionMode, LevelStats, Neighborhood, NeighborhoodConfig, NeighborhoodGenerator,
    WordSet, expand, generate,
};
