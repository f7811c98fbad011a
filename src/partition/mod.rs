//! Exhaustive partition search.
//!
//! Assigns every floor to exactly one elevator by enumerating all
//! permutations of the floor set and slicing each into contiguous chunks,
//! one per elevator. Every candidate partition is simulated; the fastest
//! wins. Cost is factorial in the floor count, which makes this an exact
//! baseline for small buildings rather than a scalable strategy.

mod runner;

pub use runner::{PartitionOptimizer, PartitionResult};
