//! Genetic search over per-elevator floor assignments.
//!
//! When the floor count makes [`partition`](crate::partition) enumeration
//! infeasible, this module searches the policy space evolutionarily. A
//! candidate assigns each elevator an (unordered, possibly overlapping)
//! subset of the floors; fitness is the simulated makespan, with an
//! infinite penalty for candidates that leave any floor unserved.
//!
//! Two behaviors are deliberate and preserved from the reference strategy,
//! not accidents to fix:
//!
//! - Reproduction **appends** offspring to the surviving population rather
//!   than replacing it, so the population grows within each generation and
//!   is pruned back at the start of the next.
//! - Breeding resamples both parent tuples gene-by-gene and takes the
//!   deduplicated union, so children tend to cover more floors than either
//!   parent.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: population sizing, survival, gene pass rate, seed
//! - [`GeneticOptimizer`]: the prune/reproduce loop
//! - [`GeneticResult`]: winning assignment plus run statistics

mod config;
mod runner;

pub use config::GeneticConfig;
pub use runner::{GeneticOptimizer, GeneticResult};
