//! Elevator dispatch simulation and loading-policy optimization.
//!
//! Simulates a building with a fixed number of floors, a crowd of riders
//! waiting at the lobby, and a bank of elevators that share that crowd.
//! On top of the simulator sit two searches over rider-loading policies:
//!
//! - **Simulation (`sim`)**: the [`Crowd`](sim::Crowd), the
//!   [`Elevator`](sim::Elevator) load/move/unload state machine, and the
//!   [`Building`](sim::Building) logical-clock scheduler that interleaves
//!   elevators by least cumulative time and reports the makespan.
//! - **Partition search (`partition`)**: exhaustive enumeration of floor
//!   partitions — every elevator is assigned a disjoint slice of the floor
//!   set, every permutation is simulated, the fastest wins. Factorial in
//!   the floor count; an exact baseline for small buildings.
//! - **Genetic search (`genetic`)**: evolutionary search over per-elevator
//!   floor assignments when exhaustive enumeration is infeasible.
//!   Assignments may overlap; candidates that leave a floor unserved are
//!   penalized with infinite fitness.
//!
//! # Determinism
//!
//! The engine is single-threaded and synchronous. Concurrent elevator
//! progress is simulated by the scheduler's least-time interleaving, not
//! by threads. All randomness (random loading, gene sampling, survivor
//! shuffling) flows through injectable [`rand::Rng`] sources, so a fixed
//! seed reproduces a run exactly.

pub mod error;
pub mod genetic;
pub mod partition;
pub mod sim;

pub use error::{ElevateError, Result};
