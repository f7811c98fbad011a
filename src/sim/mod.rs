//! Building simulation engine.
//!
//! Models one building: a [`Crowd`] of riders waiting at the lobby (keyed
//! by destination floor), a bank of [`Elevator`]s that load from the shared
//! crowd, and the [`Building`] scheduler that interleaves elevator actions
//! on a logical clock until everyone has been delivered.
//!
//! # Key Types
//!
//! - [`SimConfig`]: building geometry and per-action time costs
//! - [`Crowd`]: floor → waiting-rider-count multiset
//! - [`Elevator`]: the load/move/unload state machine, with random and
//!   priority loading variants
//! - [`Priorities`]: ordered floor-groups controlling priority loading
//! - [`Building`]: least-cumulative-time scheduler returning the makespan

mod building;
mod config;
mod crowd;
mod elevator;

pub use building::Building;
pub use config::SimConfig;
pub use crowd::Crowd;
pub use elevator::{Elevator, LoadPolicy, Priorities};

/// A floor number. `0` is the ground floor (lobby); riders wait for
/// destinations `1..=floor_count`.
pub type Floor = usize;

/// Simulated elapsed time, in abstract ticks.
pub type Time = u64;

/// The ground floor, where all loading happens.
pub const GROUND: Floor = 0;
