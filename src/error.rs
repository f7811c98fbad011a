//! Crate error type.
//!
//! Runtime failures are rare by design: loading away from the lobby is a
//! programming-invariant violation (the standard step cycle can never
//! reach it), and the genetic search only fails when its entire final
//! population leaves some floor unserved. Everything else — empty crowds,
//! empty priority lists, full cabins — is a no-op, not an error.

use thiserror::Error;

use crate::sim::Floor;

/// The error type for simulation and optimization runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ElevateError {
    /// `load()` was invoked while the elevator was not at the ground floor.
    ///
    /// Not caught or retried anywhere; it propagates and aborts the run.
    #[error("cannot load at floor {floor}: loading is only possible at the ground floor")]
    LoadAboveGround {
        /// The floor the elevator was at when loading was attempted.
        floor: Floor,
    },

    /// Every candidate in the genetic search's final population failed the
    /// floor-coverage requirement, so no returnable policy exists.
    #[error("genetic search produced no policy covering every floor")]
    NoViablePolicy,
}

/// Shorthand result type for `u-elevate`.
pub type Result<T> = std::result::Result<T, ElevateError>;
