//! Simulation configuration.
//!
//! [`SimConfig`] holds the building geometry and the per-action time costs.

use super::Time;

/// Configuration for one simulated building.
///
/// All parameters are required by the model; the defaults describe a small
/// six-floor building and exist mainly so tests and examples can start from
/// something sensible.
///
/// # Builder Pattern
///
/// ```
/// use u_elevate::sim::SimConfig;
///
/// let config = SimConfig::default()
///     .with_floor_count(8)
///     .with_elevator_count(3)
///     .with_capacity(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of serviced floors above ground. Floors are numbered
    /// `1..=floor_count`; the lobby is floor 0.
    pub floor_count: usize,

    /// Number of elevators sharing the crowd.
    pub elevator_count: usize,

    /// Maximum riders a single elevator can carry at once.
    pub capacity: usize,

    /// Time to travel one floor. Moving `d` floors costs `move_time * d`.
    pub move_time: Time,

    /// Flat cost of one loading stop, regardless of how many riders board.
    pub load_time: Time,

    /// Flat cost of one unloading stop, regardless of how many riders leave.
    pub unload_time: Time,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floor_count: 6,
            elevator_count: 3,
            capacity: 10,
            move_time: 1,
            load_time: 10,
            unload_time: 4,
        }
    }
}

impl SimConfig {
    /// Sets the number of serviced floors.
    pub fn with_floor_count(mut self, n: usize) -> Self {
        self.floor_count = n;
        self
    }

    /// Sets the number of elevators.
    pub fn with_elevator_count(mut self, n: usize) -> Self {
        self.elevator_count = n;
        self
    }

    /// Sets the per-elevator rider capacity.
    pub fn with_capacity(mut self, n: usize) -> Self {
        self.capacity = n;
        self
    }

    /// Sets the per-floor travel cost.
    pub fn with_move_time(mut self, t: Time) -> Self {
        self.move_time = t;
        self
    }

    /// Sets the flat loading cost.
    pub fn with_load_time(mut self, t: Time) -> Self {
        self.load_time = t;
        self
    }

    /// Sets the flat unloading cost.
    pub fn with_unload_time(mut self, t: Time) -> Self {
        self.unload_time = t;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.floor_count == 0 {
            return Err("floor_count must be at least 1".into());
        }
        if self.elevator_count == 0 {
            return Err("elevator_count must be at least 1".into());
        }
        if self.capacity == 0 {
            return Err("capacity must be at least 1".into());
        }
        Ok(())
    }
}
