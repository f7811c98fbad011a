//! The elevator state machine.
//!
//! An [`Elevator`] cycles through load → ascend → unload → return: it loads
//! riders at the ground floor, visits their destinations in increasing
//! order, drops everyone off, and returns to the lobby for the next batch.
//! [`step`](Elevator::step) performs exactly one of those transitions and
//! returns its simulated cost, which is how the [`Building`](super::Building)
//! scheduler interleaves several elevators on one clock.
//!
//! Loading is the policy seam. [`LoadPolicy::Random`] boards a uniform
//! sample of whoever is waiting; [`LoadPolicy::Priority`] boards floors in
//! a configured preference order. Both optimizers search over priority
//! policies.

use rand::Rng;

use super::{Crowd, Floor, SimConfig, Time, GROUND};
use crate::error::{ElevateError, Result};

/// An ordered loading preference for a [`LoadPolicy::Priority`] elevator.
///
/// A policy is a sequence of floor-groups. During loading, groups are
/// visited in order and riders are taken from the **first floor of each
/// group only**, clamped to the remaining capacity. Floors after the first
/// within a group are never consulted — a narrow but load-bearing rule
/// that both optimizers sidestep by emitting singleton groups (see
/// [`from_floors`](Priorities::from_floors)).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priorities {
    groups: Vec<Vec<Floor>>,
}

impl Priorities {
    /// Creates a policy from explicit floor-groups.
    pub fn new(groups: Vec<Vec<Floor>>) -> Self {
        Self { groups }
    }

    /// Creates a policy where each floor forms its own singleton group, so
    /// every listed floor is loadable, in the order given.
    ///
    /// This is the encoding used for partition chunks and genetic
    /// floor-tuples.
    pub fn from_floors<I: IntoIterator<Item = Floor>>(floors: I) -> Self {
        Self {
            groups: floors.into_iter().map(|f| vec![f]).collect(),
        }
    }

    /// The ordered floor-groups of this policy.
    pub fn groups(&self) -> &[Vec<Floor>] {
        &self.groups
    }
}

/// How an elevator fills its cabin at the ground floor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadPolicy {
    /// Board a uniform without-replacement sample of all waiting riders.
    Random,
    /// Board floors in the order given by a [`Priorities`] policy.
    Priority(Priorities),
}

/// One elevator: its position, cabin contents, and loading policy.
///
/// Elevators do not own the crowd; the building lends it for the duration
/// of each action, so one crowd can be shared by the whole bank without
/// aliasing.
#[derive(Debug, Clone)]
pub struct Elevator {
    index: usize,
    floor: Floor,
    contents: Vec<Floor>,
    delivered: usize,
    policy: LoadPolicy,
}

impl Elevator {
    /// Creates an elevator that loads random riders.
    pub fn random(index: usize) -> Self {
        Self::with_policy(index, LoadPolicy::Random)
    }

    /// Creates an elevator that loads by floor priority.
    pub fn priority(index: usize, priorities: Priorities) -> Self {
        Self::with_policy(index, LoadPolicy::Priority(priorities))
    }

    fn with_policy(index: usize, policy: LoadPolicy) -> Self {
        Self {
            index,
            floor: GROUND,
            contents: Vec::new(),
            delivered: 0,
            policy,
        }
    }

    /// This elevator's identity within the building.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current floor position.
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Destinations of the riders currently on board.
    pub fn contents(&self) -> &[Floor] {
        &self.contents
    }

    /// Riders delivered to their destination so far this run.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Returns the elevator to its initial state for a fresh run.
    pub(crate) fn reset(&mut self) {
        self.floor = GROUND;
        self.contents.clear();
        self.delivered = 0;
    }

    /// Boards riders from the crowd according to this elevator's policy and
    /// returns the flat loading cost.
    ///
    /// Only legal at the ground floor; anywhere else this is
    /// [`ElevateError::LoadAboveGround`]. An empty crowd, an exhausted
    /// policy, or a full cabin all load zero riders at the same flat cost.
    pub fn load<R: Rng>(
        &mut self,
        crowd: &mut Crowd,
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<Time> {
        if self.floor != GROUND {
            return Err(ElevateError::LoadAboveGround { floor: self.floor });
        }

        let remaining = config.capacity.saturating_sub(self.contents.len());
        match &self.policy {
            LoadPolicy::Random => {
                let waiting = crowd.flatten();
                let boarded: Vec<Floor> = if remaining < waiting.len() {
                    rand::seq::index::sample(rng, waiting.len(), remaining)
                        .into_iter()
                        .map(|i| waiting[i])
                        .collect()
                } else {
                    waiting
                };
                for &dest in &boarded {
                    crowd.take(dest, 1);
                }
                self.contents.extend(boarded);
            }
            LoadPolicy::Priority(priorities) => {
                let mut remaining = remaining;
                for group in priorities.groups() {
                    if remaining == 0 {
                        break;
                    }
                    // Only the first floor of each group is ever loaded.
                    let Some(&floor) = group.first() else { continue };
                    let take = remaining.min(crowd.count(floor));
                    crowd.take(floor, take);
                    self.contents.extend(std::iter::repeat(floor).take(take));
                    remaining -= take;
                }
            }
        }
        Ok(config.load_time)
    }

    /// Moves directly to `target` and returns the travel cost:
    /// `move_time × |floor − target|`.
    pub fn move_to(&mut self, target: Floor, config: &SimConfig) -> Time {
        let distance = self.floor.abs_diff(target);
        self.floor = target;
        config.move_time * distance as Time
    }

    /// Drops off every rider destined for the current floor and returns
    /// the flat unloading cost.
    pub fn unload(&mut self, config: &SimConfig) -> Time {
        let here = self.floor;
        let before = self.contents.len();
        self.contents.retain(|&dest| dest != here);
        self.delivered += before - self.contents.len();
        config.unload_time
    }

    /// Performs one state-machine transition and returns its cost.
    ///
    /// - Empty cabin away from the lobby: return to the ground floor.
    /// - Empty cabin at the lobby: load.
    /// - Otherwise: move up to the nearest onboard destination, or unload
    ///   here once reached.
    ///
    /// Destinations are therefore visited in increasing order, and the
    /// ground-floor check inside [`load`](Self::load) can never fail from
    /// this cycle.
    pub fn step<R: Rng>(
        &mut self,
        crowd: &mut Crowd,
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<Time> {
        if self.contents.is_empty() {
            if self.floor != GROUND {
                return Ok(self.move_to(GROUND, config));
            }
            return self.load(crowd, config, rng);
        }

        let nearest = self
            .contents
            .iter()
            .copied()
            .min()
            .expect("contents checked non-empty");
        if self.floor < nearest {
            Ok(self.move_to(nearest, config))
        } else {
            Ok(self.unload(config))
        }
    }

    /// True once the shared crowd is exhausted **and** this cabin is empty.
    ///
    /// An elevator still carrying riders is not done even when nobody is
    /// left waiting; it must finish unloading first.
    pub fn is_done(&self, crowd: &Crowd) -> bool {
        crowd.is_empty() && self.contents.is_empty()
    }
}
