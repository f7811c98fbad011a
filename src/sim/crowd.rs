//! The waiting crowd.
//!
//! [`Crowd`] is a multiset of riders keyed by destination floor. One crowd
//! is shared by every elevator within a single simulation run; the
//! [`Building`](super::Building) clones its template at the start of each
//! run so repeated runs and optimizer trials never contaminate each other.

use std::collections::BTreeMap;

use super::Floor;

/// Riders waiting at the lobby, counted per destination floor.
///
/// A floor with no entry reads as zero waiting riders. Counts never go
/// negative: taking more riders than are waiting is a programming error
/// and panics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crowd {
    counts: BTreeMap<Floor, usize>,
}

impl Crowd {
    /// Creates an empty crowd.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of riders waiting for `floor`.
    pub fn set(&mut self, floor: Floor, count: usize) {
        if count == 0 {
            self.counts.remove(&floor);
        } else {
            self.counts.insert(floor, count);
        }
    }

    /// Returns the number of riders waiting for `floor` (zero if none).
    pub fn count(&self, floor: Floor) -> usize {
        self.counts.get(&floor).copied().unwrap_or(0)
    }

    /// Total riders still waiting, across all floors.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// True when nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Removes `n` riders waiting for `floor`.
    ///
    /// # Panics
    /// Panics if fewer than `n` riders are waiting for `floor` — the
    /// caller must clamp its take to [`count`](Self::count) first.
    pub fn take(&mut self, floor: Floor, n: usize) {
        if n == 0 {
            return;
        }
        let available = self.count(floor);
        assert!(
            n <= available,
            "taking {n} riders from floor {floor} with only {available} waiting"
        );
        self.set(floor, available - n);
    }

    /// Flattens the crowd into a multiset of destination floors, one entry
    /// per waiting rider, in ascending floor order.
    ///
    /// Used by random loading to sample riders uniformly.
    pub fn flatten(&self) -> Vec<Floor> {
        self.counts
            .iter()
            .flat_map(|(&floor, &count)| std::iter::repeat(floor).take(count))
            .collect()
    }
}

impl FromIterator<(Floor, usize)> for Crowd {
    fn from_iter<I: IntoIterator<Item = (Floor, usize)>>(iter: I) -> Self {
        let mut crowd = Crowd::new();
        for (floor, count) in iter {
            crowd.set(floor, crowd.count(floor) + count);
        }
        crowd
    }
}
