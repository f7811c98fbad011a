//! Partition enumeration loop.

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::sim::{Building, Crowd, Elevator, Floor, Priorities, SimConfig, Time};

/// Result of an exhaustive partition search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionResult {
    /// The winning partition: one ordered floor list per elevator index.
    pub partition: Vec<Vec<Floor>>,

    /// Simulated makespan of the winning partition.
    pub best_time: Time,

    /// Number of partitions simulated (`floor_count!` permutations).
    pub evaluations: usize,
}

/// Finds the fastest static floor-to-elevator partition by brute force.
///
/// # Usage
///
/// ```
/// use u_elevate::partition::PartitionOptimizer;
/// use u_elevate::sim::{Crowd, SimConfig};
///
/// let config = SimConfig::default()
///     .with_floor_count(3)
///     .with_elevator_count(1)
///     .with_capacity(3);
/// let crowd: Crowd = [(1, 1), (2, 1), (3, 1)].into_iter().collect();
/// let result = PartitionOptimizer::new(crowd, config).optimize().unwrap();
/// assert_eq!(result.partition, vec![vec![1, 2, 3]]);
/// ```
pub struct PartitionOptimizer {
    crowd: Crowd,
    config: SimConfig,
}

impl PartitionOptimizer {
    /// Creates an optimizer over the given crowd template.
    pub fn new(crowd: Crowd, config: SimConfig) -> Self {
        Self { crowd, config }
    }

    /// Enumerates every floor permutation, simulates the partition it
    /// induces, and returns the minimum-time partition (first found wins
    /// ties).
    pub fn optimize(&self) -> Result<PartitionResult> {
        let floors: Vec<Floor> = (1..=self.config.floor_count).collect();

        let mut best: Option<(Vec<Vec<Floor>>, Time)> = None;
        let mut evaluations = 0usize;
        // Priority elevators never sample the rng; the seed is arbitrary.
        let mut rng = StdRng::seed_from_u64(0);

        for order in floors.iter().copied().permutations(floors.len()) {
            let partition = split_into_chunks(&order, self.config.elevator_count);
            let elevators = partition
                .iter()
                .enumerate()
                .map(|(i, chunk)| {
                    Elevator::priority(i, Priorities::from_floors(chunk.iter().copied()))
                })
                .collect();
            let mut building = Building::new(elevators, self.crowd.clone(), self.config);
            let time = building.run(&mut rng)?;
            evaluations += 1;

            let improved = match &best {
                None => true,
                Some((_, best_time)) => time < *best_time,
            };
            if improved {
                best = Some((partition, time));
            }
        }

        let (partition, best_time) =
            best.expect("floor set has at least one permutation");
        Ok(PartitionResult {
            partition,
            best_time,
            evaluations,
        })
    }
}

/// Slices `order` into `parts` contiguous chunks of `len / parts` floors,
/// the last chunk absorbing any remainder.
///
/// With more elevators than floors the leading chunks come out empty and
/// the final elevator serves everything.
fn split_into_chunks(order: &[Floor], parts: usize) -> Vec<Vec<Floor>> {
    let chunk_len = order.len() / parts;
    let mut chunks = Vec::with_capacity(parts);
    for i in 0..parts - 1 {
        chunks.push(order[i * chunk_len..(i + 1) * chunk_len].to_vec());
    }
    chunks.push(order[(parts - 1) * chunk_len..].to_vec());
    chunks
}
