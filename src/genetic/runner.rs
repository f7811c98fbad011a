//! Genetic prune/reproduce loop.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

use super::config::GeneticConfig;
use crate::error::{ElevateError, Result};
use crate::sim::{Building, Crowd, Elevator, Floor, Priorities, SimConfig, Time};

/// One candidate: an unordered floor assignment per elevator slot.
type Candidate = Vec<Vec<Floor>>;

/// Result of a genetic policy search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticResult {
    /// The winning assignment: one floor-tuple per elevator index. Tuples
    /// may overlap; together they cover every floor.
    pub best: Vec<Vec<Floor>>,

    /// Simulated makespan of the winning assignment.
    pub best_time: Time,

    /// Best fitness in the population after each generation's pruning
    /// (infinite while no candidate covers every floor yet).
    pub fitness_history: Vec<f64>,

    /// Number of building simulations run.
    pub evaluations: usize,

    /// Population size after the final reproduction round.
    pub final_population: usize,
}

/// Searches loading policies evolutionarily.
///
/// Fitness is the simulated makespan of a building whose elevators use the
/// candidate's floor-tuples as priority policies (each floor its own
/// group). A candidate whose tuples jointly miss any floor of the draw
/// pool scores [`f64::INFINITY`], keeping the search total without
/// special-casing unservable buildings mid-loop.
///
/// # Usage
///
/// ```
/// use u_elevate::genetic::{GeneticConfig, GeneticOptimizer};
/// use u_elevate::sim::{Crowd, SimConfig};
///
/// let sim = SimConfig::default()
///     .with_floor_count(3)
///     .with_elevator_count(2)
///     .with_capacity(4);
/// let crowd: Crowd = [(1, 5), (2, 3), (3, 4)].into_iter().collect();
/// let config = GeneticConfig::default()
///     .with_population_size(20)
///     .with_generations(4)
///     .with_survival_rate(6)
///     .with_seed(42);
///
/// let result = GeneticOptimizer::new(crowd, sim, config).optimize().unwrap();
/// assert!((1..=3).all(|f| result.best.iter().any(|t| t.contains(&f))));
/// ```
pub struct GeneticOptimizer {
    crowd: Crowd,
    sim: SimConfig,
    config: GeneticConfig,
    draw_pool: Vec<Floor>,
}

impl GeneticOptimizer {
    /// Creates an optimizer over the given crowd template. The draw pool
    /// is the full floor set `1..=floor_count`.
    pub fn new(crowd: Crowd, sim: SimConfig, config: GeneticConfig) -> Self {
        let draw_pool = (1..=sim.floor_count).collect();
        Self {
            crowd,
            sim,
            config,
            draw_pool,
        }
    }

    /// Runs the evolutionary search and returns the fittest assignment.
    ///
    /// # Errors
    ///
    /// [`ElevateError::NoViablePolicy`] when the entire final population
    /// fails floor coverage (possible with a very low `gene_pass_rate` or
    /// tiny population) — an invalid policy is never silently returned.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`GeneticConfig::validate`] first to get a descriptive error).
    pub fn optimize(&self) -> Result<GeneticResult> {
        self.config.validate().expect("invalid GeneticConfig");

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let mut evaluations = 0usize;

        // 1. Initial population: independent Bernoulli subsets of the pool.
        let mut population: Vec<Candidate> = (0..self.config.population_size)
            .map(|_| {
                (0..self.sim.elevator_count)
                    .map(|_| sample_genes(&self.draw_pool, self.config.gene_pass_rate, &mut rng))
                    .collect()
            })
            .collect();

        // 2. Prune + reproduce rounds. Offspring are appended to the
        //    survivors, so the population leaving each round is larger
        //    than the survivor set entering it.
        let mut fitness_history = Vec::with_capacity(self.config.generations);
        for _ in 0..self.config.generations {
            let survivors = self.prune(population, &mut evaluations, &mut fitness_history)?;
            population = self.reproduce(survivors, &mut rng);
        }

        // 3. Fittest candidate of the final population, first occurrence
        //    winning ties.
        let mut best: Option<(f64, Candidate)> = None;
        let final_population = population.len();
        for candidate in population {
            let fitness = self.fitness(&candidate, &mut evaluations)?;
            let improved = match &best {
                None => true,
                Some((best_fitness, _)) => fitness < *best_fitness,
            };
            if improved {
                best = Some((fitness, candidate));
            }
        }

        let (best_fitness, best) = best.expect("population is never empty");
        if best_fitness.is_infinite() {
            return Err(ElevateError::NoViablePolicy);
        }
        Ok(GeneticResult {
            best,
            best_time: best_fitness as Time,
            fitness_history,
            evaluations,
            final_population,
        })
    }

    /// Scores a candidate: infinite when its tuples jointly miss any pool
    /// floor, otherwise the simulated makespan.
    fn fitness(&self, candidate: &Candidate, evaluations: &mut usize) -> Result<f64> {
        let covered = self
            .draw_pool
            .iter()
            .all(|floor| candidate.iter().any(|tuple| tuple.contains(floor)));
        if !covered {
            return Ok(f64::INFINITY);
        }

        let elevators = candidate
            .iter()
            .enumerate()
            .map(|(i, tuple)| Elevator::priority(i, Priorities::from_floors(tuple.iter().copied())))
            .collect();
        let mut building = Building::new(elevators, self.crowd.clone(), self.sim);
        // Priority elevators never sample the rng; the seed is arbitrary.
        let mut rng = StdRng::seed_from_u64(0);
        *evaluations += 1;
        Ok(building.run(&mut rng)? as f64)
    }

    /// Keeps the `survival_rate` fittest candidates. The sort is stable,
    /// so equal-fitness candidates keep their population order.
    fn prune(
        &self,
        population: Vec<Candidate>,
        evaluations: &mut usize,
        fitness_history: &mut Vec<f64>,
    ) -> Result<Vec<Candidate>> {
        let mut scored = Vec::with_capacity(population.len());
        for candidate in population {
            let fitness = self.fitness(&candidate, evaluations)?;
            scored.push((fitness, candidate));
        }
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.config.survival_rate);

        fitness_history.push(scored.first().map_or(f64::INFINITY, |&(f, _)| f));
        Ok(scored.into_iter().map(|(_, candidate)| candidate).collect())
    }

    /// Shuffles a copy of the survivors, pairs consecutive entries of the
    /// shuffle (`len / 2` overlapping windows), and appends one child per
    /// pair to the unpruned survivor population.
    fn reproduce<R: Rng>(&self, survivors: Vec<Candidate>, rng: &mut R) -> Vec<Candidate> {
        let mut shuffled = survivors.clone();
        shuffled.shuffle(rng);

        let pair_count = shuffled.len() / 2;
        let mut population = survivors;
        for pair in shuffled.windows(2).take(pair_count) {
            population.push(self.breed(&pair[0], &pair[1], rng));
        }
        population
    }

    /// Breeds two parents tuple-by-tuple: each parent tuple is resampled
    /// with the gene pass rate, and the child tuple is the sorted,
    /// deduplicated union of the two samples.
    fn breed<R: Rng>(&self, a: &Candidate, b: &Candidate, rng: &mut R) -> Candidate {
        a.iter()
            .zip(b.iter())
            .map(|(tuple_a, tuple_b)| {
                let keep_a = sample_genes(tuple_a, self.config.gene_pass_rate, rng);
                let keep_b = sample_genes(tuple_b, self.config.gene_pass_rate, rng);
                let union: BTreeSet<Floor> = keep_a.into_iter().chain(keep_b).collect();
                union.into_iter().collect()
            })
            .collect()
    }
}

/// Keeps each floor independently with probability `rate`, preserving the
/// order of `pool`.
fn sample_genes<R: Rng>(pool: &[Floor], rate: f64, rng: &mut R) -> Vec<Floor> {
    pool.iter()
        .copied()
        .filter(|_| rng.random_bool(rate))
        .collect()
}
