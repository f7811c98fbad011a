//! Genetic search configuration.
//!
//! [`GeneticConfig`] holds the evolutionary hyperparameters.

/// Configuration for the genetic loading-policy search.
///
/// # Builder Pattern
///
/// ```
/// use u_elevate::genetic::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(60)
///     .with_generations(15)
///     .with_survival_rate(12)
///     .with_gene_pass_rate(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of candidates in the initial population.
    pub population_size: usize,

    /// Number of prune + reproduce rounds.
    pub generations: usize,

    /// Number of fittest candidates kept by each pruning pass.
    pub survival_rate: usize,

    /// Probability that a floor survives each gene-sampling pass, both at
    /// population initialization and when breeding resamples a parent.
    pub gene_pass_rate: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 20,
            survival_rate: 20,
            gene_pass_rate: 0.5,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of survivors per pruning pass.
    pub fn with_survival_rate(mut self, n: usize) -> Self {
        self.survival_rate = n;
        self
    }

    /// Sets the per-floor gene pass probability.
    pub fn with_gene_pass_rate(mut self, rate: f64) -> Self {
        self.gene_pass_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.survival_rate == 0 {
            return Err("survival_rate must be at least 1".into());
        }
        if self.survival_rate > self.population_size {
            return Err("survival_rate must not exceed population_size".into());
        }
        if !(0.0..=1.0).contains(&self.gene_pass_rate) {
            return Err("gene_pass_rate must be in [0, 1]".into());
        }
        Ok(())
    }
}
