//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of the generational loop. Parameters
//! are fixed at startup; there is no dynamic reconfiguration.

use crate::error::Error;

/// Configuration for the generational knapsack GA.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_crossover_probability(0.9)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes per generation. Must be even and at least 2.
    pub population_size: usize,

    /// Number of generations to run. The loop always runs to completion;
    /// there is no convergence-based early exit.
    pub generations: usize,

    /// Probability that a selected parent pair undergoes crossover and
    /// mutation (0.0–1.0). Pairs that skip crossover pass through unchanged.
    pub crossover_probability: f64,

    /// Probability that an offspring is discarded and replaced with a
    /// freshly sampled valid chromosome (0.0–1.0). Mutation here is full
    /// regeneration, not a point edit.
    pub mutation_rate: f64,

    /// Per-gene coin bias during crossover (0.0–1.0). A draw at or below
    /// this rate keeps parent order for the gene; above it, the gene swaps.
    pub crossover_gene_rate: f64,

    /// Attempt bound for every generate-until-valid loop (initialization,
    /// mutation, repair). Exhaustion surfaces
    /// [`Error::SamplingExhausted`](crate::Error::SamplingExhausted)
    /// instead of spinning.
    pub max_sample_attempts: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 50,
            crossover_probability: 0.85,
            mutation_rate: 0.1,
            crossover_gene_rate: 0.5,
            max_sample_attempts: 10_000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-pair crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene crossover coin bias.
    pub fn with_crossover_gene_rate(mut self, rate: f64) -> Self {
        self.crossover_gene_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the rejection-sampling attempt bound.
    pub fn with_max_sample_attempts(mut self, attempts: usize) -> Self {
        self.max_sample_attempts = attempts;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size < 2 {
            return Err(Error::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(Error::PopulationNotEven(self.population_size));
        }
        if self.generations == 0 {
            return Err(Error::NoGenerations);
        }
        if self.max_sample_attempts == 0 {
            return Err(Error::NoSampleAttempts);
        }
        Ok(())
    }
}
