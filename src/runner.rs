//! The generational evolutionary loop.
//!
//! [`GaRunner`] wires the components together: rejection-sampled
//! initialization, roulette-wheel pair selection, gene-wise uniform
//! crossover, full-regeneration mutation, validity repair, and strict
//! parent-vs-child elitism. The loop runs a fixed number of generations —
//! there is no convergence detection — and the final population is the
//! result.
//!
//! All randomness flows through one seeded RNG in a strict call order:
//! initialization, then per generation and per pair — parent draws,
//! crossover decision, gene draws, mutation draws, repair draws. Runs with
//! the same seed reproduce identical population sequences.

use crate::config::GaConfig;
use crate::error::Error;
use crate::operators::{mutate, uniform_crossover};
use crate::report::{NoopReporter, PairEvent, Reporter};
use crate::sampling::sample_valid;
use crate::selection::{cumulative_probabilities, select_parents};
use crate::types::{Chromosome, Knapsack};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Result of a GA run.
///
/// The run's outcome is the final population; `best` is its highest-value
/// member, extracted once at the end for convenience.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The complete final population.
    pub population: Vec<Chromosome>,

    /// The highest-value member of the final population.
    pub best: Chromosome,

    /// Total value of `best`.
    pub best_value: f64,

    /// Total weight of `best`.
    pub best_weight: f64,

    /// Number of generations executed (always the configured count).
    pub generations: usize,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::{GaConfig, GaRunner, Item, Knapsack};
///
/// let knapsack = Knapsack::new(
///     vec![
///         Item::new(4.0, 10.0, 0),
///         Item::new(2.0, 8.0, 3),
///         Item::new(5.0, 12.0, 2),
///     ],
///     30.0,
/// );
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&knapsack, &config).unwrap();
/// assert_eq!(result.population.len(), config.population_size);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA against a silent sink.
    pub fn run(knapsack: &Knapsack, config: &GaConfig) -> Result<GaResult, Error> {
        Self::run_with_reporter(knapsack, config, &mut NoopReporter)
    }

    /// Runs the GA, publishing populations, probability vectors, and
    /// per-pair diagnostics to `reporter`.
    pub fn run_with_reporter<T: Reporter>(
        knapsack: &Knapsack,
        config: &GaConfig,
        reporter: &mut T,
    ) -> Result<GaResult, Error> {
        config.validate()?;
        knapsack.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| sample_valid(knapsack, config.max_sample_attempts, &mut rng))
            .collect::<Result<_, _>>()?;

        report_population(knapsack, reporter, 0, &population);

        for generation in 1..=config.generations {
            let probabilities = cumulative_probabilities(knapsack, &population);
            reporter.probabilities(generation, &probabilities);

            let mut next = Vec::with_capacity(population.len());
            for _ in 0..population.len() / 2 {
                let (first, second) = select_parents(&probabilities, &mut rng);
                let parent1 = &population[first];
                let parent2 = &population[second];

                let event = if rng.random::<f64>() < config.crossover_probability {
                    let (gene_draws, child1, child2) =
                        uniform_crossover(parent1, parent2, config.crossover_gene_rate, &mut rng);
                    let children = vec![child1.clone(), child2.clone()];

                    let (draw1, child1) = mutate(
                        knapsack,
                        config.mutation_rate,
                        config.max_sample_attempts,
                        child1,
                        &mut rng,
                    )?;
                    let (draw2, child2) = mutate(
                        knapsack,
                        config.mutation_rate,
                        config.max_sample_attempts,
                        child2,
                        &mut rng,
                    )?;

                    let child1 = repair(knapsack, config.max_sample_attempts, child1, &mut rng)?;
                    let child2 = repair(knapsack, config.max_sample_attempts, child2, &mut rng)?;

                    let survivor1 = fitter_of(knapsack, parent1, child1);
                    let survivor2 = fitter_of(knapsack, parent2, child2);

                    PairEvent {
                        parents: (first, second),
                        recombined: true,
                        gene_draws,
                        mutation_draws: vec![draw1, draw2],
                        children,
                        survivors: (survivor1, survivor2),
                    }
                } else {
                    PairEvent {
                        parents: (first, second),
                        recombined: false,
                        gene_draws: Vec::new(),
                        mutation_draws: Vec::new(),
                        children: Vec::new(),
                        survivors: (parent1.clone(), parent2.clone()),
                    }
                };

                tracing::trace!(
                    generation,
                    parent1 = event.parents.0,
                    parent2 = event.parents.1,
                    recombined = event.recombined,
                    "pair resolved"
                );
                reporter.pair(generation, &event);

                let (survivor1, survivor2) = event.survivors;
                next.push(survivor1);
                next.push(survivor2);
            }

            population = next;
            report_population(knapsack, reporter, generation, &population);

            tracing::debug!(
                generation,
                best_value = best_of(knapsack, &population).1,
                "generation complete"
            );
        }

        let (best_index, best_value) = best_of(knapsack, &population);
        let best = population[best_index].clone();
        let best_weight = knapsack.weight_of(&best);

        Ok(GaResult {
            population,
            best,
            best_value,
            best_weight,
            generations: config.generations,
        })
    }
}

/// Keeps the parent only when it is strictly fitter; ties go to the child.
fn fitter_of(knapsack: &Knapsack, parent: &Chromosome, child: Chromosome) -> Chromosome {
    if knapsack.value_of(parent) > knapsack.value_of(&child) {
        parent.clone()
    } else {
        child
    }
}

/// Re-samples a fresh valid chromosome for any child that exceeds capacity.
///
/// The replacement has no genetic relation to the discarded child.
fn repair<R: Rng>(
    knapsack: &Knapsack,
    max_attempts: usize,
    child: Chromosome,
    rng: &mut R,
) -> Result<Chromosome, Error> {
    if knapsack.is_valid(&child) {
        Ok(child)
    } else {
        sample_valid(knapsack, max_attempts, rng)
    }
}

/// Index and value of the highest-value member.
fn best_of(knapsack: &Knapsack, population: &[Chromosome]) -> (usize, f64) {
    population
        .iter()
        .enumerate()
        .map(|(i, c)| (i, knapsack.value_of(c)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .expect("population must not be empty")
}

/// Publishes one population snapshot with derived totals.
fn report_population<T: Reporter>(
    knapsack: &Knapsack,
    reporter: &mut T,
    generation: usize,
    population: &[Chromosome],
) {
    let values: Vec<f64> = population.iter().map(|c| knapsack.value_of(c)).collect();
    let weights: Vec<f64> = population.iter().map(|c| knapsack.weight_of(c)).collect();
    reporter.population(generation, population, &values, &weights);
}
