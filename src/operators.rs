//! Genetic operators: gene-wise uniform crossover and full-regeneration
//! mutation.
//!
//! Neither operator validates its output against capacity. Children may be
//! over-weight; the runner repairs them before admission (see
//! [`crate::runner`]).

use crate::error::Error;
use crate::sampling::sample_valid;
use crate::types::{Chromosome, Knapsack};
use rand::Rng;

/// Gene-wise uniform crossover.
///
/// Draws one uniform value per gene position. A draw at or below
/// `gene_rate` keeps parent order for that gene (child 1 inherits from
/// parent 1, child 2 from parent 2); a draw above it swaps the assignment.
///
/// Returns the draw vector alongside both children so a reporting sink can
/// observe the coin flips.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn uniform_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    gene_rate: f64,
    rng: &mut R,
) -> (Vec<f64>, Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let draws: Vec<f64> = (0..n).map(|_| rng.random::<f64>()).collect();
    let (child1, child2) = recombine(parent1, parent2, gene_rate, &draws);
    (draws, child1, child2)
}

/// Builds both children from a fixed draw vector.
fn recombine(
    parent1: &Chromosome,
    parent2: &Chromosome,
    gene_rate: f64,
    draws: &[f64],
) -> (Chromosome, Chromosome) {
    let mut genes1 = Vec::with_capacity(draws.len());
    let mut genes2 = Vec::with_capacity(draws.len());

    for (i, &draw) in draws.iter().enumerate() {
        if draw <= gene_rate {
            genes1.push(parent1.genes[i]);
            genes2.push(parent2.genes[i]);
        } else {
            genes1.push(parent2.genes[i]);
            genes2.push(parent1.genes[i]);
        }
    }

    (Chromosome::new(genes1), Chromosome::new(genes2))
}

/// Mutation by full regeneration.
///
/// Draws one uniform value. Below `mutation_rate`, the child is discarded
/// entirely and replaced with a freshly sampled valid chromosome — there is
/// no point mutation, and the replacement has no genetic relation to the
/// input. Otherwise the child passes through unchanged.
///
/// Returns the draw for the reporting sink along with the outcome.
pub fn mutate<R: Rng>(
    knapsack: &Knapsack,
    mutation_rate: f64,
    max_attempts: usize,
    child: Chromosome,
    rng: &mut R,
) -> Result<(f64, Chromosome), Error> {
    let draw = rng.random::<f64>();
    if draw < mutation_rate {
        let replacement = sample_valid(knapsack, max_attempts, rng)?;
        Ok((draw, replacement))
    } else {
        Ok((draw, child))
    }
}
