//! Reporting sink for population snapshots and per-pair diagnostics.
//!
//! The runner publishes everything a presentation layer needs to render a
//! run — per-generation populations with derived totals, probability
//! vectors, and per-pair selection/crossover/mutation events — through
//! [`Reporter`]. Every method defaults to a no-op, so the core runs
//! unchanged against a silent sink.

use crate::types::Chromosome;

/// Diagnostics for one parent pair within a generation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairEvent {
    /// Indices of the selected parents in the current population.
    pub parents: (usize, usize),

    /// Whether the pair underwent crossover and mutation. When `false`,
    /// both parents passed through unchanged and the remaining fields
    /// besides `survivors` are empty.
    pub recombined: bool,

    /// The per-gene crossover coin draws.
    pub gene_draws: Vec<f64>,

    /// The mutation draw for each child, in child order.
    pub mutation_draws: Vec<f64>,

    /// The children as produced by crossover, before mutation and repair.
    pub children: Vec<Chromosome>,

    /// The two chromosomes admitted to the next generation for this pair.
    pub survivors: (Chromosome, Chromosome),
}

/// Observer for the generational loop.
///
/// Implementations render, record, or forward the events; the runner makes
/// no assumption about what a sink does and never reads anything back.
pub trait Reporter {
    /// A full population, with each member's total value and total weight
    /// in matching positions. Called once after initialization
    /// (`generation` 0) and once at the end of every generation.
    fn population(
        &mut self,
        _generation: usize,
        _members: &[Chromosome],
        _values: &[f64],
        _weights: &[f64],
    ) {
    }

    /// The cumulative selection probability vector computed for this
    /// generation.
    fn probabilities(&mut self, _generation: usize, _probabilities: &[f64]) {}

    /// Diagnostics for one parent pair.
    fn pair(&mut self, _generation: usize, _event: &PairEvent) {}
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_reporter_accepts_all_events() {
        let mut reporter = NoopReporter;
        reporter.population(0, &[], &[], &[]);
        reporter.probabilities(1, &[0.5, 1.0]);
        reporter.pair(
            1,
            &PairEvent {
                parents: (0, 1),
                recombined: false,
                gene_draws: vec![],
                mutation_draws: vec![],
                children: vec![],
                survivors: (
                    Chromosome::new(vec![0, 3, 2, 0, 0, 0, 0]),
                    Chromosome::new(vec![1, 3, 2, 0, 0, 0, 0]),
                ),
            },
        );
    }
}
