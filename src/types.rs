//! Problem definition: item catalog, capacity, and the chromosome encoding.
//!
//! A [`Knapsack`] is the immutable problem instance shared by every GA
//! component. Its item order defines gene order: gene `i` of a
//! [`Chromosome`] is the multiplicity of item `i`.

use crate::error::Error;
use rand::Rng;

/// Inclusive upper bound for every randomly drawn gene.
///
/// A fixed cap on per-item multiplicity, deliberately independent of the
/// knapsack capacity: capacity is enforced by validation and rejection
/// sampling, not by shrinking the draw range.
pub const GENE_CEILING: u32 = 10;

/// One catalog entry.
///
/// `min_required` is the multiplicity floor enforced at generation time:
/// every randomly drawn chromosome carries at least this many copies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: f64,
    pub value: f64,
    pub min_required: u32,
}

impl Item {
    pub fn new(weight: f64, value: f64, min_required: u32) -> Self {
        Self {
            weight,
            value,
            min_required,
        }
    }
}

/// A candidate solution: one multiplicity per catalog item.
///
/// Chromosomes admitted to a population satisfy both the weight bound and
/// the per-item minimums; transient chromosomes (mid-construction, before
/// validation) may violate the weight bound.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    pub genes: Vec<u32>,
}

impl Chromosome {
    pub fn new(genes: Vec<u32>) -> Self {
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl From<Vec<u32>> for Chromosome {
    fn from(genes: Vec<u32>) -> Self {
        Self { genes }
    }
}

/// The bounded knapsack instance: ordered item catalog plus weight capacity.
///
/// Loaded once at startup and read-only afterwards. All fitness and
/// validity queries live here so that chromosomes stay plain gene vectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: f64,
}

impl Knapsack {
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self { items, capacity }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of catalog items, and therefore the gene count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total weight of a chromosome: Σ gene[i] · weight[i].
    pub fn weight_of(&self, chromosome: &Chromosome) -> f64 {
        self.items
            .iter()
            .zip(&chromosome.genes)
            .map(|(item, &count)| item.weight * f64::from(count))
            .sum()
    }

    /// Fitness of a chromosome: Σ gene[i] · value[i].
    ///
    /// Raw value sum — not weight-normalized and not penalized. Validity is
    /// guaranteed upstream by construction, so fitness stays a pure sum.
    pub fn value_of(&self, chromosome: &Chromosome) -> f64 {
        self.items
            .iter()
            .zip(&chromosome.genes)
            .map(|(item, &count)| item.value * f64::from(count))
            .sum()
    }

    /// Whether the chromosome fits the capacity.
    ///
    /// Checks the weight bound only. Per-item minimums are enforced at
    /// generation time, never here: a chromosome produced out-of-band with
    /// genes below `min_required` still passes.
    pub fn is_valid(&self, chromosome: &Chromosome) -> bool {
        self.weight_of(chromosome) <= self.capacity
    }

    /// Weight of the all-minimums chromosome: Σ min_required[i] · weight[i].
    pub fn min_load(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.weight * f64::from(item.min_required))
            .sum()
    }

    /// Draws one random chromosome, gene `i` uniform in
    /// `[min_required[i], GENE_CEILING]` inclusive.
    ///
    /// The result may exceed capacity; callers sample until
    /// [`is_valid`](Self::is_valid) accepts (see [`crate::sampling`]).
    pub fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome {
        let genes = self
            .items
            .iter()
            .map(|item| rng.random_range(item.min_required..=GENE_CEILING))
            .collect();
        Chromosome { genes }
    }

    /// Validates the problem instance.
    ///
    /// Rejects configurations under which the GA cannot run: an empty
    /// catalog, non-positive capacity/weights/values, a `min_required`
    /// above [`GENE_CEILING`] (empty draw range), and minimums whose
    /// combined weight already exceeds capacity — the case where
    /// generate-and-validate would otherwise retry forever.
    pub fn validate(&self) -> Result<(), Error> {
        if self.items.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        if self.capacity <= 0.0 {
            return Err(Error::NonPositiveCapacity(self.capacity));
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.weight <= 0.0 || item.value <= 0.0 {
                return Err(Error::NonPositiveItem {
                    index,
                    weight: item.weight,
                    value: item.value,
                });
            }
            if item.min_required > GENE_CEILING {
                return Err(Error::MinAboveGeneCeiling {
                    index,
                    min_required: item.min_required,
                    ceiling: GENE_CEILING,
                });
            }
        }
        let required = self.min_load();
        if required > self.capacity {
            return Err(Error::InfeasibleMinimums {
                required,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
