//! Error types for configuration and problem validation.

/// Errors surfaced before or during a GA run.
///
/// Everything here is detectable either at startup validation
/// ([`crate::GaConfig::validate`], [`crate::Knapsack::validate`]) or when
/// bounded rejection sampling runs out of attempts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("population size must be even, got {0}")]
    PopulationNotEven(usize),
    #[error("generation count must be at least 1")]
    NoGenerations,
    #[error("max sample attempts must be at least 1")]
    NoSampleAttempts,
    #[error("catalog must contain at least one item")]
    EmptyCatalog,
    #[error("capacity must be positive, got {0}")]
    NonPositiveCapacity(f64),
    #[error("item {index} must have positive weight and value (weight={weight}, value={value})")]
    NonPositiveItem {
        index: usize,
        weight: f64,
        value: f64,
    },
    #[error("item {index} requires {min_required} copies, above the per-gene ceiling of {ceiling}")]
    MinAboveGeneCeiling {
        index: usize,
        min_required: u32,
        ceiling: u32,
    },
    #[error("minimum required load {required} exceeds capacity {capacity}; rejection sampling cannot terminate")]
    InfeasibleMinimums { required: f64, capacity: f64 },
    #[error("no valid chromosome found after {attempts} attempts")]
    SamplingExhausted { attempts: usize },
}
