//! Generational genetic algorithm for the bounded knapsack problem.
//!
//! Searches for a high-value combination of item multiplicities under a
//! weight capacity, where each item may be taken multiple times up to a
//! fixed per-gene ceiling and some items carry a required minimum count.
//!
//! # Core Pieces
//!
//! - [`Knapsack`]: the immutable problem instance — item catalog plus
//!   capacity — and every derived query (fitness, weight, validity)
//! - [`Chromosome`]: one multiplicity per item
//! - [`GaConfig`]: loop parameters with builder setters and startup
//!   validation
//! - [`GaRunner`]: the evolutionary loop — roulette-wheel selection,
//!   gene-wise uniform crossover, mutation by full regeneration, validity
//!   repair, and strict parent-vs-child elitism
//! - [`Reporter`]: observer sink for population snapshots and per-pair
//!   diagnostics; defaults to no-ops
//!
//! # Example
//!
//! ```
//! use knapsack_ga::{GaConfig, GaRunner, Item, Knapsack};
//!
//! let knapsack = Knapsack::new(
//!     vec![
//!         Item::new(4.0, 10.0, 0),
//!         Item::new(2.0, 8.0, 3),
//!         Item::new(5.0, 12.0, 2),
//!         Item::new(5.0, 6.0, 0),
//!         Item::new(2.0, 3.0, 0),
//!         Item::new(1.5, 2.0, 0),
//!         Item::new(1.0, 2.0, 0),
//!     ],
//!     30.0,
//! );
//!
//! let config = GaConfig::default().with_seed(42);
//! let result = GaRunner::run(&knapsack, &config).unwrap();
//!
//! assert!(knapsack.is_valid(&result.best));
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

pub mod config;
pub mod error;
pub mod operators;
pub mod report;
pub mod runner;
pub mod sampling;
pub mod selection;
pub mod types;

pub use config::GaConfig;
pub use error::Error;
pub use report::{NoopReporter, PairEvent, Reporter};
pub use runner::{GaResult, GaRunner};
pub use types::{Chromosome, Item, Knapsack, GENE_CEILING};
