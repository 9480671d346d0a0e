//! Bounded rejection sampling.
//!
//! Population initialization, mutation, and repair all share one pattern:
//! draw a random chromosome, keep it only if it fits the capacity, retry
//! otherwise. [`sample_until`] is that pattern with an attempt bound, so a
//! pathological setup surfaces an error instead of spinning forever.
//! Startup validation ([`Knapsack::validate`]) already rejects the one
//! setup that can never produce a valid draw (minimum load above
//! capacity); the bound covers the remaining low-probability tail.

use crate::error::Error;
use crate::types::{Chromosome, Knapsack};
use rand::Rng;

/// Draws candidates from `generate` until `accept` passes one, or until
/// `max_attempts` candidates have been rejected.
///
/// Each attempt consumes exactly one `generate` call worth of randomness,
/// so the RNG draw order stays reproducible across runs with the same seed.
pub fn sample_until<T, R, G, A>(
    rng: &mut R,
    max_attempts: usize,
    mut generate: G,
    mut accept: A,
) -> Result<T, Error>
where
    R: Rng,
    G: FnMut(&mut R) -> T,
    A: FnMut(&T) -> bool,
{
    for _ in 0..max_attempts {
        let candidate = generate(rng);
        if accept(&candidate) {
            return Ok(candidate);
        }
    }
    Err(Error::SamplingExhausted {
        attempts: max_attempts,
    })
}

/// Samples one chromosome that fits the knapsack capacity.
///
/// Genes respect per-item minimums by construction
/// ([`Knapsack::random_chromosome`]); the capacity bound is enforced by
/// rejection.
pub fn sample_valid<R: Rng>(
    knapsack: &Knapsack,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Chromosome, Error> {
    sample_until(
        rng,
        max_attempts,
        |rng| knapsack.random_chromosome(rng),
        |candidate| knapsack.is_valid(candidate),
    )
}
