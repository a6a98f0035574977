//! Seedable RNG construction shared by the stochastic solvers.
//!
//! Every solver that uses randomness takes an optional seed in its
//! configuration. A seeded run replays the exact same search trajectory;
//! an unseeded run draws a fresh seed from the process entropy source.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Constructs a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Constructs an RNG from an optional seed, drawing a random seed when
/// none is given.
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
