//! Parent selection strategies.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Strategy for choosing parents. Fewer conflicts means fitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Pick `k` individuals at random, keep the fittest.
    ///
    /// Higher `k` = stronger selection pressure; k=3 is a moderate
    /// default.
    Tournament(usize),

    /// Fitness-proportionate roulette wheel over `1 / (1 + conflicts)`.
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
        }
    }
}

/// Tournament selection: sample k with replacement, return the fittest.
fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].conflicts < population[best_idx].conflicts {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel over inverse-conflict weights.
fn roulette<R: Rng>(population: &[Individual], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = population.iter().map(|ind| ind.fitness()).sum();
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, ind) in population.iter().enumerate() {
        cumulative += ind.fitness();
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
