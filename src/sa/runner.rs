//! SA execution loop.

use super::config::{CoolingSchedule, SaConfig};
use crate::board::Board;
use crate::random::rng_from_seed;
use log::debug;
use rand::Rng;

/// Result of a simulated-annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best board observed during the run, tracked separately from the
    /// current (possibly worse) state.
    pub board: Board,
    /// Conflict count of that board; zero exactly when `solved`.
    pub conflicts: usize,
    /// Neighbor evaluations executed.
    pub iterations: usize,
    /// Temperature when the run stopped.
    pub final_temperature: f64,
    /// Accepted moves, improvements included.
    pub accepted_moves: usize,
    /// Whether a zero-conflict board was observed before the schedule
    /// ran out. A false value marks a partial result.
    pub solved: bool,
}

/// Executes the simulated-annealing loop.
pub struct SaRunner;

impl SaRunner {
    /// Runs simulated annealing.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(n: usize, config: &SaConfig) -> SaResult {
        config.validate().expect("invalid SaConfig");
        let mut rng = rng_from_seed(config.seed);

        let mut current = Board::random(n, &mut rng);
        let mut current_conflicts = current.conflicts();
        let mut best = current.clone();
        let mut best_conflicts = current_conflicts;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0;
        let mut accepted_moves = 0;

        while best_conflicts > 0
            && iterations < config.max_steps
            && temperature > config.min_temperature
        {
            let neighbor = random_neighbor(&current, &mut rng);
            let neighbor_conflicts = neighbor.conflicts();
            let delta = neighbor_conflicts as f64 - current_conflicts as f64;

            if accept(delta, temperature, &mut rng) {
                current = neighbor;
                current_conflicts = neighbor_conflicts;
                accepted_moves += 1;

                if current_conflicts < best_conflicts {
                    best = current.clone();
                    best_conflicts = current_conflicts;
                }
            }

            iterations += 1;
            temperature = cool(temperature, config, iterations);
        }

        debug!(
            "annealing n={n}: iterations={iterations} T={temperature:.4} conflicts={best_conflicts}"
        );
        SaResult {
            board: best,
            conflicts: best_conflicts,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            solved: best_conflicts == 0,
        }
    }
}

/// Metropolis criterion: improving and neutral moves always pass,
/// worsening moves pass with probability `exp(-delta / temperature)`.
fn accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
}

/// Probability of accepting a move that worsens the conflict count by
/// `delta` at the given temperature.
fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 {
        0.0
    } else {
        (-delta / temperature).exp()
    }
}

/// Applies the cooling schedule after `step` completed steps.
fn cool(temperature: f64, config: &SaConfig, step: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::Linear => {
            let span = config.initial_temperature - config.min_temperature;
            (config.initial_temperature - step as f64 * span / config.max_steps as f64)
                .max(config.min_temperature)
        }
    }
}

/// Moves one random queen to a different random row of its column.
fn random_neighbor<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let n = board.n();
    let col = rng.random_range(0..n);
    let from = board.row(col);
    let mut to = rng.random_range(0..n - 1);
    if to >= from {
        to += 1;
    }
    board.with_row(col, to)
}
