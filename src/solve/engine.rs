//! Dispatch, validation, and timing for the five solvers.

use super::types::{Algorithm, Outcome, SearchStats, SolveOptions};
use crate::csp::{BacktrackRunner, MinConflictsRunner};
use crate::error::{ConfigError, SolveError};
use crate::ga::GaRunner;
use crate::hill_climbing::HillClimbingRunner;
use crate::sa::SaRunner;
use log::debug;
use std::time::Instant;

/// Runs one algorithm on an N-Queens instance and reports statistics.
///
/// The board size and the selected algorithm's configuration are
/// validated before any search starts; an exhausted bound is reported as
/// [`Outcome::Partial`] or [`Outcome::NoSolution`], never as an error.
pub fn solve(algorithm: Algorithm, options: &SolveOptions) -> Result<SearchStats, SolveError> {
    if options.n == 0 {
        return Err(ConfigError::BoardSize { n: options.n }.into());
    }
    let n = options.n;

    let stats = match algorithm {
        Algorithm::Backtracking => {
            let start = Instant::now();
            let result = BacktrackRunner::run(n, &options.backtracking);
            let elapsed = start.elapsed();
            match result.solution {
                Some(board) => SearchStats {
                    algorithm,
                    outcome: Outcome::Solved,
                    board: Some(board),
                    conflicts: 0,
                    iterations: result.assignments,
                    elapsed,
                },
                None => SearchStats {
                    algorithm,
                    outcome: Outcome::NoSolution,
                    board: None,
                    conflicts: 0,
                    iterations: result.assignments,
                    elapsed,
                },
            }
        }

        Algorithm::MinConflicts => {
            let mut config = options.min_conflicts.clone();
            config.seed = config.seed.or(options.seed);
            config.validate()?;

            let start = Instant::now();
            let result = MinConflictsRunner::run(n, &config);
            SearchStats {
                algorithm,
                outcome: outcome_of(result.solved),
                conflicts: result.conflicts,
                board: Some(result.board),
                iterations: result.steps,
                elapsed: start.elapsed(),
            }
        }

        Algorithm::HillClimbing => {
            let mut config = options.hill_climbing.clone();
            config.seed = config.seed.or(options.seed);
            config.validate()?;

            let start = Instant::now();
            let result = HillClimbingRunner::run(n, &config);
            SearchStats {
                algorithm,
                outcome: outcome_of(result.solved),
                conflicts: result.conflicts,
                board: Some(result.board),
                iterations: result.moves,
                elapsed: start.elapsed(),
            }
        }

        Algorithm::SimulatedAnnealing => {
            let mut config = options.annealing.clone();
            config.seed = config.seed.or(options.seed);
            config.validate()?;

            let start = Instant::now();
            let result = SaRunner::run(n, &config);
            SearchStats {
                algorithm,
                outcome: outcome_of(result.solved),
                conflicts: result.conflicts,
                board: Some(result.board),
                iterations: result.iterations,
                elapsed: start.elapsed(),
            }
        }

        Algorithm::Genetic => {
            let mut config = options.genetic.clone();
            config.seed = config.seed.or(options.seed);
            config.validate()?;

            let start = Instant::now();
            let result = GaRunner::run(n, &config);
            SearchStats {
                algorithm,
                outcome: outcome_of(result.solved),
                conflicts: result.conflicts,
                board: Some(result.board),
                iterations: result.generations,
                elapsed: start.elapsed(),
            }
        }
    };

    debug!(
        "{algorithm} n={n}: {:?} with {} conflicts after {} iterations in {:?}",
        stats.outcome, stats.conflicts, stats.iterations, stats.elapsed
    );
    Ok(stats)
}

fn outcome_of(solved: bool) -> Outcome {
    if solved {
        Outcome::Solved
    } else {
        Outcome::Partial
    }
}
