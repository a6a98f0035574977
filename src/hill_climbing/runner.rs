//! Hill-climbing execution loop.

use super::config::HillClimbingConfig;
use crate::board::Board;
use crate::random::rng_from_seed;
use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbingResult {
    /// Best local optimum found across all restarts.
    pub board: Board,
    /// Conflict count of that board; zero exactly when `solved`.
    pub conflicts: usize,
    /// Restarts actually used; fewer than the bound on early success.
    pub restarts: usize,
    /// Total improving moves taken across all restarts.
    pub moves: usize,
    /// Whether a zero-conflict local optimum was reached.
    pub solved: bool,
}

/// Executes steepest-ascent hill climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs hill climbing with random restarts.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`HillClimbingConfig::validate`] first to get a descriptive error).
    pub fn run(n: usize, config: &HillClimbingConfig) -> HillClimbingResult {
        config.validate().expect("invalid HillClimbingConfig");
        let mut rng = rng_from_seed(config.seed);

        let mut best: Option<Board> = None;
        let mut best_conflicts = usize::MAX;
        let mut moves = 0;
        let mut restarts = 0;

        for restart in 0..config.restarts {
            restarts = restart + 1;
            let optimum = climb(Board::random(n, &mut rng), &mut rng, &mut moves);
            let conflicts = optimum.conflicts();
            if conflicts < best_conflicts {
                best_conflicts = conflicts;
                best = Some(optimum);
            }
            if best_conflicts == 0 {
                break;
            }
        }

        debug!(
            "hill-climbing n={n}: restarts={restarts} moves={moves} conflicts={best_conflicts}"
        );
        HillClimbingResult {
            board: best.expect("at least one restart ran"),
            conflicts: best_conflicts,
            restarts,
            moves,
            solved: best_conflicts == 0,
        }
    }
}

/// Climbs to a local optimum: repeatedly take the best strictly improving
/// single-queen move, ties broken uniformly at random.
fn climb<R: Rng>(mut board: Board, rng: &mut R, moves: &mut usize) -> Board {
    loop {
        let current = board.conflicts();
        if current == 0 {
            return board;
        }

        let mut best_moves = Vec::new();
        let mut best_conflicts = current;
        for (neighbor, mv) in board.neighbors() {
            let conflicts = neighbor.conflicts();
            if conflicts < best_conflicts {
                best_conflicts = conflicts;
                best_moves.clear();
                best_moves.push(mv);
            } else if conflicts == best_conflicts && conflicts < current {
                best_moves.push(mv);
            }
        }

        let Some(&mv) = best_moves.choose(rng) else {
            // No neighbor improves on the current state: a local optimum.
            return board;
        };
        board = board.apply(&mv);
        *moves += 1;
    }
}
