//! Facade types: algorithm selector, options, outcome, statistics.

use crate::board::Board;
use crate::csp::{BacktrackConfig, MinConflictsConfig};
use crate::ga::GaConfig;
use crate::hill_climbing::HillClimbingConfig;
use crate::sa::SaConfig;
use std::fmt;
use std::time::Duration;

/// The five search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Depth-first CSP search with MRV, LCV, and forward checking.
    Backtracking,
    /// Local repair of a complete assignment.
    MinConflicts,
    /// Steepest ascent with random restarts.
    HillClimbing,
    /// Metropolis acceptance under a cooling schedule.
    SimulatedAnnealing,
    /// Hybrid population search with offspring refinement.
    Genetic,
}

impl Algorithm {
    /// Every algorithm, in menu order; useful for comparison sweeps.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Backtracking,
        Algorithm::MinConflicts,
        Algorithm::HillClimbing,
        Algorithm::SimulatedAnnealing,
        Algorithm::Genetic,
    ];

    /// Short name for reports and benchmark labels.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Backtracking => "backtracking",
            Algorithm::MinConflicts => "min-conflicts",
            Algorithm::HillClimbing => "hill-climbing",
            Algorithm::SimulatedAnnealing => "simulated-annealing",
            Algorithm::Genetic => "genetic",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A zero-conflict board was reached.
    Solved,
    /// The step, restart, or generation bound ran out; the returned
    /// board is the best seen, with conflicts remaining. This is a
    /// legitimate terminal state for the local-search algorithms, not a
    /// fault.
    Partial,
    /// The domain space was exhausted without a solution. Only
    /// backtracking can report this, and only for structurally
    /// unsatisfiable sizes (N = 2, 3).
    NoSolution,
}

/// Per-run statistics returned to the caller. Read-only once produced.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Which solver ran.
    pub algorithm: Algorithm,
    /// How the run ended.
    pub outcome: Outcome,
    /// Final board; `None` only for [`Outcome::NoSolution`].
    pub board: Option<Board>,
    /// Conflict count of the final board (zero when solved).
    pub conflicts: usize,
    /// Algorithm-specific effort count: branch assignments, repair
    /// steps, climbing moves, annealing steps, or generations.
    pub iterations: usize,
    /// Wall-clock duration of the search.
    pub elapsed: Duration,
}

/// Options for [`solve`](super::solve): board size plus the
/// per-algorithm configurations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOptions {
    /// Board size N.
    pub n: usize,
    /// When set, seeds every stochastic solver that was not given its
    /// own seed, so a whole comparison run replays deterministically.
    pub seed: Option<u64>,
    /// Backtracking parameters.
    pub backtracking: BacktrackConfig,
    /// Min-conflicts parameters.
    pub min_conflicts: MinConflictsConfig,
    /// Hill-climbing parameters.
    pub hill_climbing: HillClimbingConfig,
    /// Simulated-annealing parameters.
    pub annealing: SaConfig,
    /// Genetic-algorithm parameters.
    pub genetic: GaConfig,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            n: 5,
            seed: None,
            backtracking: BacktrackConfig::default(),
            min_conflicts: MinConflictsConfig::default(),
            hill_climbing: HillClimbingConfig::default(),
            annealing: SaConfig::default(),
            genetic: GaConfig::default(),
        }
    }
}

impl SolveOptions {
    /// Options for an N×N board with default solver parameters.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// Sets the board size.
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Sets the shared seed for stochastic solvers.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the backtracking configuration.
    pub fn with_backtracking(mut self, config: BacktrackConfig) -> Self {
        self.backtracking = config;
        self
    }

    /// Replaces the min-conflicts configuration.
    pub fn with_min_conflicts(mut self, config: MinConflictsConfig) -> Self {
        self.min_conflicts = config;
        self
    }

    /// Replaces the hill-climbing configuration.
    pub fn with_hill_climbing(mut self, config: HillClimbingConfig) -> Self {
        self.hill_climbing = config;
        self
    }

    /// Replaces the simulated-annealing configuration.
    pub fn with_annealing(mut self, config: SaConfig) -> Self {
        self.annealing = config;
        self
    }

    /// Replaces the genetic-algorithm configuration.
    pub fn with_genetic(mut self, config: GaConfig) -> Self {
        self.genetic = config;
        self
    }
}
