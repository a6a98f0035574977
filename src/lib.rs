//! Five search strategies for the N-Queens placement puzzle.
//!
//! Solves the classic puzzle (default board size 5) with two constraint
//! satisfaction techniques and three local-search metaheuristics over a
//! shared board representation:
//!
//! - **Backtracking**: exhaustive CSP search with MRV variable ordering,
//!   LCV value ordering, and forward checking.
//! - **Min-Conflicts**: local repair of a complete assignment.
//! - **Hill-Climbing**: steepest ascent with random restarts.
//! - **Simulated Annealing**: Metropolis acceptance under a cooling schedule.
//! - **Genetic (hybrid)**: population search with crossover, mutation, and
//!   hill-climbing refinement of each offspring.
//!
//! The entry point is [`solve::solve`], which takes an [`Algorithm`]
//! selector and [`SolveOptions`] and returns a [`SearchStats`] record for an
//! external reporter to render. The crate performs no I/O of its own;
//! [`board::Board`] implements `Display` so a caller can print the grid.
//!
//! [`Algorithm`]: solve::Algorithm
//! [`SolveOptions`]: solve::SolveOptions
//! [`SearchStats`]: solve::SearchStats
//!
//! # Example
//!
//! ```
//! use nqueens_search::solve::{solve, Algorithm, SolveOptions};
//!
//! let options = SolveOptions::default().with_seed(42);
//! let stats = solve(Algorithm::Backtracking, &options).unwrap();
//! let board = stats.board.expect("5-queens has solutions");
//! assert_eq!(board.conflicts(), 0);
//! ```
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 4 & 6
//! - Minton et al. (1992), "Minimizing Conflicts: A Heuristic Repair Method
//!   for Constraint Satisfaction and Scheduling Problems"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

pub mod board;
pub mod csp;
pub mod error;
pub mod ga;
pub mod hill_climbing;
pub mod random;
pub mod sa;
pub mod solve;
