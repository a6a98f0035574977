//! CSP formulation of N-Queens and the two CSP solvers.
//!
//! The constraint model assigns one variable per column whose domain is
//! the set of admissible rows; a single binary constraint forbids two
//! queens from sharing a row or a diagonal. [`BacktrackRunner`] searches
//! the model exhaustively with MRV/LCV orderings and forward checking;
//! [`MinConflictsRunner`] repairs a complete assignment instead of
//! building one incrementally.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 6
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"
//! - Minton et al. (1992), "Minimizing Conflicts: A Heuristic Repair Method
//!   for Constraint Satisfaction and Scheduling Problems"

mod backtracking;
mod min_conflicts;
mod model;

pub use backtracking::{
    BacktrackConfig, BacktrackResult, BacktrackRunner, ValueOrdering, VariableOrdering,
};
pub use min_conflicts::{MinConflictsConfig, MinConflictsResult, MinConflictsRunner};
pub use model::{CspModel, TrailMark};
