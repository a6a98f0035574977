//! Exhaustive depth-first search with MRV, LCV, and forward checking.

use super::model::CspModel;
use crate::board::Board;
use log::debug;

/// Order in which unassigned variables are selected for branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableOrdering {
    /// Lowest-index unassigned variable first.
    InOrder,
    /// Most constrained variable first: smallest current domain, ties
    /// broken by variable index.
    #[default]
    MinimumRemainingValues,
}

/// Order in which the selected variable's candidate values are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueOrdering {
    /// Ascending row order.
    InOrder,
    /// Least constraining value first: the row that removes the fewest
    /// entries from unassigned neighbors' domains, ties broken by row.
    #[default]
    LeastConstraining,
}

/// Configuration for the backtracking solver.
///
/// Defaults to MRV + LCV. The orderings can be switched off individually
/// to compare heuristic search cost against plain depth-first order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktrackConfig {
    /// Variable-selection heuristic.
    pub variable_ordering: VariableOrdering,
    /// Value-ordering heuristic.
    pub value_ordering: ValueOrdering,
}

impl BacktrackConfig {
    /// Sets the variable-selection heuristic.
    pub fn with_variable_ordering(mut self, ordering: VariableOrdering) -> Self {
        self.variable_ordering = ordering;
        self
    }

    /// Sets the value-ordering heuristic.
    pub fn with_value_ordering(mut self, ordering: ValueOrdering) -> Self {
        self.value_ordering = ordering;
        self
    }

    /// Plain depth-first search without either heuristic.
    pub fn unguided() -> Self {
        Self {
            variable_ordering: VariableOrdering::InOrder,
            value_ordering: ValueOrdering::InOrder,
        }
    }
}

/// Result of a backtracking run.
#[derive(Debug, Clone)]
pub struct BacktrackResult {
    /// A zero-conflict placement, or `None` when the domain space is
    /// exhausted without one (N = 2 and N = 3).
    pub solution: Option<Board>,
    /// Branch assignments tried, including those later undone.
    pub assignments: usize,
    /// Times a variable ran out of candidate values.
    pub backtracks: usize,
}

/// Executes the depth-first CSP search.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Searches an N-Queens model to completion.
    ///
    /// Deterministic for a fixed configuration: no randomness is involved
    /// and all tie-breaks fall back to index order. A returned board is
    /// consistent by construction, never a low-conflict approximation.
    pub fn run(n: usize, config: &BacktrackConfig) -> BacktrackResult {
        let mut model = CspModel::new(n);
        let mut assignment: Vec<Option<usize>> = vec![None; n];
        let mut result = BacktrackResult {
            solution: None,
            assignments: 0,
            backtracks: 0,
        };

        if search(&mut model, &mut assignment, config, &mut result) {
            let rows = assignment
                .into_iter()
                .map(|row| row.expect("search succeeded with a complete assignment"))
                .collect();
            result.solution = Some(Board::new(rows));
        }
        debug!(
            "backtracking n={n}: assignments={} backtracks={} solved={}",
            result.assignments,
            result.backtracks,
            result.solution.is_some()
        );
        result
    }
}

fn search(
    model: &mut CspModel,
    assignment: &mut [Option<usize>],
    config: &BacktrackConfig,
    stats: &mut BacktrackResult,
) -> bool {
    let Some(var) = select_variable(model, assignment, config.variable_ordering) else {
        // All variables assigned; forward checking kept every step
        // consistent, so this is a solution.
        return true;
    };

    for value in ordered_values(model, assignment, var, config.value_ordering) {
        stats.assignments += 1;
        let mark = model.mark();
        assignment[var] = Some(value);

        if propagate(model, assignment, var, value)
            && search(model, assignment, config, stats)
        {
            return true;
        }

        assignment[var] = None;
        model.restore(mark);
    }

    stats.backtracks += 1;
    false
}

/// Prunes every unassigned domain against the new assignment. Returns
/// false if a domain empties, marking the branch as a dead end.
fn propagate(
    model: &mut CspModel,
    assignment: &[Option<usize>],
    var: usize,
    value: usize,
) -> bool {
    for other in model.variables() {
        if other == var || assignment[other].is_some() {
            continue;
        }
        let inconsistent: Vec<usize> = model
            .domain(other)
            .iter()
            .copied()
            .filter(|&candidate| !CspModel::consistent((var, value), (other, candidate)))
            .collect();
        for candidate in inconsistent {
            model.remove(other, candidate);
        }
        if model.domain_size(other) == 0 {
            return false;
        }
    }
    true
}

fn select_variable(
    model: &CspModel,
    assignment: &[Option<usize>],
    ordering: VariableOrdering,
) -> Option<usize> {
    let mut unassigned = model.variables().filter(|&var| assignment[var].is_none());
    match ordering {
        VariableOrdering::InOrder => unassigned.next(),
        VariableOrdering::MinimumRemainingValues => {
            unassigned.min_by_key(|&var| (model.domain_size(var), var))
        }
    }
}

fn ordered_values(
    model: &CspModel,
    assignment: &[Option<usize>],
    var: usize,
    ordering: ValueOrdering,
) -> Vec<usize> {
    let values = model.domain(var).to_vec();
    match ordering {
        ValueOrdering::InOrder => values,
        ValueOrdering::LeastConstraining => {
            let mut scored: Vec<(usize, usize)> = values
                .into_iter()
                .map(|value| (eliminated_by(model, assignment, var, value), value))
                .collect();
            scored.sort_by_key(|&(eliminated, value)| (eliminated, value));
            scored.into_iter().map(|(_, value)| value).collect()
        }
    }
}

/// Counts domain entries of unassigned neighbors that assigning
/// `var = value` would rule out.
fn eliminated_by(
    model: &CspModel,
    assignment: &[Option<usize>],
    var: usize,
    value: usize,
) -> usize {
    model
        .variables()
        .filter(|&other| other != var && assignment[other].is_none())
        .map(|other| {
            model
                .domain(other)
                .iter()
                .filter(|&&candidate| !CspModel::consistent((var, value), (other, candidate)))
                .count()
        })
        .sum()
}
