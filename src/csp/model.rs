//! Variables, domains, and the pairwise no-attack constraint.

/// Marker into the restriction trail, taken before exploring a branch and
/// handed back to [`CspModel::restore`] when the branch is left.
#[derive(Debug, Clone, Copy)]
#[must_use = "a mark is only useful if the branch later restores to it"]
pub struct TrailMark(usize);

/// The CSP view of an N-Queens board: one variable per column, each with
/// a shrinking domain of candidate rows.
///
/// Domain removals are recorded on a trail so a search branch can undo
/// everything it pruned on every exit path. Domains stay sorted, which
/// keeps value iteration and tie-breaking deterministic.
#[derive(Debug, Clone)]
pub struct CspModel {
    n: usize,
    domains: Vec<Vec<usize>>,
    trail: Vec<(usize, usize)>,
}

impl CspModel {
    /// Creates a model with the full domain `0..n` for every column.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            domains: vec![(0..n).collect(); n],
            trail: Vec::new(),
        }
    }

    /// Board size N.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Variable indices, one per column.
    pub fn variables(&self) -> std::ops::Range<usize> {
        0..self.n
    }

    /// Current domain of `var`, sorted ascending.
    pub fn domain(&self, var: usize) -> &[usize] {
        &self.domains[var]
    }

    /// Number of values left for `var`.
    pub fn domain_size(&self, var: usize) -> usize {
        self.domains[var].len()
    }

    /// The binary no-attack constraint: two assignments are consistent
    /// iff their rows differ and are not diagonal-aligned.
    pub fn consistent(a: (usize, usize), b: (usize, usize)) -> bool {
        let (var_a, val_a) = a;
        let (var_b, val_b) = b;
        val_a != val_b && var_a.abs_diff(var_b) != val_a.abs_diff(val_b)
    }

    /// Takes a mark for the current trail depth.
    pub fn mark(&self) -> TrailMark {
        TrailMark(self.trail.len())
    }

    /// Removes `value` from the domain of `var`, recording the removal on
    /// the trail. Returns false if the value was not present.
    pub fn remove(&mut self, var: usize, value: usize) -> bool {
        match self.domains[var].binary_search(&value) {
            Ok(pos) => {
                self.domains[var].remove(pos);
                self.trail.push((var, value));
                true
            }
            Err(_) => false,
        }
    }

    /// Undoes every removal made since `mark`, most recent first.
    pub fn restore(&mut self, mark: TrailMark) {
        while self.trail.len() > mark.0 {
            let (var, value) = self.trail.pop().expect("trail shrank below its mark");
            if let Err(pos) = self.domains[var].binary_search(&value) {
                self.domains[var].insert(pos, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_model_has_full_domains() {
        let model = CspModel::new(5);
        assert_eq!(model.variables().len(), 5);
        for var in model.variables() {
            assert_eq!(model.domain(var), &[0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_constraint_rejects_shared_row_and_diagonal() {
        assert!(!CspModel::consistent((0, 2), (3, 2))); // same row
        assert!(!CspModel::consistent((0, 0), (2, 2))); // descending diagonal
        assert!(!CspModel::consistent((1, 3), (3, 1))); // ascending diagonal
        assert!(CspModel::consistent((0, 0), (1, 2)));
    }

    #[test]
    fn test_constraint_is_symmetric() {
        for (a, b) in [((0, 1), (2, 3)), ((1, 4), (3, 2)), ((0, 0), (4, 4))] {
            assert_eq!(CspModel::consistent(a, b), CspModel::consistent(b, a));
        }
    }

    #[test]
    fn test_remove_and_restore_round_trip() {
        let mut model = CspModel::new(4);
        let mark = model.mark();
        assert!(model.remove(1, 2));
        assert!(model.remove(1, 0));
        assert!(model.remove(3, 3));
        assert_eq!(model.domain(1), &[1, 3]);
        assert_eq!(model.domain(3), &[0, 1, 2]);

        model.restore(mark);
        assert_eq!(model.domain(1), &[0, 1, 2, 3]);
        assert_eq!(model.domain(3), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_absent_value_is_a_no_op() {
        let mut model = CspModel::new(3);
        assert!(model.remove(0, 1));
        assert!(!model.remove(0, 1));
        assert_eq!(model.domain(0), &[0, 2]);
    }

    #[test]
    fn test_nested_marks_restore_independently() {
        let mut model = CspModel::new(4);
        let outer = model.mark();
        model.remove(0, 0);

        let inner = model.mark();
        model.remove(0, 1);
        model.remove(2, 3);
        model.restore(inner);
        assert_eq!(model.domain(0), &[1, 2, 3]);
        assert_eq!(model.domain(2), &[0, 1, 2, 3]);

        model.restore(outer);
        assert_eq!(model.domain(0), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_restore_keeps_domains_sorted() {
        let mut model = CspModel::new(5);
        let mark = model.mark();
        for value in [4, 0, 2] {
            model.remove(2, value);
        }
        model.restore(mark);
        assert_eq!(model.domain(2), &[0, 1, 2, 3, 4]);
    }
}
