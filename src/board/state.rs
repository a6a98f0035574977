//! Queen placement state, conflict counting, and the move neighborhood.

use rand::Rng;
use std::fmt;

/// One placement of N queens, one queen per column.
///
/// Index is the column, value is the row. The length always equals the
/// board size and every row lies in `0..n`, so queens can never share a
/// column; only row and diagonal attacks are possible.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<usize>,
}

/// A single-queen move: the queen in `col` leaves row `from` for `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueenMove {
    pub col: usize,
    pub from: usize,
    pub to: usize,
}

impl Board {
    /// Creates a board from explicit row assignments.
    ///
    /// # Panics
    ///
    /// Panics if any row is outside `0..rows.len()`.
    pub fn new(rows: Vec<usize>) -> Self {
        let n = rows.len();
        assert!(
            rows.iter().all(|&row| row < n),
            "row out of range for board size {n}"
        );
        Self { rows }
    }

    /// Creates a board with every queen on a uniformly random row.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            rows: (0..n).map(|_| rng.random_range(0..n)).collect(),
        }
    }

    /// Board size N.
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    /// Row assignments, indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Row of the queen in `col`.
    pub fn row(&self, col: usize) -> usize {
        self.rows[col]
    }

    /// Moves the queen in `col` to `row` in place.
    pub fn set(&mut self, col: usize, row: usize) {
        debug_assert!(row < self.rows.len(), "row out of range");
        self.rows[col] = row;
    }

    /// Returns a copy with the queen in `col` moved to `row`.
    pub fn with_row(&self, col: usize, row: usize) -> Self {
        let mut next = self.clone();
        next.set(col, row);
        next
    }

    /// Whether the queens in columns `a` and `b` attack each other.
    fn attacks(&self, a: usize, b: usize) -> bool {
        let (row_a, row_b) = (self.rows[a], self.rows[b]);
        row_a == row_b || a.abs_diff(b) == row_a.abs_diff(row_b)
    }

    /// Counts attacking pairs: unordered queen pairs sharing a row or a
    /// diagonal. O(N²), recomputed on every call.
    pub fn conflicts(&self) -> usize {
        let n = self.rows.len();
        let mut count = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.attacks(i, j) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Counts the attacking pairs involving the queen in `col`.
    pub fn conflicts_at(&self, col: usize) -> usize {
        (0..self.rows.len())
            .filter(|&other| other != col && self.attacks(col, other))
            .count()
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// All single-queen moves: each queen to every other row of its
    /// column, N×(N−1) moves in total.
    pub fn moves(&self) -> Vec<QueenMove> {
        let n = self.rows.len();
        let mut moves = Vec::with_capacity(n * n.saturating_sub(1));
        for col in 0..n {
            let from = self.rows[col];
            for to in 0..n {
                if to != from {
                    moves.push(QueenMove { col, from, to });
                }
            }
        }
        moves
    }

    /// All states reachable by a single-queen move, paired with the move
    /// that produces them.
    pub fn neighbors(&self) -> Vec<(Board, QueenMove)> {
        self.moves()
            .into_iter()
            .map(|mv| (self.apply(&mv), mv))
            .collect()
    }

    /// Applies a move, returning the resulting board.
    pub fn apply(&self, mv: &QueenMove) -> Self {
        self.with_row(mv.col, mv.to)
    }
}

impl fmt::Display for Board {
    /// Renders the board as an N×N grid of `Q` and `.` markers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rows.len();
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if self.rows[col] == row { 'Q' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_known_solution_has_zero_conflicts() {
        let board = Board::new(vec![0, 2, 4, 1, 3]);
        assert_eq!(board.conflicts(), 0);
        assert!(board.is_solution());
    }

    #[test]
    fn test_all_same_row_is_all_pairs() {
        let board = Board::new(vec![0, 0, 0, 0, 0]);
        assert_eq!(board.conflicts(), 10); // C(5, 2)
    }

    #[test]
    fn test_main_diagonal_is_all_pairs() {
        let board = Board::new(vec![0, 1, 2, 3, 4]);
        assert_eq!(board.conflicts(), 10);
    }

    #[test]
    fn test_single_attacking_pair() {
        // Only columns 1 and 2 share a diagonal.
        let board = Board::new(vec![0, 2, 1]);
        assert_eq!(board.conflicts(), 1);
        assert_eq!(board.conflicts_at(0), 0);
        assert_eq!(board.conflicts_at(1), 1);
        assert_eq!(board.conflicts_at(2), 1);
    }

    #[test]
    fn test_per_column_counts_sum_to_twice_the_pairs() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let board = Board::random(6, &mut rng);
            let per_column: usize = (0..board.n()).map(|col| board.conflicts_at(col)).sum();
            assert_eq!(per_column, 2 * board.conflicts());
        }
    }

    #[test]
    fn test_single_queen_is_trivially_solved() {
        let board = Board::new(vec![0]);
        assert_eq!(board.conflicts(), 0);
        assert!(board.moves().is_empty());
    }

    #[test]
    fn test_move_count_is_n_times_n_minus_one() {
        let board = Board::new(vec![0, 2, 4, 1, 3]);
        assert_eq!(board.moves().len(), 5 * 4);
        assert_eq!(board.neighbors().len(), 5 * 4);
    }

    #[test]
    fn test_moves_never_keep_a_queen_in_place() {
        let board = Board::new(vec![1, 3, 0, 2]);
        for mv in board.moves() {
            assert_ne!(mv.from, mv.to);
            assert_eq!(mv.from, board.row(mv.col));
        }
    }

    #[test]
    fn test_apply_changes_exactly_one_column() {
        let board = Board::new(vec![1, 3, 0, 2]);
        let mv = QueenMove { col: 2, from: 0, to: 3 };
        let moved = board.apply(&mv);
        assert_eq!(moved.row(2), 3);
        for col in [0, 1, 3] {
            assert_eq!(moved.row(col), board.row(col));
        }
        // The original is untouched.
        assert_eq!(board.row(2), 0);
    }

    #[test]
    fn test_random_board_respects_row_bounds() {
        let mut rng = create_rng(7);
        for _ in 0..50 {
            let board = Board::random(5, &mut rng);
            assert_eq!(board.n(), 5);
            assert!(board.rows().iter().all(|&row| row < 5));
        }
    }

    #[test]
    fn test_display_renders_one_queen_per_column() {
        let board = Board::new(vec![0, 2, 4, 1, 3]);
        let grid = board.to_string();
        assert_eq!(grid.matches('Q').count(), 5);
        assert_eq!(grid.lines().count(), 5);
        assert!(grid.lines().next().unwrap().starts_with('Q'));
    }

    #[test]
    #[should_panic(expected = "row out of range")]
    fn test_out_of_range_row_rejected() {
        Board::new(vec![0, 5, 1, 2, 3]);
    }

    fn arbitrary_rows() -> impl Strategy<Value = Vec<usize>> {
        (1usize..=8).prop_flat_map(|n| proptest::collection::vec(0..n, n))
    }

    proptest! {
        #[test]
        fn prop_conflicts_invariant_under_vertical_reflection(rows in arbitrary_rows()) {
            let n = rows.len();
            let board = Board::new(rows.clone());
            let mirrored = Board::new(rows.iter().map(|&row| n - 1 - row).collect());
            prop_assert_eq!(board.conflicts(), mirrored.conflicts());
        }

        #[test]
        fn prop_conflicts_invariant_under_horizontal_reflection(rows in arbitrary_rows()) {
            let board = Board::new(rows.clone());
            let reversed = Board::new(rows.iter().rev().copied().collect());
            prop_assert_eq!(board.conflicts(), reversed.conflicts());
        }

        #[test]
        fn prop_zero_conflicts_means_pairwise_safe(rows in arbitrary_rows()) {
            let board = Board::new(rows.clone());
            let n = rows.len();
            let pairwise_safe = (0..n).all(|i| {
                ((i + 1)..n).all(|j| {
                    rows[i] != rows[j] && i.abs_diff(j) != rows[i].abs_diff(rows[j])
                })
            });
            prop_assert_eq!(board.conflicts() == 0, pairwise_safe);
        }
    }
}
