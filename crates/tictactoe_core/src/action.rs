//! First-class action type for tic-tac-toe.
//!
//! An action names a cell by `(row, col)`. Actions are plain coordinates and
//! carry no player: the mark placed is always the board's current player.
//! Range and occupancy are checked when the action is applied.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A `(row, col)` coordinate on the board.
///
/// The derived ordering compares `row` first, so sorting actions (or storing
/// them in a `BTreeSet`) yields row-major order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Action {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Action {
    /// Every in-range action in row-major order.
    pub const ALL: [Action; CELLS] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Creates an action. Coordinates are not range-checked here.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true when both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Converts to a row-major cell index (0-8), or `None` when out of range.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then(|| self.row * SIZE + self.col)
    }

    /// Creates an action from a row-major cell index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), Some(index));
            assert_eq!(Action::from_index(index), Some(*action));
        }
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_out_of_range_has_no_index() {
        assert_eq!(Action::new(3, 0).index(), None);
        assert_eq!(Action::new(0, 3).index(), None);
        assert!(!Action::new(usize::MAX, 1).in_bounds());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut shuffled = Action::ALL;
        shuffled.reverse();
        shuffled.sort();
        assert_eq!(shuffled, Action::ALL);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::new(0, 2).to_string(), "(0, 2)");
        assert_eq!(Action::from((2, 1)), Action::new(2, 1));
    }
}
