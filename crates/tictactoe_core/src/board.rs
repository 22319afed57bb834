//! The 3x3 board value and its move operations.
//!
//! A [`Board`] is an immutable `Copy` value. Applying an action returns a new
//! board and leaves the original untouched. The player to move is derived
//! from the mark counts rather than stored, so it can never disagree with
//! the cells.

use super::error::{BoardError, InvalidReason};
use super::invariants::{BoardInvariants, InvariantSet};
use super::outcome::{Outcome, Utility, utility_of};
use super::{Action, CELLS, Cell, Player, rules};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// 3x3 tic-tac-toe board.
///
/// Boards reached by legal play satisfy [`BoardInvariants`]: X has as many
/// marks as O or exactly one more, and at most one player owns a complete
/// line. Boards built from arbitrary cells are validated by
/// [`Board::from_cells`]. [`Board::apply`] only checks the target cell, so
/// moving on after the game has ended is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[Cell; 9]", into = "[Cell; 9]")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates the all-empty starting board.
    pub const fn initial() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Builds a board from row-major cells, rejecting cells that alternating
    /// play from X cannot produce.
    #[instrument(skip(cells))]
    pub fn from_cells(cells: [Cell; CELLS]) -> Result<Self, BoardError> {
        let board = Self::from_cells_unchecked(cells);
        BoardInvariants::check_all(&board).map_err(|violations| {
            let x_count = board.count(Player::X);
            let o_count = board.count(Player::O);
            for violation in &violations {
                warn!(x_count, o_count, invariant = %violation.description, "Board rejected");
            }
            BoardError::MalformedBoard { x_count, o_count }
        })?;
        Ok(board)
    }

    pub(crate) const fn from_cells_unchecked(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Gets the cell named by an action, or `None` when out of range.
    pub fn get(&self, action: Action) -> Option<Cell> {
        action.index().map(|index| self.cells[index])
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Number of marks placed so far.
    pub fn ply(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the player who moves next.
    ///
    /// X moves when the counts are equal (including the initial board),
    /// otherwise O. Every `Board` value satisfies the count invariant, so
    /// this is always well defined.
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Iterates the empty cells in row-major order.
    ///
    /// This is the iteration order the search uses, which fixes its
    /// tie-breaking.
    pub fn actions(&self) -> impl Iterator<Item = Action> {
        empty_cells(self.cells).map(|(_, action)| action)
    }

    /// Returns the set of empty cells.
    ///
    /// Only occupancy is consulted: a full board yields the empty set, while
    /// a won board with empty cells still lists them.
    pub fn legal_actions(&self) -> BTreeSet<Action> {
        self.actions().collect()
    }

    /// Iterates `(action, resulting board)` pairs for every empty cell, in
    /// row-major order.
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> {
        let board = *self;
        let player = board.current_player();
        empty_cells(board.cells).map(move |(index, action)| (action, board.with_mark(index, player)))
    }

    /// Returns the board after the current player marks `action`.
    ///
    /// `self` is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidAction`] if the action is out of range or
    /// the cell is already occupied.
    pub fn apply(&self, action: Action) -> Result<Board, BoardError> {
        let index = action.index().ok_or(BoardError::InvalidAction {
            action,
            reason: InvalidReason::OutOfRange,
        })?;

        match self.cells[index] {
            Cell::Empty => Ok(self.with_mark(index, self.current_player())),
            Cell::Occupied(owner) => Err(BoardError::InvalidAction {
                action,
                reason: InvalidReason::Occupied(owner),
            }),
        }
    }

    /// Owner of the first complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the game has ended.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Outcome of the game, `Some` exactly when the board is terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::Winner(player)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Utility of a terminal board: +1 X won, -1 O won, 0 draw.
    ///
    /// Meaningful only when [`is_terminal`](Self::is_terminal) holds. On a
    /// board still in play this returns 0, since no line is complete.
    pub fn utility(&self) -> Utility {
        utility_of(self.winner())
    }

    fn with_mark(self, index: usize, player: Player) -> Board {
        let mut cells = self.cells;
        cells[index] = Cell::Occupied(player);
        Board { cells }
    }
}

/// Row-major `(index, action)` pairs of the empty cells.
fn empty_cells(cells: [Cell; CELLS]) -> impl Iterator<Item = (usize, Action)> {
    Action::ALL
        .into_iter()
        .enumerate()
        .filter(move |(index, _)| cells[*index].is_empty())
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl TryFrom<[Cell; CELLS]> for Board {
    type Error = BoardError;

    fn try_from(cells: [Cell; CELLS]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for [Cell; CELLS] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::initial();
        assert!(board.cells().iter().all(|cell| cell.is_empty()));
        assert_eq!(board.ply(), 0);
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_current_player_alternates() {
        let board = Board::initial();
        let board = board.apply(Action::new(1, 1)).unwrap();
        assert_eq!(board.current_player(), Player::O);
        let board = board.apply(Action::new(0, 0)).unwrap();
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn test_apply_marks_current_player() {
        let board = Board::initial().apply(Action::new(2, 1)).unwrap();
        assert_eq!(board.get(Action::new(2, 1)), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.ply(), 1);
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board = Board::initial().apply(Action::new(0, 0)).unwrap();
        let err = board.apply(Action::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidAction {
                action: Action::new(0, 0),
                reason: InvalidReason::Occupied(Player::X),
            }
        );
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let err = Board::initial().apply(Action::new(0, 3)).unwrap_err();
        assert!(matches!(
            err,
            BoardError::InvalidAction {
                reason: InvalidReason::OutOfRange,
                ..
            }
        ));
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before = Board::initial();
        let after = before.apply(Action::new(1, 1)).unwrap();
        assert_eq!(before, Board::initial());
        assert_ne!(before, after);
    }

    #[test]
    fn test_successors_follow_row_major_order() {
        let board = Board::initial().apply(Action::new(0, 1)).unwrap();
        let actions: Vec<Action> = board.successors().map(|(action, _)| action).collect();
        assert_eq!(actions.len(), 8);
        assert_eq!(actions[0], Action::new(0, 0));
        assert_eq!(actions[1], Action::new(0, 2));
        for (action, next) in board.successors() {
            assert_eq!(Ok(next), board.apply(action));
        }
    }

    #[test]
    fn test_from_cells_rejects_malformed() {
        let mut cells = [Cell::Empty; CELLS];
        cells[0] = Cell::Occupied(Player::X);
        cells[1] = Cell::Occupied(Player::X);
        assert_eq!(
            Board::from_cells(cells),
            Err(BoardError::MalformedBoard {
                x_count: 2,
                o_count: 0
            })
        );
    }

    #[test]
    fn test_outcome_only_on_terminal() {
        let board = Board::initial();
        assert_eq!(board.outcome(), None);
        assert!(!board.is_terminal());
        assert_eq!(board.utility(), 0);
    }
}
