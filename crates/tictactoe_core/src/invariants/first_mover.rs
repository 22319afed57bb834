//! First-mover invariant: X never has fewer marks than O.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X moves first, so X's mark count is at least O's.
pub struct FirstMoverInvariant;

impl Invariant<Board> for FirstMoverInvariant {
    fn holds(board: &Board) -> bool {
        board.count(Player::X) >= board.count(Player::O)
    }

    fn description() -> &'static str {
        "X moves first (X count >= O count)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_initial_board_holds() {
        assert!(FirstMoverInvariant::holds(&Board::initial()));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut cells = [Cell::Empty; 9];
        cells[4] = Cell::Occupied(Player::O);
        assert!(!FirstMoverInvariant::holds(&Board::from_cells_unchecked(cells)));
    }
}
