//! Single-winner invariant: play stops at the first completed line.

use super::super::rules::LINES;
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: complete lines, if any, all belong to the same player.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn owns_line(board: &Board, player: Player) -> bool {
        let cells = board.cells();
        LINES
            .iter()
            .any(|line| line.iter().all(|&index| cells[index].player() == Some(player)))
    }
}

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(Self::owns_line(board, Player::X) && Self::owns_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player owns a complete line"
    }
}
