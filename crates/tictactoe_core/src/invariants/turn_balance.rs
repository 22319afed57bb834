//! Turn balance invariant: players alternate, so counts never drift apart.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X and O mark counts differ by at most one.
pub struct TurnBalanceInvariant;

impl Invariant<Board> for TurnBalanceInvariant {
    fn holds(board: &Board) -> bool {
        board.count(Player::X).abs_diff(board.count(Player::O)) <= 1
    }

    fn description() -> &'static str {
        "Players alternate turns (|X count - O count| <= 1)"
    }
}
