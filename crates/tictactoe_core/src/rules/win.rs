//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};

/// The eight winning lines as row-major cell indices.
///
/// Checked in this order: rows top to bottom, columns left to right, the
/// main diagonal, then the anti-diagonal (bottom-left to top-right).
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [6, 4, 2],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order, or
/// `None` if no line is complete.
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let player = cells[a].player()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some(player)
    })
}
