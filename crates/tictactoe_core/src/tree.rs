//! Enumeration of the reachable state space.

use super::Board;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Every board reachable from the initial board by legal play, including
/// the initial board itself.
///
/// Play stops at terminal boards, so no board past a win is produced. Each
/// board appears once; the order is depth-first from the initial board.
#[instrument]
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut boards = Vec::new();
    let mut to_explore = vec![Board::initial()];

    while let Some(board) = to_explore.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);

        if board.is_terminal() {
            continue;
        }
        to_explore.extend(board.successors().map(|(_, next)| next));
    }

    debug!(count = boards.len(), "Enumerated reachable boards");
    boards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardInvariants;
    use crate::InvariantSet;

    #[test]
    fn test_reachable_count() {
        // 5478 legal positions, the well-known total for tic-tac-toe.
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn test_reachable_boards_satisfy_invariants() {
        for board in reachable_boards() {
            assert!(BoardInvariants::check_all(&board).is_ok(), "{}", board);
        }
    }

    #[test]
    fn test_terminal_split() {
        let boards = reachable_boards();
        let terminal = boards.iter().filter(|board| board.is_terminal()).count();
        assert_eq!(terminal, 958);
        assert_eq!(boards.len() - terminal, 4520);
    }
}
