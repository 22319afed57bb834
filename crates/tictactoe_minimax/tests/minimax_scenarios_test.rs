//! Tests for optimal play in known positions.

mod common;

use common::{board, init_tracing};
use tictactoe_core::{Action, Board, Outcome, Player};
use tictactoe_minimax::{Agent, Engine, FirstAvailable, best_action, play_match, self_play};

#[test]
fn test_forced_win_completes_top_row() {
    init_tracing();
    // X X . / O O . / . . .  with X to move
    let board = board("XX./OO./...");
    assert_eq!(board.current_player(), Player::X);
    assert_eq!(best_action(&board), Some(Action::new(0, 2)));
}

#[test]
fn test_forced_block_stops_top_row() {
    init_tracing();
    // O threatens the top row; X must block at (0, 2).
    let board = board("OO./X../..X");
    assert_eq!(board.current_player(), Player::X);
    let report = Engine::default().search(&board);
    assert_eq!(report.best_action, Some(Action::new(0, 2)));
    assert_eq!(report.value, 1);
}

#[test]
fn test_o_blocks_diagonal() {
    init_tracing();
    // X threatens the main diagonal; the block is the last empty cell.
    let board = board("X.O/.X./...");
    assert_eq!(board.current_player(), Player::O);
    let report = Engine::default().search(&board);
    assert_eq!(report.best_action, Some(Action::new(2, 2)));
    assert_eq!(report.value, 0);
}

#[test]
fn test_o_takes_win() {
    let board = board("OO./XX./X..");
    assert_eq!(board.current_player(), Player::O);
    assert_eq!(best_action(&board), Some(Action::new(0, 2)));
}

#[test]
fn test_terminal_boards_have_no_action() {
    for notation in ["XXX/OO./...", "XOX/OXX/OXO", "OX./OX./O.X"] {
        assert_eq!(best_action(&board(notation)), None, "{}", notation);
    }
}

#[test]
fn test_optimal_play_draws() {
    init_tracing();
    let playout = self_play(&Engine::default(), Board::initial()).unwrap();
    assert_eq!(playout.outcome(), Some(Outcome::Draw));
    assert_eq!(playout.utility(), 0);
}

#[test]
fn test_engine_beats_first_available() {
    let engine = Engine::default();
    let naive = FirstAvailable::default();

    let as_x = play_match(&engine, &naive, Board::initial()).unwrap();
    assert_eq!(as_x.outcome(), Some(Outcome::Winner(Player::X)));

    let as_o = play_match(&naive, &engine, Board::initial()).unwrap();
    assert_eq!(as_o.outcome(), Some(Outcome::Winner(Player::O)));
}

/// Every line of play where `engine_side` follows the engine and the other
/// side tries every legal move. Returns the worst utility for the engine.
fn worst_case(engine: &Engine, board: Board, engine_side: Player) -> i32 {
    if board.is_terminal() {
        return match engine_side {
            Player::X => board.utility(),
            Player::O => -board.utility(),
        };
    }

    if board.current_player() == engine_side {
        let action = engine.choose_action(&board).expect("non-terminal board has a move");
        worst_case(engine, board.apply(action).unwrap(), engine_side)
    } else {
        board
            .successors()
            .map(|(_, next)| worst_case(engine, next, engine_side))
            .min()
            .expect("non-terminal board has a successor")
    }
}

#[test]
fn test_engine_never_loses() {
    let engine = Engine::default();
    assert!(worst_case(&engine, Board::initial(), Player::X) >= 0);
    assert!(worst_case(&engine, Board::initial(), Player::O) >= 0);
}
