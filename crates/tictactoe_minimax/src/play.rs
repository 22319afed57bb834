//! Game loop between two agents.
//!
//! Repeatedly asks the agent for the player to move, applies its action and
//! stops at a terminal board.

use crate::agent::Agent;
use crate::search::Engine;
use derive_getters::Getters;
use derive_more::{Display, Error};
use tictactoe_core::{Action, Board, BoardError, Outcome, Player, Utility};
use tracing::{debug, info, instrument};

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Playout {
    /// Board the game started from.
    start: Board,
    /// Actions played, in order.
    actions: Vec<Action>,
    /// Terminal board reached.
    final_board: Board,
}

impl Playout {
    /// Outcome of the game.
    ///
    /// Always `Some`: a playout only ends on a terminal board.
    pub fn outcome(&self) -> Option<Outcome> {
        self.final_board.outcome()
    }

    /// Utility of the final board.
    pub fn utility(&self) -> Utility {
        self.final_board.utility()
    }
}

/// Error that can end a game early.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// An agent played an action the board rejected.
    #[display("Agent {} made an illegal move: {}", agent, source)]
    IllegalMove {
        /// Offending agent.
        agent: String,
        /// Rejection from the board.
        source: BoardError,
    },

    /// An agent returned no action on a board still in play.
    #[display("Agent {} returned no move on {}", agent, board)]
    NoMove {
        /// Offending agent.
        agent: String,
        /// Board it was asked to play.
        board: Board,
    },
}

/// Plays `x` against `o` from `start` until the game ends.
///
/// # Errors
///
/// Returns [`PlayError`] if an agent plays an illegal action or passes on a
/// non-terminal board.
#[instrument(skip(x, o, start), fields(x = x.name(), o = o.name(), start = %start))]
pub fn play_match(x: &dyn Agent, o: &dyn Agent, start: Board) -> Result<Playout, PlayError> {
    let mut board = start;
    let mut actions = Vec::new();

    while !board.is_terminal() {
        let agent = match board.current_player() {
            Player::X => x,
            Player::O => o,
        };

        let action = agent.choose_action(&board).ok_or_else(|| PlayError::NoMove {
            agent: agent.name().to_string(),
            board,
        })?;
        board = board.apply(action).map_err(|source| PlayError::IllegalMove {
            agent: agent.name().to_string(),
            source,
        })?;
        debug!(agent = agent.name(), %action, board = %board, "Move made");
        actions.push(action);
    }

    info!(final_board = %board, moves = actions.len(), "Game over");
    Ok(Playout {
        start,
        actions,
        final_board: board,
    })
}

/// Plays the engine against itself from `start`.
pub fn self_play(engine: &Engine, start: Board) -> Result<Playout, PlayError> {
    play_match(engine, engine, start)
}
