//! Move sources that can drive a game.

use crate::search::Engine;
use tictactoe_core::{Action, Board};
use tracing::debug;

/// Anything that picks an action for the player to move.
pub trait Agent {
    /// Chooses an action, or `None` if it has nothing to play.
    fn choose_action(&self, board: &Board) -> Option<Action>;

    /// Agent name for logs.
    fn name(&self) -> &str;
}

impl Agent for Engine {
    fn choose_action(&self, board: &Board) -> Option<Action> {
        self.best_action(board)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Naive agent that picks the first empty cell in row-major order.
#[derive(Debug, Clone)]
pub struct FirstAvailable {
    name: String,
}

impl FirstAvailable {
    /// Creates a new first-available agent.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for FirstAvailable {
    fn default() -> Self {
        Self::new("first-available")
    }
}

impl Agent for FirstAvailable {
    fn choose_action(&self, board: &Board) -> Option<Action> {
        let action = board.actions().next();
        debug!(agent = %self.name, ?action, "Picked first empty cell");
        action
    }

    fn name(&self) -> &str {
        &self.name
    }
}
