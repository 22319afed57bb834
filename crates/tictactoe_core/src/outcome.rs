//! Terminal outcomes and their utility.

use super::Player;
use serde::{Deserialize, Serialize};

/// Terminal score from X's point of view: +1 X wins, -1 O wins, 0 draw.
pub type Utility = i32;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Utility of this outcome.
    pub fn utility(&self) -> Utility {
        utility_of(self.winner())
    }
}

/// Maps an optional winner to its utility.
pub(crate) fn utility_of(winner: Option<Player>) -> Utility {
    match winner {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
