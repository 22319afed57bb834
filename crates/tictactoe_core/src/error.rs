//! Errors raised by the board model.

use super::{Action, Player};

/// Why an action could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidReason {
    /// Row or column lies outside 0..=2.
    #[display("coordinates out of range")]
    OutOfRange,

    /// The target cell already holds a mark.
    #[display("cell already occupied by {}", _0)]
    Occupied(Player),
}

/// Error that can occur when building a board or applying an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The action does not name an empty, in-range cell.
    #[display("Invalid action {}: {}", action, reason)]
    InvalidAction {
        /// The rejected action.
        action: Action,
        /// What made it invalid.
        reason: InvalidReason,
    },

    /// Cells cannot arise from alternating play starting with X: the mark
    /// counts are off, or both players own a complete line.
    #[display(
        "Malformed board: X={} O={} (unreachable by alternating play from X)",
        x_count,
        o_count
    )]
    MalformedBoard {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },

    /// Board notation could not be parsed.
    #[display("Cannot parse board {:?}: {}", input, message)]
    Parse {
        /// The offending input.
        input: String,
        /// What went wrong.
        message: String,
    },
}

impl BoardError {
    /// Returns true for the invalid-action kind.
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, BoardError::InvalidAction { .. })
    }
}

impl std::error::Error for BoardError {}
