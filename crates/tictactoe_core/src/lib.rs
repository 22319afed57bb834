//! Tic-tac-toe board model.
//!
//! Pure game logic with no I/O: an immutable [`Board`] value, row-major
//! [`Action`] coordinates, win and terminal detection, and the utility of
//! finished games from X's point of view.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Action, Board, Player};
//!
//! let board = Board::initial();
//! assert_eq!(board.current_player(), Player::X);
//!
//! let next = board.apply(Action::new(1, 1))?;
//! assert_eq!(next.current_player(), Player::O);
//! assert_eq!(next.legal_actions().len(), 8);
//! // The original board is unchanged.
//! assert_eq!(board, Board::initial());
//! # Ok::<(), tictactoe_core::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod invariants;
mod notation;
mod outcome;
mod rules;
mod tree;
mod types;

// Crate-level exports - Domain types
pub use action::{Action, CELLS, SIZE};
pub use board::Board;
pub use types::{Cell, Player};

// Crate-level exports - Outcomes
pub use outcome::{Outcome, Utility};

// Crate-level exports - Errors
pub use error::{BoardError, InvalidReason};

// Crate-level exports - Rules and invariants
pub use invariants::{
    BoardInvariants, FirstMoverInvariant, Invariant, InvariantSet, InvariantViolation,
    SingleWinnerInvariant, TurnBalanceInvariant,
};
pub use rules::{LINES, check_winner, is_draw, is_full, is_terminal};

// Crate-level exports - State space
pub use tree::reachable_boards;
