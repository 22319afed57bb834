//! Optimal tic-tac-toe play.
//!
//! Full-depth minimax search with alpha-beta pruning over the board model
//! from [`tictactoe_core`]. The search is a pure function of the board: no
//! state is kept between calls.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Action, Board};
//! use tictactoe_minimax::{Engine, best_action};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(best_action(&board), Some(Action::new(0, 2)));
//!
//! let report = Engine::default().search(&Board::initial());
//! assert_eq!(report.value, 0);
//! # Ok::<(), tictactoe_core::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agent;
mod config;
mod play;
mod search;
mod stats;

// Crate-level exports - Search engine
pub use search::{Engine, SearchReport, best_action, minimax_value};
pub use stats::SearchStats;

// Crate-level exports - Configuration
pub use config::{ConfigError, SearchConfig, SearchStrategy};

// Crate-level exports - Game loop
pub use agent::{Agent, FirstAvailable};
pub use play::{PlayError, Playout, play_match, self_play};
