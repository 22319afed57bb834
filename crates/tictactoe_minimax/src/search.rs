//! Minimax search with alpha-beta pruning.
//!
//! The search runs to full depth: the game tree is small enough that no
//! transposition table, move ordering or depth limit is needed. X maximizes
//! utility and O minimizes it.
//!
//! Children are visited in row-major order ([`Board::successors`]). At the
//! root the first action reaching the best value is kept; an equal value
//! found later never replaces it. Results are therefore reproducible.
//!
//! Each call owns its recursion state, so an [`Engine`] can be shared
//! between threads and searched concurrently.

use crate::config::{SearchConfig, SearchStrategy};
use crate::stats::SearchStats;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Action, Board, Utility};
use tracing::{debug, instrument};

/// Bound above every utility, standing in for infinity in the window.
const INF: Utility = 2;

/// Result of searching one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Optimal action for the player to move, `None` on a terminal board.
    pub best_action: Option<Action>,
    /// Minimax value of the board.
    pub value: Utility,
    /// Counters for this search (zero when collection is disabled).
    pub stats: SearchStats,
}

/// Game-theoretically optimal move finder.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: SearchConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Optimal action for the player to move, or `None` if the game is over.
    pub fn best_action(&self, board: &Board) -> Option<Action> {
        self.search(board).best_action
    }

    /// Minimax value of the board under optimal play by both sides.
    pub fn value(&self, board: &Board) -> Utility {
        self.search(board).value
    }

    /// Searches the board to full depth.
    #[instrument(skip(self, board), fields(board = %board, strategy = %self.config.strategy()))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let mut search = Search::new(&self.config);
        search.visit();

        if let Some(outcome) = board.outcome() {
            search.leaf();
            debug!(%outcome, "Board is terminal, no move to make");
            return SearchReport {
                best_action: None,
                value: outcome.utility(),
                stats: search.stats,
            };
        }

        let maximizing = board.current_player().is_maximizing();
        let mut alpha = -INF;
        let mut beta = INF;
        let mut best_value = if maximizing { -INF } else { INF };
        let mut best_action = None;

        for (action, child) in board.successors() {
            let value = search.value(&child, alpha, beta);
            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_action = Some(action);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_action = Some(action);
                }
                beta = beta.min(value);
            }

            if search.prune && alpha >= beta {
                break;
            }
        }

        debug!(
            best_action = ?best_action,
            value = best_value,
            nodes = search.stats.nodes,
            cutoffs = search.stats.cutoffs,
            "Search complete"
        );
        SearchReport {
            best_action,
            value: best_value,
            stats: search.stats,
        }
    }
}

/// Recursion state for one search call.
struct Search {
    prune: bool,
    collect_stats: bool,
    stats: SearchStats,
}

impl Search {
    fn new(config: &SearchConfig) -> Self {
        Self {
            prune: *config.strategy() == SearchStrategy::AlphaBeta,
            collect_stats: *config.collect_stats(),
            stats: SearchStats::default(),
        }
    }

    /// Value of `board` within the `(alpha, beta)` window.
    ///
    /// Exact when the true value lies inside the window; otherwise a bound
    /// on the side of the window it fell out of.
    fn value(&mut self, board: &Board, mut alpha: Utility, mut beta: Utility) -> Utility {
        self.visit();
        if let Some(outcome) = board.outcome() {
            self.leaf();
            return outcome.utility();
        }

        let maximizing = board.current_player().is_maximizing();
        let mut value = if maximizing { -INF } else { INF };

        for (_, child) in board.successors() {
            let child_value = self.value(&child, alpha, beta);
            if maximizing {
                value = value.max(child_value);
                if self.prune && value >= beta {
                    self.cutoff();
                    return value;
                }
                alpha = alpha.max(value);
            } else {
                value = value.min(child_value);
                if self.prune && value <= alpha {
                    self.cutoff();
                    return value;
                }
                beta = beta.min(value);
            }
        }

        value
    }

    fn visit(&mut self) {
        if self.collect_stats {
            self.stats.nodes += 1;
        }
    }

    fn leaf(&mut self) {
        if self.collect_stats {
            self.stats.leaves += 1;
        }
    }

    fn cutoff(&mut self) {
        if self.collect_stats {
            self.stats.cutoffs += 1;
        }
    }
}

/// Optimal action using the default engine.
pub fn best_action(board: &Board) -> Option<Action> {
    Engine::default().best_action(board)
}

/// Minimax value using the default engine.
pub fn minimax_value(board: &Board) -> Utility {
    Engine::default().value(board)
}
