//! Search engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the game tree is searched.
///
/// Both strategies find the same minimax value; they differ only in how
/// many nodes they visit.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchStrategy {
    /// Minimax with alpha-beta cutoffs.
    #[default]
    AlphaBeta,
    /// Plain minimax visiting every node. Reference for the pruned search.
    Exhaustive,
}

/// Configuration for the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SearchConfig {
    /// Search strategy.
    #[serde(default)]
    strategy: SearchStrategy,

    /// Whether to count nodes, leaves and cutoffs during a search.
    #[serde(default = "default_collect_stats")]
    collect_stats: bool,
}

fn default_collect_stats() -> bool {
    true
}

impl SearchConfig {
    /// Creates a configuration using the given strategy.
    pub fn new(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            collect_stats: default_collect_stats(),
        }
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(strategy = %config.strategy, collect_stats = config.collect_stats, "Parsed config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(SearchStrategy::default())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
