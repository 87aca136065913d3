//! Runtime configuration.
//!
//! Every setting has a default that reproduces the classic game; environment
//! variables override them. There are no command line flags.

use std::env;
use std::path::PathBuf;

use crate::scores::DEFAULT_SCORE_FILE;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Leaderboard file
    pub score_path: PathBuf,
    /// JSON-lines event log; `None` disables logging
    pub log_path: Option<PathBuf>,
    /// Fixed seed for the first round; `None` seeds from the clock
    pub seed: Option<u32>,
    /// Sleep between loop iterations
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            score_path: PathBuf::from(DEFAULT_SCORE_FILE),
            log_path: None,
            seed: None,
            tick_ms: TICK_MS as u64,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let score_path = non_empty(lookup("TETRIS_SCORE_PATH"))
            .map(PathBuf::from)
            .unwrap_or(defaults.score_path);

        let log_path = non_empty(lookup("TETRIS_LOG_PATH")).map(PathBuf::from);

        let seed = non_empty(lookup("TETRIS_SEED")).and_then(|s| s.parse().ok());

        let tick_ms = non_empty(lookup("TETRIS_TICK_MS"))
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            score_path,
            log_path,
            seed,
            tick_ms,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
