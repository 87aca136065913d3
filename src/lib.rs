//! Terminal Tetris (workspace facade crate).
//!
//! The game logic, leaderboard, input and rendering live in dedicated crates
//! under `crates/` and are re-exported here as `term_tetris::{core, scores,
//! input, term, types}`. This package adds the session loop ([`App`]), its
//! configuration and the event log.

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_scores as scores;
pub use term_tetris_term as term;
pub use term_tetris_types as types;

pub mod app;
pub mod config;
pub mod event_log;

pub use app::{App, RoundSummary};
pub use config::AppConfig;
pub use event_log::{EventLog, GameEvent, RoundEnd};
