//! Leaderboard persistence and high score name entry
//!
//! - [`leaderboard`]: sorted top-5 model and its text format
//! - [`file`]: scoped load/save of the leaderboard file
//! - [`name_entry`]: tick-driven name input state machine

pub mod file;
pub mod leaderboard;
pub mod name_entry;

pub use term_tetris_types as types;

pub use file::{ScoreFile, DEFAULT_SCORE_FILE};
pub use leaderboard::{HighScore, Leaderboard};
pub use name_entry::{NameEntry, NameEntryState, NameInput};
