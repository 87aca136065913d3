//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`], name-entry
//! inputs and leaderboard menu choices, and provides the non-blocking
//! keyboard collaborator used by the game loop.

pub mod keys;
pub mod map;

pub use term_tetris_types as types;

pub use keys::{KeySource, ScriptedKeys, TerminalKeys};
pub use map::{handle_key_event, map_menu_key, map_name_key, should_quit, MenuChoice};
