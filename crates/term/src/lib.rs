//! Terminal rendering for the game.
//!
//! Views render into a [`FrameBuffer`] without touching the terminal; a
//! [`Surface`] shows finished frames. Keeping the two apart lets the whole
//! game loop run against [`HeadlessSurface`] in tests.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;
pub mod surface;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, PaletteColor};
pub use game_view::{board_to_screen, piece_color, GameView, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{render_game_over, render_leaderboard};
pub use surface::{HeadlessSurface, Surface};
