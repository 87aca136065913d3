//! Between-round screens: game over (with optional name entry) and the
//! leaderboard. Pure, like [`crate::game_view`].

use term_tetris_scores::{Leaderboard, NameEntry};

use crate::fb::{CellStyle, FrameBuffer, PaletteColor};
use crate::game_view::{SCREEN_HEIGHT, SCREEN_WIDTH};

const LEFT: u16 = 10;
const NAME_ROW: u16 = 16;

/// Render the game over screen.
///
/// With `entry` set, the new-record banner and the name prompt are shown and
/// the returned position is where the text cursor belongs.
pub fn render_game_over(
    score: u32,
    entry: Option<&NameEntry>,
    fb: &mut FrameBuffer,
) -> Option<(u16, u16)> {
    fb.resize(SCREEN_WIDTH, SCREEN_HEIGHT);
    fb.clear();
    fb.put_markup(LEFT, 10, "# Game Over");
    fb.put_markup(LEFT, 12, &format!("**Final Score: {}**", score));

    let entry = entry?;
    fb.put_markup(LEFT, 14, "**Congratulations! New Record!**");
    let prompt = "Enter Name: ";
    let white = CellStyle::fg(PaletteColor::White);
    fb.put_str(LEFT, NAME_ROW, prompt, white);
    let name_x = LEFT + prompt.len() as u16;
    fb.put_str(name_x, NAME_ROW, entry.buffer(), white);
    Some((name_x + entry.buffer().chars().count() as u16, NAME_ROW))
}

/// Render the leaderboard and the restart/quit prompt.
pub fn render_leaderboard(board: &Leaderboard, fb: &mut FrameBuffer) {
    fb.resize(SCREEN_WIDTH, SCREEN_HEIGHT);
    fb.clear();
    fb.put_markup(LEFT, 2, "# Leaderboard");
    for (i, entry) in board.entries().iter().enumerate() {
        let line = format!("{}. {} : {}", i + 1, entry.name, entry.score);
        fb.put_markup(LEFT, 4 + i as u16, &line);
    }
    fb.put_markup(LEFT, 12, "**Press [R] to Restart, or [ESC] to Quit**");
}
