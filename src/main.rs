//! Terminal Tetris runner (default binary).
//!
//! Configuration comes from `TETRIS_*` environment variables; see
//! [`term_tetris::AppConfig`].

use anyhow::Result;

use term_tetris::input::TerminalKeys;
use term_tetris::term::TerminalRenderer;
use term_tetris::{App, AppConfig, EventLog};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    // Open the log before raw mode so a bad path is reported normally.
    let log = EventLog::from_path(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = App::new(config, TerminalKeys::new(), &mut term, log).run();

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
