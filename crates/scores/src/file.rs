//! Scoped leaderboard file store
//!
//! The file is opened for each load or save and closed straight after; no
//! handle is held between calls.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::leaderboard::Leaderboard;

/// Default file name, relative to the working directory
pub const DEFAULT_SCORE_FILE: &str = "highscores.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the leaderboard. A missing or unreadable file is an empty board.
    pub fn load(&self) -> Leaderboard {
        match fs::read_to_string(&self.path) {
            Ok(text) => Leaderboard::parse(&text),
            Err(_) => Leaderboard::new(),
        }
    }

    /// Overwrite the file with the board's entries in their current order
    pub fn save(&self, board: &Leaderboard) -> Result<()> {
        let mut file = fs::File::create(&self.path)
            .with_context(|| format!("failed to create {}", self.path.display()))?;
        file.write_all(board.to_text().as_bytes())
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        file.flush()?;
        Ok(())
    }
}

impl Default for ScoreFile {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}
