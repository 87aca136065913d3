//! Optional JSON-lines event log.
//!
//! One serde_json object per line, tagged with `"type"`. The terminal is in
//! raw mode while the game runs, so this file is the only place diagnostics
//! go. A failed write disables the log for the rest of the session.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LockEvent;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEnd {
    /// The next piece had no room at the spawn position
    TopOut,
    /// The player pressed a quit key
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        round: u32,
        seed: u32,
    },
    PieceLocked {
        round: u32,
        kind: char,
        rows_cleared: u32,
        points: u32,
        score: u32,
    },
    RoundOver {
        round: u32,
        score: u32,
        lines: u32,
        pieces: u32,
        reason: RoundEnd,
    },
    HighScoreSaved {
        name: String,
        score: u32,
        rank: usize,
    },
    HighScoreSaveFailed {
        error: String,
    },
}

impl GameEvent {
    pub fn piece_locked(round: u32, event: LockEvent) -> Self {
        GameEvent::PieceLocked {
            round,
            kind: event.kind.letter(),
            rows_cleared: event.rows_cleared,
            points: event.points,
            score: event.score,
        }
    }
}

#[derive(Debug)]
pub struct EventLog {
    out: Option<BufWriter<File>>,
    line: Vec<u8>,
}

impl EventLog {
    /// A log that drops every event
    pub fn disabled() -> Self {
        Self {
            out: None,
            line: Vec::new(),
        }
    }

    /// Append to the file at `path`, creating it if needed
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            line: Vec::with_capacity(256),
        })
    }

    /// Open the configured log, or a disabled one if there is none.
    pub fn from_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn log(&mut self, event: &GameEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.line.clear();
        if serde_json::to_writer(&mut self.line, event).is_err() {
            return;
        }
        self.line.push(b'\n');
        let written = out.write_all(&self.line).and_then(|_| out.flush());
        if written.is_err() {
            self.out = None;
        }
    }
}
