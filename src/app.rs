//! Session loop: rounds, the line-clear flash, game over and the leaderboard.
//!
//! Single-threaded and poll-driven. Every iteration sleeps one tick, polls at
//! most one key, steps the round and draws. The clear flash is a blocking
//! sub-loop: nothing else happens while it plays.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::{GameRound, PieceSource, RoundSnapshot, UniformPieces};
use crate::event_log::{EventLog, GameEvent, RoundEnd};
use crate::input::{handle_key_event, map_menu_key, map_name_key, should_quit, KeySource, MenuChoice};
use crate::scores::{HighScore, Leaderboard, NameEntry, ScoreFile};
use crate::term::{render_game_over, render_leaderboard, FrameBuffer, GameView, Surface};
use crate::types::{CLEAR_FLASH_FRAMES, CLEAR_FLASH_FRAME_MS};

/// Poll interval on the leaderboard screen
const MENU_POLL_MS: u64 = 10;

/// How a finished round went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub end: RoundEnd,
}

pub struct App<K: KeySource, S: Surface> {
    config: AppConfig,
    keys: K,
    surface: S,
    log: EventLog,
    scores: ScoreFile,
    view: GameView,
    fb: FrameBuffer,
    snap: RoundSnapshot,
    rounds: u32,
}

impl<K: KeySource, S: Surface> App<K, S> {
    pub fn new(config: AppConfig, keys: K, surface: S, log: EventLog) -> Self {
        let scores = ScoreFile::new(config.score_path.clone());
        Self {
            config,
            keys,
            surface,
            log,
            scores,
            view: GameView::new(),
            fb: FrameBuffer::new(0, 0),
            snap: RoundSnapshot::default(),
            rounds: 0,
        }
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Rounds started so far
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Play rounds until the player quits from the leaderboard screen.
    pub fn run(&mut self) -> Result<()> {
        self.surface.hide_cursor()?;
        loop {
            let summary = self.play_round()?;
            if self.game_over(summary.score)? == MenuChoice::Quit {
                return Ok(());
            }
        }
    }

    /// Play one round from a fresh board to its end.
    pub fn play_round(&mut self) -> Result<RoundSummary> {
        let pieces = UniformPieces::new(self.round_seed(self.rounds + 1));
        self.log.log(&GameEvent::RoundStarted {
            round: self.rounds + 1,
            seed: pieces.seed(),
        });
        self.play(GameRound::new(pieces))
    }

    /// Drive a prepared round until it ends.
    pub fn play<P: PieceSource>(&mut self, mut round: GameRound<P>) -> Result<RoundSummary> {
        self.rounds += 1;
        let round_no = self.rounds;

        self.surface.clear()?;
        let tick = self.tick();
        let mut end = RoundEnd::TopOut;

        while !round.is_over() {
            self.surface.sleep(tick);

            let mut action = None;
            if let Some(key) = self.keys.poll_key()? {
                if should_quit(key) {
                    round.abandon();
                    end = RoundEnd::Quit;
                    break;
                }
                action = handle_key_event(key);
            }

            round.step(action);
            if let Some(event) = round.take_last_event() {
                self.log.log(&GameEvent::piece_locked(round_no, event));
            }

            round.snapshot_into(&mut self.snap);
            self.view.render_into(&self.snap, &mut self.fb);
            self.surface.present(&mut self.fb)?;

            if !round.pending_rows().is_empty() {
                self.flash_rows()?;
                round.finish_clear();
            }
        }

        let summary = RoundSummary {
            score: round.score(),
            lines: round.lines(),
            pieces: round.pieces_locked(),
            end,
        };
        self.log.log(&GameEvent::RoundOver {
            round: round_no,
            score: summary.score,
            lines: summary.lines,
            pieces: summary.pieces,
            reason: end,
        });
        Ok(summary)
    }

    /// Blink the rows in the current snapshot's pending set.
    fn flash_rows(&mut self) -> Result<()> {
        let frame_time = Duration::from_millis(CLEAR_FLASH_FRAME_MS as u64);
        for frame in 0..CLEAR_FLASH_FRAMES {
            self.view.render_clear_frame(&self.snap, frame, &mut self.fb);
            self.surface.present(&mut self.fb)?;
            self.surface.sleep(frame_time);
        }
        Ok(())
    }

    /// Game over screen, optional name entry, then the leaderboard.
    ///
    /// Returns the player's choice on the leaderboard screen.
    pub fn game_over(&mut self, score: u32) -> Result<MenuChoice> {
        self.surface.clear()?;
        let mut board = self.scores.load();

        if board.qualifies(score) {
            let name = self.enter_name(score)?;
            self.record(&mut board, HighScore::new(name, score));
        } else {
            render_game_over(score, None, &mut self.fb);
            self.surface.present(&mut self.fb)?;
        }

        self.surface.clear()?;
        render_leaderboard(&board, &mut self.fb);
        self.surface.present(&mut self.fb)?;

        let poll = Duration::from_millis(MENU_POLL_MS);
        loop {
            self.surface.sleep(poll);
            if let Some(choice) = self.keys.poll_key()?.and_then(map_menu_key) {
                return Ok(choice);
            }
        }
    }

    /// Collect a name one key per tick. Keys typed before the prompt appeared
    /// are discarded first.
    fn enter_name(&mut self, score: u32) -> Result<String> {
        self.keys.drain()?;
        let mut entry = NameEntry::new();
        let tick = self.tick();

        let name = loop {
            if let Some((x, y)) = render_game_over(score, Some(&entry), &mut self.fb) {
                self.surface.present(&mut self.fb)?;
                self.surface.show_cursor_at(x, y)?;
            }
            if let Some(name) = entry.submitted() {
                break name.to_string();
            }
            self.surface.sleep(tick);
            if let Some(input) = self.keys.poll_key()?.and_then(map_name_key) {
                entry.feed(input);
            }
        };

        self.surface.hide_cursor()?;
        Ok(name)
    }

    /// Insert and persist. A failed save is logged; the board in memory is
    /// still shown.
    fn record(&mut self, board: &mut Leaderboard, entry: HighScore) {
        let name = entry.name.clone();
        let score = entry.score;
        if !board.insert(entry) {
            return;
        }
        match self.scores.save(board) {
            Ok(()) => {
                let rank = board
                    .entries()
                    .iter()
                    .rposition(|e| e.name == name && e.score == score)
                    .map_or(0, |i| i + 1);
                self.log.log(&GameEvent::HighScoreSaved { name, score, rank });
            }
            Err(e) => {
                self.log.log(&GameEvent::HighScoreSaveFailed {
                    error: format!("{:#}", e),
                });
            }
        }
    }

    fn tick(&self) -> Duration {
        Duration::from_millis(self.config.tick_ms)
    }

    /// A configured seed makes the whole session reproducible: round `n`
    /// uses `seed + n - 1`.
    fn round_seed(&self, round_no: u32) -> u32 {
        match self.config.seed {
            Some(seed) => seed.wrapping_add(round_no - 1),
            None => clock_seed(),
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    (nanos ^ (nanos >> 32)) as u32
}
