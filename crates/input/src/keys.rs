//! Keyboard collaborator.
//!
//! The game loop only ever asks "is there a key right now?"; it never blocks
//! on the keyboard. [`TerminalKeys`] answers from crossterm's event queue and
//! [`ScriptedKeys`] from a prepared list, one key per poll.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

pub trait KeySource {
    /// Non-blocking: the next pressed key, if one is waiting.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;

    /// Discard every key that is already waiting.
    fn drain(&mut self) -> Result<()> {
        while self.poll_key()?.is_some() {}
        Ok(())
    }
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        (**self).poll_key()
    }

    fn drain(&mut self) -> Result<()> {
        (**self).drain()
    }
}

/// Keys from the real terminal
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Terminals with the keyboard enhancement protocol also
                // report releases; only presses and repeats count.
                if key.kind != KeyEventKind::Release {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// Keys played back from a script.
///
/// Each poll yields at most one entry. `None` entries stand for idle ticks,
/// so a script can leave gaps between key presses. Once the script is used
/// up every poll yields nothing, or `fallback` if one is set.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    script: VecDeque<Option<KeyEvent>>,
    fallback: Option<KeyEvent>,
    polls: u64,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a key press
    pub fn key(mut self, code: KeyCode) -> Self {
        self.script.push_back(Some(KeyEvent::from(code)));
        self
    }

    /// Queue a full key event (for modifiers)
    pub fn event(mut self, key: KeyEvent) -> Self {
        self.script.push_back(Some(key));
        self
    }

    /// Queue each character of `text` as a key press
    pub fn text(mut self, text: &str) -> Self {
        for c in text.chars() {
            self.script.push_back(Some(KeyEvent::from(KeyCode::Char(c))));
        }
        self
    }

    /// Queue `ticks` polls that yield nothing
    pub fn idle(mut self, ticks: usize) -> Self {
        self.script.extend(std::iter::repeat(None).take(ticks));
        self
    }

    /// Key returned for every poll after the script runs out
    pub fn then_forever(mut self, code: KeyCode) -> Self {
        self.fallback = Some(KeyEvent::from(code));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Number of polls made so far
    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        self.polls += 1;
        Ok(match self.script.pop_front() {
            Some(entry) => entry,
            None => self.fallback,
        })
    }

    /// Drops queued key presses up to the next idle gap.
    fn drain(&mut self) -> Result<()> {
        while matches!(self.script.front(), Some(Some(_))) {
            self.script.pop_front();
        }
        Ok(())
    }
}
