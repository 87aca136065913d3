//! Name entry for a new high score
//!
//! A small state machine fed one input per tick, so the outer loop keeps
//! polling and sleeping the same way it does during play.

use crate::types::{DEFAULT_PLAYER_NAME, NAME_MAX_LEN};

/// One keyboard input, already decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameInput {
    Char(char),
    Backspace,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEntryState {
    AwaitingChar,
    Submitted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    buffer: String,
    state: NameEntryState,
}

impl NameEntry {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(NAME_MAX_LEN),
            state: NameEntryState::AwaitingChar,
        }
    }

    /// Text typed so far
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> &NameEntryState {
        &self.state
    }

    /// The submitted name, once Enter has been pressed
    pub fn submitted(&self) -> Option<&str> {
        match &self.state {
            NameEntryState::Submitted(name) => Some(name),
            NameEntryState::AwaitingChar => None,
        }
    }

    /// Feed one input. Returns true if the buffer or state changed.
    ///
    /// Only printable ASCII (32..=126) is accepted, and only while the buffer
    /// is shorter than [`NAME_MAX_LEN`]. Everything is ignored after submit.
    pub fn feed(&mut self, input: NameInput) -> bool {
        if self.submitted().is_some() {
            return false;
        }
        match input {
            NameInput::Char(c) => {
                if !is_name_char(c) || self.buffer.len() >= NAME_MAX_LEN {
                    return false;
                }
                self.buffer.push(c);
                true
            }
            NameInput::Backspace => self.buffer.pop().is_some(),
            NameInput::Submit => {
                let name = if self.buffer.is_empty() {
                    DEFAULT_PLAYER_NAME.to_string()
                } else {
                    self.buffer.clone()
                };
                self.state = NameEntryState::Submitted(name);
                true
            }
        }
    }
}

impl Default for NameEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Printable ASCII, space included
pub fn is_name_char(c: char) -> bool {
    matches!(c, ' '..='~')
}
