//! Key mapping from terminal events to game, name-entry and menu inputs.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use term_tetris_scores::NameInput;

/// Choice on the leaderboard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Restart,
    Quit,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCw),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') if !is_ctrl(key) => Some(GameAction::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Check if key should end the current round.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && is_ctrl(key))
}

/// Map keyboard input to name entry.
///
/// Backspace arrives either as its own key code or as the raw control
/// codes 8 and 127, depending on the terminal. Ctrl-C submits whatever has
/// been typed so far, so the prompt can always be left.
pub fn map_name_key(key: KeyEvent) -> Option<NameInput> {
    match key.code {
        KeyCode::Enter => Some(NameInput::Submit),
        KeyCode::Backspace | KeyCode::Char('\u{8}') | KeyCode::Char('\u{7f}') => {
            Some(NameInput::Backspace)
        }
        KeyCode::Char('h') if is_ctrl(key) => Some(NameInput::Backspace),
        KeyCode::Char('c') if is_ctrl(key) => Some(NameInput::Submit),
        KeyCode::Char(c) if !is_ctrl(key) => Some(NameInput::Char(c)),
        _ => None,
    }
}

/// Map keyboard input on the leaderboard screen.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuChoice> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(MenuChoice::Restart),
        KeyCode::Esc => Some(MenuChoice::Quit),
        KeyCode::Char('c') if is_ctrl(key) => Some(MenuChoice::Quit),
        _ => None,
    }
}

fn is_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}
