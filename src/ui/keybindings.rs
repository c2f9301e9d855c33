// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent};

/// Browse-mode actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrowseAction {
    Up,
    Down,
    Enter,
    Back,
    NewFile,
    NewFolder,
    Rename,
    Delete,
    Quit,
    None,
}

/// Convert a key event to a browse action.
pub fn key_to_action(key: &KeyEvent) -> BrowseAction {
    match key.code {
        KeyCode::Down => BrowseAction::Down,
        KeyCode::Up => BrowseAction::Up,
        KeyCode::Enter | KeyCode::Right => BrowseAction::Enter,
        KeyCode::Left => BrowseAction::Back,
        KeyCode::Char('n') => BrowseAction::NewFile,
        KeyCode::Char('m') => BrowseAction::NewFolder,
        KeyCode::Char('r') => BrowseAction::Rename,
        KeyCode::Char('d') => BrowseAction::Delete,
        KeyCode::Char('q') => BrowseAction::Quit,
        _ => BrowseAction::None,
    }
}
