//! Input module - keyboard handling for game controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// UI-level actions; cursor movement is presentation state, only `Flip` and
/// `NewGame` reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Flip,
    NewGame,
}

/// Map keyboard input to UI actions
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(UiAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(UiAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(UiAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(UiAction::CursorDown),

        // Reveal the tile under the cursor
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::Flip),

        // New game
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
