//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Char('j') | KeyCode::Down => Action::ScrollLines(1),
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollLines(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => Action::ScrollPages(1),
        KeyCode::PageUp => Action::ScrollPages(-1),
        KeyCode::Char('g') | KeyCode::Home => Action::ScrollToTop,
        KeyCode::Char('G') | KeyCode::End => Action::ScrollToBottom,

        KeyCode::Char('a') => Action::ToggleAlwaysActive,
        _ => Action::None,
    }
}
