//! Central event handler that coordinates keyboard, mouse, and terminal events.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
            Event::Mouse(mouse) => handle_mouse_event(&app.interactions, *mouse),
            // Losing focus is the closest a terminal gets to the pointer leaving the document
            Event::FocusLost => Action::LeaveDocument,
            Event::Resize(_, _) => Action::Resize,
            _ => Action::None,
        }
    }
}
