//! Mouse event handling.
//!
//! Presses and wheel ticks are dispatched through the interaction registry,
//! which is populated by UI components during each render. While a
//! component holds the pointer capture, movement and release go straight to
//! it regardless of where the pointer is.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::interaction::InteractionRegistry;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(interactions: &InteractionRegistry, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => match interactions.handle_click(x, y) {
            // Regions register the action without a position; fill in the press row
            Action::BeginThumbDrag { .. } => Action::BeginThumbDrag { row: y },
            action => action,
        },
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => Action::PointerMove {
            column: x,
            row: y,
        },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp,
        _ => Action::None,
    }
}
