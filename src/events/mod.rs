//! Event handling module for keyboard, mouse, and terminal events.
//!
//! Handlers translate crossterm events into Actions; the App applies them.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
