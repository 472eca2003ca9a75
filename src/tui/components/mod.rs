//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `scroll_pane` - Text viewport, the scroll target
//! - `scrollbar` - Thumb of the scrollbar overlay
//! - `status_bar` - Scroll activity indicator and hotkeys

mod scroll_pane;
mod scrollbar;
mod status_bar;

// Re-export all render functions for use in ui.rs
pub use scroll_pane::render_scroll_pane;
pub use scrollbar::render_scrollbar;
pub use status_bar::render_status_bar;

/// Cut `text` to at most `width` characters.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
