//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Keep the scrollbar visible even when the pane is not hovered
    ToggleAlwaysActive,

    // === Scrolling ===
    /// Wheel gesture over the pane, n lines (negative = up)
    Wheel(i32),
    /// Keyboard scroll by n lines (negative = up)
    ScrollLines(i32),
    /// Keyboard scroll by n pages (negative = up)
    ScrollPages(i32),
    /// Scroll to top
    ScrollToTop,
    /// Scroll to bottom
    ScrollToBottom,

    // === Pointer ===
    /// Left button pressed on the scrollbar thumb at the given screen row
    BeginThumbDrag { row: u16 },
    /// Pointer moved (with or without a button held)
    PointerMove { column: u16, row: u16 },
    /// Left button released anywhere
    PointerUp,
    /// Pointer left the terminal window
    LeaveDocument,

    // === Terminal ===
    /// Terminal was resized, layout is recomputed on the next draw
    Resize,

    /// No action
    None,
}
