//! Events delivered to the scrollbar components by the host.

use super::target::TargetId;

/// Kind of event raised by a scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEventKind {
    /// The target's scroll position changed
    Scroll,
    /// A wheel/trackpad gesture happened over the target
    Wheel,
    /// The target finished a scroll
    ScrollEnd,
    /// The pointer left the target's bounds
    PointerLeave,
}

/// An event raised by a specific scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub target: TargetId,
    pub kind: ScrollEventKind,
}

impl ScrollEvent {
    pub fn new(target: TargetId, kind: ScrollEventKind) -> Self {
        Self { target, kind }
    }

    pub fn scroll(target: TargetId) -> Self {
        Self::new(target, ScrollEventKind::Scroll)
    }

    pub fn wheel(target: TargetId) -> Self {
        Self::new(target, ScrollEventKind::Wheel)
    }

    pub fn scroll_end(target: TargetId) -> Self {
        Self::new(target, ScrollEventKind::ScrollEnd)
    }

    pub fn pointer_leave(target: TargetId) -> Self {
        Self::new(target, ScrollEventKind::PointerLeave)
    }
}

/// Pointer event observed at document level (anywhere on screen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to vertical position `y` (px)
    Move { y: f64 },
    /// Primary button released
    Up,
    /// Pointer left the document
    LeaveDocument,
}

/// Whether an event should keep bubbling to other handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    /// The handler consumed the event and suppressed its default action
    Stop,
}
