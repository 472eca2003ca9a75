//! Custom scrollbar overlay and scroll activity detection.
//!
//! Both components observe a [`ScrollTarget`] through a shared
//! [`TargetRef`] and are fed events by the host's event loop.

mod activity;
mod event;
mod geometry;
mod overlay;
mod target;

pub use activity::{
    ActivityState, DEFAULT_QUIET_PERIOD, ScrollActivity, ScrollActivityDetector,
    use_scroll_activity,
};
pub use event::{PointerEvent, Propagation, ScrollEvent, ScrollEventKind};
pub use geometry::{MIN_THUMB_HEIGHT, ThumbGeometry};
pub use overlay::{DragUpdate, ScrollThumbOverlay};
pub use target::{Dimensions, ScrollTarget, TargetId, TargetRef};
