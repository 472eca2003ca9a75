//! Scrollable targets and the shared, possibly-unset handle to them.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A scrollable element whose position the overlay mirrors.
///
/// All measurements are in pixels. `offset_height` is the element's full
/// box height and is used as the track height while dragging.
pub trait ScrollTarget {
    fn scroll_top(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn client_height(&self) -> f64;
    fn offset_height(&self) -> f64;
    fn set_scroll_top(&mut self, top: f64);
}

/// Stable identity of a [`TargetRef`], used to route events to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(u64);

static NEXT_TARGET_ID: AtomicU64 = AtomicU64::new(1);

impl TargetId {
    fn next() -> Self {
        Self(NEXT_TARGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared handle to a target owned by the host.
///
/// The handle is unset until [`TargetRef::mount`] is called and again after
/// [`TargetRef::unmount`]. Every accessor returns `None` while unset.
#[derive(Debug)]
pub struct TargetRef<T> {
    id: TargetId,
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for TargetRef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for TargetRef<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TargetRef<T> {
    /// Create an unset reference.
    pub fn new() -> Self {
        Self {
            id: TargetId::next(),
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Create a reference that already points at `target`.
    pub fn with_target(target: T) -> Self {
        let target_ref = Self::new();
        target_ref.mount(target);
        target_ref
    }

    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn mount(&self, target: T) {
        *self.slot.borrow_mut() = Some(target);
    }

    /// Detach the target, handing it back to the caller.
    pub fn unmount(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }

    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Run `f` against the target if one is mounted.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.slot.borrow().as_ref().map(f)
    }

    /// Run `f` against the mutable target if one is mounted.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.slot.borrow_mut().as_mut().map(f)
    }
}

/// Snapshot of the dimensions the overlay reads from a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub offset_height: f64,
}

impl Dimensions {
    pub fn of<T: ScrollTarget>(target: &T) -> Self {
        Self {
            scroll_top: target.scroll_top(),
            scroll_height: target.scroll_height(),
            client_height: target.client_height(),
            offset_height: target.offset_height(),
        }
    }
}
