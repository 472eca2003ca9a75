//! Scroll thumb overlay.
//!
//! Mirrors the scroll position of a target as a thumb inside a track and
//! turns thumb drags back into target scrolling. The host delivers target
//! scroll events through [`ScrollThumbOverlay::on_scroll`] and, while a drag
//! is in progress, document-level pointer events through
//! [`ScrollThumbOverlay::on_document_pointer`].

use crate::log;

use super::event::{PointerEvent, Propagation, ScrollEvent, ScrollEventKind};
use super::geometry::{MIN_THUMB_HEIGHT, ThumbGeometry, guard_divisor, max_thumb_top};
use super::target::{Dimensions, ScrollTarget, TargetRef};

/// Ephemeral state of a thumb drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Pointer Y of the last processed move
    anchor_y: f64,
}

/// Result of feeding a document pointer event to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragUpdate {
    /// No drag in progress, or the target is gone
    Ignored,
    /// Thumb moved; `scrolled` is true when the target's scroll position was written
    Moved { scrolled: bool },
    /// Drag session finished, document listeners can be released
    Ended,
}

/// Synthetic scrollbar thumb bound to one scroll target.
#[derive(Debug)]
pub struct ScrollThumbOverlay<T> {
    target: TargetRef<T>,
    listening: bool,
    active: bool,
    offset: f64,
    min_thumb_height: f64,
    // Last dimensions read from the target (on mount, scroll and resize)
    client_height: f64,
    scroll_height: f64,
    thumb_top: f64,
    drag: Option<DragSession>,
}

impl<T: ScrollTarget> ScrollThumbOverlay<T> {
    /// Create an overlay for `target`. Nothing is observed until [`Self::mount`].
    pub fn new(target: &TargetRef<T>) -> Self {
        Self {
            target: target.clone(),
            listening: false,
            active: true,
            offset: 0.0,
            min_thumb_height: MIN_THUMB_HEIGHT,
            client_height: 1.0,
            scroll_height: 1.0,
            thumb_top: 0.0,
            drag: None,
        }
    }

    /// Set whether the overlay is shown when not dragging (builder).
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the pixel offset added to the rendered thumb top (builder).
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Override the minimum thumb height (builder).
    pub fn min_thumb_height(mut self, min_thumb_height: f64) -> Self {
        self.min_thumb_height = min_thumb_height.max(MIN_THUMB_HEIGHT);
        self
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Start listening to the target and record its current dimensions.
    pub fn mount(&mut self) {
        self.listening = true;
        if let Some(dims) = self.read_dimensions() {
            self.client_height = dims.client_height;
            self.scroll_height = dims.scroll_height;
        }
        log::log_event("scrollbar mounted");
    }

    /// Stop listening. Any drag in progress is dropped without touching the target.
    pub fn unmount(&mut self) {
        if self.drag.take().is_some() {
            log::log_event("scrollbar unmounted mid-drag");
        }
        self.listening = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.listening
    }

    /// Current thumb geometry, derived from the last read dimensions.
    pub fn geometry(&self) -> ThumbGeometry {
        ThumbGeometry::compute(self.client_height, self.scroll_height, self.min_thumb_height)
    }

    pub fn thumb_height(&self) -> f64 {
        self.geometry().thumb_height
    }

    /// Thumb top relative to the track, without the caller's offset.
    pub fn thumb_top(&self) -> f64 {
        self.thumb_top
    }

    /// Thumb top as rendered (`thumb_top + offset`).
    pub fn rendered_top(&self) -> f64 {
        self.thumb_top + self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.geometry().is_visible(self.active, self.is_dragging())
    }

    /// Capturing scroll listener: re-read the target and reposition the thumb.
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        if !self.listening
            || event.target != self.target.id()
            || event.kind != ScrollEventKind::Scroll
        {
            return;
        }
        self.sync_with_target();
    }

    /// Re-read dimensions after the target changed size without scrolling.
    pub fn on_resize(&mut self) {
        if self.listening {
            self.sync_with_target();
        }
    }

    /// Pointer pressed on the thumb: begin a drag session anchored at `y`.
    pub fn on_thumb_pointer_down(&mut self, y: f64) -> Propagation {
        if !self.listening || !self.target.is_set() {
            return Propagation::Continue;
        }
        self.drag = Some(DragSession { anchor_y: y });
        log::log_event(&format!("thumb drag start at y={y:.1}"));
        Propagation::Stop
    }

    /// Document-level pointer listener, only meaningful during a drag.
    pub fn on_document_pointer(&mut self, event: &PointerEvent) -> DragUpdate {
        let Some(drag) = self.drag else {
            return DragUpdate::Ignored;
        };

        match *event {
            PointerEvent::Move { y } => self.drag_to(drag, y),
            PointerEvent::Up | PointerEvent::LeaveDocument => {
                self.drag = None;
                log::log_event("thumb drag end");
                DragUpdate::Ended
            }
        }
    }

    fn drag_to(&mut self, drag: DragSession, y: f64) -> DragUpdate {
        if !self.listening {
            return DragUpdate::Ignored;
        }
        let Some(dims) = self.read_dimensions() else {
            return DragUpdate::Ignored;
        };

        self.client_height = dims.client_height;
        self.scroll_height = dims.scroll_height;
        let thumb_height = self.thumb_height();

        let delta_y = y - drag.anchor_y;
        let scroll_delta = delta_y * (dims.scroll_height / guard_divisor(dims.offset_height));
        self.drag = Some(DragSession { anchor_y: y });

        self.thumb_top = (self.thumb_top + delta_y)
            .max(0.0)
            .min(max_thumb_top(dims.offset_height, thumb_height));

        let max_scroll_top = (dims.scroll_height - dims.offset_height).max(0.0);
        let scroll_top = (dims.scroll_top + scroll_delta).min(max_scroll_top).max(0.0);
        let scrolled = scroll_top != dims.scroll_top;
        if scrolled {
            self.target.with_mut(|target| target.set_scroll_top(scroll_top));
        }

        DragUpdate::Moved { scrolled }
    }

    fn sync_with_target(&mut self) {
        let Some(dims) = self.read_dimensions() else {
            return;
        };
        self.client_height = dims.client_height;
        self.scroll_height = dims.scroll_height;
        self.thumb_top = self.geometry().top_for_scroll(
            dims.scroll_top,
            dims.scroll_height,
            dims.client_height,
        );
    }

    fn read_dimensions(&self) -> Option<Dimensions> {
        self.target.with(Dimensions::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrollbar::target::tests::FakeElement;

    fn mounted(
        client: f64,
        scroll: f64,
    ) -> (TargetRef<FakeElement>, ScrollThumbOverlay<FakeElement>) {
        let target = TargetRef::with_target(FakeElement::new(client, scroll));
        let mut overlay = ScrollThumbOverlay::new(&target);
        overlay.mount();
        (target, overlay)
    }

    fn scroll_to(
        target: &TargetRef<FakeElement>,
        overlay: &mut ScrollThumbOverlay<FakeElement>,
        top: f64,
    ) {
        target.with_mut(|el| el.set_scroll_top(top));
        overlay.on_scroll(&ScrollEvent::scroll(target.id()));
    }

    #[test]
    fn test_initial_geometry() {
        let (_target, overlay) = mounted(200.0, 1000.0);
        assert_eq!(overlay.thumb_height(), 40.0);
        assert_eq!(overlay.thumb_top(), 0.0);
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_scroll_moves_thumb() {
        let (target, mut overlay) = mounted(200.0, 1000.0);
        scroll_to(&target, &mut overlay, 400.0);
        assert_eq!(overlay.thumb_top(), 80.0);
    }

    #[test]
    fn test_offset_only_affects_rendered_top() {
        let (target, overlay) = mounted(200.0, 1000.0);
        let mut overlay = overlay.offset(6.0);
        scroll_to(&target, &mut overlay, 400.0);
        assert_eq!(overlay.thumb_top(), 80.0);
        assert_eq!(overlay.rendered_top(), 86.0);
    }

    #[test]
    fn test_ignores_other_targets_and_kinds() {
        let (target, mut overlay) = mounted(200.0, 1000.0);
        let other: TargetRef<FakeElement> = TargetRef::new();
        target.with_mut(|el| el.set_scroll_top(400.0));

        overlay.on_scroll(&ScrollEvent::scroll(other.id()));
        overlay.on_scroll(&ScrollEvent::wheel(target.id()));
        assert_eq!(overlay.thumb_top(), 0.0);
    }

    #[test]
    fn test_not_mounted_is_noop() {
        let target = TargetRef::with_target(FakeElement::new(200.0, 1000.0));
        let mut overlay = ScrollThumbOverlay::new(&target);
        target.with_mut(|el| el.set_scroll_top(400.0));
        overlay.on_scroll(&ScrollEvent::scroll(target.id()));
        assert_eq!(overlay.thumb_top(), 0.0);
        assert_eq!(overlay.on_thumb_pointer_down(10.0), Propagation::Continue);
        assert!(!overlay.is_dragging());
    }

    #[test]
    fn test_unset_target_handlers_noop() {
        let target: TargetRef<FakeElement> = TargetRef::new();
        let mut overlay = ScrollThumbOverlay::new(&target);
        overlay.mount();
        overlay.on_scroll(&ScrollEvent::scroll(target.id()));
        overlay.on_resize();
        assert_eq!(overlay.on_thumb_pointer_down(10.0), Propagation::Continue);
        assert_eq!(
            overlay.on_document_pointer(&PointerEvent::Move { y: 50.0 }),
            DragUpdate::Ignored
        );
    }

    #[test]
    fn test_drag_scrolls_target_proportionally() {
        let (target, mut overlay) = mounted(200.0, 1000.0);

        assert_eq!(overlay.on_thumb_pointer_down(10.0), Propagation::Stop);
        assert!(overlay.is_dragging());

        let update = overlay.on_document_pointer(&PointerEvent::Move { y: 30.0 });
        assert_eq!(update, DragUpdate::Moved { scrolled: true });
        // 20px of thumb travel maps to 20 * 1000 / 200 px of content
        assert_eq!(target.with(|el| el.scroll_top), Some(100.0));
        assert_eq!(overlay.thumb_top(), 20.0);
    }

    #[test]
    fn test_drag_stops_at_content_end() {
        let (target, mut overlay) = mounted(200.0, 1000.0);
        overlay.on_thumb_pointer_down(0.0);
        overlay.on_document_pointer(&PointerEvent::Move { y: 5000.0 });

        assert_eq!(target.with(|el| el.scroll_top), Some(800.0));
        assert_eq!(overlay.thumb_top(), 160.0);

        // Further movement past the end does not write again
        let update = overlay.on_document_pointer(&PointerEvent::Move { y: 6000.0 });
        assert_eq!(update, DragUpdate::Moved { scrolled: false });
    }

    #[test]
    fn test_drag_up_past_start_clamps_to_zero() {
        let (target, mut overlay) = mounted(200.0, 1000.0);
        scroll_to(&target, &mut overlay, 100.0);
        overlay.on_thumb_pointer_down(50.0);
        overlay.on_document_pointer(&PointerEvent::Move { y: -500.0 });

        assert_eq!(overlay.thumb_top(), 0.0);
        assert_eq!(target.with(|el| el.scroll_top), Some(0.0));
    }

    #[test]
    fn test_thumb_top_stays_in_track_during_random_drags() {
        let (target, mut overlay) = mounted(200.0, 1000.0);
        let mut seed: u64 = 0x5eed;
        let mut y = 0.0;
        overlay.on_thumb_pointer_down(y);

        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let step = ((seed >> 33) % 161) as f64 - 80.0;
            y += step;
            overlay.on_document_pointer(&PointerEvent::Move { y });
            overlay.on_scroll(&ScrollEvent::scroll(target.id()));

            let top = overlay.thumb_top();
            assert!(top >= 0.0, "thumb_top {top} below track");
            assert!(top <= 200.0 - overlay.thumb_height(), "thumb_top {top} past track");
        }
    }

    #[test]
    fn test_pointer_up_and_leave_end_drag() {
        let (_target, mut overlay) = mounted(200.0, 1000.0);

        overlay.on_thumb_pointer_down(0.0);
        assert_eq!(overlay.on_document_pointer(&PointerEvent::Up), DragUpdate::Ended);
        assert!(!overlay.is_dragging());

        overlay.on_thumb_pointer_down(0.0);
        assert_eq!(
            overlay.on_document_pointer(&PointerEvent::LeaveDocument),
            DragUpdate::Ended
        );
        assert!(!overlay.is_dragging());

        // Not dragging: pointer events are ignored
        assert_eq!(overlay.on_document_pointer(&PointerEvent::Up), DragUpdate::Ignored);
    }

    #[test]
    fn test_drag_forces_visibility() {
        let (_target, overlay) = mounted(200.0, 1000.0);
        let mut overlay = overlay.active(false);
        assert!(!overlay.is_visible());

        overlay.on_thumb_pointer_down(0.0);
        assert!(overlay.is_visible());

        overlay.on_document_pointer(&PointerEvent::Up);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_hidden_without_overflow() {
        let (_target, mut overlay) = mounted(200.0, 200.0);
        assert!(!overlay.is_visible());
        overlay.set_active(true);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_unmount_mid_drag_stops_mutation() {
        let (target, mut overlay) = mounted(200.0, 1000.0);
        overlay.on_thumb_pointer_down(0.0);
        overlay.on_document_pointer(&PointerEvent::Move { y: 10.0 });
        let writes = target.with(|el| el.writes).unwrap_or_default();

        overlay.unmount();
        assert!(!overlay.is_dragging());
        assert_eq!(
            overlay.on_document_pointer(&PointerEvent::Move { y: 100.0 }),
            DragUpdate::Ignored
        );
        assert_eq!(overlay.on_document_pointer(&PointerEvent::Up), DragUpdate::Ignored);
        assert_eq!(target.with(|el| el.writes), Some(writes));
    }

    #[test]
    fn test_target_detached_mid_drag() {
        let (target, mut overlay) = mounted(200.0, 1000.0);
        overlay.on_thumb_pointer_down(0.0);
        let element = target.unmount();
        assert!(element.is_some());

        assert_eq!(
            overlay.on_document_pointer(&PointerEvent::Move { y: 40.0 }),
            DragUpdate::Ignored
        );
        assert_eq!(overlay.on_document_pointer(&PointerEvent::Up), DragUpdate::Ended);
    }

    #[test]
    fn test_zero_offset_height_does_not_produce_nan() {
        let mut element = FakeElement::new(0.0, 0.0);
        element.offset_height = 0.0;
        let target = TargetRef::with_target(element);
        let mut overlay = ScrollThumbOverlay::new(&target);
        overlay.mount();

        overlay.on_thumb_pointer_down(0.0);
        overlay.on_document_pointer(&PointerEvent::Move { y: 15.0 });
        assert!(overlay.thumb_top().is_finite());
        assert_eq!(target.with(|el| el.scroll_top), Some(0.0));
    }

    #[test]
    fn test_resize_reclamps_thumb() {
        let (target, mut overlay) = mounted(200.0, 1000.0);
        scroll_to(&target, &mut overlay, 800.0);
        assert_eq!(overlay.thumb_top(), 160.0);

        // Content shrinks to fit: no overflow, thumb back at the top
        target.with_mut(|el| {
            el.scroll_height = 200.0;
            el.scroll_top = 0.0;
        });
        overlay.on_resize();
        assert!(overlay.geometry().no_scroll_area);
        assert_eq!(overlay.thumb_top(), 0.0);
        assert!(!overlay.is_visible());
    }
}
