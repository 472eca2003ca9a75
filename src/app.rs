//! Application state: the scroll pane, its scrollbar overlay and the
//! scroll activity detector, plus the glue that turns actions into the
//! events those components listen to.

use ratatui::layout::Rect;

use crate::config::Config;
use crate::events::Action;
use crate::log;
use crate::pane::ScrollPane;
use crate::scrollbar::{
    ActivityState, DragUpdate, PointerEvent, Propagation, ScrollActivity, ScrollEvent,
    ScrollEventKind, ScrollThumbOverlay, TargetRef, use_scroll_activity,
};
use crate::tui::interaction::{ClickRegion, InteractionRegistry};

/// Owner id used for the pointer capture during thumb drags.
pub const THUMB_CAPTURE: &str = "scrollbar_thumb";

/// Screen areas computed during the last render.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaneAreas {
    /// The whole scrollable pane, text and track
    pub pane: ClickRegion,
    /// One column at the pane's right edge
    pub track: ClickRegion,
}

pub struct App {
    pub config: Config,
    pub title: String,
    pub pane: TargetRef<ScrollPane>,
    pub scrollbar: ScrollThumbOverlay<ScrollPane>,
    pub activity: ScrollActivity<ScrollPane>,
    pub interactions: InteractionRegistry,
    pub areas: PaneAreas,
    pub hovered: bool,
    pub always_active: bool,
    pub should_quit: bool,
}

impl App {
    /// Mount `pane` and wire the scrollbar and activity detector to it.
    pub fn new(pane: ScrollPane, title: String, config: Config) -> Self {
        let target = TargetRef::with_target(pane);
        let always_active = config.always_active();

        let mut scrollbar = ScrollThumbOverlay::new(&target)
            .active(always_active)
            .offset(config.thumb_offset())
            .min_thumb_height(config.min_thumb_height());
        scrollbar.mount();

        let activity = use_scroll_activity(&target, config.quiet_period());

        Self {
            config,
            title,
            pane: target,
            scrollbar,
            activity,
            interactions: InteractionRegistry::new(),
            areas: PaneAreas::default(),
            hovered: false,
            always_active,
            should_quit: false,
        }
    }

    /// Record the pane's screen area and resize its viewport to match.
    pub fn set_pane_area(&mut self, area: Rect) {
        self.areas.pane = area.into();
        self.areas.track = ClickRegion::new(
            (area.x + area.width).saturating_sub(1),
            area.y,
            area.width.min(1),
            area.height,
        );

        let resized = self
            .pane
            .with_mut(|pane| pane.set_viewport_rows(area.height))
            .unwrap_or(false);
        if resized {
            self.scrollbar.on_resize();
        }
    }

    /// Pixels per terminal row of the mounted pane.
    pub fn cell_height(&self) -> f64 {
        self.pane
            .with(|pane| pane.cell_height())
            .unwrap_or_else(|| self.config.cell_height())
    }

    pub fn is_scrolling(&self) -> bool {
        self.activity.detector.state() == ActivityState::Active
    }

    /// Apply an action produced by the event handlers.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleAlwaysActive => {
                self.always_active = !self.always_active;
                self.update_active();
            }

            Action::Wheel(lines) => {
                self.emit(ScrollEventKind::Wheel);
                if self.scroll_pane(|pane| pane.scroll_rows(lines)) {
                    self.emit(ScrollEventKind::Scroll);
                }
            }
            Action::ScrollLines(lines) => self.keyboard_scroll(|pane| pane.scroll_rows(lines)),
            Action::ScrollPages(pages) => {
                self.keyboard_scroll(|pane| pane.scroll_rows(pages * pane.page_rows()))
            }
            Action::ScrollToTop => self.keyboard_scroll(ScrollPane::scroll_to_top),
            Action::ScrollToBottom => self.keyboard_scroll(ScrollPane::scroll_to_bottom),

            Action::BeginThumbDrag { row } => {
                // A collapsed pane has no track to drag along
                if !self.has_viewport() {
                    return;
                }
                let y = self.row_to_px(row);
                if self.scrollbar.on_thumb_pointer_down(y) == Propagation::Stop {
                    self.interactions.capture_pointer(THUMB_CAPTURE);
                }
            }
            Action::PointerMove { column, row } => {
                if self.interactions.captured_by() == Some(THUMB_CAPTURE) {
                    let y = self.row_to_px(row);
                    self.document_pointer(PointerEvent::Move { y });
                }
                self.update_hover(column, row);
            }
            Action::PointerUp => self.document_pointer(PointerEvent::Up),
            Action::LeaveDocument => {
                self.document_pointer(PointerEvent::LeaveDocument);
                if self.hovered {
                    self.hovered = false;
                    self.emit(ScrollEventKind::PointerLeave);
                    self.update_active();
                }
            }

            Action::Resize | Action::None => {}
        }
    }

    /// Detach the scrollbar and the detector before the pane goes away.
    pub fn shutdown(&mut self) {
        self.scrollbar.unmount();
        self.interactions.release_pointer();
        self.activity.detector.detach();
        log::log("scrollbar and activity detector detached");
    }

    fn keyboard_scroll(&mut self, scroll: impl FnOnce(&mut ScrollPane) -> bool) {
        // Keyboard scrolling is instant, so the end signal follows right away
        if self.scroll_pane(scroll) {
            self.emit(ScrollEventKind::Scroll);
            self.emit(ScrollEventKind::ScrollEnd);
        }
    }

    fn scroll_pane(&mut self, scroll: impl FnOnce(&mut ScrollPane) -> bool) -> bool {
        self.pane.with_mut(scroll).unwrap_or(false)
    }

    fn document_pointer(&mut self, event: PointerEvent) {
        match self.scrollbar.on_document_pointer(&event) {
            DragUpdate::Moved { scrolled: true } => self.emit(ScrollEventKind::Scroll),
            DragUpdate::Ended => self.interactions.release_pointer(),
            DragUpdate::Moved { scrolled: false } | DragUpdate::Ignored => {}
        }
    }

    /// Deliver a pane event to every listener.
    fn emit(&mut self, kind: ScrollEventKind) {
        let event = ScrollEvent::new(self.pane.id(), kind);
        self.scrollbar.on_scroll(&event);
        self.activity.detector.handle(&event);
    }

    fn update_hover(&mut self, column: u16, row: u16) {
        let inside = self.areas.pane.contains(column, row);
        if self.hovered && !inside {
            self.emit(ScrollEventKind::PointerLeave);
        }
        if self.hovered != inside {
            self.hovered = inside;
            self.update_active();
        }
    }

    fn update_active(&mut self) {
        self.scrollbar.set_active(self.always_active || self.hovered);
    }

    fn has_viewport(&self) -> bool {
        self.pane
            .with(|pane| pane.viewport_rows() > 0)
            .unwrap_or(false)
    }

    fn row_to_px(&self, row: u16) -> f64 {
        f64::from(row) * self.cell_height()
    }
}
