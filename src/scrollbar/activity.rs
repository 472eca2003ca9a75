//! Scroll activity detection.
//!
//! Tracks whether a target is currently being scrolled. Scroll and wheel
//! events switch the detector to [`ActivityState::Active`] and (re)arm a
//! quiet-period timer; when the timer fires without being re-armed the
//! detector returns to [`ActivityState::Idle`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut activity = use_scroll_activity(&pane, Duration::from_millis(800));
//!
//! // In event loop:
//! activity.detector.handle(&ScrollEvent::wheel(pane.id()));
//! if *activity.scrolling.borrow() {
//!     // draw the "scrolling" indicator
//! }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::log;

use super::event::{ScrollEvent, ScrollEventKind};
use super::target::{TargetId, TargetRef};

/// Quiet period used when the caller does not pick one.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    Idle,
    Active,
}

/// State shared with the pending timer task.
#[derive(Debug)]
struct Shared {
    scrolling: watch::Sender<bool>,
    /// Bumped on every event; a timer only clears the flag if it is still current
    generation: AtomicU64,
}

/// Debounced "is the target scrolling" detector.
#[derive(Debug)]
pub struct ScrollActivityDetector {
    quiet_period: Duration,
    target: Option<TargetId>,
    shared: Arc<Shared>,
    timer: Option<JoinHandle<()>>,
}

impl Default for ScrollActivityDetector {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl ScrollActivityDetector {
    pub fn new(quiet_period: Duration) -> Self {
        let (scrolling, _) = watch::channel(false);
        Self {
            quiet_period,
            target: None,
            shared: Arc::new(Shared {
                scrolling,
                generation: AtomicU64::new(0),
            }),
            timer: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Listen to events of `target`, starting over from [`ActivityState::Idle`].
    pub fn attach(&mut self, target: TargetId) {
        self.reset();
        self.target = Some(target);
    }

    /// Stop listening. A pending timer is cancelled and never fires.
    pub fn detach(&mut self) {
        self.reset();
        self.target = None;
    }

    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_scrolling(&self) -> bool {
        *self.shared.scrolling.borrow()
    }

    pub fn state(&self) -> ActivityState {
        if self.is_scrolling() {
            ActivityState::Active
        } else {
            ActivityState::Idle
        }
    }

    /// Receiver that observes every change of the scrolling flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shared.scrolling.subscribe()
    }

    /// Feed an event raised by a target. Events of other targets are ignored.
    pub fn handle(&mut self, event: &ScrollEvent) {
        if self.target != Some(event.target) {
            return;
        }

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        match event.kind {
            ScrollEventKind::Scroll | ScrollEventKind::Wheel => {
                let became_active = self.shared.scrolling.send_if_modified(|scrolling| {
                    let changed = !*scrolling;
                    *scrolling = true;
                    changed
                });
                if became_active {
                    log::log_event("scroll activity: idle -> active");
                }
            }
            // End signals drain through the same timer instead of clearing at once
            ScrollEventKind::ScrollEnd | ScrollEventKind::PointerLeave => {}
        }

        self.schedule_idle(generation);
    }

    fn schedule_idle(&mut self, generation: u64) {
        self.cancel_timer();

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::log("scroll activity: no async runtime, quiet-period timer not armed");
            return;
        };

        let shared = Arc::clone(&self.shared);
        let deadline = Instant::now() + self.quiet_period;
        self.timer = Some(runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let went_idle = shared.scrolling.send_if_modified(|scrolling| {
                if shared.generation.load(Ordering::SeqCst) != generation || !*scrolling {
                    return false;
                }
                *scrolling = false;
                true
            });
            if went_idle {
                log::log_event("scroll activity: active -> idle");
            }
        }));
    }

    fn reset(&mut self) {
        self.cancel_timer();
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
        self.shared.scrolling.send_if_modified(|scrolling| {
            let changed = *scrolling;
            *scrolling = false;
            changed
        });
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for ScrollActivityDetector {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// A detector bound to a target, plus a receiver of its scrolling flag.
#[derive(Debug)]
pub struct ScrollActivity<T> {
    pub target: TargetRef<T>,
    pub scrolling: watch::Receiver<bool>,
    pub detector: ScrollActivityDetector,
}

/// Attach a new detector to `target`.
pub fn use_scroll_activity<T>(target: &TargetRef<T>, quiet_period: Duration) -> ScrollActivity<T> {
    let mut detector = ScrollActivityDetector::new(quiet_period);
    detector.attach(target.id());
    ScrollActivity {
        target: target.clone(),
        scrolling: detector.subscribe(),
        detector,
    }
}
