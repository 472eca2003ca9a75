//! Thumb geometry derived from the target's dimensions.
//!
//! Everything here is a pure function of its inputs so callers recompute
//! it on every change instead of caching derived values.

/// Smallest thumb height in pixels.
pub const MIN_THUMB_HEIGHT: f64 = 20.0;

/// Size of the thumb relative to its track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    /// Target has no overflow, so there is nothing to scroll
    pub no_scroll_area: bool,
    /// Visible fraction of the content (`client / scroll`)
    pub ratio: f64,
    pub thumb_height: f64,
}

impl ThumbGeometry {
    /// Compute the thumb size for a target of the given heights.
    ///
    /// Zero heights are treated as 1 so the ratio never becomes NaN or
    /// infinite.
    pub fn compute(client_height: f64, scroll_height: f64, min_thumb_height: f64) -> Self {
        let client_height = guard_divisor(client_height);
        let scroll_height = guard_divisor(scroll_height);
        let ratio = client_height / scroll_height;

        Self {
            no_scroll_area: client_height == scroll_height,
            ratio,
            thumb_height: (ratio * client_height).max(min_thumb_height),
        }
    }

    /// Thumb top for a target scrolled to `scroll_top`, kept inside a track
    /// of `client_height`.
    pub fn top_for_scroll(&self, scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
        let raw_top = scroll_top / guard_divisor(scroll_height) * client_height;
        raw_top
            .min(max_thumb_top(client_height, self.thumb_height))
            .max(0.0)
    }

    /// Overlay visibility for the given caller and drag state.
    pub fn is_visible(&self, active: bool, dragging: bool) -> bool {
        (active || dragging) && !self.no_scroll_area
    }
}

/// Largest valid thumb top inside a track, never negative.
pub fn max_thumb_top(track_height: f64, thumb_height: f64) -> f64 {
    (track_height - thumb_height).max(0.0)
}

/// Replace zero, negative or non-finite divisors with 1.
pub fn guard_divisor(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_height_proportional() {
        let geometry = ThumbGeometry::compute(200.0, 1000.0, MIN_THUMB_HEIGHT);
        assert_eq!(geometry.thumb_height, 40.0);
        assert!(!geometry.no_scroll_area);
    }

    #[test]
    fn test_thumb_height_never_below_minimum() {
        for client in [0.0, 1.0, 10.0, 50.0, 200.0, 999.0] {
            for scroll in [1.0, 100.0, 1000.0, 10_000.0, 1_000_000.0] {
                let geometry = ThumbGeometry::compute(client, scroll, MIN_THUMB_HEIGHT);
                assert!(
                    geometry.thumb_height >= MIN_THUMB_HEIGHT,
                    "client={client} scroll={scroll} -> {}",
                    geometry.thumb_height
                );
            }
        }
    }

    #[test]
    fn test_zero_heights_stay_finite() {
        let geometry = ThumbGeometry::compute(0.0, 0.0, MIN_THUMB_HEIGHT);
        assert!(geometry.ratio.is_finite());
        assert!(geometry.thumb_height.is_finite());
        assert!(geometry.no_scroll_area);
        assert_eq!(geometry.top_for_scroll(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_top_for_scroll_clamps_to_track() {
        let geometry = ThumbGeometry::compute(200.0, 1000.0, MIN_THUMB_HEIGHT);
        assert_eq!(geometry.top_for_scroll(0.0, 1000.0, 200.0), 0.0);
        assert_eq!(geometry.top_for_scroll(400.0, 1000.0, 200.0), 80.0);
        // Past the end still lands at the bottom of the track
        assert_eq!(geometry.top_for_scroll(1000.0, 1000.0, 200.0), 160.0);
    }

    #[test]
    fn test_visibility_rules() {
        let scrollable = ThumbGeometry::compute(200.0, 1000.0, MIN_THUMB_HEIGHT);
        assert!(scrollable.is_visible(true, false));
        assert!(!scrollable.is_visible(false, false));
        assert!(scrollable.is_visible(false, true));

        let fits = ThumbGeometry::compute(200.0, 200.0, MIN_THUMB_HEIGHT);
        assert!(!fits.is_visible(true, false));
        assert!(!fits.is_visible(true, true));
    }

    #[test]
    fn test_max_thumb_top_floored() {
        assert_eq!(max_thumb_top(200.0, 40.0), 160.0);
        assert_eq!(max_thumb_top(10.0, 20.0), 0.0);
    }
}
