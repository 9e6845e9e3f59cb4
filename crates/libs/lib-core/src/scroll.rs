//! # Scroll Observer
//!
//! Turns raw vertical scroll offsets into the booleans the page shell renders from.
//!
//! The browser side samples `window.scrollY` on every scroll event and feeds it to
//! [`ScrollObserver::observe`]. Only boolean flips are reported, so callers can skip
//! redundant signal writes.

/// Offset in CSS pixels past which the navbar switches to its scrolled chrome.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Offset in CSS pixels past which the scroll-to-top button appears.
pub const SCROLL_TO_TOP_OFFSET_PX: f64 = 400.0;

/// Whether `offset` is strictly past `threshold`.
///
/// ```rust
/// use lib_core::scroll::{is_past_threshold, SCROLL_THRESHOLD_PX};
///
/// assert!(!is_past_threshold(20.0, SCROLL_THRESHOLD_PX));
/// assert!(is_past_threshold(21.0, SCROLL_THRESHOLD_PX));
/// ```
pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks one threshold crossing over a stream of scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollObserver {
    threshold: f64,
    past: bool,
}

impl ScrollObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past: false,
        }
    }

    /// Current value of the "is past threshold" flag.
    pub fn is_past(&self) -> bool {
        self.past
    }

    /// Feed a new offset. Returns `Some(flag)` when the flag changed, `None` otherwise.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let past = is_past_threshold(offset, self.threshold);
        if past == self.past {
            return None;
        }
        self.past = past;
        tracing::debug!(offset, past, threshold = self.threshold, "scroll threshold crossed");
        Some(past)
    }
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        for offset in [0.0, 1.0, 19.5, 20.0] {
            assert!(!is_past_threshold(offset, SCROLL_THRESHOLD_PX), "offset {offset}");
        }
        for offset in [20.5, 21.0, 50.0, 10_000.0] {
            assert!(is_past_threshold(offset, SCROLL_THRESHOLD_PX), "offset {offset}");
        }
    }

    #[test]
    fn test_negative_overscroll_is_not_past() {
        // Elastic overscroll on some browsers reports negative offsets.
        assert!(!is_past_threshold(-35.0, SCROLL_THRESHOLD_PX));
    }

    #[test]
    fn test_observe_reports_only_flips() {
        let mut observer = ScrollObserver::default();
        assert_eq!(observer.observe(0.0), None);
        assert_eq!(observer.observe(20.0), None);
        assert_eq!(observer.observe(21.0), Some(true));
        assert_eq!(observer.observe(300.0), None);
        assert_eq!(observer.observe(5.0), Some(false));
        assert!(!observer.is_past());
    }

    #[test]
    fn test_custom_threshold() {
        let mut observer = ScrollObserver::new(SCROLL_TO_TOP_OFFSET_PX);
        assert_eq!(observer.observe(399.0), None);
        assert_eq!(observer.observe(401.0), Some(true));
        assert!(observer.is_past());
    }
}
