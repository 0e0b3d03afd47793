//! One-shot viewport reveal latch.
//!
//! Entrance animations play exactly once, the first time an element
//! becomes visible, and never replay on later scroll-away/scroll-back
//! cycles. The latch is the whole state machine: Unseen → Seen, one way.

/// Fraction of the viewport height an element's top edge must rise above
/// before it counts as entered, so animations start slightly before the
/// element is fully on screen.
pub const TRIGGER_FRACTION: f64 = 0.9;

/// Monotonic false→true visibility latch, one per animated element.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    seen: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn seen(&self) -> bool {
        self.seen
    }

    /// Feed one visibility sample. Returns `true` exactly once: on the
    /// sample that first latches the element. Every later sample, visible
    /// or not, leaves the latch untouched.
    pub fn observe(&mut self, in_view: bool) -> bool {
        if self.seen || !in_view {
            return false;
        }
        self.seen = true;
        true
    }
}

/// Whether a bounding box currently intersects the reveal band of the
/// viewport: its top above `viewport_height * trigger_fraction` and its
/// bottom still below the viewport's top edge.
#[inline]
pub fn enters_viewport(
    rect_top: f64,
    rect_bottom: f64,
    viewport_height: f64,
    trigger_fraction: f64,
) -> bool {
    viewport_height > 0.0 && rect_top < viewport_height * trigger_fraction && rect_bottom > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.seen());
        assert!(latch.observe(true));
        assert!(latch.seen());
        // Scroll away and back: no re-trigger.
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.seen());
    }

    #[test]
    fn never_seen_without_visibility() {
        let mut latch = RevealLatch::new();
        for _ in 0..100 {
            assert!(!latch.observe(false));
        }
        assert!(!latch.seen());
    }

    #[test]
    fn viewport_entry_band() {
        let vh = 1000.0;
        // Element below the fold.
        assert!(!enters_viewport(1200.0, 1400.0, vh, TRIGGER_FRACTION));
        // Top edge crosses the trigger line.
        assert!(enters_viewport(850.0, 1050.0, vh, TRIGGER_FRACTION));
        // Fully on screen.
        assert!(enters_viewport(300.0, 500.0, vh, TRIGGER_FRACTION));
        // Scrolled entirely past, above the viewport.
        assert!(!enters_viewport(-500.0, -300.0, vh, TRIGGER_FRACTION));
        // Degenerate viewport reports nothing.
        assert!(!enters_viewport(100.0, 300.0, 0.0, TRIGGER_FRACTION));
    }

    #[test]
    fn elements_latch_independently() {
        let mut latches = [RevealLatch::new(), RevealLatch::new(), RevealLatch::new()];
        latches[1].observe(true);
        assert!(!latches[0].seen());
        assert!(latches[1].seen());
        assert!(!latches[2].seen());
    }
}
