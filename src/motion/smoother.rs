//! Smoothed document scrolling.
//!
//! [`ScrollSmoother`] converts discrete, possibly bursty scroll input into
//! a continuous eased motion. Callers feed it targets (absolute or as
//! wheel deltas) and then poll [`ScrollSmoother::update`] once per
//! animation frame; the returned offset is what gets applied to the
//! document.
//!
//! Time is passed in as `f64` seconds (animation-frame timestamps) rather
//! than read from a clock, so the whole state machine is deterministic
//! under test and works on wasm32 where `std::time::Instant` is
//! unavailable.

use super::easing::{ease_out_expo, lerp};

/// Interpolation window in seconds. Every retarget glides toward its
/// destination over this long.
const GLIDE_DURATION_SECS: f64 = 1.2;

/// Offsets closer than this are treated as already on target.
const SETTLE_EPSILON_PX: f64 = 0.01;

/// An in-flight eased movement from one offset to another.
#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f64,
    to: f64,
    start: f64,
}

/// Eased scroll-offset state machine.
#[derive(Debug, Clone)]
pub struct ScrollSmoother {
    current: f64,
    glide: Option<Glide>,
    duration: f64,
    easing: fn(f64) -> f64,
}

impl Default for ScrollSmoother {
    fn default() -> Self {
        Self {
            current: 0.0,
            glide: None,
            duration: GLIDE_DURATION_SECS,
            easing: ease_out_expo,
        }
    }
}

impl ScrollSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current smoothed offset in pixels.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.current
    }

    /// Final offset once the active glide (if any) completes.
    #[inline]
    pub fn destination(&self) -> f64 {
        self.glide.map(|g| g.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Begin an eased movement toward `target`, clamped to `[0, max]`.
    ///
    /// A retarget mid-glide restarts from the current interpolated offset,
    /// so chained wheel input stays continuous instead of snapping.
    pub fn set_target(&mut self, target: f64, max: f64, now: f64) {
        let target = clamp_offset(target, max);
        self.current = clamp_offset(self.current, max);

        if (target - self.current).abs() < SETTLE_EPSILON_PX {
            self.current = target;
            self.glide = None;
            return;
        }

        self.glide = Some(Glide {
            from: self.current,
            to: target,
            start: now,
        });
    }

    /// Retarget relative to the current destination (wheel input path).
    pub fn scroll_by(&mut self, delta: f64, max: f64, now: f64) {
        self.set_target(self.destination() + delta, max, now);
    }

    /// Snap to `offset` with no animation. Used to adopt scroll positions
    /// produced outside the smoother (scrollbar drag, anchor jumps).
    pub fn jump_to(&mut self, offset: f64, max: f64) {
        self.current = clamp_offset(offset, max);
        self.glide = None;
    }

    /// Advance the active glide and return the current smoothed offset.
    ///
    /// Once the glide window has elapsed the offset equals the target
    /// exactly and the glide is dropped.
    pub fn update(&mut self, now: f64) -> f64 {
        if let Some(glide) = self.glide {
            let elapsed = (now - glide.start).max(0.0);
            if elapsed >= self.duration {
                self.current = glide.to;
                self.glide = None;
            } else {
                let t = elapsed / self.duration;
                self.current = lerp(glide.from, glide.to, (self.easing)(t));
            }
        }
        self.current
    }

    /// Normalized document progress for the current offset: 0 at the top,
    /// 1 at `max`, always clamped. A non-scrollable document reports 0.
    pub fn progress(&self, max: f64) -> f64 {
        if max <= 0.0 {
            return 0.0;
        }
        (self.current / max).clamp(0.0, 1.0)
    }
}

#[inline]
fn clamp_offset(offset: f64, max: f64) -> f64 {
    offset.clamp(0.0, max.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: f64 = 1000.0;

    fn settle(smoother: &mut ScrollSmoother, from: f64, step: f64, ticks: usize) -> f64 {
        let mut offset = smoother.offset();
        for i in 0..ticks {
            offset = smoother.update(from + step * (i + 1) as f64);
        }
        offset
    }

    #[test]
    fn glides_to_target_and_settles() {
        let mut smoother = ScrollSmoother::new();
        smoother.set_target(500.0, MAX, 0.0);
        assert!(smoother.is_gliding());

        // 2 s of 60 fps frames is well past the 1.2 s window.
        let offset = settle(&mut smoother, 0.0, 1.0 / 60.0, 120);
        assert!((offset - 500.0).abs() < 1e-9);
        assert!(!smoother.is_gliding());
        assert!((smoother.progress(MAX) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn approach_is_monotonic_without_overshoot() {
        let mut smoother = ScrollSmoother::new();
        smoother.set_target(500.0, MAX, 0.0);

        let mut prev = 0.0;
        for i in 1..=120 {
            let offset = smoother.update(i as f64 / 60.0);
            assert!(offset >= prev, "regressed at frame {}", i);
            assert!(offset <= 500.0 + 1e-9, "overshoot at frame {}", i);
            prev = offset;
        }
    }

    #[test]
    fn target_clamped_to_scrollable_range() {
        let mut smoother = ScrollSmoother::new();
        smoother.set_target(5000.0, MAX, 0.0);
        assert!((smoother.destination() - MAX).abs() < 1e-9);

        smoother.set_target(-200.0, MAX, 0.0);
        assert!(smoother.destination() >= 0.0);

        let offset = settle(&mut smoother, 0.0, 1.0 / 60.0, 120);
        assert!((0.0..=MAX).contains(&offset));
    }

    #[test]
    fn wheel_deltas_chain_from_destination() {
        let mut smoother = ScrollSmoother::new();
        smoother.scroll_by(100.0, MAX, 0.0);
        smoother.update(0.1);
        // Second delta lands mid-glide; it should stack on the first
        // target, not on the partially interpolated offset.
        smoother.scroll_by(100.0, MAX, 0.1);
        assert!((smoother.destination() - 200.0).abs() < 1e-9);

        let offset = settle(&mut smoother, 0.1, 1.0 / 60.0, 120);
        assert!((offset - 200.0).abs() < 1e-9);
    }

    #[test]
    fn reversing_direction_mid_glide() {
        let mut smoother = ScrollSmoother::new();
        smoother.set_target(800.0, MAX, 0.0);
        smoother.update(0.3);
        let mid = smoother.offset();
        assert!(mid > 0.0 && mid < 800.0);

        smoother.set_target(0.0, MAX, 0.3);
        let offset = settle(&mut smoother, 0.3, 1.0 / 60.0, 120);
        assert!((offset - 0.0).abs() < 1e-9);
    }

    #[test]
    fn jump_cancels_glide() {
        let mut smoother = ScrollSmoother::new();
        smoother.set_target(600.0, MAX, 0.0);
        smoother.update(0.2);
        smoother.jump_to(250.0, MAX);
        assert!(!smoother.is_gliding());
        assert!((smoother.offset() - 250.0).abs() < 1e-9);
        // No further movement without new input.
        assert!((smoother.update(5.0) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn progress_endpoints_and_degenerate_max() {
        let mut smoother = ScrollSmoother::new();
        assert!((smoother.progress(MAX) - 0.0).abs() < 1e-9);

        smoother.jump_to(MAX, MAX);
        assert!((smoother.progress(MAX) - 1.0).abs() < 1e-9);

        assert!((smoother.progress(0.0) - 0.0).abs() < 1e-9);
        assert!((smoother.progress(-5.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_retarget_settles_immediately() {
        let mut smoother = ScrollSmoother::new();
        smoother.jump_to(300.0, MAX);
        smoother.set_target(300.0, MAX, 1.0);
        assert!(!smoother.is_gliding());
    }
}
