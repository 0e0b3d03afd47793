//! Easing curves for the scroll pipeline.
//!
//! All curves map a progress value t in [0, 1] to an eased value in [0, 1].

/// Exponential ease-out: fast initial movement that decelerates
/// asymptotically toward the target.
///
/// `f(t) = min(1, 1.001 - 2^(-10t))`
///
/// The 1.001 offset makes the curve actually reach 1.0 before t = 1
/// instead of only approaching it; the `min` keeps it from overshooting.
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    (1.001 - 2.0_f64.powf(-10.0 * t)).min(1.0)
}

/// Linear interpolation between two values, t in [0, 1].
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_expo_bounds() {
        assert!(ease_out_expo(0.0) < 0.002);
        assert!((ease_out_expo(1.0) - 1.0).abs() < 1e-9);
        // Curve reaches 1.0 slightly before t = 1 and stays there.
        assert!((ease_out_expo(0.999) - 1.0).abs() < 1e-9);
        // Out-of-range inputs are clamped.
        assert!((ease_out_expo(2.0) - 1.0).abs() < 1e-9);
        assert!(ease_out_expo(-1.0) < 0.002);
    }

    #[test]
    fn ease_out_expo_monotonic_no_overshoot() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let v = ease_out_expo(t);
            assert!(v >= prev, "not monotonic at t={}", t);
            assert!(v <= 1.0, "overshoot at t={}", t);
            prev = v;
        }
    }

    #[test]
    fn lerp_endpoints() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 1e-9);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 1e-9);
        assert!((lerp(200.0, 100.0, 1.0) - 100.0).abs() < 1e-9);
    }
}
