pub type Easing = fn(f64) -> f64;

/// `t < 0.5 => 4t³`, otherwise `1 - (-2t + 2)³ / 2`. Input is clamped to [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_boundaries() {
        assert!(ease_in_out_cubic(0.0).abs() < 1e-9);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-9);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_known_points() {
        // first half: 4t³
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-9);
        // second half mirrors the first
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_clamps_input() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [ease_in_out_cubic as Easing, linear] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing(t);
                assert!(v >= prev, "not monotonic at t={}", t);
                prev = v;
            }
        }
    }
}
