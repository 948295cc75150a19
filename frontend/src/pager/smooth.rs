use log::debug;

use super::easing::Easing;
use super::engine::{ScrollEngine, ScrollToOptions, Viewport};

const ARRIVED_PX: f64 = 0.5;

#[derive(Debug, Clone)]
struct ActiveAnimation {
    from: f64,
    to: f64,
    // latched on the first frame after scroll_to
    start_ms: Option<f64>,
    duration_ms: f64,
    easing: Easing,
}

#[derive(Debug)]
pub struct SmoothScroll<V: Viewport> {
    viewport: V,
    animation: Option<ActiveAnimation>,
    stopped: bool,
    destroyed: bool,
}

impl<V: Viewport> SmoothScroll<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            animation: None,
            stopped: false,
            destroyed: false,
        }
    }

    #[cfg(test)]
    fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[cfg(test)]
    fn target(&self) -> Option<f64> {
        self.animation.as_ref().map(|a| a.to)
    }
}

impl<V: Viewport> ScrollEngine for SmoothScroll<V> {
    fn scroll_to(&mut self, target: f64, options: ScrollToOptions) {
        if self.destroyed {
            return;
        }
        let from = self.viewport.scroll_y();
        if (from - target).abs() < ARRIVED_PX || options.duration <= 0.0 {
            self.animation = None;
            self.viewport.jump_to(target);
            return;
        }
        debug!("smooth scroll {} -> {} over {}s", from, target, options.duration);
        self.animation = Some(ActiveAnimation {
            from,
            to: target,
            start_ms: None,
            duration_ms: options.duration * 1000.0,
            easing: options.easing,
        });
    }

    fn stop(&mut self) {
        if self.destroyed || self.stopped {
            return;
        }
        self.stopped = true;
        self.viewport.set_scroll_locked(true);
    }

    fn start(&mut self) {
        if self.destroyed || !self.stopped {
            return;
        }
        self.stopped = false;
        self.viewport.set_scroll_locked(false);
    }

    fn raf(&mut self, now_ms: f64) {
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        let start = *anim.start_ms.get_or_insert(now_ms);
        let t = (now_ms - start) / anim.duration_ms;
        if t >= 1.0 {
            let to = anim.to;
            self.animation = None;
            self.viewport.jump_to(to);
        } else {
            let eased = (anim.easing)(t);
            self.viewport.jump_to(anim.from + (anim.to - anim.from) * eased);
        }
    }

    fn destroy(&mut self) {
        self.animation = None;
        if self.stopped {
            self.viewport.set_scroll_locked(false);
        }
        self.stopped = false;
        self.destroyed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::easing::{ease_in_out_cubic, linear};
    use crate::pager::testing::FakeViewport;

    fn opts(duration: f64) -> ScrollToOptions {
        ScrollToOptions { duration, easing: linear }
    }

    #[test]
    fn test_animation_interpolates_and_lands() {
        let vp = FakeViewport::two_pages();
        let mut engine = SmoothScroll::new(vp.clone());

        engine.scroll_to(1000.0, opts(1.0));
        assert!(engine.is_animating());
        assert_eq!(engine.target(), Some(1000.0));

        engine.raf(5000.0); // latches start
        assert_eq!(vp.scroll_y(), 0.0);
        engine.raf(5500.0);
        assert!((vp.scroll_y() - 500.0).abs() < 1e-9);
        engine.raf(6000.0);
        assert_eq!(vp.scroll_y(), 1000.0);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_eased_midpoint_matches_curve() {
        let vp = FakeViewport::two_pages();
        let mut engine = SmoothScroll::new(vp.clone());
        engine.scroll_to(800.0, ScrollToOptions { duration: 1.0, easing: ease_in_out_cubic });
        engine.raf(0.0);
        engine.raf(250.0);
        assert!((vp.scroll_y() - 800.0 * 0.0625).abs() < 1e-9);
    }

    #[test]
    fn test_zero_distance_jumps_immediately() {
        let vp = FakeViewport::two_pages();
        vp.set_scroll(300.0);
        let mut engine = SmoothScroll::new(vp.clone());
        engine.scroll_to(300.2, opts(1.0));
        assert!(!engine.is_animating());
        assert_eq!(vp.scroll_y(), 300.2);
    }

    #[test]
    fn test_stop_locks_but_programmatic_scroll_runs() {
        let vp = FakeViewport::two_pages();
        let mut engine = SmoothScroll::new(vp.clone());
        engine.stop();
        assert!(vp.is_locked());
        engine.scroll_to(400.0, opts(0.5));
        engine.raf(0.0);
        engine.raf(600.0);
        assert_eq!(vp.scroll_y(), 400.0);
        engine.start();
        assert!(!vp.is_locked());
    }

    #[test]
    fn test_destroy_ignores_later_commands() {
        let vp = FakeViewport::two_pages();
        let mut engine = SmoothScroll::new(vp.clone());
        engine.stop();
        engine.destroy();
        assert!(!vp.is_locked());
        engine.scroll_to(900.0, opts(1.0));
        engine.stop();
        assert!(!engine.is_animating());
        assert!(!vp.is_locked());
    }
}
