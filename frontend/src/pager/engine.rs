use super::easing::{Easing, ease_in_out_cubic};
use super::layout::{Layout, SectionRect, ViewportMetrics, header_offset};

#[derive(Debug, Clone, Copy)]
pub struct ScrollToOptions {
    // seconds
    pub duration: f64,
    pub easing: Easing,
}

impl ScrollToOptions {
    pub fn paged(duration: f64) -> Self {
        Self { duration, easing: ease_in_out_cubic }
    }

    // zero duration jumps and cancels anything in flight
    pub fn immediate() -> Self {
        Self { duration: 0.0, easing: ease_in_out_cubic }
    }
}

/// An animated scroller that owns vertical motion of the document.
///
/// `scroll_to` is fire-and-forget: arrival is observed by polling the
/// viewport, never awaited.
pub trait ScrollEngine {
    fn scroll_to(&mut self, target: f64, options: ScrollToOptions);
    fn stop(&mut self);
    fn start(&mut self);
    /// Advances the engine; must be called once per display frame with a
    /// monotonically increasing time in milliseconds.
    fn raf(&mut self, now_ms: f64);
    fn destroy(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionMarker {
    SplitIn,
    SplitOut,
}

impl TransitionMarker {
    pub fn class_name(self) -> &'static str {
        match self {
            TransitionMarker::SplitIn => "split-in",
            TransitionMarker::SplitOut => "split-out",
        }
    }
}

pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn jump_to(&self, y: f64);
    fn metrics(&self) -> ViewportMetrics;
    /// Bottom edge of the fixed site header, `None` until it is mounted.
    fn header_bottom(&self) -> Option<f64>;
    fn sections(&self) -> Vec<SectionRect>;
    fn set_marker(&self, marker: TransitionMarker, on: bool);
    fn set_modal_class(&self, on: bool);
    // programmatic jumps still apply while locked
    fn set_scroll_locked(&self, locked: bool);

    fn layout(&self) -> Layout {
        let viewport = self.metrics();
        Layout {
            sections: self.sections(),
            header_offset: header_offset(self.header_bottom(), viewport.width),
            viewport,
        }
    }
}
