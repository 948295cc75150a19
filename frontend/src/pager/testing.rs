use std::cell::RefCell;
use std::rc::Rc;

use super::engine::{ScrollEngine, ScrollToOptions, TransitionMarker, Viewport};
use super::layout::{SectionRect, ViewportMetrics};

#[derive(Debug)]
pub struct FakeState {
    pub scroll_y: f64,
    pub metrics: ViewportMetrics,
    pub header_bottom: Option<f64>,
    pub sections: Vec<SectionRect>,
    pub split_in: bool,
    pub split_out: bool,
    pub modal_class: bool,
    pub locked: bool,
    pub jumps: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct FakeViewport(pub Rc<RefCell<FakeState>>);

impl FakeViewport {
    // 90px header, 900px hero, 1000px second page; targets 0 and 1100
    pub fn two_pages() -> Self {
        FakeViewport(Rc::new(RefCell::new(FakeState {
            scroll_y: 0.0,
            metrics: ViewportMetrics { width: 1280.0, height: 800.0 },
            header_bottom: Some(90.0),
            sections: vec![SectionRect::new(0.0, 900.0), SectionRect::new(900.0, 1000.0)],
            split_in: false,
            split_out: false,
            modal_class: false,
            locked: false,
            jumps: Vec::new(),
        })))
    }

    pub fn set_scroll(&self, y: f64) {
        self.0.borrow_mut().scroll_y = y;
    }

    pub fn set_sections(&self, sections: Vec<SectionRect>) {
        self.0.borrow_mut().sections = sections;
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.0.borrow_mut().metrics.height = height;
    }

    pub fn is_locked(&self) -> bool {
        self.0.borrow().locked
    }

    pub fn markers(&self) -> (bool, bool) {
        let state = self.0.borrow();
        (state.split_in, state.split_out)
    }

    pub fn modal_class(&self) -> bool {
        self.0.borrow().modal_class
    }

    pub fn jumps(&self) -> Vec<f64> {
        self.0.borrow().jumps.clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.0.borrow().scroll_y
    }

    fn jump_to(&self, y: f64) {
        let mut state = self.0.borrow_mut();
        state.scroll_y = y;
        state.jumps.push(y);
    }

    fn metrics(&self) -> ViewportMetrics {
        self.0.borrow().metrics
    }

    fn header_bottom(&self) -> Option<f64> {
        self.0.borrow().header_bottom
    }

    fn sections(&self) -> Vec<SectionRect> {
        self.0.borrow().sections.clone()
    }

    fn set_marker(&self, marker: TransitionMarker, on: bool) {
        let mut state = self.0.borrow_mut();
        match marker {
            TransitionMarker::SplitIn => state.split_in = on,
            TransitionMarker::SplitOut => state.split_out = on,
        }
    }

    fn set_modal_class(&self, on: bool) {
        self.0.borrow_mut().modal_class = on;
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.0.borrow_mut().locked = locked;
    }
}

/// Records commands but never moves the document.
#[derive(Debug, Default, Clone)]
pub struct StuckEngine {
    pub log: Rc<RefCell<Vec<String>>>,
}

impl StuckEngine {
    pub fn commands(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl ScrollEngine for StuckEngine {
    fn scroll_to(&mut self, target: f64, options: ScrollToOptions) {
        self.log.borrow_mut().push(format!("scroll_to {} {}", target, options.duration));
    }

    fn stop(&mut self) {
        self.log.borrow_mut().push("stop".to_string());
    }

    fn start(&mut self) {
        self.log.borrow_mut().push("start".to_string());
    }

    fn raf(&mut self, _now_ms: f64) {}

    fn destroy(&mut self) {
        self.log.borrow_mut().push("destroy".to_string());
    }
}
