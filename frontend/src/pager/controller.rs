use log::{debug, info};

use super::engine::{ScrollEngine, ScrollToOptions, TransitionMarker, Viewport};
use super::layout::{Direction, Page};

pub const COOLDOWN_MS: f64 = 350.0;
pub const SETTLE_DEADLINE_MS: f64 = 700.0;
pub const SPLIT_HOLD_MS: f64 = 360.0;
pub const SNAP_DEBOUNCE_MS: f64 = 100.0;
pub const ARRIVAL_TOLERANCE_PX: f64 = 1.0;
// still considered "on" a page
pub const AT_PAGE_TOLERANCE_PX: f64 = 12.0;
pub const TOUCH_THRESHOLD_PX: f64 = 8.0;
// seconds
pub const USER_DURATION_S: f64 = 1.0;
pub const CORRECTION_DURATION_S: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Whitepaper,
    About,
    Contact,
    MobileMenu,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalFlags {
    whitepaper: bool,
    about: bool,
    contact: bool,
    mobile_menu: bool,
}

impl ModalFlags {
    fn slot(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Whitepaper => &mut self.whitepaper,
            ModalKind::About => &mut self.about,
            ModalKind::Contact => &mut self.contact,
            ModalKind::MobileMenu => &mut self.mobile_menu,
        }
    }

    pub fn set(&mut self, kind: ModalKind, open: bool) -> bool {
        let slot = self.slot(kind);
        let changed = *slot != open;
        *slot = open;
        changed
    }

    pub fn any_open(&self) -> bool {
        self.whitepaper || self.about || self.contact || self.mobile_menu
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerKey {
    Forward,
    Backward,
    Home,
    End,
}

impl PagerKey {
    pub fn from_key(key: &str) -> Option<PagerKey> {
        match key {
            "ArrowDown" | "PageDown" | " " | "Spacebar" => Some(PagerKey::Forward),
            "ArrowUp" | "PageUp" => Some(PagerKey::Backward),
            "Home" => Some(PagerKey::Home),
            "End" => Some(PagerKey::End),
            _ => None,
        }
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerState {
    Idle(Page),
    Transitioning { from: Page, to: Page },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Scrolling { from: Page, target: f64, deadline_ms: f64 },
    // arrived, split-out overlay showing until release
    Holding { from: Page, release_ms: f64 },
}

pub struct Pager<V: Viewport, E: ScrollEngine> {
    viewport: V,
    engine: Option<E>,
    // committed page; `displayed` is what the indicators show
    page: Page,
    displayed: Page,
    phase: Phase,
    modals: ModalFlags,
    last_trigger_ms: Option<f64>,
    touch_start_y: Option<f64>,
    snap_due_ms: Option<f64>,
    listener: Option<Box<dyn FnMut(Page)>>,
}

impl<V: Viewport, E: ScrollEngine> Pager<V, E> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            engine: None,
            page: Page::First,
            displayed: Page::First,
            phase: Phase::Idle,
            modals: ModalFlags::default(),
            last_trigger_ms: None,
            touch_start_y: None,
            snap_due_ms: None,
            listener: None,
        }
    }

    pub fn attach_engine(&mut self, mut engine: E) {
        if self.modals.any_open() {
            engine.stop();
        }
        self.engine = Some(engine);
    }

    pub fn on_page_change(&mut self, listener: impl FnMut(Page) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // ignores any restored scroll position
    pub fn mount(&mut self) {
        self.page = Page::First;
        self.phase = Phase::Idle;
        self.last_trigger_ms = None;
        self.touch_start_y = None;
        self.snap_due_ms = None;
        self.viewport.set_marker(TransitionMarker::SplitIn, false);
        self.viewport.set_marker(TransitionMarker::SplitOut, false);
        self.viewport.jump_to(0.0);
        self.show(Page::First);
    }

    pub fn teardown(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.destroy();
        }
        self.phase = Phase::Idle;
        self.snap_due_ms = None;
        self.touch_start_y = None;
        self.viewport.set_marker(TransitionMarker::SplitIn, false);
        self.viewport.set_marker(TransitionMarker::SplitOut, false);
        self.viewport.set_modal_class(false);
    }

    #[cfg(test)]
    pub fn state(&self) -> PagerState {
        match self.phase {
            Phase::Idle => PagerState::Idle(self.page),
            Phase::Scrolling { from, .. } | Phase::Holding { from, .. } => {
                PagerState::Transitioning { from, to: self.page }
            }
        }
    }

    #[cfg(test)]
    pub fn page(&self) -> Page {
        self.page
    }

    #[cfg(test)]
    pub fn displayed_page(&self) -> Page {
        self.displayed
    }

    #[cfg(test)]
    pub fn modal_open(&self) -> bool {
        self.modals.any_open()
    }

    fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Pauses the engine while anything is open. A move already in flight is
    /// left to finish.
    pub fn set_modal_open(&mut self, kind: ModalKind, open: bool) {
        let was_open = self.modals.any_open();
        if !self.modals.set(kind, open) {
            return;
        }
        let now_open = self.modals.any_open();
        if was_open == now_open {
            return;
        }
        debug!("modal open: {}", now_open);
        self.viewport.set_modal_class(now_open);
        if now_open {
            self.snap_due_ms = None;
            self.touch_start_y = None;
            if let Some(engine) = self.engine.as_mut() {
                engine.stop();
            }
        } else if !self.is_animating() {
            if let Some(engine) = self.engine.as_mut() {
                engine.start();
            }
        }
    }

    /// `duration` defaults to the user-gesture duration. Returns whether a
    /// move started.
    pub fn go_to_index(&mut self, index: usize, duration: Option<f64>, now_ms: f64) -> bool {
        let page = Page::clamped(index.min(i64::MAX as usize) as i64);
        self.go_to(page, duration.unwrap_or(USER_DURATION_S), now_ms)
    }

    fn go_to(&mut self, page: Page, duration: f64, now_ms: f64) -> bool {
        if self.blocked() {
            debug!("pager busy, dropping move to {:?}", page);
            return false;
        }
        let Some(target) = self.viewport.layout().target_offset(page) else {
            debug!("no snap sections, dropping move to {:?}", page);
            return false;
        };
        if page == self.page && self.near(target, AT_PAGE_TOLERANCE_PX) {
            return false;
        }
        self.begin(page, target, duration, now_ms);
        true
    }

    fn begin(&mut self, page: Page, target: f64, duration: f64, now_ms: f64) {
        let from = self.page;
        info!("page {} -> {} (target {}px)", from.index(), page.index(), target);

        self.page = page;
        self.show(page);
        self.phase = Phase::Scrolling {
            from,
            target,
            deadline_ms: now_ms + SETTLE_DEADLINE_MS,
        };
        self.snap_due_ms = None;
        self.touch_start_y = None;

        if let Some(engine) = self.engine.as_mut() {
            engine.stop();
        }
        self.viewport.set_marker(TransitionMarker::SplitIn, true);
        if let Some(engine) = self.engine.as_mut() {
            engine.scroll_to(target, ScrollToOptions::paged(duration));
        }
        self.poll_settle(now_ms);
    }

    /// Per-frame pump: ticks the engine, then advances whichever deadline is
    /// pending. Must be fed the same clock as the input handlers.
    pub fn on_frame(&mut self, now_ms: f64) {
        if let Some(engine) = self.engine.as_mut() {
            engine.raf(now_ms);
        }
        let phase = self.phase;
        match phase {
            Phase::Scrolling { .. } => self.poll_settle(now_ms),
            Phase::Holding { from, release_ms } if now_ms >= release_ms => self.finish(from, now_ms),
            Phase::Holding { .. } => {}
            Phase::Idle => {
                if let Some(due) = self.snap_due_ms {
                    if now_ms >= due {
                        self.snap_due_ms = None;
                        self.auto_correct(now_ms);
                    }
                }
            }
        }
    }

    fn poll_settle(&mut self, now_ms: f64) {
        let Phase::Scrolling { from, target, deadline_ms } = self.phase else {
            return;
        };
        if !self.near(target, ARRIVAL_TOLERANCE_PX) && now_ms <= deadline_ms {
            return;
        }
        if now_ms > deadline_ms {
            debug!("settle deadline hit, snapping to {}px", target);
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.scroll_to(target, ScrollToOptions::immediate());
        }
        self.viewport.jump_to(target);
        self.viewport.set_marker(TransitionMarker::SplitIn, false);
        self.viewport.set_marker(TransitionMarker::SplitOut, true);
        self.phase = Phase::Holding {
            from,
            release_ms: now_ms + SPLIT_HOLD_MS,
        };
    }

    fn finish(&mut self, from: Page, now_ms: f64) {
        debug!("page {} -> {} settled", from.index(), self.page.index());
        self.viewport.set_marker(TransitionMarker::SplitOut, false);
        self.phase = Phase::Idle;
        self.last_trigger_ms = Some(now_ms);
        if !self.modals.any_open() {
            if let Some(engine) = self.engine.as_mut() {
                engine.start();
            }
        }
    }

    // the host always prevents native wheel scrolling
    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64, now_ms: f64) -> bool {
        if self.blocked() {
            return false;
        }
        let delta = if delta_y.abs() >= delta_x.abs() { delta_y } else { delta_x };
        let Some(direction) = Direction::from_delta(delta) else {
            return false;
        };
        let settled_here = self
            .viewport
            .layout()
            .target_offset(self.page)
            .is_some_and(|target| self.near(target, AT_PAGE_TOLERANCE_PX));
        let pushing_past_edge = matches!(
            (self.page, direction),
            (Page::First, Direction::Backward) | (Page::Second, Direction::Forward)
        );
        if settled_here && pushing_past_edge {
            return false;
        }
        self.trigger(direction, now_ms)
    }

    /// Returns whether the key's default action should be prevented.
    pub fn on_key(&mut self, key: PagerKey, typing: bool, now_ms: f64) -> bool {
        if self.modals.any_open() || self.is_animating() || typing {
            return false;
        }
        match key {
            PagerKey::Forward => {
                self.trigger(Direction::Forward, now_ms);
            }
            PagerKey::Backward => {
                self.trigger(Direction::Backward, now_ms);
            }
            PagerKey::Home => {
                if !self.cooling_down(now_ms) {
                    self.go_to(Page::First, USER_DURATION_S, now_ms);
                }
            }
            PagerKey::End => {
                if !self.cooling_down(now_ms) {
                    self.go_to(Page::Second, USER_DURATION_S, now_ms);
                }
            }
        }
        true
    }

    pub fn on_touch_start(&mut self, touches: u32, client_y: f64) {
        if self.modals.any_open() || self.is_animating() || touches != 1 {
            return;
        }
        self.touch_start_y = Some(client_y);
    }

    pub fn on_touch_move(&mut self, client_y: f64, now_ms: f64) -> bool {
        let Some(start_y) = self.touch_start_y else {
            return false;
        };
        if self.modals.any_open() || self.is_animating() {
            return true;
        }
        let dy = client_y - start_y;
        if dy.abs() < TOUCH_THRESHOLD_PX {
            return true;
        }
        self.touch_start_y = None;
        // dragging the finger up moves the document forward
        let direction = if dy < 0.0 { Direction::Forward } else { Direction::Backward };
        self.trigger(direction, now_ms);
        true
    }

    pub fn on_touch_end(&mut self) {
        self.touch_start_y = None;
    }

    pub fn on_scroll(&mut self, now_ms: f64) {
        if self.modals.any_open() || self.is_animating() {
            return;
        }
        let layout = self.viewport.layout();
        let Some(nearest) = layout.nearest_page(self.viewport.scroll_y()) else {
            return;
        };
        self.show(nearest);
        self.snap_due_ms = Some(now_ms + SNAP_DEBOUNCE_MS);
    }

    pub fn on_resize(&mut self) {
        if self.modals.any_open() {
            return;
        }
        if let Some(target) = self.viewport.layout().target_offset(self.page) {
            self.viewport.jump_to(target);
        }
    }

    fn auto_correct(&mut self, now_ms: f64) {
        if self.blocked() {
            return;
        }
        let layout = self.viewport.layout();
        let scroll_y = self.viewport.scroll_y();
        let Some(nearest) = layout.nearest_page(scroll_y) else {
            return;
        };
        let Some(target) = layout.target_offset(nearest) else {
            return;
        };
        if self.near(target, AT_PAGE_TOLERANCE_PX) {
            // free scrolling already landed on a page; adopt it
            self.page = nearest;
            self.show(nearest);
            return;
        }
        debug!("auto-correcting {}px -> page {}", scroll_y, nearest.index());
        self.begin(nearest, target, CORRECTION_DURATION_S, now_ms);
    }

    fn trigger(&mut self, direction: Direction, now_ms: f64) -> bool {
        if self.blocked() || self.cooling_down(now_ms) {
            return false;
        }
        let next = self.page.step(direction);
        if next == self.page {
            return false;
        }
        self.go_to(next, USER_DURATION_S, now_ms)
    }

    fn blocked(&self) -> bool {
        self.modals.any_open() || self.is_animating() || self.engine.is_none()
    }

    fn cooling_down(&self, now_ms: f64) -> bool {
        self.last_trigger_ms
            .is_some_and(|last| now_ms - last < COOLDOWN_MS)
    }

    fn near(&self, target: f64, tolerance: f64) -> bool {
        (self.viewport.scroll_y() - target).abs() <= tolerance
    }

    fn show(&mut self, page: Page) {
        if self.displayed == page {
            return;
        }
        self.displayed = page;
        if let Some(listener) = self.listener.as_mut() {
            listener(page);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::pager::layout::SectionRect;
    use crate::pager::smooth::SmoothScroll;
    use crate::pager::testing::{FakeViewport, StuckEngine};

    const FRAME_MS: f64 = 16.0;
    const PAGE_TWO_PX: f64 = 1100.0;

    type SmoothPager = Pager<FakeViewport, SmoothScroll<FakeViewport>>;

    fn smooth_pager() -> (SmoothPager, FakeViewport) {
        let vp = FakeViewport::two_pages();
        let mut pager = Pager::new(vp.clone());
        pager.attach_engine(SmoothScroll::new(vp.clone()));
        pager.mount();
        (pager, vp)
    }

    fn stuck_pager() -> (Pager<FakeViewport, StuckEngine>, FakeViewport, StuckEngine) {
        let vp = FakeViewport::two_pages();
        let engine = StuckEngine::default();
        let mut pager = Pager::new(vp.clone());
        pager.attach_engine(engine.clone());
        pager.mount();
        (pager, vp, engine)
    }

    /// Pumps frames until the pager is idle again; returns the clock.
    fn run_until_idle<E: ScrollEngine>(pager: &mut Pager<FakeViewport, E>, mut now: f64) -> f64 {
        for _ in 0..500 {
            if !pager.is_animating() {
                return now;
            }
            now += FRAME_MS;
            pager.on_frame(now);
        }
        panic!("pager never settled");
    }

    #[test]
    fn test_mount_forces_first_page_at_top() {
        let vp = FakeViewport::two_pages();
        vp.set_scroll(740.0);
        let mut pager: Pager<_, StuckEngine> = Pager::new(vp.clone());
        pager.mount();
        assert_eq!(pager.state(), PagerState::Idle(Page::First));
        assert_eq!(vp.scroll_y(), 0.0);
    }

    #[test]
    fn test_forward_wheel_moves_once() {
        let (mut pager, vp) = smooth_pager();
        assert!(pager.on_wheel(0.0, 40.0, 1000.0));
        assert_eq!(
            pager.state(),
            PagerState::Transitioning { from: Page::First, to: Page::Second }
        );
        assert_eq!(vp.markers(), (true, false));

        // a second tick during the move is dropped
        assert!(!pager.on_wheel(0.0, 40.0, 1010.0));

        let now = run_until_idle(&mut pager, 1000.0);
        assert_eq!(pager.state(), PagerState::Idle(Page::Second));
        assert_eq!(vp.scroll_y(), PAGE_TWO_PX);
        assert_eq!(vp.markers(), (false, false));

        // and a tick straight after completion falls inside the cooldown
        assert!(!pager.on_wheel(0.0, 40.0, now + 1.0));
        assert_eq!(pager.page(), Page::Second);
    }

    #[test]
    fn test_forward_at_last_page_is_idempotent() {
        let (mut pager, _vp) = smooth_pager();
        let mut now = 0.0;
        for _ in 0..6 {
            now += COOLDOWN_MS + 50.0;
            pager.on_wheel(0.0, 100.0, now);
            pager.on_key(PagerKey::Forward, false, now + 1.0);
            now = run_until_idle(&mut pager, now);
            assert!(pager.page().index() <= 1);
        }
        assert_eq!(pager.state(), PagerState::Idle(Page::Second));
    }

    #[test]
    fn test_cooldown_expires() {
        let (mut pager, vp) = smooth_pager();
        pager.on_wheel(0.0, 50.0, 0.0);
        let now = run_until_idle(&mut pager, 0.0);

        assert!(!pager.on_wheel(0.0, -50.0, now + COOLDOWN_MS - 1.0));
        assert!(pager.on_wheel(0.0, -50.0, now + COOLDOWN_MS));
        run_until_idle(&mut pager, now + COOLDOWN_MS);
        assert_eq!(pager.page(), Page::First);
        assert_eq!(vp.scroll_y(), 0.0);
    }

    #[test]
    fn test_second_go_to_index_ignored_while_in_flight() {
        let (mut pager, vp) = smooth_pager();
        assert!(pager.go_to_index(1, None, 0.0));
        assert!(!pager.go_to_index(0, None, 5.0));
        run_until_idle(&mut pager, 5.0);
        assert_eq!(pager.state(), PagerState::Idle(Page::Second));
        assert_eq!(vp.scroll_y(), PAGE_TWO_PX);
    }

    #[test]
    fn test_go_to_index_clamps_out_of_range() {
        let (mut pager, _vp) = smooth_pager();
        assert!(pager.go_to_index(7, None, 0.0));
        run_until_idle(&mut pager, 0.0);
        assert_eq!(pager.page(), Page::Second);
    }

    #[test]
    fn test_round_trip_returns_to_same_pixel() {
        let (mut pager, vp) = smooth_pager();
        let mut now = 0.0;
        let mut first_page_positions = Vec::new();
        for index in [0usize, 1, 0] {
            pager.go_to_index(index, None, now);
            now = run_until_idle(&mut pager, now) + 10.0;
            if index == 0 {
                first_page_positions.push(vp.scroll_y());
            }
        }
        assert_eq!(first_page_positions, vec![0.0, 0.0]);
        assert_eq!(pager.page(), Page::First);
    }

    #[test]
    fn test_go_to_current_page_when_settled_is_noop() {
        let (mut pager, _vp) = smooth_pager();
        assert!(!pager.go_to_index(0, None, 0.0));
        assert!(!pager.is_animating());
    }

    #[test]
    fn test_deadline_snaps_when_engine_never_arrives() {
        let (mut pager, vp, engine) = stuck_pager();
        assert!(pager.go_to_index(1, None, 0.0));
        assert_eq!(engine.commands(), vec!["stop".to_string(), "scroll_to 1100 1".to_string()]);

        pager.on_frame(SETTLE_DEADLINE_MS);
        assert!(matches!(pager.state(), PagerState::Transitioning { .. }));
        assert_eq!(vp.scroll_y(), 0.0);

        pager.on_frame(SETTLE_DEADLINE_MS + 1.0);
        assert_eq!(vp.scroll_y(), PAGE_TWO_PX);
        assert_eq!(vp.markers(), (false, true));
        // still holding the split-out overlay
        assert!(pager.is_animating());

        pager.on_frame(SETTLE_DEADLINE_MS + 1.0 + SPLIT_HOLD_MS - 1.0);
        assert!(pager.is_animating());
        pager.on_frame(SETTLE_DEADLINE_MS + 1.0 + SPLIT_HOLD_MS);
        assert_eq!(pager.state(), PagerState::Idle(Page::Second));
        assert_eq!(vp.markers(), (false, false));
        assert_eq!(engine.commands().last().map(String::as_str), Some("start"));
    }

    #[test]
    fn test_no_engine_means_no_moves() {
        let vp = FakeViewport::two_pages();
        let mut pager: Pager<_, StuckEngine> = Pager::new(vp.clone());
        pager.mount();
        assert!(!pager.on_wheel(0.0, 30.0, 0.0));
        assert!(!pager.go_to_index(1, None, 0.0));
        pager.on_touch_start(1, 500.0);
        pager.on_touch_move(400.0, 1.0);
        assert_eq!(pager.state(), PagerState::Idle(Page::First));
    }

    #[test]
    fn test_modal_blocks_triggers_until_closed() {
        let (mut pager, vp) = smooth_pager();
        pager.set_modal_open(ModalKind::Whitepaper, true);
        assert!(pager.modal_open());
        assert!(vp.modal_class());
        assert!(vp.is_locked());

        assert!(!pager.on_wheel(0.0, 60.0, 0.0));
        assert!(!pager.on_key(PagerKey::Forward, false, 0.0));
        assert!(!pager.go_to_index(1, None, 0.0));
        assert_eq!(pager.state(), PagerState::Idle(Page::First));

        pager.set_modal_open(ModalKind::Whitepaper, false);
        assert!(!vp.modal_class());
        assert!(!vp.is_locked());
        assert!(pager.on_wheel(0.0, 60.0, 10.0));
    }

    #[test]
    fn test_modal_aggregate_tracks_every_flag() {
        let (mut pager, vp) = smooth_pager();
        pager.set_modal_open(ModalKind::Contact, true);
        pager.set_modal_open(ModalKind::MobileMenu, true);
        pager.set_modal_open(ModalKind::Contact, false);
        assert!(pager.modal_open());
        assert!(vp.is_locked());
        pager.set_modal_open(ModalKind::MobileMenu, false);
        assert!(!pager.modal_open());
        assert!(!vp.is_locked());
    }

    #[test]
    fn test_modal_opened_mid_flight_does_not_abort() {
        let (mut pager, vp, engine) = stuck_pager();
        pager.go_to_index(1, None, 0.0);
        pager.set_modal_open(ModalKind::About, true);
        let now = run_until_idle(&mut pager, 0.0);
        assert_eq!(pager.state(), PagerState::Idle(Page::Second));
        assert_eq!(vp.scroll_y(), PAGE_TWO_PX);
        // engine stays paused for the open modal
        assert_ne!(engine.commands().last().map(String::as_str), Some("start"));

        pager.set_modal_open(ModalKind::About, false);
        assert_eq!(engine.commands().last().map(String::as_str), Some("start"));
        assert!(pager.on_wheel(0.0, -10.0, now + COOLDOWN_MS));
    }

    #[test]
    fn test_wheel_prefers_dominant_axis_and_ignores_zero() {
        let (mut pager, _vp) = smooth_pager();
        assert!(!pager.on_wheel(0.0, 0.0, 0.0));
        // horizontal dominant and negative: backward at page one does nothing
        assert!(!pager.on_wheel(-80.0, 5.0, 0.0));
        // horizontal dominant and positive: forward
        assert!(pager.on_wheel(80.0, -5.0, 0.0));
    }

    #[test]
    fn test_backward_wheel_at_settled_first_page_is_noop() {
        let (mut pager, vp) = smooth_pager();
        assert!(!pager.on_wheel(0.0, -120.0, 0.0));
        assert!(!pager.is_animating());
        assert!(vp.jumps().iter().all(|y| *y == 0.0));
    }

    #[test]
    fn test_keyboard_navigation() {
        let (mut pager, _vp) = smooth_pager();
        assert!(pager.on_key(PagerKey::End, false, 0.0));
        let now = run_until_idle(&mut pager, 0.0);
        assert_eq!(pager.page(), Page::Second);

        // End again is handled but does not move
        assert!(pager.on_key(PagerKey::End, false, now + 500.0));
        assert!(!pager.is_animating());

        assert!(pager.on_key(PagerKey::Home, false, now + 500.0));
        run_until_idle(&mut pager, now + 500.0);
        assert_eq!(pager.page(), Page::First);
    }

    #[test]
    fn test_keys_ignored_while_typing() {
        let (mut pager, _vp) = smooth_pager();
        assert!(!pager.on_key(PagerKey::Forward, true, 0.0));
        assert!(!pager.is_animating());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(PagerKey::from_key("ArrowDown"), Some(PagerKey::Forward));
        assert_eq!(PagerKey::from_key(" "), Some(PagerKey::Forward));
        assert_eq!(PagerKey::from_key("PageUp"), Some(PagerKey::Backward));
        assert_eq!(PagerKey::from_key("Home"), Some(PagerKey::Home));
        assert_eq!(PagerKey::from_key("End"), Some(PagerKey::End));
        assert_eq!(PagerKey::from_key("Enter"), None);
    }

    #[test]
    fn test_swipe_commits_once_per_sequence() {
        let (mut pager, _vp) = smooth_pager();
        pager.on_touch_start(1, 600.0);
        assert!(pager.on_touch_move(595.0, 0.0));
        assert!(!pager.is_animating());

        // upward drag past the threshold moves forward
        assert!(pager.on_touch_move(590.0, 1.0));
        assert!(pager.is_animating());
        assert_eq!(pager.page(), Page::Second);

        // the rest of the drag is no longer tracked
        assert!(!pager.on_touch_move(300.0, 2.0));
        pager.on_touch_end();
    }

    #[test]
    fn test_downward_swipe_moves_backward() {
        let (mut pager, _vp) = smooth_pager();
        pager.go_to_index(1, None, 0.0);
        let now = run_until_idle(&mut pager, 0.0) + COOLDOWN_MS;
        pager.on_touch_start(1, 200.0);
        pager.on_touch_move(230.0, now);
        run_until_idle(&mut pager, now);
        assert_eq!(pager.page(), Page::First);
    }

    #[test]
    fn test_multi_touch_is_ignored() {
        let (mut pager, _vp) = smooth_pager();
        pager.on_touch_start(2, 600.0);
        assert!(!pager.on_touch_move(100.0, 0.0));
        assert!(!pager.is_animating());
    }

    #[test]
    fn test_resize_repins_committed_page() {
        let (mut pager, vp) = smooth_pager();
        pager.go_to_index(1, None, 0.0);
        run_until_idle(&mut pager, 0.0);

        vp.set_viewport_height(600.0);
        pager.on_resize();
        // bottom 1900 - 600
        assert_eq!(vp.scroll_y(), 1300.0);
        assert_eq!(pager.page(), Page::Second);
        assert!(!pager.is_animating());
    }

    #[test]
    fn test_resize_ignored_with_modal_open() {
        let (mut pager, vp) = smooth_pager();
        vp.set_scroll(333.0);
        pager.set_modal_open(ModalKind::Contact, true);
        pager.on_resize();
        assert_eq!(vp.scroll_y(), 333.0);
    }

    #[test]
    fn test_free_scroll_between_pages_is_corrected() {
        let (mut pager, vp) = smooth_pager();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = shown.clone();
        pager.on_page_change(move |page| sink.borrow_mut().push(page));

        vp.set_scroll(800.0);
        pager.on_scroll(0.0);
        assert_eq!(pager.displayed_page(), Page::Second);
        // committed page only changes once the correction starts
        assert_eq!(pager.page(), Page::First);

        pager.on_frame(50.0);
        assert!(!pager.is_animating());
        // still moving resets the debounce
        pager.on_scroll(60.0);
        pager.on_frame(120.0);
        assert!(!pager.is_animating());
        pager.on_frame(160.0);
        assert!(pager.is_animating());

        run_until_idle(&mut pager, 160.0);
        assert_eq!(pager.state(), PagerState::Idle(Page::Second));
        assert_eq!(vp.scroll_y(), PAGE_TWO_PX);
        assert_eq!(*shown.borrow(), vec![Page::Second]);
    }

    #[test]
    fn test_free_scroll_landing_on_page_is_adopted() {
        let (mut pager, vp) = smooth_pager();
        vp.set_scroll(PAGE_TWO_PX - 5.0);
        pager.on_scroll(0.0);
        pager.on_frame(SNAP_DEBOUNCE_MS);
        assert!(!pager.is_animating());
        assert_eq!(pager.page(), Page::Second);
    }

    #[test]
    fn test_unpaged_document_skips_correction() {
        let (mut pager, vp) = smooth_pager();
        vp.set_sections(vec![SectionRect::new(0.0, 3000.0)]);
        vp.set_scroll(900.0);
        pager.on_scroll(0.0);
        pager.on_frame(SNAP_DEBOUNCE_MS + 1.0);
        assert!(!pager.is_animating());
        assert_eq!(vp.scroll_y(), 900.0);
    }

    #[test]
    fn test_teardown_destroys_engine() {
        let (mut pager, vp, engine) = stuck_pager();
        pager.go_to_index(1, None, 0.0);
        pager.teardown();
        assert_eq!(engine.commands().last().map(String::as_str), Some("destroy"));
        assert_eq!(vp.markers(), (false, false));
        assert!(!pager.on_wheel(0.0, -50.0, 10_000.0));
    }

    #[test]
    fn test_hold_release_settles_on_committed_page() {
        let (mut pager, vp, _engine) = stuck_pager();
        pager.go_to_index(1, None, 0.0);
        let now = run_until_idle(&mut pager, 0.0);

        assert!(pager.go_to_index(0, None, now));
        pager.on_frame(now + SETTLE_DEADLINE_MS + 1.0);
        assert_eq!(
            pager.state(),
            PagerState::Transitioning { from: Page::Second, to: Page::First }
        );
        pager.on_frame(now + SETTLE_DEADLINE_MS + 1.0 + SPLIT_HOLD_MS);
        assert_eq!(pager.state(), PagerState::Idle(Page::First));
        assert_eq!(pager.displayed_page(), Page::First);
        assert_eq!(vp.scroll_y(), 0.0);
    }
}
