#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    First,
    Second,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::First, Page::Second];

    pub fn index(self) -> usize {
        match self {
            Page::First => 0,
            Page::Second => 1,
        }
    }

    pub fn clamped(index: i64) -> Page {
        if index <= 0 {
            Page::First
        } else {
            Page::Second
        }
    }

    pub fn step(self, direction: Direction) -> Page {
        Page::clamped(self.index() as i64 + direction.sign())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    // positive is down the page; zero carries no intent
    pub fn from_delta(delta: f64) -> Option<Direction> {
        if delta > 0.0 {
            Some(Direction::Forward)
        } else if delta < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width: f64,
    pub height: f64,
}

pub fn fallback_header_offset(viewport_width: f64) -> f64 {
    if viewport_width < 640.0 {
        70.0
    } else if viewport_width < 768.0 {
        80.0
    } else {
        90.0
    }
}

pub fn header_offset(header_bottom: Option<f64>, viewport_width: f64) -> f64 {
    match header_bottom {
        Some(bottom) => bottom.ceil().max(0.0),
        None => fallback_header_offset(viewport_width),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub sections: Vec<SectionRect>,
    pub header_offset: f64,
    pub viewport: ViewportMetrics,
}

impl Layout {
    // auto-correction and the bottom-anchored last page need exactly two sections
    pub fn is_paged(&self) -> bool {
        self.sections.len() == Page::ALL.len()
    }

    /// Non-last pages sit just below the fixed header; the last page is
    /// bottom-anchored to the viewport. `None` when no section is marked.
    pub fn target_offset(&self, page: Page) -> Option<f64> {
        let last = self.sections.len().checked_sub(1)?;
        let i = page.index().min(last);
        let rect = self.sections[i];

        let raw = if self.is_paged() && i == last {
            rect.bottom() - self.viewport.height
        } else {
            rect.top - self.header_offset
        };
        Some(raw.round().max(0.0))
    }

    // ties go to the first page
    pub fn nearest_page(&self, scroll_y: f64) -> Option<Page> {
        if !self.is_paged() {
            return None;
        }
        let d0 = (scroll_y - self.target_offset(Page::First)?).abs();
        let d1 = (scroll_y - self.target_offset(Page::Second)?).abs();
        Some(if d1 < d0 { Page::Second } else { Page::First })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(sections: Vec<SectionRect>, header: f64, vh: f64) -> Layout {
        Layout {
            sections,
            header_offset: header,
            viewport: ViewportMetrics { width: 1280.0, height: vh },
        }
    }

    #[test]
    fn test_page_clamping() {
        assert_eq!(Page::clamped(-4), Page::First);
        assert_eq!(Page::clamped(0), Page::First);
        assert_eq!(Page::clamped(1), Page::Second);
        assert_eq!(Page::clamped(9), Page::Second);
        assert_eq!(Page::Second.step(Direction::Forward), Page::Second);
        assert_eq!(Page::First.step(Direction::Backward), Page::First);
        assert_eq!(Page::First.step(Direction::Forward), Page::Second);
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(12.0), Some(Direction::Forward));
        assert_eq!(Direction::from_delta(-0.5), Some(Direction::Backward));
        assert_eq!(Direction::from_delta(0.0), None);
    }

    #[test]
    fn test_fallback_header_by_breakpoint() {
        assert_eq!(fallback_header_offset(375.0), 70.0);
        assert_eq!(fallback_header_offset(700.0), 80.0);
        assert_eq!(fallback_header_offset(1440.0), 90.0);
        assert_eq!(header_offset(None, 375.0), 70.0);
        assert_eq!(header_offset(Some(85.2), 375.0), 86.0);
        assert_eq!(header_offset(Some(-10.0), 375.0), 0.0);
    }

    #[test]
    fn test_first_page_aligns_below_header() {
        let l = layout(vec![SectionRect::new(300.4, 900.0), SectionRect::new(1200.4, 1000.0)], 90.0, 800.0);
        assert_eq!(l.target_offset(Page::First), Some(210.0));
    }

    #[test]
    fn test_first_page_target_never_negative() {
        let l = layout(vec![SectionRect::new(0.0, 900.0), SectionRect::new(900.0, 1000.0)], 90.0, 800.0);
        assert_eq!(l.target_offset(Page::First), Some(0.0));
    }

    #[test]
    fn test_last_page_is_bottom_anchored() {
        let l = layout(vec![SectionRect::new(0.0, 900.0), SectionRect::new(900.0, 1000.6)], 90.0, 800.0);
        // bottom 1900.6 - viewport 800 = 1100.6 -> 1101
        assert_eq!(l.target_offset(Page::Second), Some(1101.0));
    }

    #[test]
    fn test_short_last_page_clamps_to_zero() {
        let l = layout(vec![SectionRect::new(0.0, 100.0), SectionRect::new(100.0, 200.0)], 90.0, 800.0);
        assert_eq!(l.target_offset(Page::Second), Some(0.0));
    }

    #[test]
    fn test_unpaged_layout_uses_top_rule_only() {
        let single = layout(vec![SectionRect::new(500.0, 900.0)], 90.0, 800.0);
        assert!(!single.is_paged());
        assert_eq!(single.target_offset(Page::Second), Some(410.0));
        assert_eq!(single.nearest_page(0.0), None);

        let empty = layout(vec![], 90.0, 800.0);
        assert_eq!(empty.target_offset(Page::First), None);
    }

    #[test]
    fn test_nearest_page() {
        let l = layout(vec![SectionRect::new(0.0, 900.0), SectionRect::new(900.0, 1000.0)], 90.0, 800.0);
        // targets: 0 and 1100
        assert_eq!(l.nearest_page(10.0), Some(Page::First));
        assert_eq!(l.nearest_page(549.0), Some(Page::First));
        assert_eq!(l.nearest_page(550.0), Some(Page::First));
        assert_eq!(l.nearest_page(551.0), Some(Page::Second));
        assert_eq!(l.nearest_page(2000.0), Some(Page::Second));
    }
}
