use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent,
    TouchEvent, WheelEvent, Window,
};

use super::controller::{ModalKind, Pager, PagerKey};
use super::engine::{TransitionMarker, Viewport};
use super::layout::{Page, SectionRect, ViewportMetrics};
use super::smooth::SmoothScroll;

pub const SECTION_SELECTOR: &str = "section[data-snap]";
pub const HEADER_ID: &str = "site-header";
/// Elements under this marker keep their native wheel and touch scrolling.
pub const EXEMPT_SELECTOR: &str = "[data-no-snap]";

pub type DomPager = Pager<DomViewport, SmoothScroll<DomViewport>>;

#[derive(Clone)]
pub struct DomViewport {
    window: Window,
    document: Document,
    // queried on first use
    sections: Rc<RefCell<Option<Vec<HtmlElement>>>>,
}

impl DomViewport {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            sections: Rc::new(RefCell::new(None)),
        })
    }

    fn section_elements(&self) -> Vec<HtmlElement> {
        let mut cache = self.sections.borrow_mut();
        if let Some(sections) = cache.as_ref() {
            return sections.clone();
        }
        let found: Vec<HtmlElement> = match self.document.query_selector_all(SECTION_SELECTOR) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .collect(),
            Err(_) => Vec::new(),
        };
        if found.len() != Page::ALL.len() {
            warn!("expected {} snap sections, found {}", Page::ALL.len(), found.len());
        }
        // an empty result usually means the page has not rendered yet
        if !found.is_empty() {
            *cache = Some(found.clone());
        }
        found
    }

    fn toggle_body_class(&self, class: &str, on: bool) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().toggle_with_force(class, on);
        }
    }

    pub fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }
}

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn jump_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn metrics(&self) -> ViewportMetrics {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        ViewportMetrics { width, height }
    }

    fn header_bottom(&self) -> Option<f64> {
        self.document
            .get_element_by_id(HEADER_ID)
            .map(|header| header.get_bounding_client_rect().bottom())
    }

    fn sections(&self) -> Vec<SectionRect> {
        let scroll_y = self.scroll_y();
        self.section_elements()
            .iter()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                SectionRect::new(rect.top() + scroll_y, rect.height())
            })
            .collect()
    }

    fn set_marker(&self, marker: TransitionMarker, on: bool) {
        self.toggle_body_class(marker.class_name(), on);
    }

    fn set_modal_class(&self, on: bool) {
        self.toggle_body_class("modal-open", on);
    }

    fn set_scroll_locked(&self, locked: bool) {
        if let Some(root) = self.document.document_element() {
            let _ = root.class_list().toggle_with_force("scroll-locked", locked);
        }
    }
}

fn is_exempt(target: Option<EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(EXEMPT_SELECTOR).ok().flatten())
        .is_some()
}

fn is_typing(document: &Document) -> bool {
    let Some(active) = document.active_element() else {
        return false;
    };
    match active.tag_name().as_str() {
        "INPUT" | "TEXTAREA" | "SELECT" => true,
        _ => active
            .dyn_ref::<HtmlElement>()
            .map(|el| el.is_content_editable())
            .unwrap_or(false),
    }
}

struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Dropping the handle unregisters every listener and destroys the engine.
pub struct PagerHandle {
    window: Window,
    viewport: DomViewport,
    pager: Rc<RefCell<DomPager>>,
    listeners: Vec<WindowListener>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl PagerHandle {
    pub fn install(on_page_change: impl FnMut(Page) + 'static) -> Option<Self> {
        let viewport = DomViewport::new()?;
        let window = viewport.window.clone();

        let mut pager = Pager::new(viewport.clone());
        pager.attach_engine(SmoothScroll::new(viewport.clone()));
        pager.on_page_change(on_page_change);
        pager.mount();

        let mut handle = Self {
            window,
            viewport,
            pager: Rc::new(RefCell::new(pager)),
            listeners: Vec::new(),
            frame: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
        };
        handle.listen();
        handle.start_frames();
        debug!("pager installed");
        Some(handle)
    }

    pub fn go_to_index(&self, index: usize) {
        let now = self.viewport.now();
        self.pager.borrow_mut().go_to_index(index, None, now);
    }

    pub fn set_modal_open(&self, kind: ModalKind, open: bool) {
        self.pager.borrow_mut().set_modal_open(kind, open);
    }

    fn add(&mut self, event: &'static str, passive: bool, handler: impl FnMut(Event) + 'static) {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(err) = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
        {
            warn!("could not listen for {}: {:?}", event, err);
            return;
        }
        self.listeners.push(WindowListener { event, callback });
    }

    fn listen(&mut self) {
        let viewport = self.viewport.clone();

        let (pager, vp) = (self.pager.clone(), viewport.clone());
        self.add("wheel", false, move |e: Event| {
            if is_exempt(e.target()) {
                return;
            }
            let Some(wheel) = e.dyn_ref::<WheelEvent>() else {
                return;
            };
            wheel.prevent_default();
            pager.borrow_mut().on_wheel(wheel.delta_x(), wheel.delta_y(), vp.now());
        });

        let (pager, vp) = (self.pager.clone(), viewport.clone());
        self.add("keydown", false, move |e: Event| {
            let Some(key_event) = e.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(key) = PagerKey::from_key(&key_event.key()) else {
                return;
            };
            let typing = is_typing(&vp.document);
            if pager.borrow_mut().on_key(key, typing, vp.now()) {
                key_event.prevent_default();
            }
        });

        let pager = self.pager.clone();
        self.add("touchstart", false, move |e: Event| {
            if is_exempt(e.target()) {
                return;
            }
            let Some(touch_event) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            let touches = touch_event.touches();
            if let Some(first) = touches.get(0) {
                pager.borrow_mut().on_touch_start(touches.length(), first.client_y() as f64);
            }
        });

        let (pager, vp) = (self.pager.clone(), viewport.clone());
        self.add("touchmove", false, move |e: Event| {
            if is_exempt(e.target()) {
                return;
            }
            let Some(touch_event) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some(first) = touch_event.touches().get(0) else {
                return;
            };
            if pager.borrow_mut().on_touch_move(first.client_y() as f64, vp.now()) {
                touch_event.prevent_default();
            }
        });

        let pager = self.pager.clone();
        self.add("touchend", true, move |_e: Event| {
            pager.borrow_mut().on_touch_end();
        });

        let (pager, vp) = (self.pager.clone(), viewport.clone());
        self.add("scroll", true, move |_e: Event| {
            pager.borrow_mut().on_scroll(vp.now());
        });

        let pager = self.pager.clone();
        self.add("resize", true, move |_e: Event| {
            pager.borrow_mut().on_resize();
        });
    }

    fn start_frames(&mut self) {
        let pager = self.pager.clone();
        let window = self.window.clone();
        let frame = self.frame.clone();
        let frame_id = self.frame_id.clone();

        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            pager.borrow_mut().on_frame(now);
            if let Some(callback) = frame.borrow().as_ref() {
                frame_id.set(window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(callback) = self.frame.borrow().as_ref() {
            self.frame_id
                .set(self.window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
        }
    }
}

impl Drop for PagerHandle {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = self.window.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the frame closure's reference to itself
        self.frame.borrow_mut().take();
        self.pager.borrow_mut().teardown();
        debug!("pager removed");
    }
}
