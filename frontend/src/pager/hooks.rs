use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::controller::ModalKind;
use super::dom::PagerHandle;
use super::layout::Page;

#[derive(Clone)]
pub struct UsePager {
    page: UseStateHandle<Page>,
    handle: Rc<RefCell<Option<PagerHandle>>>,
}

impl UsePager {
    pub fn page(&self) -> Page {
        *self.page
    }

    pub fn go_to_index(&self, index: usize) {
        if let Some(handle) = self.handle.borrow().as_ref() {
            handle.go_to_index(index);
        }
    }

    pub fn set_modal_open(&self, kind: ModalKind, open: bool) {
        if let Some(handle) = self.handle.borrow().as_ref() {
            handle.set_modal_open(kind, open);
        }
    }
}

/// Installs the two-page pager for the lifetime of the calling component.
#[hook]
pub fn use_pager() -> UsePager {
    let page = use_state(|| Page::First);
    let handle: Rc<RefCell<Option<PagerHandle>>> = use_mut_ref(|| None);

    {
        let setter = page.setter();
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                *handle.borrow_mut() = PagerHandle::install(move |shown| {
                    // the pager is still borrowed while it reports
                    let setter = setter.clone();
                    spawn_local(async move { setter.set(shown) });
                });
                move || {
                    handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    UsePager { page, handle }
}
