use log::debug;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::about_modal::AboutModal;
use crate::components::contact_modal::ContactModal;
use crate::components::countdown::Countdown;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::mobile_menu::MobileMenu;
use crate::components::whitepaper_modal::WhitepaperModal;
use crate::pager::{use_pager, ModalKind, Page, UsePager};

const TABBING_CLASS: &str = "user-is-tabbing";

fn set_body_class(class: &str, on: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

/// Shows focus rings only once the keyboard is being used.
#[hook]
fn use_tabbing_focus() {
    use_event_with_window("keydown", |e: KeyboardEvent| {
        if e.key() == "Tab" {
            set_body_class(TABBING_CLASS, true);
        }
    });
    use_event_with_window("mousedown", |_: MouseEvent| {
        set_body_class(TABBING_CLASS, false);
    });
}

/// Open flag for one overlay, mirrored into the pager so scrolling pauses
/// while it is up.
#[hook]
fn use_modal_flag(kind: ModalKind, pager: UsePager) -> UseStateHandle<bool> {
    let open = use_state(|| false);
    {
        use_effect_with_deps(
            move |open| {
                debug!("{:?} open: {}", kind, open);
                pager.set_modal_open(kind, *open);
                || ()
            },
            *open,
        );
    }
    open
}

fn setter(flag: &UseStateHandle<bool>, value: bool) -> Callback<()> {
    let flag = flag.clone();
    Callback::from(move |_| flag.set(value))
}

#[function_component(Home)]
pub fn home() -> Html {
    let pager = use_pager();
    use_tabbing_focus();

    let whitepaper_open = use_modal_flag(ModalKind::Whitepaper, pager.clone());
    let about_open = use_modal_flag(ModalKind::About, pager.clone());
    let contact_open = use_modal_flag(ModalKind::Contact, pager.clone());
    let menu_open = use_modal_flag(ModalKind::MobileMenu, pager.clone());

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let indicator = |page: Page| {
        let pager = pager.clone();
        let index = page.index();
        html! {
            <button
                key={index}
                class={classes!("page-indicator", (pager.page() == page).then(|| "active"))}
                aria-label={format!("Go to page {}", index + 1)}
                onclick={Callback::from(move |_: MouseEvent| pager.go_to_index(index))}
            />
        }
    };

    html! {
        <div class="landing">
            <div class="split-overlay">
                <div class="split-top"></div>
                <div class="split-bottom"></div>
            </div>

            <div class="page-indicators">
                { for Page::ALL.iter().map(|page| indicator(*page)) }
            </div>

            <Header
                on_open_whitepaper={setter(&whitepaper_open, true)}
                on_open_contact={setter(&contact_open, true)}
                on_open_about={setter(&about_open, true)}
                on_toggle_menu={toggle_menu}
                menu_open={*menu_open}
            />

            <main class="landing-main">
                <Hero />
                <section id="countdown-footer" data-snap="true" class="countdown-page">
                    <div class="countdown-page-body">
                        <Countdown />
                    </div>
                    <Footer />
                </section>
            </main>

            <MobileMenu
                open={*menu_open}
                on_close={setter(&menu_open, false)}
                on_open_whitepaper={setter(&whitepaper_open, true)}
                on_open_contact={setter(&contact_open, true)}
                on_open_about={setter(&about_open, true)}
            />
            <WhitepaperModal open={*whitepaper_open} on_close={setter(&whitepaper_open, false)} />
            <ContactModal open={*contact_open} on_close={setter(&contact_open, false)} />
            <AboutModal open={*about_open} on_close={setter(&about_open, false)} />

            <style>
                {r#"
                    html, body {
                        margin: 0;
                        background: #0b0b0b;
                        color: #f2f2f2;
                        font-family: 'Inter', sans-serif;
                    }
                    html.scroll-locked,
                    html.scroll-locked body {
                        overflow: hidden;
                    }
                    body.modal-open {
                        overflow: hidden;
                        touch-action: none;
                    }
                    body:not(.user-is-tabbing) *:focus {
                        outline: none;
                    }
                    .landing {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                    }
                    .fade-in-up {
                        animation: fade-in-up 0.8s ease-out both;
                    }
                    @keyframes fade-in-up {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .split-overlay {
                        pointer-events: none;
                        position: fixed;
                        inset: 0;
                        z-index: 998;
                    }
                    .split-top,
                    .split-bottom {
                        position: absolute;
                        left: 0;
                        right: 0;
                        height: 50vh;
                        background: #0b0b0b;
                        transition: transform 0.36s cubic-bezier(0.65, 0, 0.35, 1);
                    }
                    .split-top {
                        top: 0;
                        transform: translateY(-100%);
                        background: linear-gradient(to bottom, #0b0b0b 70%, #121212);
                    }
                    .split-bottom {
                        bottom: 0;
                        transform: translateY(100%);
                        background: linear-gradient(to top, #0b0b0b 70%, #121212);
                    }
                    body.split-in .split-top,
                    body.split-in .split-bottom {
                        transform: translateY(0);
                    }
                    body.split-out .split-top {
                        transform: translateY(-100%);
                    }
                    body.split-out .split-bottom {
                        transform: translateY(100%);
                    }
                    .page-indicators {
                        position: fixed;
                        right: 24px;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 997;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        pointer-events: none;
                    }
                    .page-indicator {
                        pointer-events: auto;
                        width: 8px;
                        height: 32px;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .page-indicator:hover {
                        background: rgba(255, 255, 255, 0.4);
                    }
                    .page-indicator.active {
                        background: white;
                        box-shadow: 0 10px 15px rgba(255, 255, 255, 0.2);
                    }
                    .landing-main {
                        position: relative;
                    }
                    .countdown-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        padding: 0 4rem;
                        box-sizing: border-box;
                    }
                    .countdown-page-body {
                        flex: 1;
                        width: 100%;
                        max-width: 64rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    @media (max-width: 768px) {
                        .countdown-page { padding: 0 1rem; }
                    }
                    @media (max-width: 640px) {
                        .page-indicators { display: none; }
                    }
                "#}
            </style>
        </div>
    }
}
