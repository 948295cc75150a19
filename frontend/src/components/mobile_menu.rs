use yew::prelude::*;

use crate::components::modal::use_escape_to_close;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_open_whitepaper: Callback<()>,
    pub on_open_contact: Callback<()>,
    pub on_open_about: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    use_escape_to_close(props.open, props.on_close.clone());

    if !props.open {
        return html! {};
    }

    // Opening a dialog from the menu always closes the menu.
    let action = |open_modal: &Callback<()>| {
        let open_modal = open_modal.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            open_modal.emit(());
            on_close.emit(());
        })
    };
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="mobile-menu-overlay" data-no-snap="true">
            <div class="mobile-menu-backdrop" onclick={on_backdrop}></div>
            <div class="mobile-menu-content">
                <nav class="mobile-menu-nav">
                    <button type="button" class="mobile-menu-button" onclick={action(&props.on_open_whitepaper)}>
                        {"WHITEPAPER"}
                    </button>
                    <button type="button" class="mobile-menu-button" onclick={action(&props.on_open_contact)}>
                        {"CONTACT US"}
                    </button>
                    <button type="button" class="mobile-menu-button" onclick={action(&props.on_open_about)}>
                        {"ABOUT US"}
                    </button>
                </nav>
            </div>
            <style>
                {r#"
                    .mobile-menu-overlay {
                        position: fixed;
                        inset: 0;
                        width: 100vw;
                        height: 100vh;
                        z-index: 99999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background-color: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    .mobile-menu-backdrop {
                        position: absolute;
                        inset: 0;
                        cursor: pointer;
                    }
                    .mobile-menu-content {
                        position: relative;
                        background-color: rgba(11, 11, 11, 0.95);
                        border: 1px solid #1a1a1a;
                        border-radius: 16px;
                        margin: 0 24px;
                        width: 100%;
                        max-width: 384px;
                        backdrop-filter: blur(12px);
                    }
                    .mobile-menu-nav {
                        display: flex;
                        flex-direction: column;
                        padding: 32px;
                        gap: 24px;
                    }
                    .mobile-menu-button {
                        padding: 20px 32px;
                        border-radius: 12px;
                        color: rgba(255, 255, 255, 0.7);
                        transition: all 0.2s ease;
                        font-size: 18px;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-weight: 500;
                        background: transparent;
                        border: none;
                        cursor: pointer;
                    }
                    .mobile-menu-button:hover {
                        color: white;
                        background-color: rgba(255, 255, 255, 0.1);
                    }
                    @media (min-width: 640px) {
                        .mobile-menu-overlay {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
