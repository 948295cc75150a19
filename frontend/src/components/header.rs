use yew::prelude::*;

use crate::components::price_ticker::PriceTicker;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_open_whitepaper: Callback<()>,
    pub on_open_contact: Callback<()>,
    pub on_open_about: Callback<()>,
    pub on_toggle_menu: Callback<()>,
    pub menu_open: bool,
}

fn nav_button(label: &'static str, aria: &'static str, cb: &Callback<()>) -> Html {
    let cb = cb.clone();
    html! {
        <button
            type="button"
            class="nav-button"
            aria-label={aria}
            onclick={Callback::from(move |_: MouseEvent| cb.emit(()))}
        >
            <span class="nav-button-bg"></span>
            <span class="nav-button-label">{ label }</span>
        </button>
    }
}

/// Fixed top bar. Its `id` is what the pager measures for the header offset.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let toggle_menu = {
        let cb = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header id="site-header" class="site-header">
            <div class="mobile-only header-spacer"></div>

            <nav class="desktop-only header-nav" role="navigation" aria-label="Primary">
                { nav_button("WHITEPAPER", "Open Whitepaper", &props.on_open_whitepaper) }
                { nav_button("CONTACT US", "Contact Us", &props.on_open_contact) }
            </nav>

            <div class="header-logo">
                <a href="#hero" aria-label="BitcoinWala Home">
                    <img src="/bitcoinwala-logo.png" alt="BitcoinWala Logo" />
                </a>
            </div>

            <div class="header-right">
                <div class="mobile-only">
                    <PriceTicker compact=true />
                </div>
                <div class="desktop-only">
                    <PriceTicker />
                </div>
                <div class="mobile-only">
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-label="Open Menu"
                        aria-expanded={props.menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        { if props.menu_open { "✕" } else { "+" } }
                    </button>
                </div>
                <nav class="desktop-only" role="navigation" aria-label="Secondary">
                    { nav_button("ABOUT US", "About Us", &props.on_open_about) }
                </nav>
            </div>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1200;
                        height: 90px;
                        width: 100%;
                        box-sizing: border-box;
                        display: flex;
                        align-items: center;
                        padding: 16px 64px 0;
                    }
                    .header-nav {
                        display: flex;
                        align-items: center;
                        gap: 24px;
                    }
                    .nav-button {
                        position: relative;
                        display: inline-flex;
                        align-items: center;
                        text-transform: uppercase;
                        letter-spacing: 0.25em;
                        font-size: 13px;
                        color: rgba(160, 160, 160, 0.8);
                        background: transparent;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .nav-button:hover {
                        color: white;
                        transform: translateY(-2px);
                    }
                    .nav-button-bg {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        border-radius: 6px;
                        background: rgba(255, 255, 255, 0.1);
                        opacity: 0;
                        transform: scale(0.95);
                        transition: all 0.2s ease;
                    }
                    .nav-button:hover .nav-button-bg {
                        opacity: 1;
                        transform: scale(1.05);
                        background: rgba(255, 255, 255, 0.15);
                    }
                    .nav-button-label {
                        padding: 12px 24px;
                    }
                    .header-logo {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                    }
                    .header-logo img {
                        height: 56px;
                        object-fit: contain;
                        transition: transform 0.3s ease-in-out;
                    }
                    .header-logo img:hover {
                        transform: scale(1.1);
                    }
                    .header-right {
                        margin-left: auto;
                        display: flex;
                        align-items: center;
                        gap: 16px;
                    }
                    .header-spacer {
                        width: 40px;
                    }
                    .menu-toggle {
                        width: 40px;
                        height: 40px;
                        border-radius: 8px;
                        font-size: 28px;
                        line-height: 1;
                        color: rgba(160, 160, 160, 0.8);
                        background: transparent;
                        border: none;
                        cursor: pointer;
                    }
                    .menu-toggle:hover {
                        color: white;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .mobile-only {
                        display: none;
                    }
                    .ticker-group {
                        position: relative;
                    }
                    .ticker {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 6px 12px;
                        border-radius: 9999px;
                        border: 1px solid #1a1a1a;
                        background: rgba(18, 18, 18, 0.6);
                        font-size: 13px;
                        font-variant-numeric: tabular-nums;
                        color: #f2f2f2;
                        cursor: default;
                    }
                    .ticker.compact {
                        padding: 4px 8px;
                        font-size: 11px;
                    }
                    .ticker-symbol {
                        color: #f97316;
                        font-weight: 600;
                    }
                    .trend-up { color: #22c55e; }
                    .trend-down { color: #ef4444; }
                    .trend-flat { color: #a0a0a0; }
                    .ticker-trend {
                        margin-right: 2px;
                        font-size: 10px;
                    }
                    .ticker-tooltip {
                        display: none;
                        position: absolute;
                        right: 0;
                        top: calc(100% + 8px);
                        min-width: 200px;
                        padding: 12px;
                        border-radius: 12px;
                        border: 1px solid #1a1a1a;
                        background: rgba(11, 11, 11, 0.95);
                        font-size: 12px;
                        color: #a0a0a0;
                        line-height: 1.6;
                    }
                    .ticker-group:hover .ticker-tooltip {
                        display: block;
                    }
                    .ticker-tooltip-title {
                        display: flex;
                        justify-content: space-between;
                        color: #f2f2f2;
                        font-weight: 600;
                        margin-bottom: 4px;
                    }
                    .ticker-live { color: #22c55e; font-size: 10px; }
                    .ticker-demo { color: #eab308; font-size: 10px; }
                    .ticker-updated { margin-top: 4px; font-size: 11px; }
                    @media (max-width: 1024px) {
                        .site-header { padding: 16px 16px 0; }
                        .nav-button-label { padding: 12px 16px; }
                    }
                    @media (max-width: 768px) {
                        .site-header { height: 80px; padding: 12px 12px 0; }
                        .nav-button { font-size: 11px; letter-spacing: 0.2em; }
                        .header-logo img { height: 40px; }
                    }
                    @media (max-width: 640px) {
                        .site-header { height: 70px; padding: 8px 8px 0; }
                        .header-logo img { height: 32px; }
                        .mobile-only { display: block; }
                        .desktop-only { display: none; }
                    }
                "#}
            </style>
        </header>
    }
}
