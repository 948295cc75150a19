use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

/// Calls `on_close` when Escape is pressed while `open`.
#[hook]
pub fn use_escape_to_close(open: bool, on_close: Callback<()>) {
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if open && e.key() == "Escape" {
            on_close.emit(());
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Id of the heading that labels the dialog.
    pub labelled_by: AttrValue,
    #[prop_or_default]
    pub scrollable: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop plus card shared by the whitepaper, about and contact dialogs.
///
/// The whole overlay is marked `data-no-snap` so the pager leaves wheel and
/// touch gestures inside it alone.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    use_escape_to_close(props.open, props.on_close.clone());

    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            aria-labelledby={props.labelled_by.clone()}
            data-no-snap="true"
            onmousedown={on_backdrop}
        >
            <div class={classes!("modal-card", props.scrollable.then(|| "scrollable"))} data-no-snap="true">
                <div class="modal-brand">
                    <span>{"BitcoinWala"}</span>
                </div>
                <button aria-label="Close" class="modal-close" onclick={on_close_click}>
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        width: 100vw;
                        height: 100vh;
                        z-index: 99998;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 16px;
                        background-color: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                        overflow-y: auto;
                        overscroll-behavior: contain;
                    }
                    .modal-card {
                        position: relative;
                        z-index: 99999;
                        width: 92vw;
                        max-width: 520px;
                        border-radius: 24px;
                        border: 1px solid #1a1a1a;
                        padding: 28px 32px;
                        box-shadow: 0 20px 80px rgba(0, 0, 0, 0.55);
                        background: linear-gradient(180deg, #2a2a2a 0%, #121212 100%);
                        color: #f2f2f2;
                    }
                    .modal-card.scrollable {
                        max-height: 78vh;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        user-select: none;
                    }
                    .modal-brand {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                    }
                    .modal-brand span {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 11px;
                        letter-spacing: 0.05em;
                        background: rgba(0, 0, 0, 0.8);
                        border: 1px solid #1a1a1a;
                    }
                    .modal-close {
                        position: absolute;
                        right: 14px;
                        top: 14px;
                        z-index: 100000;
                        display: inline-flex;
                        height: 36px;
                        width: 36px;
                        align-items: center;
                        justify-content: center;
                        border-radius: 8px;
                        border: 1px solid #1a1a1a;
                        background: transparent;
                        color: #a0a0a0;
                        cursor: pointer;
                        transition: background-color 0.2s ease;
                        touch-action: manipulation;
                    }
                    .modal-close:hover {
                        background-color: rgba(255, 255, 255, 0.05);
                    }
                    .modal-header {
                        padding: 24px 28px 16px;
                        text-align: center;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .modal-title {
                        font-size: 23px;
                        font-weight: 600;
                        letter-spacing: 0.22em;
                        text-transform: uppercase;
                        color: #f97316;
                    }
                    .modal-subtitle {
                        margin-top: 6px;
                        font-size: 14px;
                        color: #a0a0a0;
                    }
                    .modal-body {
                        padding: 20px 28px 24px;
                        flex: 1;
                        overflow-y: auto;
                        scrollbar-width: none;
                    }
                    .modal-body::-webkit-scrollbar {
                        display: none;
                    }
                    .modal-body section + section {
                        margin-top: 24px;
                    }
                    .modal-section-number {
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        color: #f97316;
                    }
                    .modal-body h3 {
                        margin-top: 4px;
                        font-weight: 600;
                        font-size: 15px;
                        color: #f97316;
                    }
                    .modal-body p {
                        margin-top: 8px;
                        line-height: 1.75rem;
                        letter-spacing: 0.05em;
                        color: rgba(242, 242, 242, 0.9);
                    }
                    .modal-footer {
                        padding: 0 28px 20px;
                        display: flex;
                        justify-content: flex-end;
                        gap: 12px;
                    }
                    .modal-button {
                        padding: 8px 16px;
                        border-radius: 12px;
                        border: 1px solid #1a1a1a;
                        color: #a0a0a0;
                        background: transparent;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .modal-button.primary {
                        padding: 12px 20px;
                        border: none;
                        background: #f97316;
                        color: #f2f2f2;
                    }
                    .modal-button.primary:hover {
                        background: #ff8a2a;
                    }
                    @media (max-width: 640px) {
                        .modal-card {
                            padding: 24px;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct ModalSection {
    pub title: &'static str,
    pub body: &'static str,
}

/// Numbered `00`, `01`, ... sections used by the long-form dialogs.
pub fn render_sections(sections: &[ModalSection]) -> Html {
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            html! {
                <section key={section.title}>
                    <div class="modal-section-number">{ format!("{:02}", i) }</div>
                    <h3>{ section.title }</h3>
                    <p>{ section.body }</p>
                </section>
            }
        })
        .collect()
}
