use yew::prelude::*;

use crate::components::modal::{render_sections, ModalSection, ModalShell};
use crate::config;

const SECTIONS: &[ModalSection] = &[
    ModalSection {
        title: "Abstract",
        body: "India’s first publicly listed Bitcoin treasury company. Our mandate is singular. \
               Acquire Bitcoin and hold it as the primary reserve asset on our balance sheet.",
    },
    ModalSection {
        title: "Mission",
        body: "Hold 1,000,000 Bitcoin within five years. Every sat is publicly accounted, \
               verifiable and audited.",
    },
    ModalSection {
        title: "Structure",
        body: "Buy Bitcoin. Hold it on our balance sheet. Never sell. We use no leverage, no lending, \
               no rehypothecation, and no altcoin exposure. Operating liquidity comes from equity or \
               debt at the holding company, not from selling Bitcoin.",
    },
];

#[derive(Properties, PartialEq)]
pub struct WhitepaperModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(WhitepaperModal)]
pub fn whitepaper_modal(props: &WhitepaperModalProps) -> Html {
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <ModalShell open={props.open} on_close={props.on_close.clone()} labelled_by="whitepaper-title" scrollable=true>
            <div class="modal-header">
                <h2 id="whitepaper-title" class="modal-title">{"Whitepaper"}</h2>
                <p class="modal-subtitle">{"India’s first Bitcoin Treasury"}</p>
            </div>
            <div class="modal-body">
                { render_sections(SECTIONS) }
            </div>
            <div class="modal-footer">
                <button class="modal-button" onclick={on_close_click}>{"Close"}</button>
                <a
                    href={config::WHITEPAPER_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="modal-button primary"
                >
                    {"View PDF"}
                </a>
            </div>
        </ModalShell>
    }
}
