use yew::prelude::*;

use crate::components::modal::{render_sections, ModalSection, ModalShell};

const SECTIONS: &[ModalSection] = &[
    ModalSection {
        title: "Our Foundation",
        body: "We believe Bitcoin is not just money. It is the foundation of a new financial era. \
               Founded by Abrar Khan, an Emirates A380 Captain turned Bitcoin entrepreneur, BitcoinWala \
               is built on a singular vision: to make India a global hub for Bitcoin adoption, education, \
               and financial innovation.",
    },
    ModalSection {
        title: "Our Journey",
        body: "Abrar has been in the crypto space actively since 2015, witnessing first-hand the rise, \
               challenges, and unstoppable growth of Bitcoin. Flying across the world as an A380 Captain \
               gave him a global perspective on how nations, institutions, and people view money. But his \
               mission remains rooted in India: to give every individual, from students to institutions, \
               a direct pathway to Bitcoin.",
    },
    ModalSection {
        title: "Our Movement",
        body: "BitcoinWala is more than a company. It is a movement. We are building India's first \
               publicly listed Bitcoin treasury, creating the simplest and safest way for Indians to gain \
               Bitcoin exposure, without wallets, without complexity, and with full transparency.",
    },
    ModalSection {
        title: "Our Strategy",
        body: "Our strategy is simple: Buy. Hold. Never Sell. With institutional-grade governance, proof \
               of reserves, and radical transparency, we aim to hold 1 million by 2035, making BitcoinWala \
               India's largest Bitcoin reserve.",
    },
    ModalSection {
        title: "Our Mission",
        body: "This is not just about investment. It's about financial sovereignty, freedom, and building \
               the future of money. Welcome to BitcoinWala. Welcome to the future.",
    },
];

#[derive(Properties, PartialEq)]
pub struct AboutModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(AboutModal)]
pub fn about_modal(props: &AboutModalProps) -> Html {
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <ModalShell open={props.open} on_close={props.on_close.clone()} labelled_by="about-title" scrollable=true>
            <div class="modal-header">
                <h2 id="about-title" class="modal-title">{"About Us"}</h2>
                <p class="modal-subtitle">{"India's 1st publicly listed Bitcoin Treasury."}</p>
            </div>
            <div class="modal-body">
                { render_sections(SECTIONS) }
            </div>
            <div class="modal-footer">
                <button class="modal-button" onclick={on_close_click}>{"Close"}</button>
            </div>
        </ModalShell>
    }
}
