use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

const FIRST_FLIP_MS: u32 = 3000;
const FLIP_EVERY_MS: u32 = 2000;

#[function_component(Hero)]
pub fn hero() -> Html {
    let show_year = use_state(|| false);

    {
        let show_year = show_year.clone();
        use_effect_with_deps(
            move |_| {
                // Starts flipping after the first delay, then alternates.
                let interval = Rc::new(RefCell::new(None::<Interval>));
                let timeout = {
                    let interval = interval.clone();
                    Timeout::new(FIRST_FLIP_MS, move || {
                        show_year.set(true);
                        let state = Rc::new(RefCell::new(true));
                        let show_year = show_year.clone();
                        *interval.borrow_mut() = Some(Interval::new(FLIP_EVERY_MS, move || {
                            let next = !*state.borrow();
                            *state.borrow_mut() = next;
                            show_year.set(next);
                        }));
                    })
                };
                move || {
                    drop(timeout);
                    interval.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <section id="hero" data-snap="true" class="hero">
            <div class="hero-inner">
                <h1 class="hero-title fade-in-up">{"MISSION"}</h1>
                <div class="hero-subtitle fade-in-up">
                    <span>{"1 MILLION"}</span>
                    <span class="orange">{"BITCOIN"}</span>
                    <div class={classes!("flip-container", (*show_year).then(|| "flipped"))}>
                        <div class="flip-inner">
                            <div class="flip-front"><span>{"5 YEARS"}</span></div>
                            <div class="flip-back"><span>{"BY 2030"}</span></div>
                        </div>
                    </div>
                    <span class="muted">{"•"}</span>
                    <span>{"ALL IN"}</span>
                </div>
            </div>
            <div class="hero-bottom">
                <span class="fade-in-up">{"‹ Stock listing soon ›"}</span>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 80px 64px 0;
                        box-sizing: border-box;
                    }
                    .hero-inner {
                        width: 100%;
                        max-width: 72rem;
                        margin: -4rem auto 0;
                    }
                    .hero-title {
                        font-size: 8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        line-height: 1.25;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(to bottom, #ffffff, #e5e5e5, #a3a3a3);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        filter: drop-shadow(0 0 18px rgba(255, 255, 255, 0.35));
                    }
                    .hero-subtitle {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        color: #a0a0a0;
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                        overflow: hidden;
                        animation-delay: 0.1s;
                    }
                    .hero-subtitle > * {
                        flex-shrink: 0;
                    }
                    .hero-subtitle .orange {
                        color: #f97316;
                    }
                    .flip-container {
                        perspective: 1000px;
                        display: inline-block;
                        width: 8ch;
                        text-align: center;
                        position: relative;
                    }
                    .flip-inner {
                        position: relative;
                        width: 100%;
                        height: 1.2em;
                        transition: transform 0.8s ease-in-out;
                        transform-style: preserve-3d;
                    }
                    .flip-container.flipped .flip-inner {
                        transform: rotateX(180deg);
                    }
                    .flip-front, .flip-back {
                        position: absolute;
                        inset: 0;
                        backface-visibility: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        white-space: nowrap;
                    }
                    .flip-back {
                        transform: rotateX(180deg);
                    }
                    .hero-bottom {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        justify-content: center;
                        padding: 1rem;
                        border-top: 1px solid #1a1a1a;
                        background: rgba(11, 11, 11, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    .hero-bottom span {
                        color: #d4d4d4;
                        font-size: 1rem;
                        font-weight: 300;
                        letter-spacing: 0.25em;
                        text-transform: uppercase;
                        transition: color 0.3s;
                        animation-delay: 0.3s;
                    }
                    .hero-bottom span:hover {
                        color: white;
                    }
                    @media (max-width: 1024px) {
                        .hero-title { font-size: 6rem; }
                        .hero-subtitle { font-size: 1.25rem; }
                    }
                    @media (max-width: 768px) {
                        .hero { padding: 70px 32px 0; }
                        .hero-title { font-size: 4.5rem; }
                        .hero-subtitle { font-size: 1.125rem; gap: 0.75rem; }
                    }
                    @media (max-width: 640px) {
                        .hero { padding: 60px 24px 0; }
                        .hero-inner { margin-top: -5rem; }
                        .hero-title { font-size: 3rem; }
                        .hero-subtitle { font-size: 0.75rem; gap: 0.25rem; }
                        .flip-container { width: 5ch; }
                        .hero-bottom span { font-size: 0.875rem; letter-spacing: 0.15em; }
                    }
                "#}
            </style>
        </section>
    }
}
