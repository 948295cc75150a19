use chrono::{Datelike, Local};
use yew::prelude::*;

struct SocialLink {
    href: &'static str,
    label: &'static str,
    glyph: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://x.com/Bitcoinwalax",
        label: "X (Twitter)",
        glyph: "𝕏",
    },
    SocialLink {
        href: "https://www.instagram.com/bitcoinwalax/",
        label: "Instagram",
        glyph: "IG",
    },
    SocialLink {
        href: "https://www.linkedin.com/company/bitcoinwalaofficial/",
        label: "LinkedIn",
        glyph: "in",
    },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p class="footer-copy">{ format!("© {} BitcoinWala. All rights reserved.", year) }</p>
                <nav aria-label="Social links" class="footer-socials">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={link.label}
                            title={link.label}
                            class="social-icon"
                        >
                            { link.glyph }
                        </a>
                    }) }
                </nav>
            </div>
            <style>
                {r#"
                    .site-footer {
                        width: 100%;
                        border-top: 1px solid #1a1a1a;
                        padding: 2rem 0;
                        margin-top: 4rem;
                    }
                    .footer-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 4rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.25rem;
                    }
                    .footer-copy {
                        font-size: 13px;
                        color: #a0a0a0;
                        text-align: center;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        border-radius: 9999px;
                        border: 1px solid #1a1a1a;
                        color: #a0a0a0;
                        font-size: 13px;
                        text-decoration: none;
                        transition: all 0.2s;
                    }
                    .social-icon:hover {
                        color: white;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    @media (max-width: 640px) {
                        .footer-inner { padding: 0 1.5rem; }
                        .social-icon { width: 48px; height: 48px; }
                    }
                "#}
            </style>
        </footer>
    }
}
