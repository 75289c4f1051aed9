use dioxus::prelude::*;
use phoenix_core::navigation::CONTACT_US;
use phoenix_ui::{Reveal, RevealAnimation};

use crate::components::layout::GuardedLink;
use crate::components::open_external;
use crate::context::use_greeting_link;

const TRUST_BADGES: &[&str] = &[
    "500+ Events Delivered",
    "15+ Years Experience",
    "10,000+ Happy Clients",
];

#[component]
pub fn CtaSection() -> Element {
    let greeting = use_greeting_link();

    rsx! {
        section { class: "section cta-section",
            Reveal { animation: RevealAnimation::FadeIn,
                div { class: "cta-content",
                    div { class: "cta-icon", "\u{2728}" }
                    h2 {
                        "Ready to Create Your "
                        span { class: "text-gradient-gold", "Dream Event?" }
                    }
                    p {
                        "Let's transform your vision into an unforgettable celebration. "
                        "Our team is ready to craft the perfect experience for your special moment."
                    }
                    div { class: "cta-actions",
                        button {
                            class: "btn-premium btn-lg",
                            onclick: move |_| {
                                if let Some(url) = &greeting {
                                    open_external(url);
                                }
                            },
                            "Let's Create Magic Together"
                        }
                        GuardedLink { link: CONTACT_US, class: "btn-outline btn-lg".to_string(),
                            "Book a Consultation"
                        }
                    }
                    div { class: "trust-badges",
                        for badge in TRUST_BADGES.iter() {
                            span { key: "{badge}", class: "trust-badge", "{badge}" }
                        }
                    }
                }
            }
        }
    }
}
