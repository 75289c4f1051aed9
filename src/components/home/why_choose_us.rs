use dioxus::prelude::*;
use phoenix_ui::{Reveal, RevealAnimation};

use crate::content::REASONS;

#[component]
pub fn WhyChooseUsSection() -> Element {
    rsx! {
        section { class: "section why-section",
            Reveal {
                div { class: "section-header",
                    p { class: "eyebrow", "Why Phoenix" }
                    h2 { "Why Choose Us" }
                }
            }
            div { class: "reasons-grid",
                for (i, reason) in REASONS.iter().enumerate() {
                    Reveal {
                        key: "{reason.title}",
                        animation: if i % 2 == 0 { RevealAnimation::SlideLeft } else { RevealAnimation::SlideRight },
                        delay_ms: (i as u32) * 120,
                        div { class: "reason-card",
                            div { class: "reason-icon", "{reason.icon}" }
                            h3 { "{reason.title}" }
                            p { "{reason.description}" }
                        }
                    }
                }
            }
        }
    }
}
