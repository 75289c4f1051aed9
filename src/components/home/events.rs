//! "Our Events" carousel.

use dioxus::prelude::*;
use phoenix_core::contact::quick_inquiry_link;
use phoenix_core::navigation::{EVENT_CARD, VIEW_ALL_EVENTS};
use phoenix_ui::{HorizontalCarousel, Reveal};

use crate::components::layout::GuardedLink;
use crate::components::open_external;
use crate::content::{EventCard, EVENTS};
use crate::context::use_site_config;

#[component]
fn EventTile(event: &'static EventCard) -> Element {
    let site = use_site_config();
    let phone = site.whatsapp_phone;

    let plan = move |evt: MouseEvent| {
        evt.stop_propagation();
        match quick_inquiry_link(&phone, event.title) {
            Ok(url) => open_external(&url),
            Err(e) => tracing::warn!("Inquiry link unavailable for {}: {}", event.title, e),
        }
    };

    rsx! {
        div { class: "event-card",
            GuardedLink { link: EVENT_CARD, class: "event-card-link".to_string(),
                img { src: "{event.image}", alt: "{event.title}", loading: "lazy" }
                div { class: "event-card-body",
                    h3 { "{event.title}" }
                    p { "{event.description}" }
                }
            }
            button {
                class: "event-card-plan",
                "aria-label": "Plan a {event.title} event on WhatsApp",
                onclick: plan,
                "Plan this"
            }
        }
    }
}

#[component]
pub fn EventsSection() -> Element {
    let site = use_site_config();

    rsx! {
        section { class: "section events-section",
            Reveal {
                div { class: "section-header",
                    p { class: "eyebrow", "What We Do" }
                    h2 { "Our Events" }
                    p { "From intimate gatherings to grand celebrations, we bring every occasion to life." }
                }
            }

            HorizontalCarousel {
                config: site.carousel(EVENTS.len()),
                label: "Our events".to_string(),
                for event in EVENTS.iter() {
                    EventTile { key: "{event.title}", event }
                }
            }

            div { class: "section-footer",
                GuardedLink { link: VIEW_ALL_EVENTS, class: "btn-outline".to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phoenix_core::contact::DEFAULT_WHATSAPP_PHONE;

    #[test]
    fn every_event_has_an_inquiry_link() {
        for event in EVENTS {
            let link = quick_inquiry_link(DEFAULT_WHATSAPP_PHONE, event.title).unwrap();
            let title = event.title.replace(' ', "%20");
            assert!(link.contains(&title), "{} missing from {}", event.title, link);
            assert!(link.contains("planning%20a"));
        }
    }
}
