//! Placeholder pages for sections that are not live yet.
//!
//! In-site links to these paths open the coming-soon dialog instead; these
//! pages only render when the path is entered directly.

use dioxus::prelude::*;
use phoenix_core::navigation::{CONTACT_US, HOME};

use crate::components::layout::GuardedLink;

#[component]
fn ComingSoonPage(section: &'static str) -> Element {
    rsx! {
        section { class: "coming-soon-page",
            div { class: "coming-soon-icon", "\u{23F3}" }
            p { class: "eyebrow", "{section}" }
            h1 { "Coming Soon" }
            p {
                "We're working hard to bring you something amazing. "
                "This page will be available soon."
            }
            div { class: "coming-soon-actions",
                GuardedLink { link: HOME, class: "btn-outline".to_string() }
                GuardedLink { link: CONTACT_US, class: "btn-premium".to_string() }
            }
        }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! { ComingSoonPage { section: "Events" } }
}

#[component]
pub fn Gallery() -> Element {
    rsx! { ComingSoonPage { section: "Gallery" } }
}

#[component]
pub fn Services() -> Element {
    rsx! { ComingSoonPage { section: "Services" } }
}

#[component]
pub fn Collaborations() -> Element {
    rsx! { ComingSoonPage { section: "Collaborations" } }
}
