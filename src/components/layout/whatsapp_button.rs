//! Floating WhatsApp button and the mobile bottom action bar.

use dioxus::prelude::*;

use crate::app::use_page_scroll;
use crate::components::open_external;
use crate::context::{use_greeting_link, use_site_config};

#[component]
pub fn WhatsAppButton() -> Element {
    let greeting = use_greeting_link();

    rsx! {
        button {
            class: "whatsapp-float",
            "aria-label": "Chat on WhatsApp",
            onclick: move |_| {
                if let Some(url) = &greeting {
                    open_external(url);
                }
            },
            "\u{1F4AC}"
        }
    }
}

/// Shown on small screens while scrolling up, hidden at the top of the page
/// and while scrolling down.
#[component]
pub fn MobileActionBar() -> Element {
    let scroll = use_page_scroll();
    let greeting = use_greeting_link();
    let site = use_site_config();
    let direct = phoenix_core::whatsapp_link(&site.whatsapp_phone, "").ok();

    let class = if scroll().show_action_bar() {
        "mobile-action-bar visible"
    } else {
        "mobile-action-bar"
    };

    rsx! {
        div { class: "{class}",
            button {
                class: "btn-premium action-plan",
                onclick: move |_| {
                    if let Some(url) = &greeting {
                        open_external(url);
                    }
                },
                "\u{1F4C5} Plan Your Event"
            }
            button {
                class: "btn-whatsapp action-chat",
                "aria-label": "WhatsApp",
                onclick: move |_| {
                    if let Some(url) = &direct {
                        open_external(url);
                    }
                },
                "\u{1F4AC}"
            }
        }
    }
}
