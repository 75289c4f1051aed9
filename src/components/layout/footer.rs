//! Site footer.

use dioxus::prelude::*;
use phoenix_core::navigation::{FOOTER_EVENT_LINKS, FOOTER_QUICK_LINKS, HOME};
use phoenix_core::NavLink;

use crate::components::layout::GuardedLink;

const PHONE: NavLink = NavLink::new("+91 123 456 7890", "tel:+911234567890");
const EMAIL: NavLink = NavLink::new("hello@phoenixevents.com", "mailto:hello@phoenixevents.com");

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    GuardedLink { link: HOME, class: "logo".to_string(),
                        span { class: "logo-mark", "Phoenix" }
                        span { class: "logo-sub", "Events & Productions" }
                    }
                    p {
                        "Crafting extraordinary moments and transforming visions into "
                        "unforgettable celebrations."
                    }
                }

                div { class: "footer-column",
                    h4 { "Quick Links" }
                    ul {
                        for link in FOOTER_QUICK_LINKS.iter() {
                            li { key: "{link.href}",
                                GuardedLink { link: *link, class: "footer-link".to_string() }
                            }
                        }
                    }
                }

                div { class: "footer-column",
                    h4 { "Our Events" }
                    ul {
                        for link in FOOTER_EVENT_LINKS.iter() {
                            li { key: "{link.label}",
                                GuardedLink { link: *link, class: "footer-link".to_string() }
                            }
                        }
                    }
                }

                div { class: "footer-column",
                    h4 { "Contact" }
                    ul {
                        li { "123 Event Street, Creative District, Mumbai 400001" }
                        li { GuardedLink { link: PHONE, class: "footer-link".to_string() } }
                        li { GuardedLink { link: EMAIL, class: "footer-link".to_string() } }
                    }
                }
            }

            div { class: "footer-bottom",
                p { "\u{00A9} Phoenix Events & Productions. All rights reserved." }
            }
        }
    }
}
