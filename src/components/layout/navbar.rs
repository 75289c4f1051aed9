//! Site header: logo, primary links, theme toggle, mobile menu.
//!
//! Turns opaque once the page has scrolled past the navbar threshold.

use dioxus::prelude::*;
use phoenix_core::navigation::{HOME, PRIMARY_NAV};

use crate::app::{use_page_scroll, Route};
use crate::components::layout::{GuardedLink, ThemeToggle};
use crate::components::open_external;
use crate::context::use_greeting_link;

#[component]
pub fn Navbar() -> Element {
    let greeting = use_greeting_link();
    let scroll = use_page_scroll();
    let route = use_route::<Route>();
    let mut menu_open = use_signal(|| false);

    // Close the mobile menu whenever the route changes.
    use_effect(use_reactive((&route,), move |_| {
        if *menu_open.peek() {
            menu_open.set(false);
        }
    }));

    let plan_event = move |_| {
        if let Some(url) = &greeting {
            open_external(url);
        }
    };
    let plan_event_mobile = plan_event.clone();

    let nav_class = if scroll().scrolled { "navbar scrolled" } else { "navbar" };
    let menu_class = if menu_open() { "mobile-menu open" } else { "mobile-menu" };

    rsx! {
        nav { class: "{nav_class}",
            div { class: "navbar-inner",
                GuardedLink { link: HOME, class: "logo".to_string(),
                    span { class: "logo-mark", "Phoenix" }
                    span { class: "logo-sub", "Events" }
                }

                div { class: "nav-links",
                    for link in PRIMARY_NAV.iter() {
                        GuardedLink { key: "{link.href}", link: *link }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}
                    button { class: "btn-premium nav-cta", onclick: plan_event, "Plan Your Event" }
                    button {
                        class: "menu-toggle",
                        "aria-label": "Toggle menu",
                        "aria-expanded": if menu_open() { "true" } else { "false" },
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }

            div { class: "{menu_class}",
                for link in PRIMARY_NAV.iter() {
                    GuardedLink {
                        key: "m-{link.href}",
                        link: *link,
                        class: "mobile-link".to_string(),
                        on_activate: move |_| menu_open.set(false),
                    }
                }
                button { class: "btn-premium mobile-cta", onclick: plan_event_mobile, "Plan Your Event" }
            }
        }
    }
}
