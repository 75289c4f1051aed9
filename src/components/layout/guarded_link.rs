//! Navigation link that respects the route block list.
//!
//! Every in-site link goes through here so a blocked destination opens the
//! coming-soon dialog instead of changing route.

use dioxus::prelude::*;
use phoenix_core::{NavAction, NavLink};

use crate::app::Route;
use crate::components::open_external;
use crate::context::{use_coming_soon, use_site_config};

fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GuardedLinkProps {
    pub link: NavLink,
    #[props(default = "nav-link".to_string())]
    pub class: String,
    /// Replaces the label when present
    #[props(default)]
    pub children: Option<Element>,
    /// Called after any activation, e.g. to close the mobile menu
    #[props(default)]
    pub on_activate: Option<EventHandler<()>>,
}

#[component]
pub fn GuardedLink(props: GuardedLinkProps) -> Element {
    let site = use_site_config();
    let mut dialog = use_coming_soon();
    let route = use_route::<Route>();

    let link = props.link;
    let active = route.to_string() == link.href;
    let class = link_class(&props.class, active);
    let on_activate = props.on_activate;
    let body = match props.children {
        Some(children) => children,
        None => rsx! { "{link.label}" },
    };

    match link.action(&site.blocked_routes) {
        NavAction::Route(href) => rsx! {
            Link {
                class: "{class}",
                to: href,
                onclick: move |_| {
                    if let Some(handler) = on_activate {
                        handler.call(());
                    }
                },
                {body}
            }
        },
        NavAction::ComingSoon => rsx! {
            a {
                class: "{class}",
                href: "#",
                role: "button",
                onclick: move |e| {
                    e.prevent_default();
                    tracing::debug!(path = link.href, "route intercepted");
                    dialog.write().open(link.href.to_string());
                    if let Some(handler) = on_activate {
                        handler.call(());
                    }
                },
                {body}
            }
        },
        NavAction::External(url) => rsx! {
            a {
                class: "{class}",
                href: "#",
                onclick: move |e| {
                    e.prevent_default();
                    open_external(url);
                    if let Some(handler) = on_activate {
                        handler.call(());
                    }
                },
                {body}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_class() {
        assert_eq!(link_class("nav-link", true), "nav-link active");
        assert_eq!(link_class("footer-link", false), "footer-link");
    }
}
