//! Site navigation tables.
//!
//! Every navigational element (header, mobile menu, footer, "view all"
//! buttons, cards) is built from a [`NavLink`] and resolved through
//! [`NavLink::action`], which is where the block registry is consulted.
//! Keeping the tables here lets tests check that no blocked destination
//! slips through as a plain route change.

use crate::route_guard::{NavigationDecision, RouteBlockRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    /// What activating this link should do under `registry`.
    pub fn action(&self, registry: &RouteBlockRegistry) -> NavAction {
        resolve(self.href, registry)
    }
}

/// Result of activating a navigational element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Change route to this internal path.
    Route(&'static str),
    /// Stay put and open the coming-soon dialog.
    ComingSoon,
    /// Open in a new browsing context (WhatsApp, mail, phone).
    External(&'static str),
}

/// Resolve an href the same way for every call site.
pub fn resolve(href: &'static str, registry: &RouteBlockRegistry) -> NavAction {
    if is_external(href) {
        return NavAction::External(href);
    }
    match registry.guard(href) {
        NavigationDecision::Intercept => NavAction::ComingSoon,
        NavigationDecision::Proceed => NavAction::Route(href),
    }
}

fn is_external(href: &str) -> bool {
    ["https://", "http://", "mailto:", "tel:"]
        .iter()
        .any(|scheme| href.starts_with(scheme))
}

/// Header and mobile menu.
pub const PRIMARY_NAV: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::new("Events", "/events"),
    NavLink::new("Services", "/services"),
    NavLink::new("Gallery", "/gallery"),
    NavLink::new("Collaborations", "/collaborations"),
    NavLink::new("Contact", "/contact"),
];

/// Footer "Quick Links" column.
pub const FOOTER_QUICK_LINKS: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::new("Events", "/events"),
    NavLink::new("Gallery", "/gallery"),
    NavLink::new("Services", "/services"),
    NavLink::new("Contact", "/contact"),
];

/// Footer "Our Events" column; every entry goes to the events listing.
pub const FOOTER_EVENT_LINKS: &[NavLink] = &[
    NavLink::new("Weddings", "/events"),
    NavLink::new("Birthdays", "/events"),
    NavLink::new("Corporate Events", "/events"),
    NavLink::new("Engagements", "/events"),
    NavLink::new("Car Launches", "/events"),
];

/// Section call-to-action buttons on the home page.
/// Every event card leads to the events listing.
pub const EVENT_CARD: NavLink = NavLink::new("Explore", "/events");
pub const VIEW_OUR_WORK: NavLink = NavLink::new("View Our Work", "/gallery");
pub const VIEW_ALL_EVENTS: NavLink = NavLink::new("View All Events", "/events");
pub const VIEW_FULL_GALLERY: NavLink = NavLink::new("View Full Gallery", "/gallery");
pub const EXPLORE_SERVICES: NavLink = NavLink::new("Explore Services", "/services");
pub const CONTACT_US: NavLink = NavLink::new("Contact Us", "/contact");
pub const HOME: NavLink = NavLink::new("Back to Home", "/");

/// Every internal link the site renders, for completeness checks.
pub fn all_links() -> impl Iterator<Item = &'static NavLink> {
    const SINGLES: &[NavLink] = &[
        EVENT_CARD,
        VIEW_OUR_WORK,
        VIEW_ALL_EVENTS,
        VIEW_FULL_GALLERY,
        EXPLORE_SERVICES,
        CONTACT_US,
        HOME,
    ];
    PRIMARY_NAV
        .iter()
        .chain(FOOTER_QUICK_LINKS)
        .chain(FOOTER_EVENT_LINKS)
        .chain(SINGLES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route_guard::BLOCKED_ROUTES;

    #[test]
    fn blocked_links_open_dialog() {
        for link in all_links() {
            let action = link.action(&BLOCKED_ROUTES);
            if BLOCKED_ROUTES.is_blocked(link.href) {
                assert_eq!(action, NavAction::ComingSoon, "{} leaked", link.label);
            } else {
                assert_eq!(action, NavAction::Route(link.href));
            }
        }
    }

    #[test]
    fn external_links_bypass_registry() {
        assert_eq!(
            resolve("tel:+911234567890", &BLOCKED_ROUTES),
            NavAction::External("tel:+911234567890")
        );
    }

    #[test]
    fn empty_registry_lets_everything_through() {
        let open = RouteBlockRegistry::new(&[]);
        assert_eq!(VIEW_FULL_GALLERY.action(&open), NavAction::Route("/gallery"));
    }
}
