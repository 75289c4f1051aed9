//! Route-block interceptor.
//!
//! Some destinations are linked from the navigation, footer and cards but are
//! not public yet. Every navigational element asks [`RouteBlockRegistry::guard`]
//! before committing; an intercepted navigation opens the "coming soon"
//! dialog instead of changing route.

use tracing::debug;

/// Paths that are linked but not yet publicly reachable.
pub const BLOCKED_PATHS: &[&str] = &["/gallery", "/events", "/services", "/collaborations"];

/// The site's block registry.
pub const BLOCKED_ROUTES: RouteBlockRegistry = RouteBlockRegistry::new(BLOCKED_PATHS);

/// Outcome of a guarded navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the router handle it unmodified.
    Proceed,
    /// Cancel the navigation and show the coming-soon dialog.
    Intercept,
}

impl NavigationDecision {
    pub fn is_intercepted(&self) -> bool {
        matches!(self, NavigationDecision::Intercept)
    }
}

/// Immutable set of blocked paths, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteBlockRegistry {
    paths: &'static [&'static str],
}

impl RouteBlockRegistry {
    pub const fn new(paths: &'static [&'static str]) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &'static [&'static str] {
        self.paths
    }

    /// Whether `target` points at a blocked page.
    ///
    /// Query strings, fragments and trailing slashes are ignored, so
    /// `/events/?tab=all#top` is treated as `/events`. Matching is
    /// case-sensitive like the router.
    pub fn is_blocked(&self, target: &str) -> bool {
        let path = normalize(target);
        self.paths.iter().any(|blocked| *blocked == path)
    }

    pub fn guard(&self, target: &str) -> NavigationDecision {
        if self.is_blocked(target) {
            debug!(target, "navigation intercepted");
            NavigationDecision::Intercept
        } else {
            NavigationDecision::Proceed
        }
    }
}

fn normalize(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    let path = target[..end].trim_end_matches('/');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}
