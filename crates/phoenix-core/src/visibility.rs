//! Viewport visibility observer.
//!
//! Sections animate in when they first scroll into view. The observer is the
//! animation-agnostic half of that: components subscribe with a threshold,
//! the host reports intersection ratios, and [`VisibilityObserver::report`]
//! says when a subscriber should be notified.

use std::collections::HashMap;

use tracing::trace;

/// Default fraction of an element that must be visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subscription {
    /// Visible fraction in `[0, 1]` that counts as "in view"
    pub threshold: f64,
    /// Notify only the first time for this mount
    pub once: bool,
}

impl Default for Subscription {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            once: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    subscription: Subscription,
    visible: bool,
    fired: bool,
}

/// Registry of visibility subscribers.
#[derive(Debug, Default)]
pub struct VisibilityObserver {
    entries: HashMap<SubscriptionId, Entry>,
    next_id: u64,
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscription: Subscription) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let threshold = subscription.threshold.clamp(0.0, 1.0);
        self.entries.insert(
            id,
            Entry {
                subscription: Subscription {
                    threshold,
                    ..subscription
                },
                visible: false,
                fired: false,
            },
        );
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.entries.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record the element's visible `ratio`. Returns true when the
    /// subscriber should be notified.
    ///
    /// A `once` subscriber is notified on its first crossing only; a
    /// repeating one on every transition from hidden to visible.
    pub fn report(&mut self, id: SubscriptionId, ratio: f64) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        let visible = ratio.is_finite() && ratio > 0.0 && ratio >= entry.subscription.threshold;
        let rising = visible && !entry.visible;
        entry.visible = visible;

        if !rising || (entry.subscription.once && entry.fired) {
            return false;
        }
        entry.fired = true;
        trace!(?id, ratio, "element became visible");
        true
    }

    /// Whether the element is currently considered visible.
    pub fn is_visible(&self, id: SubscriptionId) -> bool {
        self.entries.get(&id).is_some_and(|entry| entry.visible)
    }

    /// Whether a notification has ever been delivered.
    pub fn has_fired(&self, id: SubscriptionId) -> bool {
        self.entries.get(&id).is_some_and(|entry| entry.fired)
    }
}

/// Visible fraction of an element's vertical span within the viewport.
pub fn visible_ratio(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    if element_height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let top = element_top.max(0.0);
    let bottom = (element_top + element_height).min(viewport_height);
    ((bottom - top) / element_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_fires_a_single_time() {
        let mut observer = VisibilityObserver::new();
        let id = observer.subscribe(Subscription::default());
        assert!(!observer.report(id, 0.05));
        assert!(observer.report(id, 0.2));
        assert!(!observer.report(id, 0.8));
        assert!(!observer.report(id, 0.0));
        assert!(!observer.report(id, 0.5));
        assert!(observer.has_fired(id));
    }

    #[test]
    fn repeating_fires_on_each_rising_edge() {
        let mut observer = VisibilityObserver::new();
        let id = observer.subscribe(Subscription {
            threshold: 0.5,
            once: false,
        });
        assert!(observer.report(id, 0.6));
        assert!(!observer.report(id, 0.9));
        assert!(!observer.report(id, 0.1));
        assert!(observer.report(id, 0.5));
    }

    #[test]
    fn zero_threshold_still_needs_some_visibility() {
        let mut observer = VisibilityObserver::new();
        let id = observer.subscribe(Subscription {
            threshold: -3.0,
            once: true,
        });
        assert!(!observer.report(id, 0.0));
        assert!(observer.report(id, 0.01));
    }

    #[test]
    fn unknown_subscription_never_fires() {
        let mut observer = VisibilityObserver::new();
        let id = observer.subscribe(Subscription::default());
        observer.unsubscribe(id);
        assert!(!observer.report(id, 1.0));
        assert!(observer.is_empty());
    }

    #[test]
    fn ratio_of_partially_visible_element() {
        assert_eq!(visible_ratio(800.0, 400.0, 1000.0), 0.5);
        assert_eq!(visible_ratio(-100.0, 400.0, 1000.0), 0.75);
        assert_eq!(visible_ratio(1200.0, 400.0, 1000.0), 0.0);
        assert_eq!(visible_ratio(0.0, 0.0, 1000.0), 0.0);
    }
}
