//! Scroll-into-view tracking backed by a shared [`VisibilityObserver`].

use dioxus::prelude::*;
use phoenix_core::{Subscription, SubscriptionId, VisibilityObserver};

/// Install the page-wide visibility observer.
pub fn use_visibility_provider() -> Signal<VisibilityObserver> {
    let observer = use_signal(VisibilityObserver::new);
    use_context_provider(|| observer)
}

/// Handle returned by [`use_reveal`].
#[derive(Clone, Copy, PartialEq)]
pub struct RevealHandle {
    id: SubscriptionId,
    observer: Signal<VisibilityObserver>,
    revealed: Signal<bool>,
    repeat: bool,
}

impl RevealHandle {
    /// Feed an intersection ratio for this element.
    pub fn report(mut self, ratio: f64) {
        let mut observer = self.observer.write();
        if observer.report(self.id, ratio) {
            self.revealed.set(true);
        } else if self.repeat && !observer.is_visible(self.id) && *self.revealed.peek() {
            self.revealed.set(false);
        }
    }

    pub fn is_revealed(&self) -> bool {
        (self.revealed)()
    }
}

/// Subscribe the calling component for the lifetime of its mount.
pub fn use_reveal(subscription: Subscription) -> RevealHandle {
    let mut observer = use_context::<Signal<VisibilityObserver>>();
    let id = use_hook(|| observer.write().subscribe(subscription));
    let revealed = use_signal(|| false);

    use_drop(move || {
        if let Ok(mut observer) = observer.try_write() {
            observer.unsubscribe(id);
        }
    });

    RevealHandle {
        id,
        observer,
        revealed,
        repeat: !subscription.once,
    }
}
