//! Document scroll lock as Dioxus context.
//!
//! The application root calls [`use_scroll_lock_provider`] once and puts the
//! returned flag on its outermost element as a class. Every modal below it
//! shares the same counted [`ScrollLock`] through [`use_scroll_lock`].

use dioxus::prelude::*;
use phoenix_core::{ScrollLock, ScrollSurface};

/// Writes the lock state into a signal the root element renders.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    locked: Signal<bool>,
}

impl ScrollSurface for SignalSurface {
    fn set_scroll_locked(&self, locked: bool) {
        let mut flag = self.locked;
        // The signal may already be gone if the whole tree is tearing down.
        if let Ok(mut value) = flag.try_write() {
            *value = locked;
        }
    }
}

/// Install the shared scroll lock. Returns the "page is locked" flag and
/// the lock itself, for modals owned by the providing component.
pub fn use_scroll_lock_provider() -> (Signal<bool>, ScrollLock) {
    let locked = use_signal(|| false);
    let lock = use_context_provider(|| ScrollLock::new(SignalSurface { locked }));
    (locked, lock)
}

/// The shared scroll lock from context.
pub fn use_scroll_lock() -> ScrollLock {
    use_context::<ScrollLock>()
}

/// Class for the root element while locked.
pub fn scroll_lock_class(locked: bool) -> &'static str {
    if locked {
        "scroll-locked"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_class() {
        assert_eq!(scroll_lock_class(true), "scroll-locked");
        assert_eq!(scroll_lock_class(false), "");
    }
}
