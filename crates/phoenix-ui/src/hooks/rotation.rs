//! Rotation timer hook.
//!
//! Wraps a [`RotationController`] in a signal and keeps exactly one timer
//! task alive for its current [`TickToken`]. A manual action or a content
//! reset changes the token, which cancels the old task and (for a reset)
//! starts a new one.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use phoenix_core::rotation::run_auto_rotation;
use phoenix_core::{RotationController, TickToken};

/// Rotating slides with a timer that a manual action stops for good.
///
/// # Example
///
/// ```rust,ignore
/// let mut slides = use_rotation(testimonials.len(), TESTIMONIAL_INTERVAL);
///
/// rsx! {
///     SlideArrows {
///         on_prev: move |_| slides.write().prev(),
///         on_next: move |_| slides.write().next(),
///     }
///     p { "{testimonials[slides.read().current_index()].quote}" }
/// }
/// ```
pub fn use_rotation(item_count: usize, interval: Duration) -> Signal<RotationController> {
    let mut rotation = use_signal(|| RotationController::new(item_count, interval));
    let mut timer: Signal<Option<(TickToken, Task)>> = use_signal(|| None);

    use_effect(move || {
        let token = rotation.read().token();
        let running = timer.peek().as_ref().map(|(token, _)| *token);
        if token == running {
            return;
        }

        if let Some((_, task)) = timer.write().take() {
            task.cancel();
        }
        if let Some(token) = token {
            let interval = rotation.peek().interval();
            tracing::debug!(?interval, "starting rotation timer");
            let task = spawn(run_auto_rotation(interval, token, move |token| {
                rotation.write().tick(token)
            }));
            timer.set(Some((token, task)));
        }
    });

    use_drop(move || {
        if let Ok(mut rotation) = rotation.try_write() {
            rotation.cancel_timer();
        }
        if let Ok(mut timer) = timer.try_write() {
            if let Some((_, task)) = timer.take() {
                task.cancel();
            }
        }
    });

    rotation
}

/// Reset `rotation` whenever the value returned by `key` changes.
///
/// `key` is read inside an effect, so any signal it reads (e.g. the theme)
/// re-runs the check. The first run only records the key.
pub fn use_rotation_reset<K, F, C>(mut rotation: Signal<RotationController>, key: F, item_count: C)
where
    K: PartialEq + 'static,
    F: Fn() -> K + 'static,
    C: Fn(&K) -> usize + 'static,
{
    let last: Rc<RefCell<Option<K>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect(move || {
        let current = key();
        let mut last = last.borrow_mut();
        let changed = last.as_ref().is_some_and(|previous| *previous != current);
        if changed {
            rotation.write().reset_items(item_count(&current));
        }
        *last = Some(current);
    });
}
