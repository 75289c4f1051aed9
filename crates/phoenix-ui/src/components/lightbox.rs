//! Lightbox Component
//!
//! Full-screen image viewer over a [`Lightbox`] held in a signal. Close
//! button, backdrop click, Escape and a tap on the image all dismiss; arrow
//! keys, arrow buttons, swipes and the dots navigate. The close animation
//! runs for the lightbox's grace period before the overlay unmounts.

use dioxus::prelude::*;
use phoenix_core::{
    CloseRequest, DismissTrigger, GalleryItem, GestureOutcome, KeyOutcome, Lightbox, TouchGesture,
};

use crate::components::{CloseButton, IconButton};
use crate::hooks::{lightbox_key, schedule_close};

/// Finish a close request, deferring when the lightbox animates out.
fn settle(mut lightbox: Signal<Lightbox<GalleryItem>>, request: CloseRequest) {
    schedule_close(request, move |token| {
        lightbox.write().finish_close(token);
    });
}

fn counter_text(index: usize, len: usize) -> String {
    format!("{} / {}", index + 1, len)
}

#[component]
pub fn LightboxView(lightbox: Signal<Lightbox<GalleryItem>>) -> Element {
    let mut lightbox = lightbox;
    let mut gesture: Signal<Option<TouchGesture>> = use_signal(|| None);

    let (open, closing, index, len, current) = {
        let lb = lightbox.read();
        (
            lb.is_open(),
            lb.modal().is_closing(),
            lb.index(),
            lb.len(),
            lb.current().cloned(),
        )
    };

    if !open {
        return rsx! {};
    }

    let dismiss = move |trigger: DismissTrigger| {
        let request = lightbox.write().dismiss(trigger);
        settle(lightbox, request);
    };

    rsx! {
        div {
            class: if closing { "lightbox-overlay closing" } else { "lightbox-overlay" },
            role: "dialog",
            "aria-modal": "true",
            tabindex: "0",
            onmounted: move |e| async move {
                let _ = e.data().set_focus(true).await;
            },
            onclick: move |_| dismiss(DismissTrigger::Backdrop),
            onkeydown: move |e| {
                match lightbox.write().handle_key(lightbox_key(&e.key())) {
                    KeyOutcome::Closed(request) => settle(lightbox, request),
                    KeyOutcome::Moved(_) => e.prevent_default(),
                    KeyOutcome::Ignored => {}
                }
            },

            CloseButton { onclick: move |_| dismiss(DismissTrigger::CloseButton) }

            if len > 1 {
                IconButton {
                    onclick: move |_| {
                        lightbox.write().prev();
                    },
                    aria_label: "Previous image".to_string(),
                    class: "lightbox-nav prev".to_string(),
                    "\u{2039}"
                }
                IconButton {
                    onclick: move |_| {
                        lightbox.write().next();
                    },
                    aria_label: "Next image".to_string(),
                    class: "lightbox-nav next".to_string(),
                    "\u{203A}"
                }
            }

            div {
                class: "lightbox-content",
                onclick: move |e| e.stop_propagation(),
                ontouchstart: move |e| {
                    if let Some(touch) = e.touches().first() {
                        let point = touch.client_coordinates();
                        gesture.set(Some(TouchGesture::new((point.x, point.y))));
                    }
                },
                ontouchmove: move |e| {
                    if let Some(touch) = e.touches().first() {
                        let point = touch.client_coordinates();
                        let moved = (*gesture.peek()).map(|g| g.moved_to((point.x, point.y)));
                        if moved.is_some() {
                            gesture.set(moved);
                        }
                    }
                },
                ontouchend: move |e| {
                    let Some(finished) = gesture.write().take() else {
                        return;
                    };
                    match lightbox.write().handle_gesture(finished) {
                        GestureOutcome::Closed(request) => {
                            e.prevent_default();
                            settle(lightbox, request);
                        }
                        GestureOutcome::Moved(_) => e.prevent_default(),
                        GestureOutcome::Ignored => {}
                    }
                },

                if let Some(item) = current {
                    img {
                        key: "{index}",
                        class: "lightbox-image",
                        src: "{item.src}",
                        alt: "{item.alt}",
                        draggable: "false",
                    }
                    p { class: "lightbox-caption", "{item.alt}" }
                } else {
                    p { class: "lightbox-empty", "No images in this category" }
                }
            }

            if len > 0 {
                div { class: "lightbox-footer",
                    span { class: "lightbox-counter", {counter_text(index, len)} }
                    if len > 1 {
                        div { class: "lightbox-dots",
                            for i in 0..len {
                                button {
                                    key: "{i}",
                                    class: if i == index { "dot active" } else { "dot" },
                                    "aria-label": format!("Show image {}", i + 1),
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        lightbox.write().jump_to(i);
                                    },
                                }
                            }
                        }
                    }
                    span { class: "lightbox-hint", "Swipe to navigate \u{2022} Tap to close" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_one_based() {
        assert_eq!(counter_text(0, 5), "1 / 5");
        assert_eq!(counter_text(4, 5), "5 / 5");
    }
}
