//! Coming Soon Dialog
//!
//! Shown when a visitor follows a link to a section that is not live yet.
//! The overlay closes on the close button, a backdrop click or Escape, and
//! its two actions close it before navigating.

use dioxus::prelude::*;
use phoenix_core::{DismissTrigger, ModalController};

use crate::components::{Button, ButtonVariant, CloseButton};

/// Properties for the ComingSoonDialog component
#[derive(Clone, PartialEq, Props)]
pub struct ComingSoonDialogProps {
    /// Shared dialog state; payload is the path that was intercepted
    pub dialog: Signal<ModalController<String>>,
    /// Called after closing, with the action the visitor chose
    pub on_navigate: EventHandler<DialogAction>,
}

/// The dialog's two exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Home,
    Contact,
}

#[component]
pub fn ComingSoonDialog(props: ComingSoonDialogProps) -> Element {
    let mut dialog = props.dialog;
    let Some(path) = dialog.read().payload().cloned() else {
        return rsx! {};
    };

    let mut close = move |trigger: DismissTrigger| {
        dialog.write().dismiss(trigger);
    };
    let on_navigate = props.on_navigate;
    let mut leave = move |action: DialogAction| {
        close(DismissTrigger::Navigation);
        on_navigate.call(action);
    };

    rsx! {
        div {
            class: "modal-overlay",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "coming-soon-title",
            tabindex: "0",
            onmounted: move |e| async move {
                let _ = e.data().set_focus(true).await;
            },
            onclick: move |_| close(DismissTrigger::Backdrop),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    close(DismissTrigger::Escape);
                }
            },

            div {
                class: "modal-dialog coming-soon",
                "data-path": "{path}",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| close(DismissTrigger::CloseButton) }

                div { class: "coming-soon-icon", "\u{2728}" }
                h2 { id: "coming-soon-title", "Coming Soon" }
                p {
                    "We're putting the finishing touches on this page. "
                    "In the meantime, get in touch and we'll help you plan your event."
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| leave(DialogAction::Home),
                        "Back to Home"
                    }
                    Button {
                        variant: ButtonVariant::Premium,
                        onclick: move |_| leave(DialogAction::Contact),
                        "Contact Us"
                    }
                }
            }
        }
    }
}
