//! Slide controls for rotating content.
//!
//! Dots select a slide directly; arrows step one slide with wraparound.
//! Both are plain views: the caller routes the events into its
//! `RotationController`, which stops auto-advance on any of them.

use dioxus::prelude::*;

use crate::components::IconButton;

fn dot_class(active: bool) -> &'static str {
    if active {
        "slide-dot active"
    } else {
        "slide-dot"
    }
}

/// One dot per slide, the current one highlighted.
#[component]
pub fn SlideDots(count: usize, current: usize, on_select: EventHandler<usize>) -> Element {
    if count <= 1 {
        return rsx! {};
    }

    rsx! {
        div { class: "slide-dots", role: "tablist",
            for i in 0..count {
                button {
                    key: "{i}",
                    class: dot_class(i == current),
                    role: "tab",
                    "aria-selected": if i == current { "true" } else { "false" },
                    "aria-label": format!("Go to slide {}", i + 1),
                    onclick: move |_| on_select.call(i),
                }
            }
        }
    }
}

#[component]
pub fn SlideArrows(on_prev: EventHandler<()>, on_next: EventHandler<()>) -> Element {
    rsx! {
        div { class: "slide-arrows",
            IconButton {
                onclick: move |_| on_prev.call(()),
                aria_label: "Previous slide".to_string(),
                class: "slide-arrow".to_string(),
                "\u{2039}"
            }
            IconButton {
                onclick: move |_| on_next.call(()),
                aria_label: "Next slide".to_string(),
                class: "slide-arrow".to_string(),
                "\u{203A}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_dot_class() {
        assert_eq!(dot_class(true), "slide-dot active");
        assert_eq!(dot_class(false), "slide-dot");
    }
}
