//! Horizontal Carousel Component
//!
//! A scrollable row of cards with prev/next buttons and position dots.
//! The row scrolls natively (drag, wheel, touch); the buttons request a
//! smooth scroll of one stride. Button enablement and the active dot always
//! come from live scroll geometry via [`CarouselController`].

use std::rc::Rc;

use dioxus::prelude::*;
use phoenix_core::{CarouselConfig, CarouselController, ScrollDirection, ScrollGeometry};

use crate::components::IconButton;
use crate::hooks::{element_id, MeasureSeq};

/// Properties for the HorizontalCarousel component
#[derive(Clone, PartialEq, Props)]
pub struct HorizontalCarouselProps {
    /// Stride, slack and item count
    pub config: CarouselConfig,
    /// The cards
    pub children: Element,
    /// Accessible label for the region
    #[props(default = "Carousel".to_string())]
    pub label: String,
    /// Show position dots under the row
    #[props(default = true)]
    pub show_dots: bool,
}

/// Read scrollLeft / scrollWidth / clientWidth from a mounted element.
async fn measure(element: &MountedData) -> Option<ScrollGeometry> {
    let offset = element.get_scroll_offset().await.ok()?;
    let size = element.get_scroll_size().await.ok()?;
    let rect = element.get_client_rect().await.ok()?;
    Some(ScrollGeometry::new(offset.x, size.width, rect.size.width))
}

/// Scroll-synchronised carousel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HorizontalCarousel {
///         config: site.carousel(EVENTS.len()),
///         label: "Our events",
///         for event in EVENTS {
///             EventCard { event: *event }
///         }
///     }
/// }
/// ```
#[component]
pub fn HorizontalCarousel(props: HorizontalCarouselProps) -> Element {
    let track_id = use_hook(|| element_id("carousel-track"));
    let mut carousel = use_signal(|| CarouselController::new(props.config.clone()));
    let mut track: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let seq = use_signal(MeasureSeq::default);

    // Keep the item count in sync if the parent re-renders with a new list.
    let item_count = props.config.item_count;
    use_effect(use_reactive((&item_count,), move |(item_count,)| {
        if carousel.peek().config().item_count != item_count {
            carousel.write().set_item_count(item_count);
        }
    }));

    let refresh = move |resized: bool| {
        let mut seq = seq;
        let ticket = seq.write().begin();
        spawn(async move {
            let Some(element) = track() else {
                return;
            };
            if let Some(geometry) = measure(&element).await {
                if !seq.peek().is_current(ticket) {
                    return;
                }
                let mut carousel = carousel.write();
                if resized {
                    carousel.on_resize(geometry);
                } else {
                    carousel.on_scroll(geometry);
                }
            }
        });
    };

    let scroll_by = {
        let track_id = track_id.clone();
        move |direction: ScrollDirection| {
            let request = carousel.read().scroll_by(direction);
            let script = format!(
                "document.getElementById('{}')?.scrollBy({{ left: {}, behavior: 'smooth' }});",
                track_id, request.delta
            );
            let _ = document::eval(&script);
            // No reliable "scroll finished" event; re-read once it settles.
            spawn(async move {
                tokio::time::sleep(request.settle_after).await;
                refresh(false);
            });
        }
    };
    let scroll_prev = scroll_by.clone();
    let scroll_next = scroll_by;

    let state = *carousel.read().state();

    rsx! {
        div {
            class: "carousel",
            role: "region",
            "aria-label": "{props.label}",

            div {
                id: "{track_id}",
                class: "carousel-track",
                onmounted: move |e| {
                    track.set(Some(e.data()));
                    refresh(true);
                },
                onscroll: move |_| refresh(false),
                onresize: move |_| refresh(true),
                {props.children}
            }

            div { class: "carousel-controls",
                IconButton {
                    onclick: move |_| scroll_prev(ScrollDirection::Prev),
                    aria_label: "Previous".to_string(),
                    disabled: !state.can_scroll_prev,
                    class: "carousel-btn".to_string(),
                    "\u{2039}"
                }

                if props.show_dots {
                    div { class: "carousel-dots",
                        for i in 0..item_count {
                            span {
                                key: "{i}",
                                class: if i == state.active_index { "dot active" } else { "dot" },
                            }
                        }
                    }
                }

                IconButton {
                    onclick: move |_| scroll_next(ScrollDirection::Next),
                    aria_label: "Next".to_string(),
                    disabled: !state.can_scroll_next,
                    class: "carousel-btn".to_string(),
                    "\u{203A}"
                }
            }
        }
    }
}
