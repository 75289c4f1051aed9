//! Full-height hero with auto-rotating background images.
//!
//! Rotation stops for good on the first dot click. Switching theme swaps the
//! image set and restarts rotation from the first image.

use dioxus::prelude::*;
use phoenix_core::navigation::VIEW_OUR_WORK;
use phoenix_ui::{use_rotation, use_rotation_reset, SlideDots};

use crate::components::layout::GuardedLink;
use crate::components::open_external;
use crate::content::hero_images;
use crate::context::{use_greeting_link, use_site_config, use_theme};

const SCROLL_TO_CONTENT: &str =
    "document.querySelector('.app-root')?.scrollBy({ top: window.innerHeight, behavior: 'smooth' });";

#[component]
pub fn HeroSection() -> Element {
    let site = use_site_config();
    let theme = use_theme();
    let greeting = use_greeting_link();

    let mut rotation = use_rotation(hero_images(theme()).len(), site.hero_interval);
    use_rotation_reset(rotation, move || theme(), |mode| hero_images(*mode).len());

    let images = hero_images(theme());
    let current = rotation.read().current_index();

    rsx! {
        section { class: "hero",
            for (i, src) in images.iter().enumerate() {
                div {
                    key: "{src}",
                    class: if i == current { "hero-slide active" } else { "hero-slide" },
                    img { src: "{src}", alt: format!("Event {}", i + 1) }
                }
            }
            div { class: "hero-overlay" }

            div { class: "hero-content",
                p { class: "eyebrow", "Premium Event Management" }
                h1 {
                    "Turning Moments into "
                    span { class: "text-gradient-gold", "Grand Memories" }
                }
                p { class: "hero-lead",
                    "Where elegance meets celebration. We craft extraordinary experiences "
                    "that transform your vision into unforgettable events."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn-premium btn-lg",
                        onclick: move |_| {
                            if let Some(url) = &greeting {
                                open_external(url);
                            }
                        },
                        "Plan Your Event"
                    }
                    GuardedLink { link: VIEW_OUR_WORK, class: "btn-outline btn-lg".to_string() }
                }
            }

            SlideDots {
                count: images.len(),
                current,
                on_select: move |i| rotation.write().select(i),
            }

            button {
                class: "scroll-indicator",
                "aria-label": "Scroll down",
                onclick: move |_| {
                    let _ = document::eval(SCROLL_TO_CONTENT);
                },
                "\u{2304}"
            }
        }
    }
}
