//! Rotating client testimonials.

use dioxus::prelude::*;
use phoenix_ui::{use_rotation, Reveal, SlideArrows, SlideDots};

use crate::content::TESTIMONIALS;
use crate::context::use_site_config;

#[component]
pub fn TestimonialsSection() -> Element {
    let site = use_site_config();
    let mut slides = use_rotation(TESTIMONIALS.len(), site.testimonial_interval);

    let state = *slides.read().state();
    let Some(current) = TESTIMONIALS.get(state.current_index) else {
        return rsx! {};
    };
    let slide_class = format!("testimonial {}", state.direction.class());

    rsx! {
        section { class: "section testimonials-section",
            Reveal {
                div { class: "section-header",
                    p { class: "eyebrow", "Testimonials" }
                    h2 { "What Our Clients Say" }
                }
            }

            div { class: "testimonial-stage",
                div {
                    key: "{state.current_index}",
                    class: "{slide_class}",
                    img { class: "testimonial-avatar", src: "{current.image}", alt: "{current.name}" }
                    blockquote { "\u{201C}{current.quote}\u{201D}" }
                    p { class: "testimonial-name", "{current.name}" }
                    p { class: "testimonial-event", "{current.event}" }
                }

                SlideArrows {
                    on_prev: move |_| slides.write().prev(),
                    on_next: move |_| slides.write().next(),
                }
            }

            SlideDots {
                count: TESTIMONIALS.len(),
                current: state.current_index,
                on_select: move |i| slides.write().select(i),
            }
        }
    }
}
