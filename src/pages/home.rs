use dioxus::prelude::*;

use crate::components::home::{
    AboutSection, CtaSection, EventsSection, GalleryPreviewSection, HeroSection,
    TestimonialsSection, WhyChooseUsSection,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        HeroSection {}
        AboutSection {}
        EventsSection {}
        WhyChooseUsSection {}
        GalleryPreviewSection {}
        TestimonialsSection {}
        CtaSection {}
    }
}
