//! Home page sections, top to bottom.

mod about;
mod cta;
mod events;
mod gallery_preview;
mod hero;
mod testimonials;
mod why_choose_us;

pub use about::AboutSection;
pub use cta::CtaSection;
pub use events::EventsSection;
pub use gallery_preview::GalleryPreviewSection;
pub use hero::HeroSection;
pub use testimonials::TestimonialsSection;
pub use why_choose_us::WhyChooseUsSection;
