//! Static site content: hero images, event cards, gallery, testimonials.

use phoenix_core::{GalleryItem, ThemeMode};

#[derive(Debug, PartialEq)]
pub struct EventCard {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub event: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Reason {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Phoenix Events & Productions is a premier event management company dedicated to creating extraordinary celebrations that leave lasting impressions. With over 15 years of experience, we've mastered the art of transforming ordinary moments into grand memories.",
    "From intimate gatherings to lavish weddings and corporate galas, our team of creative professionals brings passion, precision and an unwavering commitment to excellence to every event we touch.",
];

pub const STATS: &[Stat] = &[
    Stat { icon: "\u{1F4C5}", value: "500+", label: "Events Delivered" },
    Stat { icon: "\u{1F465}", value: "10K+", label: "Happy Clients" },
    Stat { icon: "\u{1F3C6}", value: "15+", label: "Years Experience" },
    Stat { icon: "\u{2728}", value: "50+", label: "Expert Team" },
];

/// About-section collage as (src, alt), left column first.
pub const ABOUT_IMAGES: &[(&str, &str)] = &[
    (
        "https://images.unsplash.com/photo-1519225421980-715cb0215aed?w=600&q=80",
        "Elegant wedding setup",
    ),
    (
        "https://images.unsplash.com/photo-1465495976277-4387d4b0b4c6?w=600&q=80",
        "Wedding ceremony",
    ),
    (
        "https://images.unsplash.com/photo-1549488344-cbb6c34cf08b?w=600&q=80",
        "Event decoration",
    ),
    (
        "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=600&q=80",
        "Birthday celebration",
    ),
];

const HERO_LIGHT: &[&str] = &[
    "https://images.unsplash.com/photo-1519741497674-611481863552?w=1920&q=80",
    "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?w=1920&q=80",
    "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=1920&q=80",
    "https://images.unsplash.com/photo-1478146059778-26a7c7d35cb0?w=1920&q=80",
];

const HERO_DARK: &[&str] = &[
    "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=1920&q=80",
    "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=1920&q=80",
    "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?w=1920&q=80",
];

/// Hero backgrounds for the active theme.
pub fn hero_images(theme: ThemeMode) -> &'static [&'static str] {
    match theme {
        ThemeMode::Light => HERO_LIGHT,
        ThemeMode::Dark => HERO_DARK,
    }
}

pub const EVENTS: &[EventCard] = &[
    EventCard {
        title: "Weddings",
        image: "https://images.unsplash.com/photo-1519741497674-611481863552?w=600&q=80",
        description: "Timeless celebrations of love",
    },
    EventCard {
        title: "Birthdays",
        image: "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=600&q=80",
        description: "Memorable milestone moments",
    },
    EventCard {
        title: "Engagements",
        image: "https://images.unsplash.com/photo-1583939003579-730e3918a45a?w=600&q=80",
        description: "The beginning of forever",
    },
    EventCard {
        title: "Sangeet",
        image: "https://images.unsplash.com/photo-1504196606672-aef5c9cefc92?w=600&q=80",
        description: "Musical celebration of joy",
    },
    EventCard {
        title: "Haldi",
        image: "https://images.unsplash.com/photo-1583939003579-730e3918a45a?w=600&q=80",
        description: "Traditional pre-wedding ritual",
    },
    EventCard {
        title: "Mehendi",
        image: "https://images.unsplash.com/photo-1605648916361-9bc12ad6a569?w=600&q=80",
        description: "Artistic bridal celebration",
    },
    EventCard {
        title: "Anniversaries",
        image: "https://images.unsplash.com/photo-1529634806980-85c3dd6d34ac?w=600&q=80",
        description: "Celebrating lasting love",
    },
    EventCard {
        title: "Corporate Events",
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=600&q=80",
        description: "Professional excellence",
    },
    EventCard {
        title: "Car Launches",
        image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=600&q=80",
        description: "Grand product unveilings",
    },
];

const GALLERY: &[(&str, &str, &str)] = &[
    (
        "https://images.unsplash.com/photo-1519225421980-715cb0215aed?w=1200&q=80",
        "Elegant wedding setup",
        "Weddings",
    ),
    (
        "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?w=1200&q=80",
        "Wedding ceremony",
        "Weddings",
    ),
    (
        "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=1200&q=80",
        "Birthday celebration",
        "Birthdays",
    ),
    (
        "https://images.unsplash.com/photo-1549488344-cbb6c34cf08b?w=1200&q=80",
        "Event decoration",
        "Decor",
    ),
    (
        "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=1200&q=80",
        "Corporate event",
        "Corporate",
    ),
    (
        "https://images.unsplash.com/photo-1605648916361-9bc12ad6a569?w=1200&q=80",
        "Mehendi ceremony",
        "Weddings",
    ),
];

/// Gallery preview images.
pub fn gallery() -> Vec<GalleryItem> {
    GALLERY
        .iter()
        .map(|(src, alt, category)| GalleryItem::new(*src, *alt, *category))
        .collect()
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya & Rahul Sharma",
        event: "Wedding",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
        quote: "Phoenix Events transformed our wedding into a fairytale. Every detail was perfect, from the stunning d\u{e9}cor to the seamless coordination.",
    },
    Testimonial {
        name: "Amit Patel",
        event: "Corporate Gala",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&q=80",
        quote: "The team at Phoenix delivered an exceptional corporate event that impressed all our stakeholders.",
    },
    Testimonial {
        name: "Sneha Reddy",
        event: "50th Anniversary",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&q=80",
        quote: "Planning my parents' golden anniversary was stress-free thanks to Phoenix Events.",
    },
    Testimonial {
        name: "Vikram & Meera Joshi",
        event: "Engagement Ceremony",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&q=80",
        quote: "From the moment we met the Phoenix team, we knew we were in good hands. Our engagement was nothing short of magical.",
    },
];

pub const REASONS: &[Reason] = &[
    Reason {
        icon: "\u{1F3A8}",
        title: "Creative Excellence",
        description: "Our designers craft unique concepts tailored to your vision.",
    },
    Reason {
        icon: "\u{23F1}",
        title: "Flawless Execution",
        description: "From planning to execution, every aspect is managed with precision.",
    },
    Reason {
        icon: "\u{1F91D}",
        title: "Trusted Partnerships",
        description: "We collaborate with premium venues, vendors and artists.",
    },
    Reason {
        icon: "\u{2B50}",
        title: "Personalized Service",
        description: "Every client receives dedicated attention and customized solutions.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use phoenix_core::gallery::{categories, filter_items};

    #[test]
    fn hero_sets_differ_by_theme() {
        assert_ne!(
            hero_images(ThemeMode::Light).len(),
            hero_images(ThemeMode::Dark).len()
        );
    }

    #[test]
    fn gallery_has_several_categories() {
        let items = gallery();
        let cats = categories(&items);
        assert_eq!(cats[0], "All");
        assert!(cats.contains(&"Weddings"));
        assert_eq!(filter_items(&items, "Weddings").len(), 3);
    }

    #[test]
    fn about_collage_fills_both_columns() {
        assert_eq!(ABOUT_IMAGES.len() % 2, 0);
        assert_eq!(STATS.len(), 4);
    }
}
