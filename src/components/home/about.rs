use dioxus::prelude::*;
use phoenix_ui::{Reveal, RevealAnimation};

use crate::content::{ABOUT_IMAGES, ABOUT_PARAGRAPHS, STATS};

#[component]
pub fn AboutSection() -> Element {
    let (left, right) = ABOUT_IMAGES.split_at(ABOUT_IMAGES.len() / 2);

    rsx! {
        section { class: "section about-section",
            div { class: "about-grid",
                Reveal { animation: RevealAnimation::SlideLeft,
                    div { class: "about-copy",
                        p { class: "eyebrow", "About Phoenix Events" }
                        h2 {
                            "Crafting Dreams into "
                            span { class: "text-gradient-gold", "Reality" }
                        }
                        for paragraph in ABOUT_PARAGRAPHS.iter() {
                            p { class: "about-text", "{paragraph}" }
                        }
                        div { class: "stats-grid",
                            for (i, stat) in STATS.iter().enumerate() {
                                Reveal {
                                    key: "{stat.label}",
                                    animation: RevealAnimation::ScaleIn,
                                    delay_ms: (i as u32) * 100,
                                    div { class: "stat-card",
                                        div { class: "stat-icon", "{stat.icon}" }
                                        p { class: "stat-value", "{stat.value}" }
                                        p { class: "stat-label", "{stat.label}" }
                                    }
                                }
                            }
                        }
                    }
                }

                Reveal { animation: RevealAnimation::SlideRight,
                    div { class: "about-collage",
                        div { class: "about-column",
                            for (src, alt) in left.iter() {
                                img { key: "{src}", src: "{src}", alt: "{alt}", loading: "lazy" }
                            }
                        }
                        div { class: "about-column offset",
                            for (src, alt) in right.iter() {
                                img { key: "{src}", src: "{src}", alt: "{alt}", loading: "lazy" }
                            }
                        }
                    }
                }
            }
        }
    }
}
