//! Filterable gallery preview with a lightbox.

use dioxus::prelude::*;
use phoenix_core::gallery::{category_counts, filter_items, ALL_CATEGORIES};
use phoenix_core::navigation::VIEW_FULL_GALLERY;
use phoenix_core::{GalleryItem, Lightbox};
use phoenix_ui::{use_scroll_lock, CategoryPills, LightboxView, Reveal, RevealAnimation};

use crate::components::layout::GuardedLink;
use crate::content::gallery;
use crate::context::use_site_config;

#[component]
pub fn GalleryPreviewSection() -> Element {
    let lock = use_scroll_lock();
    let grace = use_site_config().lightbox_close_grace;
    let items = use_hook(gallery);
    let mut selected = use_signal(|| ALL_CATEGORIES.to_string());
    let mut lightbox = use_signal(move || Lightbox::<GalleryItem>::with_grace(lock, grace));

    let category_pills: Vec<(String, usize)> = category_counts(&items)
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    let visible: Vec<GalleryItem> = filter_items(&items, &selected())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section { class: "section gallery-section",
            div { class: "section-header split",
                div {
                    p { class: "eyebrow", "Our Portfolio" }
                    h2 { "Moments We've Created" }
                }
                GuardedLink { link: VIEW_FULL_GALLERY, class: "btn-outline".to_string() }
            }

            CategoryPills {
                categories: category_pills,
                selected: selected(),
                on_select: move |category| selected.set(category),
            }

            div { class: "gallery-grid",
                for (i, item) in visible.iter().enumerate() {
                    {
                        let snapshot = visible.clone();
                        rsx! {
                            Reveal {
                                key: "{item.src}",
                                animation: RevealAnimation::ScaleIn,
                                delay_ms: (i as u32) * 80,
                                button {
                                    class: if i == 0 { "gallery-tile featured" } else { "gallery-tile" },
                                    "aria-label": "Open {item.alt}",
                                    onclick: move |_| lightbox.write().open_at(snapshot.clone(), i),
                                    img { src: "{item.src}", alt: "{item.alt}", loading: "lazy" }
                                    span { class: "gallery-tile-label", "{item.alt}" }
                                }
                            }
                        }
                    }
                }
            }

            LightboxView { lightbox }
        }
    }
}
