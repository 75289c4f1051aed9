use dioxus::prelude::*;
use phoenix_core::navigation::HOME;

use crate::components::layout::GuardedLink;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "We couldn't find " code { "{path}" } }
            GuardedLink { link: HOME, class: "btn-premium".to_string() }
        }
    }
}
