//! Light/dark theme switch.

use dioxus::prelude::*;
use phoenix_core::ThemeMode;

use crate::context::{toggle_theme, use_theme, use_theme_store};

fn toggle_label(current: ThemeMode) -> String {
    format!("Switch to {} theme", current.toggle())
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let store = use_theme_store();
    let current = theme();

    rsx! {
        button {
            class: "theme-toggle",
            "aria-label": toggle_label(current),
            onclick: move |_| toggle_theme(theme, &store),
            if current.is_dark() { "\u{2600}" } else { "\u{263E}" }
        }
    }
}
