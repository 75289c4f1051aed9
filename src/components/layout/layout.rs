//! Page chrome shared by every route.

use dioxus::prelude::*;
use phoenix_ui::{ComingSoonDialog, DialogAction};

use crate::app::Route;
use crate::components::layout::{Footer, MobileActionBar, Navbar, WhatsAppButton};
use crate::context::use_coming_soon;

#[component]
pub fn Layout() -> Element {
    let dialog = use_coming_soon();
    let navigator = use_navigator();

    rsx! {
        Navbar {}
        main { class: "page", Outlet::<Route> {} }
        Footer {}
        WhatsAppButton {}
        MobileActionBar {}
        ComingSoonDialog {
            dialog,
            on_navigate: move |action| {
                let target = match action {
                    DialogAction::Home => Route::Home {},
                    DialogAction::Contact => Route::Contact {},
                };
                navigator.push(target);
            },
        }
    }
}
