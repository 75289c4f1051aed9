use std::rc::Rc;

use dioxus::prelude::*;
use phoenix_core::{ModalController, ScrollSnapshot, ScrollTracker, ThemeStore};
use phoenix_ui::{
    scroll_lock_class, use_scroll_lock_provider, use_visibility_provider, MeasureSeq,
};

use crate::components::Layout;
use crate::pages::{Collaborations, Contact, Events, Gallery, Home, NotFound, Services};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with hero, events, gallery and testimonials
/// - `/contact` - Enquiry form handed off to WhatsApp
/// - `/gallery`, `/events`, `/services`, `/collaborations` - not live yet;
///   links to them open the coming-soon dialog, direct visits render a
///   coming-soon page
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/contact")]
        Contact {},
        #[route("/gallery")]
        Gallery {},
        #[route("/events")]
        Events {},
        #[route("/services")]
        Services {},
        #[route("/collaborations")]
        Collaborations {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Latest page scroll position, shared by the navbar and action bar.
pub fn use_page_scroll() -> Signal<ScrollSnapshot> {
    use_context::<Signal<ScrollSnapshot>>()
}

/// Root application component.
///
/// Provides global styles, site context, and routing. The root element is
/// the page's scroll container so the shared scroll lock can freeze it.
#[component]
pub fn App() -> Element {
    let settings = crate::settings();

    let store = use_context_provider(|| ThemeStore::open(&settings.data_dir));
    let site = use_context_provider(|| settings.site.clone());
    let theme = use_signal(|| store.load_or(site.default_theme));
    use_context_provider(|| theme);

    let (locked, lock) = use_scroll_lock_provider();
    let dialog = use_signal(|| ModalController::<String>::new(lock.clone()));
    use_context_provider(|| dialog);
    use_visibility_provider();

    let mut tracker = use_signal(ScrollTracker::new);
    let mut snapshot = use_signal(ScrollSnapshot::default);
    use_context_provider(|| snapshot);
    let mut root: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut seq = use_signal(MeasureSeq::default);

    let on_scroll = move |_| {
        let ticket = seq.write().begin();
        spawn(async move {
            let Some(element) = root() else {
                return;
            };
            if let Ok(offset) = element.get_scroll_offset().await {
                if !seq.peek().is_current(ticket) {
                    return;
                }
                let next = tracker.write().update(offset.y);
                if next != *snapshot.peek() {
                    snapshot.set(next);
                }
            }
        });
    };

    let root_class = format!(
        "app-root {} {}",
        theme.read().class(),
        scroll_lock_class(locked())
    );

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "{root_class}",
            onmounted: move |e| root.set(Some(e.data())),
            onscroll: on_scroll,
            Router::<Route> {}
        }
    }
}
