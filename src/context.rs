//! Site-wide context for Phoenix Events.
//!
//! The App component provides these once; pages and sections read them with
//! the `use_*` hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let theme = use_theme();
//! let site = use_site_config();
//! let mut dialog = use_coming_soon();
//!
//! dialog.write().open("/events".to_string());
//! ```

use dioxus::prelude::*;
use phoenix_core::contact::GREETING;
use phoenix_core::{ModalController, SiteConfig, ThemeMode, ThemeStore};

/// Site configuration, fixed for the life of the window.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Where the theme preference is persisted.
pub fn use_theme_store() -> ThemeStore {
    use_context::<ThemeStore>()
}

/// Current colour theme.
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// The coming-soon dialog. Its payload is the path that was intercepted.
pub fn use_coming_soon() -> Signal<ModalController<String>> {
    use_context::<Signal<ModalController<String>>>()
}

/// Flip the theme and persist it. A failed write keeps the new theme for
/// this session.
pub fn toggle_theme(mut theme: Signal<ThemeMode>, store: &ThemeStore) {
    let next = theme.peek().toggle();
    theme.set(next);
    if let Err(e) = store.save(next) {
        tracing::warn!("Failed to save theme preference: {}", e);
    }
}

/// Greeting hand-off link for the floating button and the CTAs.
pub fn use_greeting_link() -> Option<String> {
    let site = use_site_config();
    use_hook(
        || match phoenix_core::whatsapp_link(&site.whatsapp_phone, GREETING) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("WhatsApp link unavailable: {}", e);
                None
            }
        },
    )
}
