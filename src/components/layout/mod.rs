//! Navbar, footer and the other pieces every page shares.

mod footer;
mod guarded_link;
mod layout;
mod navbar;
mod theme_toggle;
mod whatsapp_button;

pub use footer::Footer;
pub use guarded_link::GuardedLink;
pub use layout::Layout;
pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
pub use whatsapp_button::{MobileActionBar, WhatsAppButton};
