//! Site components: page chrome and home page sections.
//!
//! Generic widgets (carousel, lightbox, dialog) live in `phoenix-ui`; the
//! pieces here know about routes, site content and context.

mod external;
pub mod home;
pub mod layout;

pub use external::open_external;
pub use layout::Layout;
