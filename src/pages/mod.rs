//! Page components, one per route.

mod coming_soon;
mod contact;
mod home;
mod not_found;

pub use coming_soon::{Collaborations, Events, Gallery, Services};
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
