//! Hooks shared by the components and the application.

mod input;
mod rotation;
mod scroll_lock;
mod visibility;

pub use input::{element_id, lightbox_key, schedule_close, MeasureSeq};
pub use rotation::{use_rotation, use_rotation_reset};
pub use scroll_lock::{scroll_lock_class, use_scroll_lock, use_scroll_lock_provider, SignalSurface};
pub use visibility::{use_reveal, use_visibility_provider, RevealHandle};
