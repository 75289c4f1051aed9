//! Reusable site components.

mod button;
mod carousel;
mod category_pills;
mod dialog;
mod input;
mod lightbox;
mod reveal;
mod slides;

pub use button::{Button, ButtonVariant, CloseButton, IconButton};
pub use carousel::HorizontalCarousel;
pub use category_pills::CategoryPills;
pub use dialog::{ComingSoonDialog, DialogAction};
pub use input::{Input, Select, TextArea};
pub use lightbox::LightboxView;
pub use reveal::{Reveal, RevealAnimation};
pub use slides::{SlideArrows, SlideDots};
