//! Phoenix Events Site Core Library
//!
//! Headless interaction state for the Phoenix Events & Productions website.
//!
//! ## Overview
//!
//! The site itself is mostly static presentation. The parts with real state
//! transitions live here, free of any UI framework, so they can be tested
//! with plain unit tests and a paused tokio clock:
//!
//! - **Carousel**: scroll-position driven prev/next enablement and active dot
//! - **Rotation**: timer-driven slides that a manual action takes over for good
//! - **Modal**: open/close lifecycle with a counted, RAII document scroll lock
//! - **Route guard**: blocked destinations open a "coming soon" dialog instead
//!
//! Supporting pieces: the WhatsApp contact hand-off, the persisted light/dark
//! preference, a visibility observer for reveal animations, page scroll
//! tracking and gallery filtering.
//!
//! ## Quick Start
//!
//! ```
//! use phoenix_core::{RotationController, BLOCKED_ROUTES, NavigationDecision};
//!
//! let mut hero = RotationController::hero(3);
//! let token = hero.token().unwrap();
//! hero.tick(token);
//! hero.next();
//! assert!(!hero.tick(token));
//! assert_eq!(hero.current_index(), 2);
//!
//! assert_eq!(BLOCKED_ROUTES.guard("/gallery"), NavigationDecision::Intercept);
//! ```

pub mod carousel;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod modal;
pub mod navigation;
pub mod rotation;
pub mod route_guard;
pub mod scroll_direction;
pub mod theme;
pub mod visibility;

// Re-exports
pub use carousel::{
    CarouselConfig, CarouselController, CarouselState, ScrollDirection, ScrollGeometry,
    ScrollRequest,
};
pub use config::SiteConfig;
pub use contact::{whatsapp_link, ContactField, ContactForm};
pub use error::{SiteError, SiteResult};
pub use gallery::{filter_items, GalleryItem};
pub use modal::{
    CloseRequest, CloseToken, DismissTrigger, GestureOutcome, KeyOutcome, Lightbox, LightboxKey,
    ModalController, ModalPhase, ScrollLock, ScrollLockGuard, ScrollSurface, TouchGesture,
};
pub use navigation::{NavAction, NavLink};
pub use rotation::{
    spawn_auto_rotation, Direction, RotationController, RotationMode, RotationState,
    SharedRotation, TickToken,
};
pub use route_guard::{NavigationDecision, RouteBlockRegistry, BLOCKED_ROUTES};
pub use scroll_direction::{ScrollSnapshot, ScrollTracker};
pub use theme::{ThemeMode, ThemeStore};
pub use visibility::{Subscription, SubscriptionId, VisibilityObserver};
