//! Phoenix Events UI Components
//!
//! Dioxus components and hooks that put the `phoenix-core` controllers on
//! screen. The controllers own all state transitions; this crate only feeds
//! them DOM events, geometry and timers, and renders what they decide.
//!
//! ## Layout
//!
//! - [`hooks`]: scroll-lock context, rotation timers, input mapping
//! - [`components`]: buttons, form inputs, carousel, lightbox, dialog,
//!   slide controls and scroll-reveal wrapper
//!
//! ## Theme
//!
//! Components render class names only. Colours come from the
//! `theme-light` / `theme-dark` custom properties set by the application.

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
