//! Reveal Component
//!
//! Wraps a section so it animates in the first time it scrolls into view.

use dioxus::prelude::*;
use phoenix_core::Subscription;

use crate::hooks::use_reveal;

/// Entrance animation for a [`Reveal`] block.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealAnimation {
    #[default]
    FadeUp,
    FadeIn,
    ScaleIn,
    SlideLeft,
    SlideRight,
}

impl RevealAnimation {
    pub fn class(&self) -> &'static str {
        match self {
            RevealAnimation::FadeUp => "reveal-fade-up",
            RevealAnimation::FadeIn => "reveal-fade-in",
            RevealAnimation::ScaleIn => "reveal-scale-in",
            RevealAnimation::SlideLeft => "reveal-slide-left",
            RevealAnimation::SlideRight => "reveal-slide-right",
        }
    }
}

fn reveal_class(animation: RevealAnimation, revealed: bool) -> String {
    if revealed {
        format!("reveal {} visible", animation.class())
    } else {
        format!("reveal {}", animation.class())
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    pub children: Element,
    #[props(default)]
    pub animation: RevealAnimation,
    /// Transition delay in milliseconds, for staggered lists
    #[props(default = 0)]
    pub delay_ms: u32,
    #[props(default = phoenix_core::visibility::DEFAULT_THRESHOLD)]
    pub threshold: f64,
    /// Animate again each time the block re-enters the viewport
    #[props(default = false)]
    pub repeat: bool,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let reveal = use_reveal(Subscription {
        threshold: props.threshold,
        once: !props.repeat,
    });
    let class = reveal_class(props.animation, reveal.is_revealed());

    rsx! {
        div {
            class: "{class}",
            style: "transition-delay: {props.delay_ms}ms",
            onvisible: move |e| {
                if let Ok(ratio) = e.get_intersection_ratio() {
                    reveal.report(ratio);
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_gains_visible_once_revealed() {
        assert_eq!(
            reveal_class(RevealAnimation::FadeUp, false),
            "reveal reveal-fade-up"
        );
        assert_eq!(
            reveal_class(RevealAnimation::SlideLeft, true),
            "reveal reveal-slide-left visible"
        );
    }
}
