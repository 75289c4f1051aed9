//! Site-wide tuning knobs.
//!
//! Everything here has a production default; the desktop binary overrides a
//! few fields from the command line.

use std::time::Duration;

use crate::carousel::{CarouselConfig, DEFAULT_SETTLE_DELAY, DEFAULT_SLACK, DEFAULT_STRIDE};
use crate::contact::DEFAULT_WHATSAPP_PHONE;
use crate::modal::CLOSE_GRACE;
use crate::rotation::{HERO_INTERVAL, TESTIMONIAL_INTERVAL};
use crate::route_guard::{RouteBlockRegistry, BLOCKED_ROUTES};
use crate::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// WhatsApp number every CTA hands off to
    pub whatsapp_phone: String,
    pub hero_interval: Duration,
    pub testimonial_interval: Duration,
    pub carousel_stride: f64,
    pub carousel_slack: f64,
    pub carousel_settle: Duration,
    pub lightbox_close_grace: Duration,
    /// Theme used when nothing has been saved yet
    pub default_theme: ThemeMode,
    pub blocked_routes: RouteBlockRegistry,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_string(),
            hero_interval: HERO_INTERVAL,
            testimonial_interval: TESTIMONIAL_INTERVAL,
            carousel_stride: DEFAULT_STRIDE,
            carousel_slack: DEFAULT_SLACK,
            carousel_settle: DEFAULT_SETTLE_DELAY,
            lightbox_close_grace: CLOSE_GRACE,
            default_theme: ThemeMode::Light,
            blocked_routes: BLOCKED_ROUTES,
        }
    }
}

impl SiteConfig {
    pub fn with_whatsapp_phone(mut self, phone: impl Into<String>) -> Self {
        self.whatsapp_phone = phone.into();
        self
    }

    pub fn with_default_theme(mut self, theme: ThemeMode) -> Self {
        self.default_theme = theme;
        self
    }

    /// Carousel settings for a row of `item_count` cards.
    pub fn carousel(&self, item_count: usize) -> CarouselConfig {
        CarouselConfig {
            item_count,
            stride: self.carousel_stride,
            slack: self.carousel_slack,
            settle_delay: self.carousel_settle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.hero_interval, Duration::from_millis(5000));
        assert_eq!(config.testimonial_interval, Duration::from_millis(6000));
        assert_eq!(config.lightbox_close_grace, Duration::from_millis(200));
        assert!(config.blocked_routes.is_blocked("/gallery"));
    }

    #[test]
    fn carousel_inherits_geometry() {
        let config = SiteConfig {
            carousel_stride: 280.0,
            ..SiteConfig::default()
        };
        let carousel = config.carousel(7);
        assert_eq!(carousel.item_count, 7);
        assert_eq!(carousel.stride, 280.0);
        assert_eq!(carousel.slack, DEFAULT_SLACK);
    }
}
