//! Horizontal carousel controller.
//!
//! Tracks the scroll position of a horizontally scrollable row of cards and
//! derives everything the prev/next controls and the position dots need:
//!
//! - `can_scroll_prev` is true once the row has moved off its left edge
//! - `can_scroll_next` is true until the right edge is within `slack` pixels
//! - `active_index` is the card nearest the left edge, by stride
//!
//! The controller owns no timers and touches no DOM. The UI layer feeds it
//! live geometry on every scroll frame and on resize, and performs the
//! smooth scroll described by [`ScrollRequest`].

use std::time::Duration;

use tracing::debug;

/// Default distance scrolled by one prev/next click (card width plus gutter).
pub const DEFAULT_STRIDE: f64 = 320.0;

/// Default tolerance for sub-pixel rounding at the right edge.
pub const DEFAULT_SLACK: f64 = 10.0;

/// Delay after a programmatic scroll before geometry is re-read.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Snapshot of a scroll container's geometry along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    /// Current scroll position (scrollLeft)
    pub offset: f64,
    /// Total scrollable width (scrollWidth)
    pub content_extent: f64,
    /// Visible width (clientWidth)
    pub viewport_extent: f64,
}

impl ScrollGeometry {
    pub fn new(offset: f64, content_extent: f64, viewport_extent: f64) -> Self {
        Self {
            offset,
            content_extent,
            viewport_extent,
        }
    }

    /// Largest offset the container can reach.
    pub fn max_offset(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Whether the geometry describes something that can actually scroll.
    fn is_scrollable(&self) -> bool {
        self.offset.is_finite()
            && self.content_extent.is_finite()
            && self.viewport_extent.is_finite()
            && self.viewport_extent > 0.0
            && self.content_extent > self.viewport_extent
    }
}

/// Carousel tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Number of cards in the row
    pub item_count: usize,
    /// Pixels per prev/next step
    pub stride: f64,
    /// Right-edge tolerance
    pub slack: f64,
    /// How long a smooth scroll is given to settle
    pub settle_delay: Duration,
}

impl CarouselConfig {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    pub fn with_stride(mut self, stride: f64) -> Self {
        self.stride = stride;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            stride: DEFAULT_STRIDE,
            slack: DEFAULT_SLACK,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Derived carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselState {
    pub scroll_offset: f64,
    pub content_extent: f64,
    pub viewport_extent: f64,
    pub active_index: usize,
    pub can_scroll_prev: bool,
    pub can_scroll_next: bool,
}

/// Prev/next control direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Prev,
    Next,
}

impl ScrollDirection {
    /// -1.0 for Prev, +1.0 for Next
    pub fn sign(&self) -> f64 {
        match self {
            ScrollDirection::Prev => -1.0,
            ScrollDirection::Next => 1.0,
        }
    }
}

/// A smooth scroll the UI should perform, followed by a geometry re-read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Signed horizontal distance in pixels
    pub delta: f64,
    /// When to re-read geometry and call [`CarouselController::on_scroll`]
    pub settle_after: Duration,
}

/// Scroll-position driven carousel state machine.
#[derive(Debug, Clone)]
pub struct CarouselController {
    config: CarouselConfig,
    state: CarouselState,
}

impl CarouselController {
    /// Create a controller at offset 0.
    ///
    /// Both directions start disabled; the UI is expected to call
    /// [`on_resize`](Self::on_resize) with live geometry on mount.
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            state: CarouselState::default(),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Recompute state from the current scroll geometry. O(1).
    pub fn on_scroll(&mut self, geometry: ScrollGeometry) -> &CarouselState {
        self.state = self.derive(geometry);
        &self.state
    }

    /// Recompute after a viewport resize. Always uses live geometry.
    pub fn on_resize(&mut self, geometry: ScrollGeometry) -> &CarouselState {
        debug!(
            viewport = geometry.viewport_extent,
            content = geometry.content_extent,
            "carousel resized"
        );
        self.on_scroll(geometry)
    }

    /// Replace the item count (e.g. after a category filter) and re-derive.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.config.item_count = item_count;
        let geometry = ScrollGeometry::new(
            self.state.scroll_offset,
            self.state.content_extent,
            self.state.viewport_extent,
        );
        self.state = self.derive(geometry);
    }

    /// Build the smooth-scroll request for one stride in `direction`.
    pub fn scroll_by(&self, direction: ScrollDirection) -> ScrollRequest {
        ScrollRequest {
            delta: direction.sign() * self.config.stride,
            settle_after: self.config.settle_delay,
        }
    }

    fn derive(&self, geometry: ScrollGeometry) -> CarouselState {
        let mut state = CarouselState {
            scroll_offset: geometry.offset,
            content_extent: geometry.content_extent,
            viewport_extent: geometry.viewport_extent,
            active_index: 0,
            can_scroll_prev: false,
            can_scroll_next: false,
        };

        if self.config.item_count <= 1 || !geometry.is_scrollable() {
            return state;
        }

        let offset = geometry.offset.max(0.0);
        state.can_scroll_prev = offset > 0.0;
        state.can_scroll_next =
            offset < geometry.content_extent - geometry.viewport_extent - self.config.slack;
        state.active_index = self.index_for(offset);
        state
    }

    fn index_for(&self, offset: f64) -> usize {
        if self.config.stride <= 0.0 {
            return 0;
        }
        let last = self.config.item_count.saturating_sub(1);
        let raw = (offset / self.config.stride).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(items: usize) -> CarouselController {
        CarouselController::new(CarouselConfig::new(items))
    }

    #[test]
    fn starts_disabled_until_measured() {
        let c = controller(9);
        assert!(!c.state().can_scroll_prev);
        assert!(!c.state().can_scroll_next);
        assert_eq!(c.state().active_index, 0);
    }

    #[test]
    fn at_left_edge_only_next_enabled() {
        let mut c = controller(9);
        let s = c.on_resize(ScrollGeometry::new(0.0, 2880.0, 1000.0));
        assert!(!s.can_scroll_prev);
        assert!(s.can_scroll_next);
    }

    #[test]
    fn at_right_edge_only_prev_enabled() {
        let mut c = controller(9);
        let s = c.on_scroll(ScrollGeometry::new(1880.0, 2880.0, 1000.0));
        assert!(s.can_scroll_prev);
        assert!(!s.can_scroll_next);
    }

    #[test]
    fn slack_absorbs_subpixel_rounding() {
        let mut c = controller(9);
        let s = c.on_scroll(ScrollGeometry::new(1872.5, 2880.0, 1000.0));
        assert!(!s.can_scroll_next);
    }

    #[test]
    fn single_item_disables_both() {
        let mut c = controller(1);
        let s = c.on_scroll(ScrollGeometry::new(40.0, 2000.0, 500.0));
        assert!(!s.can_scroll_prev);
        assert!(!s.can_scroll_next);
    }

    #[test]
    fn zero_sized_geometry_disables_both() {
        let mut c = controller(5);
        let s = c.on_scroll(ScrollGeometry::default());
        assert!(!s.can_scroll_prev);
        assert!(!s.can_scroll_next);

        let s = c.on_scroll(ScrollGeometry::new(f64::NAN, 1000.0, 200.0));
        assert!(!s.can_scroll_prev);
        assert!(!s.can_scroll_next);
    }

    #[test]
    fn active_index_rounds_and_clamps() {
        let mut c = controller(4);
        assert_eq!(c.on_scroll(ScrollGeometry::new(150.0, 5000.0, 300.0)).active_index, 0);
        assert_eq!(c.on_scroll(ScrollGeometry::new(170.0, 5000.0, 300.0)).active_index, 1);
        assert_eq!(c.on_scroll(ScrollGeometry::new(4000.0, 5000.0, 300.0)).active_index, 3);
    }

    #[test]
    fn scroll_by_uses_signed_stride() {
        let c = CarouselController::new(CarouselConfig::new(6).with_stride(400.0));
        let prev = c.scroll_by(ScrollDirection::Prev);
        let next = c.scroll_by(ScrollDirection::Next);
        assert_eq!(prev.delta, -400.0);
        assert_eq!(next.delta, 400.0);
        assert_eq!(next.settle_after, DEFAULT_SETTLE_DELAY);
    }

    #[test]
    fn shrinking_item_count_reclamps_index() {
        let mut c = controller(9);
        c.on_scroll(ScrollGeometry::new(1600.0, 2880.0, 1000.0));
        assert_eq!(c.state().active_index, 5);
        c.set_item_count(3);
        assert_eq!(c.state().active_index, 2);
        c.set_item_count(1);
        assert!(!c.state().can_scroll_next);
    }
}
