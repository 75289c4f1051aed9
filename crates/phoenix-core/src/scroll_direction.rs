//! Page scroll tracking for the navbar and the mobile action bar.
//!
//! The navbar turns opaque once the page is scrolled past
//! [`NAVBAR_SCROLL_THRESHOLD`]; the mobile action bar hides while the visitor
//! scrolls down and reappears as soon as they scroll up.

/// Vertical offset after which the navbar is considered "scrolled".
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Ignore movements smaller than this when deciding direction.
pub const DIRECTION_JITTER: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalDirection {
    Up,
    Down,
    #[default]
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSnapshot {
    pub direction: VerticalDirection,
    pub at_top: bool,
    /// Past the navbar threshold
    pub scrolled: bool,
}

impl ScrollSnapshot {
    /// Whether the floating mobile action bar should be shown.
    pub fn show_action_bar(&self) -> bool {
        !self.at_top && self.direction != VerticalDirection::Down
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    last_y: f64,
    snapshot: ScrollSnapshot,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            last_y: 0.0,
            snapshot: ScrollSnapshot {
                at_top: true,
                ..ScrollSnapshot::default()
            },
        }
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.snapshot
    }

    /// Feed the current window scroll position.
    pub fn update(&mut self, y: f64) -> ScrollSnapshot {
        let y = if y.is_finite() { y.max(0.0) } else { 0.0 };
        let delta = y - self.last_y;
        if delta.abs() >= DIRECTION_JITTER {
            self.snapshot.direction = if delta > 0.0 {
                VerticalDirection::Down
            } else {
                VerticalDirection::Up
            };
            self.last_y = y;
        }
        self.snapshot.at_top = y < DIRECTION_JITTER;
        self.snapshot.scrolled = y > NAVBAR_SCROLL_THRESHOLD;
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_top_without_action_bar() {
        let tracker = ScrollTracker::new();
        assert!(tracker.snapshot().at_top);
        assert!(!tracker.snapshot().show_action_bar());
    }

    #[test]
    fn hides_bar_while_scrolling_down() {
        let mut tracker = ScrollTracker::new();
        let snap = tracker.update(300.0);
        assert_eq!(snap.direction, VerticalDirection::Down);
        assert!(snap.scrolled);
        assert!(!snap.show_action_bar());

        let snap = tracker.update(200.0);
        assert_eq!(snap.direction, VerticalDirection::Up);
        assert!(snap.show_action_bar());
    }

    #[test]
    fn jitter_keeps_previous_direction() {
        let mut tracker = ScrollTracker::new();
        tracker.update(300.0);
        let snap = tracker.update(298.0);
        assert_eq!(snap.direction, VerticalDirection::Down);
    }

    #[test]
    fn navbar_threshold() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.update(50.0).scrolled);
        assert!(tracker.update(51.0).scrolled);
    }
}
