//! Auto-rotating slide controller.
//!
//! One state machine serves both the hero image rotator and the testimonial
//! rotator. It starts in [`RotationMode::Auto`], advancing on every timer
//! tick, and moves to [`RotationMode::Manual`] the moment the visitor uses
//! prev, next or a dot. Manual is terminal for the lifetime of the
//! controller, except when the item list itself is replaced
//! ([`RotationController::reset_items`]).
//!
//! ## Tick invalidation
//!
//! Each timer loop is handed a [`TickToken`] stamped with the controller's
//! generation. Any manual action or reset bumps the generation, so a tick
//! that was already queued behind a click is rejected instead of fighting the
//! visitor's choice:
//!
//! ```text
//! tick(gen 0)  ──► applied        index 0 → 1
//! next()       ──► Manual, gen 1  index 1 → 2
//! tick(gen 0)  ──► rejected       index stays 2, timer loop exits
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Hero background rotation period.
pub const HERO_INTERVAL: Duration = Duration::from_millis(5000);

/// Testimonial rotation period.
pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_millis(6000);

/// Whether the timer is still in charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    #[default]
    Auto,
    Manual,
}

/// Sign of the last transition. Only used to pick the enter/exit animation side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }

    /// CSS class suffix for the slide animation.
    pub fn class(&self) -> &'static str {
        match self {
            Direction::Backward => "slide-from-left",
            Direction::Still => "slide-still",
            Direction::Forward => "slide-from-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
    pub current_index: usize,
    pub mode: RotationMode,
    pub direction: Direction,
}

impl RotationState {
    pub fn auto_advancing(&self) -> bool {
        self.mode == RotationMode::Auto
    }
}

/// Generation stamp carried by a timer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken(u64);

/// Timer-plus-manual-override state machine.
#[derive(Debug, Clone)]
pub struct RotationController {
    item_count: usize,
    interval: Duration,
    state: RotationState,
    generation: u64,
}

impl RotationController {
    pub fn new(item_count: usize, interval: Duration) -> Self {
        Self {
            item_count,
            interval,
            state: RotationState::default(),
            generation: 0,
        }
    }

    /// Hero image rotator preset (5 s).
    pub fn hero(item_count: usize) -> Self {
        Self::new(item_count, HERO_INTERVAL)
    }

    /// Testimonial rotator preset (6 s).
    pub fn testimonials(item_count: usize) -> Self {
        Self::new(item_count, TESTIMONIAL_INTERVAL)
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_auto(&self) -> bool {
        self.state.auto_advancing()
    }

    /// Token for a timer loop started now.
    ///
    /// Returns `None` once the controller is manual or has nothing to rotate,
    /// in which case no timer should be started at all.
    pub fn token(&self) -> Option<TickToken> {
        (self.is_auto() && self.item_count > 1).then_some(TickToken(self.generation))
    }

    /// Whether a tick stamped with `token` would still be applied.
    pub fn accepts(&self, token: TickToken) -> bool {
        self.is_auto() && token.0 == self.generation
    }

    /// Apply a timer tick. Returns false if the tick was stale and the timer
    /// loop holding `token` should stop.
    pub fn tick(&mut self, token: TickToken) -> bool {
        if !self.accepts(token) {
            debug!(generation = self.generation, "rotation tick rejected");
            return false;
        }
        if self.item_count > 0 {
            self.state.current_index = (self.state.current_index + 1) % self.item_count;
            self.state.direction = Direction::Forward;
        }
        true
    }

    /// Manual step forward.
    pub fn next(&mut self) {
        self.take_manual();
        if self.item_count == 0 {
            return;
        }
        self.state.current_index = (self.state.current_index + 1) % self.item_count;
        self.state.direction = Direction::Forward;
    }

    /// Manual step backward.
    pub fn prev(&mut self) {
        self.take_manual();
        if self.item_count == 0 {
            return;
        }
        self.state.current_index = (self.state.current_index + self.item_count - 1) % self.item_count;
        self.state.direction = Direction::Backward;
    }

    /// Jump to a dot. Out-of-range targets wrap modulo the item count.
    pub fn select(&mut self, index: usize) {
        self.take_manual();
        if self.item_count == 0 {
            return;
        }
        let target = index % self.item_count;
        self.state.direction = match target.cmp(&self.state.current_index) {
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Still,
            std::cmp::Ordering::Greater => Direction::Forward,
        };
        self.state.current_index = target;
    }

    /// The item list was replaced (e.g. theme switch swapped the hero set).
    ///
    /// Returns to index 0 in Auto mode; any earlier manual override is
    /// forgotten and outstanding tokens are invalidated.
    pub fn reset_items(&mut self, item_count: usize) {
        debug!(item_count, "rotation items replaced");
        self.item_count = item_count;
        self.state = RotationState::default();
        self.generation += 1;
    }

    /// Invalidate every outstanding tick without changing mode.
    ///
    /// Used on teardown so a loop that outlives its view cannot mutate state.
    pub fn cancel_timer(&mut self) {
        self.generation += 1;
    }

    fn take_manual(&mut self) {
        if self.state.mode == RotationMode::Auto {
            debug!(index = self.state.current_index, "rotation switched to manual");
        }
        self.state.mode = RotationMode::Manual;
        self.generation += 1;
    }
}

/// Drive an auto-rotation timer until its token goes stale.
///
/// `tick` applies the token to whichever container owns the controller
/// (a Dioxus signal, a mutex) and returns what [`RotationController::tick`]
/// returned. The loop sleeps first, so the first advance happens one full
/// interval after start.
pub async fn run_auto_rotation<F>(interval: Duration, token: TickToken, mut tick: F)
where
    F: FnMut(TickToken) -> bool,
{
    loop {
        tokio::time::sleep(interval).await;
        if !tick(token) {
            break;
        }
    }
}

/// Rotation controller shared with a tokio timer task.
pub type SharedRotation = Arc<Mutex<RotationController>>;

/// Start the auto-rotation timer for `shared` on the current tokio runtime.
///
/// Returns `None` when the controller is already manual or has fewer than two
/// items. The task ends on its own after the first rejected tick; aborting
/// the handle is the teardown path.
pub fn spawn_auto_rotation(shared: SharedRotation) -> Option<JoinHandle<()>> {
    let (interval, token) = {
        let rotation = shared.lock();
        (rotation.interval(), rotation.token()?)
    };
    Some(tokio::spawn(run_auto_rotation(interval, token, move |token| {
        shared.lock().tick(token)
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_and_wraps() {
        let mut r = RotationController::hero(3);
        let token = r.token().unwrap();
        assert!(r.tick(token));
        assert!(r.tick(token));
        assert_eq!(r.current_index(), 2);
        assert!(r.tick(token));
        assert_eq!(r.current_index(), 0);
        assert_eq!(r.state().direction, Direction::Forward);
    }

    #[test]
    fn manual_action_is_irreversible() {
        let mut r = RotationController::testimonials(4);
        let token = r.token().unwrap();
        r.next();
        assert_eq!(r.current_index(), 1);
        assert!(!r.tick(token));
        assert_eq!(r.current_index(), 1);
        assert!(r.token().is_none());
        assert_eq!(r.state().mode, RotationMode::Manual);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut r = RotationController::hero(4);
        r.prev();
        assert_eq!(r.current_index(), 3);
        assert_eq!(r.state().direction, Direction::Backward);
    }

    #[test]
    fn select_direction_compares_without_wraparound() {
        let mut r = RotationController::hero(5);
        r.select(4);
        assert_eq!(r.state().direction, Direction::Forward);
        r.select(0);
        assert_eq!(r.state().direction, Direction::Backward);
        r.select(0);
        assert_eq!(r.state().direction, Direction::Still);
    }

    #[test]
    fn select_out_of_range_wraps() {
        let mut r = RotationController::hero(3);
        r.select(7);
        assert_eq!(r.current_index(), 1);
    }

    #[test]
    fn reset_returns_to_auto() {
        let mut r = RotationController::hero(4);
        let stale = r.token().unwrap();
        r.next();
        r.next();
        r.reset_items(2);
        assert_eq!(r.current_index(), 0);
        assert!(r.is_auto());
        assert!(!r.tick(stale));
        let fresh = r.token().unwrap();
        assert!(r.tick(fresh));
        assert_eq!(r.current_index(), 1);
    }

    #[test]
    fn empty_and_single_lists_never_start_a_timer() {
        let mut empty = RotationController::hero(0);
        assert!(empty.token().is_none());
        empty.next();
        empty.prev();
        empty.select(3);
        assert_eq!(empty.current_index(), 0);

        assert!(RotationController::hero(1).token().is_none());
    }

    #[test]
    fn cancel_timer_keeps_mode() {
        let mut r = RotationController::hero(3);
        let token = r.token().unwrap();
        r.cancel_timer();
        assert!(r.is_auto());
        assert!(!r.tick(token));
    }
}
