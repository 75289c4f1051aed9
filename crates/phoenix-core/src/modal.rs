//! Modal and lightbox lifecycle.
//!
//! ## Scroll lock
//!
//! While any overlay is open the page behind it must not scroll. The lock is
//! a document-wide resource shared by every modal:
//!
//! - [`ScrollLock::acquire`] hands out a [`ScrollLockGuard`]
//! - the guard releases in `Drop`, so every exit path (close button,
//!   backdrop, Escape, gesture, navigation, or the view unmounting while
//!   open) releases exactly once
//! - the lock is counted; the surface is unlocked when the last guard drops,
//!   so two overlays open at once stack instead of unlocking early
//!
//! ## Close grace period
//!
//! A controller built with a grace period closes in two steps:
//! [`ModalController::request_close`] moves to [`ModalPhase::Closing`] and
//! returns a [`CloseRequest::Deferred`] with a token; the UI waits out the
//! animation and calls [`ModalController::finish_close`]. Re-opening during
//! the grace period invalidates that token.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, trace};

/// Close animation length used by the lightbox.
pub const CLOSE_GRACE: Duration = Duration::from_millis(200);

/// Horizontal drag distance that counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Drags shorter than this on both axes count as a tap.
pub const TAP_SLOP: f64 = 30.0;

/// Applies the actual "document does not scroll" side effect.
pub trait ScrollSurface {
    fn set_scroll_locked(&self, locked: bool);
}

/// Surface that does nothing; for headless hosts and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSurface;

impl ScrollSurface for NoopSurface {
    fn set_scroll_locked(&self, _locked: bool) {}
}

struct LockInner {
    depth: Cell<usize>,
    acquired: Cell<u64>,
    released: Cell<u64>,
    surface: Box<dyn ScrollSurface>,
}

/// Acquire/release totals, for verifying symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockStats {
    pub acquired: u64,
    pub released: u64,
}

/// Counted, document-wide scroll lock. Cloning shares the same lock.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<LockInner>,
}

impl ScrollLock {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            inner: Rc::new(LockInner {
                depth: Cell::new(0),
                acquired: Cell::new(0),
                released: Cell::new(0),
                surface: Box::new(surface),
            }),
        }
    }

    /// A lock with no visible side effect.
    pub fn detached() -> Self {
        Self::new(NoopSurface)
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let depth = self.inner.depth.get() + 1;
        self.inner.depth.set(depth);
        self.inner.acquired.set(self.inner.acquired.get() + 1);
        if depth == 1 {
            self.inner.surface.set_scroll_locked(true);
        }
        trace!(depth, "scroll lock acquired");
        ScrollLockGuard { lock: self.clone() }
    }

    pub fn is_locked(&self) -> bool {
        self.inner.depth.get() > 0
    }

    pub fn depth(&self) -> usize {
        self.inner.depth.get()
    }

    pub fn stats(&self) -> LockStats {
        LockStats {
            acquired: self.inner.acquired.get(),
            released: self.inner.released.get(),
        }
    }

    fn release(&self) {
        let depth = self.inner.depth.get().saturating_sub(1);
        self.inner.depth.set(depth);
        self.inner.released.set(self.inner.released.get() + 1);
        if depth == 0 {
            self.inner.surface.set_scroll_locked(false);
        }
        trace!(depth, "scroll lock released");
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("depth", &self.depth())
            .field("stats", &self.stats())
            .finish()
    }
}

/// Held while an overlay is open. Dropping it releases the lock.
#[derive(Debug)]
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    /// Close animation running; still rendered, lock still held.
    Closing,
}

/// What asked the modal to close. All paths behave the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    Backdrop,
    Escape,
    Gesture,
    Navigation,
}

/// Identifies one pending close; stale after a re-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseRequest {
    /// Modal was not open, or a close is already pending.
    Ignored,
    /// Closed and released now.
    Immediate,
    /// Call [`ModalController::finish_close`] with `token` after `delay`.
    Deferred { delay: Duration, token: CloseToken },
}

/// Open/close state for one overlay.
#[derive(Debug)]
pub struct ModalController<T> {
    lock: ScrollLock,
    grace: Option<Duration>,
    phase: ModalPhase,
    payload: Option<T>,
    guard: Option<ScrollLockGuard>,
    close_generation: u64,
}

impl<T> ModalController<T> {
    /// A modal whose close takes effect immediately.
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            lock,
            grace: None,
            phase: ModalPhase::Closed,
            payload: None,
            guard: None,
            close_generation: 0,
        }
    }

    /// A modal that keeps rendering for `grace` after a close request.
    pub fn with_grace(lock: ScrollLock, grace: Duration) -> Self {
        Self {
            grace: Some(grace),
            ..Self::new(lock)
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// True while open or closing (i.e. while it should be rendered).
    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_closing(&self) -> bool {
        self.phase == ModalPhase::Closing
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Show the modal with `payload`, acquiring the scroll lock if not held.
    ///
    /// Opening while already open replaces the payload. Opening during the
    /// close grace period cancels the pending close.
    pub fn open(&mut self, payload: T) {
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
        if self.phase == ModalPhase::Closing {
            self.close_generation += 1;
        }
        self.phase = ModalPhase::Open;
        self.payload = Some(payload);
        debug!("modal opened");
    }

    pub fn request_close(&mut self) -> CloseRequest {
        match (self.phase, self.grace) {
            (ModalPhase::Closed, _) | (ModalPhase::Closing, _) => CloseRequest::Ignored,
            (ModalPhase::Open, None) => {
                self.close_now();
                CloseRequest::Immediate
            }
            (ModalPhase::Open, Some(delay)) => {
                self.phase = ModalPhase::Closing;
                self.close_generation += 1;
                CloseRequest::Deferred {
                    delay,
                    token: CloseToken(self.close_generation),
                }
            }
        }
    }

    /// Complete a deferred close. Returns false if the token went stale.
    pub fn finish_close(&mut self, token: CloseToken) -> bool {
        if self.phase != ModalPhase::Closing || token.0 != self.close_generation {
            return false;
        }
        self.close_now();
        true
    }

    /// Route a dismissal through [`request_close`](Self::request_close).
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> CloseRequest {
        debug!(?trigger, "modal dismiss");
        self.request_close()
    }

    /// Close immediately, skipping any grace period.
    pub fn force_close(&mut self) {
        if self.phase != ModalPhase::Closed {
            self.close_generation += 1;
            self.close_now();
        }
    }

    fn close_now(&mut self) {
        self.phase = ModalPhase::Closed;
        self.payload = None;
        // Dropping the guard releases the lock.
        self.guard = None;
        debug!("modal closed");
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Closed(CloseRequest),
    Moved(usize),
    Ignored,
}

/// A single touch drag on the lightbox content, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchGesture {
    pub start: (f64, f64),
    /// Last touch-move position; `None` if the finger never moved.
    pub end: Option<(f64, f64)>,
}

impl TouchGesture {
    pub fn new(start: (f64, f64)) -> Self {
        Self { start, end: None }
    }

    pub fn moved_to(mut self, end: (f64, f64)) -> Self {
        self.end = Some(end);
        self
    }

    /// (dx, dy) from start to end; zero if never moved.
    pub fn displacement(&self) -> (f64, f64) {
        match self.end {
            Some((x, y)) => (x - self.start.0, y - self.start.1),
            None => (0.0, 0.0),
        }
    }

    pub fn classify(&self) -> GestureKind {
        let (dx, dy) = self.displacement();
        if dx <= -SWIPE_THRESHOLD {
            GestureKind::SwipeLeft
        } else if dx >= SWIPE_THRESHOLD {
            GestureKind::SwipeRight
        } else if dx.abs() < TAP_SLOP && dy.abs() < TAP_SLOP {
            GestureKind::Tap
        } else {
            GestureKind::Drag
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Finger moved left: show the next image
    SwipeLeft,
    /// Finger moved right: show the previous image
    SwipeRight,
    Tap,
    /// Neither a clear swipe nor a tap (e.g. a vertical scroll attempt)
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Moved(usize),
    Closed(CloseRequest),
    Ignored,
}

/// Multi-item image viewer on top of a [`ModalController`].
#[derive(Debug)]
pub struct Lightbox<T> {
    modal: ModalController<Vec<T>>,
    index: usize,
}

impl<T> Lightbox<T> {
    /// Lightbox with the standard close animation.
    pub fn new(lock: ScrollLock) -> Self {
        Self::with_grace(lock, CLOSE_GRACE)
    }

    /// Lightbox whose close animation lasts `grace`.
    pub fn with_grace(lock: ScrollLock, grace: Duration) -> Self {
        Self {
            modal: ModalController::with_grace(lock, grace),
            index: 0,
        }
    }

    pub fn modal(&self) -> &ModalController<Vec<T>> {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalController<Vec<T>> {
        &mut self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.modal.payload().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn items(&self) -> &[T] {
        self.modal.payload().map_or(&[], Vec::as_slice)
    }

    /// The item on screen; `None` for an empty gallery.
    pub fn current(&self) -> Option<&T> {
        self.items().get(self.index)
    }

    /// Open over `items` at `index` (clamped). An empty list opens an inert modal.
    pub fn open_at(&mut self, items: Vec<T>, index: usize) {
        self.index = if items.is_empty() {
            0
        } else {
            index.min(items.len() - 1)
        };
        self.modal.open(items);
    }

    pub fn next(&mut self) -> usize {
        let len = self.len();
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        let len = self.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
        self.index
    }

    pub fn jump_to(&mut self, index: usize) -> usize {
        let len = self.len();
        if len > 0 {
            self.index = index % len;
        }
        self.index
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger) -> CloseRequest {
        self.modal.dismiss(trigger)
    }

    pub fn finish_close(&mut self, token: CloseToken) -> bool {
        let closed = self.modal.finish_close(token);
        if closed {
            self.index = 0;
        }
        closed
    }

    /// Keyboard handling while open. Arrow keys never close.
    pub fn handle_key(&mut self, key: LightboxKey) -> KeyOutcome {
        if self.modal.phase() != ModalPhase::Open {
            return KeyOutcome::Ignored;
        }
        match key {
            LightboxKey::Escape => KeyOutcome::Closed(self.dismiss(DismissTrigger::Escape)),
            LightboxKey::ArrowRight => KeyOutcome::Moved(self.next()),
            LightboxKey::ArrowLeft => KeyOutcome::Moved(self.prev()),
            LightboxKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Touch handling while open: swipes navigate, taps dismiss, other drags
    /// are left alone.
    pub fn handle_gesture(&mut self, gesture: TouchGesture) -> GestureOutcome {
        if self.modal.phase() != ModalPhase::Open {
            return GestureOutcome::Ignored;
        }
        match gesture.classify() {
            GestureKind::SwipeLeft => GestureOutcome::Moved(self.next()),
            GestureKind::SwipeRight => GestureOutcome::Moved(self.prev()),
            GestureKind::Tap => GestureOutcome::Closed(self.dismiss(DismissTrigger::Gesture)),
            GestureKind::Drag => GestureOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct RecordingSurface(Rc<RefCell<Vec<bool>>>);

    impl ScrollSurface for RecordingSurface {
        fn set_scroll_locked(&self, locked: bool) {
            self.0.borrow_mut().push(locked);
        }
    }

    #[test]
    fn guard_releases_on_drop() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());
        {
            let _guard = lock.acquire();
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        assert_eq!(*surface.0.borrow(), vec![true, false]);
    }

    #[test]
    fn nested_guards_unlock_on_last_release() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());
        let a = lock.acquire();
        let b = lock.acquire();
        drop(a);
        assert!(lock.is_locked());
        drop(b);
        assert!(!lock.is_locked());
        assert_eq!(*surface.0.borrow(), vec![true, false]);
        assert_eq!(lock.stats(), LockStats { acquired: 2, released: 2 });
    }

    #[test]
    fn immediate_close_releases() {
        let lock = ScrollLock::detached();
        let mut modal: ModalController<()> = ModalController::new(lock.clone());
        modal.open(());
        assert!(lock.is_locked());
        assert_eq!(modal.dismiss(DismissTrigger::Backdrop), CloseRequest::Immediate);
        assert!(!modal.is_open());
        assert!(!lock.is_locked());
        assert_eq!(modal.request_close(), CloseRequest::Ignored);
    }

    #[test]
    fn deferred_close_holds_lock_until_finished() {
        let lock = ScrollLock::detached();
        let mut modal = ModalController::with_grace(lock.clone(), CLOSE_GRACE);
        modal.open("photo");
        let CloseRequest::Deferred { delay, token } = modal.request_close() else {
            panic!("expected deferred close");
        };
        assert_eq!(delay, CLOSE_GRACE);
        assert!(modal.is_closing());
        assert!(lock.is_locked());
        assert_eq!(modal.request_close(), CloseRequest::Ignored);
        assert!(modal.finish_close(token));
        assert!(!lock.is_locked());
        assert!(modal.payload().is_none());
        assert!(!modal.finish_close(token));
    }

    #[test]
    fn reopen_during_grace_invalidates_close() {
        let lock = ScrollLock::detached();
        let mut modal = ModalController::with_grace(lock.clone(), CLOSE_GRACE);
        modal.open(1);
        let CloseRequest::Deferred { token, .. } = modal.request_close() else {
            panic!("expected deferred close");
        };
        modal.open(2);
        assert!(!modal.finish_close(token));
        assert_eq!(modal.payload(), Some(&2));
        assert_eq!(lock.stats().acquired, 1);
    }

    #[test]
    fn unmount_while_open_releases() {
        let lock = ScrollLock::detached();
        {
            let mut modal: ModalController<()> = ModalController::new(lock.clone());
            modal.open(());
        }
        assert!(!lock.is_locked());
        assert_eq!(lock.stats(), LockStats { acquired: 1, released: 1 });
    }

    #[test]
    fn gesture_classification() {
        let start = (200.0, 300.0);
        assert_eq!(TouchGesture::new(start).classify(), GestureKind::Tap);
        assert_eq!(
            TouchGesture::new(start).moved_to((120.0, 300.0)).classify(),
            GestureKind::SwipeLeft
        );
        assert_eq!(
            TouchGesture::new(start).moved_to((260.0, 310.0)).classify(),
            GestureKind::SwipeRight
        );
        assert_eq!(
            TouchGesture::new(start).moved_to((210.0, 220.0)).classify(),
            GestureKind::Drag
        );
        assert_eq!(
            TouchGesture::new(start).moved_to((160.0, 300.0)).classify(),
            GestureKind::Drag
        );
    }

    #[test]
    fn empty_lightbox_is_inert() {
        let lock = ScrollLock::detached();
        let mut lightbox: Lightbox<&str> = Lightbox::new(lock);
        lightbox.open_at(Vec::new(), 4);
        assert!(lightbox.is_open());
        assert!(lightbox.current().is_none());
        assert_eq!(lightbox.handle_key(LightboxKey::ArrowRight), KeyOutcome::Moved(0));
        assert_eq!(lightbox.jump_to(3), 0);
    }

    #[test]
    fn lightbox_grace_reaches_close_request() {
        let lock = ScrollLock::detached();
        let grace = Duration::from_millis(450);
        let mut lightbox = Lightbox::with_grace(lock.clone(), grace);
        lightbox.open_at(vec!["a", "b"], 1);
        match lightbox.dismiss(DismissTrigger::Backdrop) {
            CloseRequest::Deferred { delay, token } => {
                assert_eq!(delay, grace);
                assert!(lock.is_locked());
                assert!(lightbox.finish_close(token));
            }
            other => panic!("expected deferred close, got {:?}", other),
        }
        assert!(!lock.is_locked());
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn keys_ignored_while_closing() {
        let lock = ScrollLock::detached();
        let mut lightbox = Lightbox::new(lock);
        lightbox.open_at(vec!["a", "b"], 0);
        lightbox.handle_key(LightboxKey::Escape);
        assert_eq!(lightbox.handle_key(LightboxKey::ArrowRight), KeyOutcome::Ignored);
        assert_eq!(lightbox.index(), 0);
    }
}
