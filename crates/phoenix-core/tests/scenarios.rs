//! End-to-end interaction scenarios
//!
//! Each test drives a controller the way the UI does: timer loops on a paused
//! tokio clock, key presses and dismissals in sequence.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use phoenix_core::modal::LockStats;
use phoenix_core::navigation::{all_links, NavAction};
use phoenix_core::{
    spawn_auto_rotation, CarouselConfig, CarouselController, CloseRequest, ContactForm,
    DismissTrigger, KeyOutcome, Lightbox, LightboxKey, ModalController, RotationController,
    ScrollDirection, ScrollGeometry, ScrollLock, SharedRotation, SiteConfig, TouchGesture,
    BLOCKED_ROUTES,
};

fn shared(controller: RotationController) -> SharedRotation {
    Arc::new(Mutex::new(controller))
}

// ============================================================================
// Rotation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_hero_rotator_after_twelve_seconds() {
    let _ = tracing_subscriber::fmt::try_init();
    let hero = shared(RotationController::hero(3));
    let handle = spawn_auto_rotation(hero.clone()).expect("timer should start");

    tokio::time::sleep(Duration::from_millis(12_000)).await;

    assert_eq!(hero.lock().current_index(), 2);
    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_manual_next_stops_timer() {
    let _ = tracing_subscriber::fmt::try_init();
    let hero = shared(RotationController::hero(3));
    let handle = spawn_auto_rotation(hero.clone()).expect("timer should start");

    hero.lock().next();
    assert_eq!(hero.lock().current_index(), 1);

    tokio::time::sleep(Duration::from_millis(5_500)).await;

    assert_eq!(hero.lock().current_index(), 1);
    assert!(handle.is_finished(), "stale timer loop should exit");
}

#[tokio::test(start_paused = true)]
async fn test_manual_after_some_ticks_wins() {
    let _ = tracing_subscriber::fmt::try_init();
    let testimonials = shared(RotationController::testimonials(4));
    let handle = spawn_auto_rotation(testimonials.clone()).expect("timer should start");

    tokio::time::sleep(Duration::from_millis(6_100)).await;
    assert_eq!(testimonials.lock().current_index(), 1);

    testimonials.lock().prev();
    tokio::time::sleep(Duration::from_millis(60_000)).await;

    assert_eq!(testimonials.lock().current_index(), 0);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_theme_swap_restarts_rotation() {
    let _ = tracing_subscriber::fmt::try_init();
    let hero = shared(RotationController::hero(4));
    let first = spawn_auto_rotation(hero.clone()).expect("timer should start");

    hero.lock().select(3);
    hero.lock().reset_items(3);
    let second = spawn_auto_rotation(hero.clone()).expect("timer restarts after reset");

    tokio::time::sleep(Duration::from_millis(5_001)).await;

    assert_eq!(hero.lock().current_index(), 1);
    assert!(first.is_finished());
    second.abort();
}

#[test]
fn test_single_image_hero_never_starts_timer() {
    assert!(spawn_auto_rotation(shared(RotationController::hero(1))).is_none());
}

// ============================================================================
// Lightbox
// ============================================================================

#[test]
fn test_lightbox_keyboard_navigation() {
    let lock = ScrollLock::detached();
    let mut lightbox = Lightbox::new(lock.clone());
    lightbox.open_at(vec!["one.jpg", "two.jpg", "three.jpg"], 0);

    assert_eq!(lightbox.handle_key(LightboxKey::ArrowRight), KeyOutcome::Moved(1));
    assert_eq!(lightbox.handle_key(LightboxKey::ArrowRight), KeyOutcome::Moved(2));
    assert_eq!(lightbox.handle_key(LightboxKey::ArrowLeft), KeyOutcome::Moved(1));
    assert_eq!(lightbox.current(), Some(&"two.jpg"));
    assert!(lightbox.is_open());
    assert!(lock.is_locked());
}

#[test]
fn test_lightbox_wraps_both_ways() {
    let mut lightbox = Lightbox::new(ScrollLock::detached());
    lightbox.open_at(vec![1, 2, 3], 2);
    assert_eq!(lightbox.handle_key(LightboxKey::ArrowRight), KeyOutcome::Moved(0));
    assert_eq!(lightbox.handle_key(LightboxKey::ArrowLeft), KeyOutcome::Moved(2));
}

#[test]
fn test_lightbox_swipe_then_tap() {
    let lock = ScrollLock::detached();
    let mut lightbox = Lightbox::new(lock.clone());
    lightbox.open_at(vec!["a", "b", "c"], 1);

    let swipe_left = TouchGesture::new((300.0, 400.0)).moved_to((180.0, 410.0));
    lightbox.handle_gesture(swipe_left);
    assert_eq!(lightbox.index(), 2);

    let scroll_attempt = TouchGesture::new((300.0, 400.0)).moved_to((305.0, 250.0));
    lightbox.handle_gesture(scroll_attempt);
    assert!(lightbox.is_open());

    let tap = TouchGesture::new((300.0, 400.0));
    let phoenix_core::GestureOutcome::Closed(CloseRequest::Deferred { token, .. }) =
        lightbox.handle_gesture(tap)
    else {
        panic!("tap should start a deferred close");
    };
    assert!(lightbox.finish_close(token));
    assert!(!lock.is_locked());
}

// ============================================================================
// Scroll lock symmetry
// ============================================================================

#[test]
fn test_every_dismissal_path_releases_once() {
    let triggers = [
        DismissTrigger::CloseButton,
        DismissTrigger::Backdrop,
        DismissTrigger::Escape,
        DismissTrigger::Gesture,
        DismissTrigger::Navigation,
    ];
    for trigger in triggers {
        let lock = ScrollLock::detached();
        let mut lightbox = Lightbox::new(lock.clone());
        lightbox.open_at(vec!["x"], 0);

        match lightbox.dismiss(trigger) {
            CloseRequest::Deferred { token, .. } => assert!(lightbox.finish_close(token)),
            other => panic!("unexpected close request {:?}", other),
        }

        assert!(!lock.is_locked(), "{:?} left the lock held", trigger);
        assert_eq!(lock.stats(), LockStats { acquired: 1, released: 1 });
    }
}

#[test]
fn test_lightbox_and_dialog_stack_on_one_lock() {
    let lock = ScrollLock::detached();
    let mut lightbox = Lightbox::new(lock.clone());
    let mut dialog: ModalController<()> = ModalController::new(lock.clone());

    lightbox.open_at(vec!["a"], 0);
    dialog.open(());
    assert_eq!(lock.depth(), 2);

    dialog.dismiss(DismissTrigger::Escape);
    assert!(lock.is_locked(), "lightbox still open");

    drop(lightbox);
    assert!(!lock.is_locked());
    assert_eq!(lock.stats(), LockStats { acquired: 2, released: 2 });
}

// ============================================================================
// Route guard
// ============================================================================

#[test]
fn test_route_guard_completeness() {
    let mut intercepted = 0;
    for link in all_links() {
        match link.action(&BLOCKED_ROUTES) {
            NavAction::ComingSoon => {
                assert!(BLOCKED_ROUTES.is_blocked(link.href));
                intercepted += 1;
            }
            NavAction::Route(path) => assert!(!BLOCKED_ROUTES.is_blocked(path)),
            NavAction::External(href) => panic!("unexpected external link {}", href),
        }
    }
    assert!(intercepted > 0);

    for path in ["/gallery", "/events", "/services", "/collaborations"] {
        assert!(BLOCKED_ROUTES.guard(path).is_intercepted());
    }
}

#[test]
fn test_coming_soon_dialog_from_blocked_link() {
    let lock = ScrollLock::detached();
    let mut dialog: ModalController<()> = ModalController::new(lock.clone());

    if BLOCKED_ROUTES.guard("/services").is_intercepted() {
        dialog.open(());
    }
    assert!(dialog.is_open());

    // "Contact Us" inside the dialog closes it before navigating
    assert_eq!(dialog.dismiss(DismissTrigger::Navigation), CloseRequest::Immediate);
    assert!(!lock.is_locked());
}

// ============================================================================
// Carousel
// ============================================================================

#[test]
fn test_carousel_click_through_to_end() {
    let config = SiteConfig::default();
    let mut carousel = CarouselController::new(config.carousel(9));
    let content = 9.0 * 320.0;
    let viewport = 1000.0;
    let mut offset = 0.0;

    carousel.on_resize(ScrollGeometry::new(offset, content, viewport));
    while carousel.state().can_scroll_next {
        let request = carousel.scroll_by(ScrollDirection::Next);
        offset = (offset + request.delta).min(content - viewport);
        carousel.on_scroll(ScrollGeometry::new(offset, content, viewport));
    }

    assert_eq!(offset, content - viewport);
    assert!(carousel.state().can_scroll_prev);
    assert_eq!(carousel.state().active_index, 6);
}

#[test]
fn test_carousel_resize_uses_live_geometry() {
    let mut carousel = CarouselController::new(CarouselConfig::new(5));
    carousel.on_scroll(ScrollGeometry::new(400.0, 1600.0, 800.0));
    assert!(carousel.state().can_scroll_next);

    // Viewport grew to fit everything
    carousel.on_resize(ScrollGeometry::new(0.0, 1600.0, 1600.0));
    assert!(!carousel.state().can_scroll_prev);
    assert!(!carousel.state().can_scroll_next);
}

// ============================================================================
// Contact hand-off
// ============================================================================

#[test]
fn test_contact_handoff() {
    let config = SiteConfig::default();
    let form = ContactForm {
        name: "Jane".into(),
        phone: "555-1234".into(),
        event_type: "Wedding".into(),
        ..Default::default()
    };

    let link = form.handoff_link(&config.whatsapp_phone).unwrap();

    assert!(link.starts_with(&format!("https://wa.me/{}?text=", config.whatsapp_phone)));
    for needle in ["Jane", "555-1234", "Wedding"] {
        assert!(link.contains(needle), "missing {}", needle);
    }
}
