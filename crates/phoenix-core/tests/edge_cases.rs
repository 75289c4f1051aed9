//! Edge case and boundary condition tests
//!
//! These tests verify the defensive guards: empty lists, missing geometry,
//! missing or damaged preference files.

use phoenix_core::gallery::{filter_items, GalleryItem};
use phoenix_core::theme::{ThemeStore, PREFERENCES_FILE};
use phoenix_core::visibility::visible_ratio;
use phoenix_core::{
    CarouselConfig, CarouselController, Lightbox, ScrollGeometry, ScrollLock, Subscription,
    ThemeMode, VisibilityObserver,
};
use tempfile::TempDir;

// ============================================================================
// Empty Input Tests
// ============================================================================

/// Carousel with no cards never enables either control
#[test]
fn test_empty_carousel() {
    let mut carousel = CarouselController::new(CarouselConfig::new(0));
    let state = carousel.on_scroll(ScrollGeometry::new(250.0, 3000.0, 800.0));
    assert!(!state.can_scroll_prev);
    assert!(!state.can_scroll_next);
    assert_eq!(state.active_index, 0);
}

/// Filtering down to nothing gives an inert lightbox
#[test]
fn test_lightbox_over_empty_filter() {
    let items = vec![GalleryItem::new("a.jpg", "Ceremony", "Weddings")];
    let filtered: Vec<GalleryItem> = filter_items(&items, "Corporate")
        .into_iter()
        .cloned()
        .collect();

    let lock = ScrollLock::detached();
    let mut lightbox = Lightbox::new(lock.clone());
    lightbox.open_at(filtered, 3);

    assert!(lightbox.current().is_none());
    assert_eq!(lightbox.next(), 0);
    assert_eq!(lightbox.prev(), 0);
    assert!(lock.is_locked());
}

/// Out-of-range open index is clamped to the last item
#[test]
fn test_lightbox_open_index_clamped() {
    let mut lightbox = Lightbox::new(ScrollLock::detached());
    lightbox.open_at(vec!["a", "b"], 10);
    assert_eq!(lightbox.index(), 1);
}

// ============================================================================
// Geometry Tests
// ============================================================================

/// Negative offsets (rubber-band overscroll) count as the left edge
#[test]
fn test_overscroll_is_left_edge() {
    let mut carousel = CarouselController::new(CarouselConfig::new(6));
    let state = carousel.on_scroll(ScrollGeometry::new(-12.0, 2000.0, 600.0));
    assert!(!state.can_scroll_prev);
    assert!(state.can_scroll_next);
}

/// Infinite geometry is treated as missing
#[test]
fn test_infinite_geometry() {
    let mut carousel = CarouselController::new(CarouselConfig::new(6));
    let state = carousel.on_scroll(ScrollGeometry::new(0.0, f64::INFINITY, 600.0));
    assert!(!state.can_scroll_next);
}

/// Visibility reported for a zero-height element never fires
#[test]
fn test_zero_height_section() {
    let mut observer = VisibilityObserver::new();
    let id = observer.subscribe(Subscription::default());
    assert!(!observer.report(id, visible_ratio(100.0, 0.0, 900.0)));
    assert!(!observer.report(id, f64::NAN));
}

// ============================================================================
// Preference File Tests
// ============================================================================

#[test]
fn test_theme_survives_restart() {
    let dir = TempDir::new().unwrap();

    let store = ThemeStore::open(dir.path());
    let toggled = store.load().toggle();
    store.save(toggled).unwrap();

    let reopened = ThemeStore::open(dir.path());
    assert_eq!(reopened.load(), ThemeMode::Dark);
}

#[test]
fn test_unknown_theme_value_loads_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(PREFERENCES_FILE),
        r#"{"phoenix-theme":"sepia"}"#,
    )
    .unwrap();

    assert_eq!(ThemeStore::open(dir.path()).load(), ThemeMode::Light);
}

#[test]
fn test_wrong_json_shape_loads_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(PREFERENCES_FILE), "[1, 2, 3]").unwrap();

    assert_eq!(ThemeStore::open(dir.path()).load(), ThemeMode::Light);
}
