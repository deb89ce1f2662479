//! Landing view scenarios driven through a fake scroll host

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::coordinator::{CoordinatorOptions, LandingLayout, LandingView};
use crate::intersection::ElementBounds;
use crate::metrics::tests::FakeHost;
use crate::tracker::SidebarNode;

const H: f64 = 100.0;

/// hero 0..100, spacer to 170, about 170..270, projects 270..580
/// (items at 280, 380, 480, 50 rows each), contact 580..680
fn layout() -> LandingLayout {
    LandingLayout {
        about: Some(ElementBounds::new(170.0, 100.0)),
        projects_container: Some(ElementBounds::new(270.0, 310.0)),
        items: vec![
            Some(ElementBounds::new(280.0, 50.0)),
            Some(ElementBounds::new(380.0, 50.0)),
            Some(ElementBounds::new(480.0, 50.0)),
        ],
    }
}

fn mount(host: &mut FakeHost, now: Instant) -> LandingView {
    LandingView::mount(&layout(), host, now, CoordinatorOptions::default())
}

fn scroll(view: &mut LandingView, host: &mut FakeHost, y: f64) {
    host.y = y;
    view.on_scroll(host);
}

#[test]
fn test_initial_state() {
    let mut host = FakeHost::new(H, 680.0);
    let view = mount(&mut host, Instant::now());
    let snap = view.snapshot();

    assert_eq!(snap.mask.state.size, 145.0);
    assert!(snap.mask.state.visible);
    assert!(!snap.nav.visible);
    assert!(snap.blur_band_visible);
    assert_eq!(snap.active_project, None);
    assert!(!snap.list_visible);
    assert!(!snap.about_revealed);
    assert!(!snap.first_item_revealed);
    assert_eq!(view.observer_count(), 4);
}

#[test]
fn test_scroll_through_page() {
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, Instant::now());

    scroll(&mut view, &mut host, 150.0);
    let snap = view.snapshot();
    assert!(snap.about_revealed);
    assert!(!snap.first_item_revealed);
    assert_eq!(snap.active_project, None);
    // About reveal observer is released once it fires
    assert_eq!(view.observer_count(), 3);

    scroll(&mut view, &mut host, 200.0);
    let snap = view.snapshot();
    assert!(snap.mask.state.fixed);
    assert_eq!(snap.mask.state.size, 0.0);

    scroll(&mut view, &mut host, 250.0);
    let snap = view.snapshot();
    assert_eq!(snap.active_project, Some(0));
    assert!(snap.first_item_revealed);
    assert!(snap.list_visible);
    assert_eq!(view.observer_count(), 2);

    scroll(&mut view, &mut host, 350.0);
    let snap = view.snapshot();
    assert_eq!(snap.active_project, Some(1));
    assert!(!snap.mask.state.visible);
    assert_eq!(view.sidebar_node(0), SidebarNode::Passed);
    assert_eq!(view.sidebar_node(1), SidebarNode::Active);
    assert!(view.connector_lit(1));
    assert!(!view.connector_lit(2));
}

#[test]
fn test_scrolling_back_keeps_latched_state() {
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, Instant::now());

    for y in [150.0, 250.0, 350.0] {
        scroll(&mut view, &mut host, y);
    }
    scroll(&mut view, &mut host, 0.0);

    let snap = view.snapshot();
    assert_eq!(snap.active_project, Some(1));
    assert!(snap.about_revealed);
    assert!(snap.first_item_revealed);
    assert!(!snap.list_visible);
    assert_eq!(snap.mask.state.size, 145.0);
}

#[test]
fn test_entrance_and_blur_band() {
    let start = Instant::now();
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, start);

    assert!(!view.tick(start + Duration::from_millis(499)));
    assert!(view.tick(start + Duration::from_millis(500)));
    assert!(view.snapshot().nav.visible);
    assert!(!view.entrance_pending());

    scroll(&mut view, &mut host, 150.0);
    let snap = view.snapshot();
    assert!(!snap.nav.visible);
    assert!(!snap.blur_band_visible);

    scroll(&mut view, &mut host, 140.0);
    let snap = view.snapshot();
    assert!(snap.nav.visible);
    assert!(snap.blur_band_visible);
}

#[test]
fn test_custom_entrance_delay() {
    let start = Instant::now();
    let mut host = FakeHost::new(H, 680.0);
    let options = CoordinatorOptions {
        entrance_delay: Duration::from_millis(50),
    };
    let mut view = LandingView::mount(&layout(), &mut host, start, options);
    assert!(view.tick(start + Duration::from_millis(50)));
}

#[test]
fn test_unattached_item_picked_up_after_resize() {
    let mut host = FakeHost::new(H, 680.0);
    let mut partial = layout();
    partial.items[2] = None;
    let mut view = LandingView::mount(&partial, &mut host, Instant::now(), Default::default());

    scroll(&mut view, &mut host, 350.0);
    assert_eq!(view.snapshot().active_project, Some(1));

    scroll(&mut view, &mut host, 450.0);
    assert_eq!(view.snapshot().active_project, Some(1));

    let snap = view.on_resize(&mut host, &layout()).unwrap();
    assert_eq!(snap.active_project, Some(2));
}

#[test]
fn test_resize_does_not_toggle_nav() {
    let start = Instant::now();
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, start);
    view.tick(start + Duration::from_millis(500));
    scroll(&mut view, &mut host, 150.0);
    assert!(!view.snapshot().nav.visible);

    host.viewport = 120.0;
    let snap = view.on_resize(&mut host, &layout()).unwrap();
    assert!(!snap.nav.visible);
    assert_eq!(snap.metrics.viewport_height, 120.0);
}

#[test]
fn test_overscroll_corrected() {
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, Instant::now());

    scroll(&mut view, &mut host, 40.0);
    host.y = -25.0;
    let snap = view.on_scroll(&mut host).unwrap();
    assert_eq!(snap.metrics.scroll_y, 0.0);
    assert_eq!(host.y, 0.0);
    assert_eq!(host.corrections, 1);
}

#[test]
fn test_external_listener_sees_shared_snapshot() {
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, Instant::now());
    let seen = Rc::new(Cell::new(0.0));
    let s = seen.clone();
    view.subscribe(move |m| s.set(m.scroll_y));

    scroll(&mut view, &mut host, 320.0);
    assert_eq!(seen.get(), 320.0);
    assert_eq!(view.snapshot().metrics.scroll_y, 320.0);
}

#[test]
fn test_teardown_makes_view_inert() {
    let start = Instant::now();
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, start);
    let before = view.snapshot();

    view.teardown();
    assert!(view.is_torn_down());
    assert_eq!(view.observer_count(), 0);
    assert!(!view.entrance_pending());

    host.y = 350.0;
    assert!(view.on_scroll(&mut host).is_none());
    assert!(view.on_resize(&mut host, &layout()).is_none());
    assert!(!view.tick(start + Duration::from_secs(1)));
    view.toggle_menu();
    assert_eq!(view.snapshot(), before);

    // Second teardown is harmless
    view.teardown();
}

#[test]
fn test_drop_releases_listeners() {
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, Instant::now());
    let token = Rc::new(());
    let held = token.clone();
    view.subscribe(move |_| {
        let _count = Rc::strong_count(&held);
    });
    assert_eq!(Rc::strong_count(&token), 2);

    drop(view);
    assert_eq!(Rc::strong_count(&token), 1);
}

#[test]
fn test_degenerate_viewport_never_nan() {
    let mut host = FakeHost::new(0.0, 0.0);
    let mut view = mount(&mut host, Instant::now());
    host.y = f64::NAN;
    let snap = view.on_scroll(&mut host).unwrap();
    assert!(!snap.mask.opacity.is_nan());
    assert!(!snap.mask.state.size.is_nan());
    assert_eq!(snap.nav.progress_percent, 0.0);
}

#[test]
fn test_menu_follows_link() {
    let mut host = FakeHost::new(H, 680.0);
    let mut view = mount(&mut host, Instant::now());
    view.toggle_menu();
    assert!(view.snapshot().menu_open);
    view.follow_link(crate::nav::Section::Projects);
    assert!(!view.snapshot().menu_open);
}
