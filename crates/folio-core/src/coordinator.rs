//! Landing view coordinator
//!
//! Owns every scroll-driven controller for the lifetime of a mounted landing
//! view:
//! - One [`ScrollMetricsSource`] sample per tick, shared by all consumers
//! - One [`IntersectionWatcher`] with a registration per concern
//! - Mask, nav, active item and reveal state, each derived independently
//!
//! Renderers read a [`LandingSnapshot`]; nothing here draws.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::constants::nav::ENTRANCE_DELAY;
use crate::constants::observe::{
    CONTAINER_MARGIN, CONTAINER_THRESHOLD, ITEM_MARGIN, ITEM_THRESHOLDS, REVEAL_THRESHOLD,
};
use crate::intersection::{
    ElementArena, ElementBounds, ElementHandle, IntersectionBatch, IntersectionWatcher,
    ObserverConfig, ObserverId, RootMargin,
};
use crate::mask::{derive_mask, HeroMask};
use crate::metrics::{ListenerId, ScrollHost, ScrollMetrics, ScrollMetricsSource};
use crate::nav::{NavState, NavVisibilityController, Section};
use crate::reveal::RevealLatch;
use crate::tracker::{ActiveItemTracker, SidebarNode};

/// Element bounds for one layout pass, in document coordinates
///
/// `None` means the element is not laid out yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingLayout {
    /// About text block (one-shot reveal)
    pub about: Option<ElementBounds>,
    /// Whole project list (sidebar fade)
    pub projects_container: Option<ElementBounds>,
    /// Project items in display order
    pub items: Vec<Option<ElementBounds>>,
}

/// Mount-time options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorOptions {
    pub entrance_delay: Duration,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            entrance_delay: ENTRANCE_DELAY,
        }
    }
}

/// Read-only view state for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingSnapshot {
    pub metrics: ScrollMetrics,
    pub mask: HeroMask,
    pub nav: NavState,
    /// Blur band above the nav, following nav visibility changes
    pub blur_band_visible: bool,
    pub menu_open: bool,
    pub active_project: Option<usize>,
    /// Whether the project list is on screen (sidebar fade)
    pub list_visible: bool,
    pub about_revealed: bool,
    pub first_item_revealed: bool,
}

#[derive(Debug, Clone, Copy)]
struct Elements {
    about: ElementHandle,
    container: ElementHandle,
}

#[derive(Debug, Clone, Copy)]
struct Observers {
    container: ObserverId,
    items: ObserverId,
}

/// Coordinator for a mounted landing view
#[derive(Debug)]
pub struct LandingView {
    source: ScrollMetricsSource,
    watcher: IntersectionWatcher,
    elements: Elements,
    observers: Observers,
    mask: HeroMask,
    nav: NavVisibilityController,
    blur_band_visible: bool,
    tracker: ActiveItemTracker,
    about_reveal: RevealLatch,
    first_item_reveal: Option<RevealLatch>,
    torn_down: bool,
}

impl LandingView {
    /// Attach to the host, register elements and observers, and run the
    /// initial evaluation
    pub fn mount<H: ScrollHost + ?Sized>(
        layout: &LandingLayout,
        host: &mut H,
        now: Instant,
        options: CoordinatorOptions,
    ) -> Self {
        let source = ScrollMetricsSource::attach();
        let mut watcher = IntersectionWatcher::new();

        let arena = watcher.elements_mut();
        let about = arena.register(layout.about);
        let container = arena.register(layout.projects_container);
        let mut tracker = ActiveItemTracker::new();
        for bounds in &layout.items {
            tracker.register_candidate(arena.register(*bounds));
        }
        let items: Vec<ElementHandle> = tracker.candidates().to_vec();

        let container_observer = watcher.observe(
            ObserverConfig::new(
                &[CONTAINER_THRESHOLD],
                RootMargin::symmetric(CONTAINER_MARGIN),
            ),
            &[container],
        );
        let items_observer = watcher.observe(
            ObserverConfig::new(&ITEM_THRESHOLDS, RootMargin::symmetric(ITEM_MARGIN)),
            &items,
        );
        let about_reveal = RevealLatch::new(
            watcher.observe(ObserverConfig::threshold(REVEAL_THRESHOLD), &[about]),
        );
        let first_item_reveal = items.first().map(|&first| {
            let id = watcher.observe(ObserverConfig::threshold(REVEAL_THRESHOLD), &[first]);
            RevealLatch::new(id)
        });

        info!(items = items.len(), "Landing view mounted");

        let mut view = Self {
            source,
            watcher,
            elements: Elements { about, container },
            observers: Observers {
                container: container_observer,
                items: items_observer,
            },
            mask: HeroMask::default(),
            nav: NavVisibilityController::mount(now, options.entrance_delay),
            blur_band_visible: true,
            tracker,
            about_reveal,
            first_item_reveal,
            torn_down: false,
        };
        view.layout_pass(host);
        view
    }

    /// Register an external listener on the shared metrics source
    pub fn subscribe(&mut self, listener: impl FnMut(&ScrollMetrics) + 'static) -> ListenerId {
        self.source.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.source.unsubscribe(id);
    }

    /// One scroll tick
    ///
    /// Returns `None` once torn down.
    pub fn on_scroll<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> Option<LandingSnapshot> {
        if self.torn_down {
            return None;
        }
        let metrics = self.source.sample(host)?;
        self.mask = derive_mask(&metrics);
        if let Some(visibility) = self.nav.on_scroll(&metrics) {
            self.blur_band_visible = visibility.is_visible();
        }
        self.route_intersections(&metrics);
        Some(self.snapshot())
    }

    /// Viewport or layout changed
    ///
    /// Element bounds are re-attached (or detached when `None`), then the
    /// view is re-derived from a fresh sample. Nav visibility only changes on
    /// scroll ticks.
    pub fn on_resize<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        layout: &LandingLayout,
    ) -> Option<LandingSnapshot> {
        if self.torn_down {
            return None;
        }
        let arena = self.watcher.elements_mut();
        set_bounds(arena, self.elements.about, layout.about);
        set_bounds(arena, self.elements.container, layout.projects_container);
        for (&handle, bounds) in self.tracker.candidates().iter().zip(&layout.items) {
            set_bounds(arena, handle, *bounds);
        }
        if layout.items.len() != self.tracker.len() {
            debug!(
                registered = self.tracker.len(),
                laid_out = layout.items.len(),
                "Layout item count differs from registered candidates"
            );
        }
        self.layout_pass(host)
    }

    /// Advance timers; returns true when visible state changed
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.torn_down {
            return false;
        }
        match self.nav.tick(now) {
            Some(visibility) => {
                self.blur_band_visible = visibility.is_visible();
                true
            }
            None => false,
        }
    }

    /// Whether the entrance timer still has to fire
    pub fn entrance_pending(&self) -> bool {
        self.nav.entrance_pending()
    }

    pub fn toggle_menu(&mut self) {
        if !self.torn_down {
            self.nav.toggle_menu();
        }
    }

    /// Follow a nav link; closes the menu and returns the target section
    pub fn follow_link(&mut self, section: Section) -> Section {
        self.nav.follow_link(section)
    }

    /// Sidebar node for project `index`
    pub fn sidebar_node(&self, index: usize) -> SidebarNode {
        self.tracker.node(index)
    }

    /// Whether the sidebar connector into project `index` is lit
    pub fn connector_lit(&self, index: usize) -> bool {
        self.tracker.connector_lit(index)
    }

    pub fn snapshot(&self) -> LandingSnapshot {
        LandingSnapshot {
            metrics: self.source.latest().unwrap_or_default(),
            mask: self.mask,
            nav: self.nav.state(),
            blur_band_visible: self.blur_band_visible,
            menu_open: self.nav.is_menu_open(),
            active_project: self.tracker.active(),
            list_visible: self.tracker.is_list_visible(),
            about_revealed: self.about_reveal.is_triggered(),
            first_item_revealed: self
                .first_item_reveal
                .as_ref()
                .is_some_and(RevealLatch::is_triggered),
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Number of live observer registrations
    pub fn observer_count(&self) -> usize {
        self.watcher.observer_count()
    }

    /// Release every listener and observer and cancel the entrance timer
    ///
    /// Every entry point is a no-op afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.source.detach();
        self.nav.teardown();
        self.watcher.disconnect_all();
        self.tracker.deregister_candidates();
        self.watcher.elements_mut().clear();
        info!("Landing view torn down");
    }

    /// Sample and derive everything except nav visibility
    fn layout_pass<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> Option<LandingSnapshot> {
        let metrics = self.source.sample(host)?;
        self.mask = derive_mask(&metrics);
        self.nav.sync(&metrics);
        self.route_intersections(&metrics);
        Some(self.snapshot())
    }

    /// Evaluate the watcher and hand each batch to its owner, in delivery order
    fn route_intersections(&mut self, metrics: &ScrollMetrics) {
        for IntersectionBatch { observer, records } in self.watcher.evaluate(metrics) {
            trace!(records = records.len(), "Routing intersection batch");
            if observer == self.observers.container {
                self.tracker.apply_container_records(&records);
            } else if observer == self.observers.items {
                self.tracker.apply_item_records(&records);
            } else if Some(observer) == self.about_reveal.observer() {
                if self.about_reveal.apply(&records, &mut self.watcher) {
                    debug!("About section revealed");
                }
            } else if let Some(latch) = self
                .first_item_reveal
                .as_mut()
                .filter(|latch| latch.observer() == Some(observer))
            {
                if latch.apply(&records, &mut self.watcher) {
                    debug!("First project revealed");
                }
            }
        }
    }
}

impl Drop for LandingView {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn set_bounds(arena: &mut ElementArena, handle: ElementHandle, bounds: Option<ElementBounds>) {
    match bounds {
        Some(bounds) => arena.attach(handle, bounds),
        None => arena.detach(handle),
    }
}
