//! Navigation bar visibility state machine
//!
//! Direction-based hysteresis: the nav hides on a downward tick past the
//! always-visible zone and shows again on any upward (or still) tick. A
//! one-shot entrance timer reveals it shortly after mount regardless of scroll.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::constants::nav::ALWAYS_VISIBLE_BELOW;
use crate::metrics::ScrollMetrics;

/// Nav visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Visible,
    Hidden,
}

impl NavVisibility {
    pub fn is_visible(self) -> bool {
        self == NavVisibility::Visible
    }
}

/// Read-only nav snapshot for renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    pub visible: bool,
    /// Scroll progress in [0, 100]
    pub progress_percent: f64,
}

/// Timer that fires at most once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntranceTimer {
    Pending { deadline: Instant },
    Fired,
    Cancelled,
}

/// Page sections reachable from the nav links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    /// Link label shown in the nav
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "reach me",
        }
    }
}

/// Nav state machine, progress indicator, and menu
#[derive(Debug)]
pub struct NavVisibilityController {
    visibility: NavVisibility,
    last_scroll_y: f64,
    progress_percent: f64,
    entrance: EntranceTimer,
    menu_open: bool,
}

impl NavVisibilityController {
    /// Start hidden, with the entrance timer armed from `now`
    pub fn mount(now: Instant, entrance_delay: Duration) -> Self {
        Self {
            visibility: NavVisibility::Hidden,
            last_scroll_y: 0.0,
            progress_percent: 0.0,
            entrance: EntranceTimer::Pending {
                deadline: now + entrance_delay,
            },
            menu_open: false,
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn state(&self) -> NavState {
        NavState {
            visible: self.visibility.is_visible(),
            progress_percent: self.progress_percent,
        }
    }

    /// Whether the entrance timer is still waiting
    pub fn entrance_pending(&self) -> bool {
        matches!(self.entrance, EntranceTimer::Pending { .. })
    }

    /// Fire the entrance timer if it is due
    ///
    /// Returns the new visibility when it changed.
    pub fn tick(&mut self, now: Instant) -> Option<NavVisibility> {
        let EntranceTimer::Pending { deadline } = self.entrance else {
            return None;
        };
        if now < deadline {
            return None;
        }
        self.entrance = EntranceTimer::Fired;
        debug!("Nav entrance timer fired");
        self.set_visibility(NavVisibility::Visible)
    }

    /// Evaluate one scroll tick
    ///
    /// Returns the new visibility when it changed.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> Option<NavVisibility> {
        let current = metrics.scroll_y;
        self.progress_percent = metrics.progress_percent();

        let next = if current <= self.last_scroll_y || current < ALWAYS_VISIBLE_BELOW {
            NavVisibility::Visible
        } else {
            NavVisibility::Hidden
        };
        trace!(
            current,
            last = self.last_scroll_y,
            progress = self.progress_percent,
            "Nav scroll evaluation"
        );
        self.last_scroll_y = current;
        self.set_visibility(next)
    }

    /// Record position and progress without a visibility transition
    ///
    /// Used for layout passes (mount, resize) that are not scroll ticks.
    pub fn sync(&mut self, metrics: &ScrollMetrics) {
        self.progress_percent = metrics.progress_percent();
        self.last_scroll_y = metrics.scroll_y;
    }

    fn set_visibility(&mut self, next: NavVisibility) -> Option<NavVisibility> {
        if self.visibility == next {
            return None;
        }
        debug!(from = ?self.visibility, to = ?next, "Nav visibility changed");
        self.visibility = next;
        Some(next)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a section link; closes the menu
    pub fn follow_link(&mut self, section: Section) -> Section {
        self.menu_open = false;
        section
    }

    /// Cancel the entrance timer if it has not fired
    pub fn teardown(&mut self) {
        if self.entrance_pending() {
            debug!("Nav entrance timer cancelled");
            self.entrance = EntranceTimer::Cancelled;
        }
        self.menu_open = false;
    }
}
