//! Scroll Metrics - normalized scroll/viewport snapshots
//!
//! This module owns the raw scroll position boundary:
//! - Sampling the host's scroll position and dimensions
//! - Anti-overscroll correction at the top of the page
//! - Synchronous fan-out of each snapshot to subscribers
//! - Scoped attach/detach of the listener registry

use std::fmt;

use tracing::{debug, trace};

/// Host platform that owns the real scroll position
///
/// The coordinator only reads from the host, except for the anti-overscroll
/// correction which writes the position back to zero.
pub trait ScrollHost {
    /// Current vertical scroll offset (may be negative while overscrolling)
    fn scroll_y(&self) -> f64;
    /// Height of the visible viewport
    fn viewport_height(&self) -> f64;
    /// Full height of the scrollable document
    fn document_height(&self) -> f64;
    /// Move the scroll position
    fn scroll_to(&mut self, y: f64);
}

/// Snapshot of scroll position and dimensions for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Replace NaN, infinities and negatives with zero
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl ScrollMetrics {
    /// Build a snapshot, clamping every field to a finite non-negative value
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y: sanitize(scroll_y),
            viewport_height: sanitize(viewport_height),
            document_height: sanitize(document_height),
        }
    }

    /// Scrollable distance (document minus viewport), never negative
    pub fn scroll_range(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Position expressed in viewport heights (0 when the viewport is empty)
    pub fn viewports_scrolled(&self) -> f64 {
        if self.viewport_height > 0.0 {
            self.scroll_y / self.viewport_height
        } else {
            0.0
        }
    }

    /// Scroll progress through the document, in [0, 100]
    ///
    /// Content shorter than (or equal to) the viewport has no progress.
    pub fn progress_percent(&self) -> f64 {
        let range = self.scroll_range();
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / range * 100.0).clamp(0.0, 100.0)
    }
}

/// Identifier returned by [`ScrollMetricsSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ScrollMetrics)>;

/// Produces one [`ScrollMetrics`] per scroll/resize tick and notifies listeners
pub struct ScrollMetricsSource {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
    last_scroll_y: f64,
    latest: Option<ScrollMetrics>,
    attached: bool,
}

impl fmt::Debug for ScrollMetricsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollMetricsSource")
            .field("listeners", &self.listeners.len())
            .field("last_scroll_y", &self.last_scroll_y)
            .field("latest", &self.latest)
            .field("attached", &self.attached)
            .finish()
    }
}

impl ScrollMetricsSource {
    /// Attach to the host for the lifetime of the owning view
    pub fn attach() -> Self {
        debug!("Scroll metrics source attached");
        Self {
            listeners: Vec::new(),
            next_id: 0,
            last_scroll_y: 0.0,
            latest: None,
            attached: true,
        }
    }

    /// Register a listener; it is called synchronously on every sample
    pub fn subscribe(&mut self, listener: impl FnMut(&ScrollMetrics) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        if self.attached {
            self.listeners.push((id, Box::new(listener)));
        }
        id
    }

    /// Remove a single listener
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Last snapshot produced, if any
    pub fn latest(&self) -> Option<ScrollMetrics> {
        self.latest
    }

    /// Read the host, correct overscroll, and notify every listener
    ///
    /// Returns `None` once detached.
    pub fn sample<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> Option<ScrollMetrics> {
        if !self.attached {
            trace!("Sample ignored on detached metrics source");
            return None;
        }

        let raw = host.scroll_y();
        let overscrolled = raw < 0.0 || !raw.is_finite();
        let bounced_to_top = raw <= 0.0 && self.last_scroll_y > 0.0;
        if overscrolled || bounced_to_top {
            if raw != 0.0 {
                debug!(raw, "Correcting overscroll at top of page");
            }
            host.scroll_to(0.0);
        }

        let metrics = ScrollMetrics::new(
            if overscrolled { 0.0 } else { raw },
            host.viewport_height(),
            host.document_height(),
        );
        self.last_scroll_y = metrics.scroll_y;
        self.latest = Some(metrics);

        for (_, listener) in self.listeners.iter_mut() {
            listener(&metrics);
        }
        Some(metrics)
    }

    /// Release every listener; later samples are ignored
    pub fn detach(&mut self) {
        if self.attached {
            debug!(
                listeners = self.listeners.len(),
                "Scroll metrics source detached"
            );
        }
        self.listeners.clear();
        self.attached = false;
    }
}
