//! Intersection Watcher - viewport visibility of page elements
//!
//! A single watcher owns:
//! - An arena of element handles (registered, attached, detached explicitly)
//! - One registration per `(targets, configuration)` pair
//! - Per-target threshold state, so records are only delivered on change
//!
//! Records are computed from element bounds and a [`ScrollMetrics`] snapshot,
//! and delivered as one [`IntersectionBatch`] per registration, in
//! registration order and target order.

use tracing::{debug, trace};

use crate::metrics::ScrollMetrics;

/// Opaque handle into the element arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(usize);

/// Vertical extent of an element in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

impl ElementBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Band narrowing applied to the viewport, as fractions of its height
///
/// Positive values shrink the band (`-20% 0px -20% 0px` is `top: 0.2, bottom: 0.2`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f64,
    pub bottom: f64,
}

impl RootMargin {
    /// Same narrowing on both edges
    pub fn symmetric(fraction: f64) -> Self {
        Self {
            top: fraction,
            bottom: fraction,
        }
    }
}

/// Observer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverConfig {
    /// Sorted ratio thresholds in [0, 1]
    pub thresholds: Vec<f64>,
    pub root_margin: RootMargin,
}

impl ObserverConfig {
    /// Build a config, sorting and clamping thresholds
    pub fn new(thresholds: &[f64], root_margin: RootMargin) -> Self {
        let mut thresholds: Vec<f64> = thresholds
            .iter()
            .filter(|t| t.is_finite())
            .map(|t| t.clamp(0.0, 1.0))
            .collect();
        if thresholds.is_empty() {
            thresholds.push(0.0);
        }
        thresholds.sort_by(|a, b| a.total_cmp(b));
        thresholds.dedup();
        Self {
            thresholds,
            root_margin,
        }
    }

    /// Single threshold, no margin
    pub fn threshold(threshold: f64) -> Self {
        Self::new(&[threshold], RootMargin::default())
    }

    fn min_threshold(&self) -> f64 {
        self.thresholds.first().copied().unwrap_or(0.0)
    }

    /// Number of thresholds at or below the ratio
    fn threshold_index(&self, ratio: f64) -> usize {
        self.thresholds.iter().take_while(|t| ratio >= **t).count()
    }
}

/// One visibility report for one target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRecord {
    /// Index of the target within its registration
    pub target_id: usize,
    /// Visible fraction of the target inside the band, in [0, 1]
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Identifier of one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Records delivered to one registration in one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionBatch {
    pub observer: ObserverId,
    pub records: Vec<IntersectionRecord>,
}

/// Arena of element slots indexed by handle
///
/// A slot can be registered without bounds (element not mounted yet).
#[derive(Debug, Default)]
pub struct ElementArena {
    slots: Vec<Option<Slot>>,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    bounds: Option<ElementBounds>,
}

impl ElementArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element, attached or not
    pub fn register(&mut self, bounds: Option<ElementBounds>) -> ElementHandle {
        self.slots.push(Some(Slot { bounds }));
        ElementHandle(self.slots.len() - 1)
    }

    /// Attach (or move) an element
    pub fn attach(&mut self, handle: ElementHandle, bounds: ElementBounds) {
        if let Some(Some(slot)) = self.slots.get_mut(handle.0) {
            slot.bounds = Some(bounds);
        }
    }

    /// Element is still registered but no longer laid out
    pub fn detach(&mut self, handle: ElementHandle) {
        if let Some(Some(slot)) = self.slots.get_mut(handle.0) {
            slot.bounds = None;
        }
    }

    /// Remove the element; the handle becomes dangling
    pub fn deregister(&mut self, handle: ElementHandle) {
        if let Some(slot) = self.slots.get_mut(handle.0) {
            *slot = None;
        }
    }

    /// Bounds of an attached element
    pub fn bounds(&self, handle: ElementHandle) -> Option<ElementBounds> {
        self.slots.get(handle.0).copied().flatten()?.bounds
    }

    pub fn is_registered(&self, handle: ElementHandle) -> bool {
        matches!(self.slots.get(handle.0), Some(Some(_)))
    }

    /// Drop every slot
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[derive(Debug, Clone)]
struct Target {
    handle: ElementHandle,
    /// Last delivered threshold index; `None` until the first record
    last_index: Option<usize>,
}

#[derive(Debug)]
struct Registration {
    id: ObserverId,
    config: ObserverConfig,
    targets: Vec<Target>,
}

/// Computes intersection records for every live registration
#[derive(Debug, Default)]
pub struct IntersectionWatcher {
    elements: ElementArena,
    registrations: Vec<Registration>,
    next_id: u64,
}

impl IntersectionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element arena (read)
    pub fn elements(&self) -> &ElementArena {
        &self.elements
    }

    /// Element arena (register/attach/detach)
    pub fn elements_mut(&mut self) -> &mut ElementArena {
        &mut self.elements
    }

    /// Observe targets with a configuration; the target order defines `target_id`
    pub fn observe(&mut self, config: ObserverConfig, targets: &[ElementHandle]) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        debug!(
            observer = id.0,
            targets = targets.len(),
            thresholds = ?config.thresholds,
            "Observer registered"
        );
        self.registrations.push(Registration {
            id,
            config,
            targets: targets
                .iter()
                .map(|&handle| Target {
                    handle,
                    last_index: None,
                })
                .collect(),
        });
        id
    }

    /// Stop observing; no further records are delivered for this registration
    pub fn disconnect(&mut self, id: ObserverId) {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id != id);
        if self.registrations.len() != before {
            debug!(observer = id.0, "Observer disconnected");
        }
    }

    /// Disconnect every registration
    pub fn disconnect_all(&mut self) {
        if !self.registrations.is_empty() {
            debug!(
                count = self.registrations.len(),
                "Disconnecting all observers"
            );
        }
        self.registrations.clear();
    }

    pub fn is_observing(&self, id: ObserverId) -> bool {
        self.registrations.iter().any(|r| r.id == id)
    }

    pub fn observer_count(&self) -> usize {
        self.registrations.len()
    }

    /// Compute records for the given snapshot
    ///
    /// A target is reported the first time it can be measured and afterwards
    /// only when its threshold index changes. Targets whose element is not
    /// attached are skipped and retried on the next evaluation.
    pub fn evaluate(&mut self, metrics: &ScrollMetrics) -> Vec<IntersectionBatch> {
        let mut batches = Vec::new();

        for registration in self.registrations.iter_mut() {
            let (band_top, band_bottom) = band(metrics, registration.config.root_margin);
            let mut records = Vec::new();

            for (target_id, target) in registration.targets.iter_mut().enumerate() {
                let Some(bounds) = self.elements.bounds(target.handle) else {
                    trace!(target_id, "Skipping unattached target");
                    continue;
                };

                let (ratio, overlaps) = measure(bounds, band_top, band_bottom);
                let is_intersecting = overlaps && ratio >= registration.config.min_threshold();
                let index = if is_intersecting {
                    registration.config.threshold_index(ratio)
                } else {
                    0
                };

                if target.last_index == Some(index) {
                    continue;
                }
                target.last_index = Some(index);
                records.push(IntersectionRecord {
                    target_id,
                    ratio,
                    is_intersecting,
                });
            }

            if !records.is_empty() {
                trace!(
                    observer = registration.id.0,
                    records = records.len(),
                    "Delivering intersection batch"
                );
                batches.push(IntersectionBatch {
                    observer: registration.id,
                    records,
                });
            }
        }

        batches
    }
}

/// Narrowed viewport band in document coordinates
fn band(metrics: &ScrollMetrics, margin: RootMargin) -> (f64, f64) {
    let h = metrics.viewport_height;
    let top = metrics.scroll_y + margin.top * h;
    let bottom = metrics.scroll_y + h - margin.bottom * h;
    (top, bottom.max(top))
}

/// Visible fraction of the element within the band, and whether they touch
fn measure(bounds: ElementBounds, band_top: f64, band_bottom: f64) -> (f64, bool) {
    let top = bounds.top.max(band_top);
    let bottom = bounds.bottom().min(band_bottom);
    let overlaps = bottom >= top;

    let ratio = if bounds.height <= 0.0 {
        if overlaps {
            1.0
        } else {
            0.0
        }
    } else if overlaps {
        ((bottom - top) / bounds.height).clamp(0.0, 1.0)
    } else {
        0.0
    };

    (ratio, overlaps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(y: f64) -> ScrollMetrics {
        ScrollMetrics::new(y, 100.0, 1000.0)
    }

    #[test]
    fn test_config_sorts_and_clamps() {
        let config = ObserverConfig::new(&[1.5, 0.5, f64::NAN, 0.0, 0.5], RootMargin::default());
        assert_eq!(config.thresholds, vec![0.0, 0.5, 1.0]);
        assert_eq!(config.threshold_index(0.6), 2);

        let empty = ObserverConfig::new(&[], RootMargin::default());
        assert_eq!(empty.thresholds, vec![0.0]);
    }

    #[test]
    fn test_first_evaluation_reports_every_attached_target() {
        let mut watcher = IntersectionWatcher::new();
        let near = watcher
            .elements_mut()
            .register(Some(ElementBounds::new(10.0, 20.0)));
        let far = watcher
            .elements_mut()
            .register(Some(ElementBounds::new(500.0, 20.0)));
        let id = watcher.observe(ObserverConfig::threshold(0.0), &[near, far]);

        let batches = watcher.evaluate(&metrics(0.0));
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].observer, id);
        let records = &batches[0].records;
        assert_eq!(records.len(), 2);
        assert!(records[0].is_intersecting);
        assert_eq!(records[0].ratio, 1.0);
        assert!(!records[1].is_intersecting);
        assert_eq!(records[1].ratio, 0.0);

        // Nothing changed, nothing delivered
        assert!(watcher.evaluate(&metrics(0.0)).is_empty());
    }

    #[test]
    fn test_records_only_on_threshold_change() {
        let mut watcher = IntersectionWatcher::new();
        let el = watcher
            .elements_mut()
            .register(Some(ElementBounds::new(100.0, 40.0)));
        watcher.observe(ObserverConfig::new(&[0.0, 0.5, 1.0], RootMargin::default()), &[el]);

        // Element just below the viewport
        let first = watcher.evaluate(&metrics(0.0));
        assert!(first[0].records[0].is_intersecting);
        assert_eq!(first[0].records[0].ratio, 0.0);

        // 10 of 40 rows visible: still between 0 and 0.5
        assert!(watcher.evaluate(&metrics(10.0)).is_empty());

        // 30 of 40 rows visible: crossed 0.5
        let crossed = watcher.evaluate(&metrics(30.0));
        assert_eq!(crossed[0].records[0].ratio, 0.75);

        // Fully visible
        let full = watcher.evaluate(&metrics(60.0));
        assert_eq!(full[0].records[0].ratio, 1.0);
    }

    #[test]
    fn test_root_margin_narrows_band() {
        let mut watcher = IntersectionWatcher::new();
        // Sits in the top 20% of the viewport only
        let el = watcher
            .elements_mut()
            .register(Some(ElementBounds::new(0.0, 15.0)));
        watcher.observe(
            ObserverConfig::new(&[0.0], RootMargin::symmetric(0.2)),
            &[el],
        );

        let batch = watcher.evaluate(&metrics(0.0));
        assert!(!batch[0].records[0].is_intersecting);
    }

    #[test]
    fn test_threshold_gates_is_intersecting() {
        let mut watcher = IntersectionWatcher::new();
        let el = watcher
            .elements_mut()
            .register(Some(ElementBounds::new(90.0, 40.0)));
        watcher.observe(ObserverConfig::threshold(0.5), &[el]);

        // 10 of 40 visible, below the threshold
        let batch = watcher.evaluate(&metrics(0.0));
        assert!(!batch[0].records[0].is_intersecting);

        let batch = watcher.evaluate(&metrics(20.0));
        assert!(batch[0].records[0].is_intersecting);
        assert_eq!(batch[0].records[0].ratio, 0.75);
    }

    #[test]
    fn test_unattached_target_skipped_then_retried() {
        let mut watcher = IntersectionWatcher::new();
        let el = watcher.elements_mut().register(None);
        watcher.observe(ObserverConfig::threshold(0.0), &[el]);

        assert!(watcher.evaluate(&metrics(0.0)).is_empty());

        watcher
            .elements_mut()
            .attach(el, ElementBounds::new(20.0, 10.0));
        let batch = watcher.evaluate(&metrics(0.0));
        assert_eq!(batch[0].records.len(), 1);
        assert!(batch[0].records[0].is_intersecting);
    }

    #[test]
    fn test_disconnect_stops_delivery() {
        let mut watcher = IntersectionWatcher::new();
        let el = watcher
            .elements_mut()
            .register(Some(ElementBounds::new(0.0, 10.0)));
        let a = watcher.observe(ObserverConfig::threshold(0.0), &[el]);
        let b = watcher.observe(ObserverConfig::threshold(0.0), &[el]);

        watcher.disconnect(a);
        assert!(!watcher.is_observing(a));
        let batches = watcher.evaluate(&metrics(0.0));
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].observer, b);

        watcher.disconnect_all();
        assert_eq!(watcher.observer_count(), 0);
        assert!(watcher.evaluate(&metrics(500.0)).is_empty());
    }

    #[test]
    fn test_deregistered_element_has_no_bounds() {
        let mut arena = ElementArena::new();
        let el = arena.register(Some(ElementBounds::new(0.0, 10.0)));
        assert!(arena.is_registered(el));
        arena.detach(el);
        assert!(arena.bounds(el).is_none());
        assert!(arena.is_registered(el));
        arena.deregister(el);
        assert!(!arena.is_registered(el));
        arena.attach(el, ElementBounds::new(0.0, 10.0));
        assert!(arena.bounds(el).is_none());
    }
}
