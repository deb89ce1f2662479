//! Active item tracking for the project list
//!
//! Candidates are registered explicitly, in order, and observed one by one.
//! A record whose ratio exceeds the activation ratio makes its candidate
//! active; within a batch the last qualifying record wins. The index is
//! never cleared once set.

use tracing::debug;

use crate::constants::observe::ACTIVE_RATIO;
use crate::intersection::{ElementHandle, IntersectionRecord};

/// Progress sidebar node appearance for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarNode {
    /// The current item
    Active,
    /// Before the current item
    Passed,
    /// After the current item (or nothing is active yet)
    Upcoming,
}

/// Tracks which candidate is active and whether the list is on screen
#[derive(Debug, Default)]
pub struct ActiveItemTracker {
    candidates: Vec<ElementHandle>,
    active: Option<usize>,
    list_visible: bool,
}

impl ActiveItemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate; returns its index
    pub fn register_candidate(&mut self, handle: ElementHandle) -> usize {
        self.candidates.push(handle);
        self.candidates.len() - 1
    }

    /// Forget every candidate (list unmounted)
    pub fn deregister_candidates(&mut self) {
        self.candidates.clear();
    }

    /// Candidate handles in index order
    pub fn candidates(&self) -> &[ElementHandle] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Currently active index, `None` before the first qualifying record
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Whether the list container is on screen
    pub fn is_list_visible(&self) -> bool {
        self.list_visible
    }

    /// Apply one per-item batch in delivery order
    ///
    /// Returns the new active index when it changed.
    pub fn apply_item_records(&mut self, records: &[IntersectionRecord]) -> Option<usize> {
        let before = self.active;
        for record in records {
            if record.ratio > ACTIVE_RATIO && record.target_id < self.candidates.len() {
                self.active = Some(record.target_id);
            }
        }
        if self.active != before {
            debug!(from = ?before, to = ?self.active, "Active item changed");
            self.active
        } else {
            None
        }
    }

    /// Apply one container batch; only the visibility flag is affected
    pub fn apply_container_records(&mut self, records: &[IntersectionRecord]) {
        for record in records {
            self.list_visible = record.is_intersecting;
        }
    }

    /// Sidebar node for a candidate
    pub fn node(&self, index: usize) -> SidebarNode {
        match self.active {
            Some(active) if index == active => SidebarNode::Active,
            Some(active) if index < active => SidebarNode::Passed,
            _ => SidebarNode::Upcoming,
        }
    }

    /// Whether the connector leading into `index` is lit
    pub fn connector_lit(&self, index: usize) -> bool {
        self.active.is_some_and(|active| index <= active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersection::{ElementArena, ElementBounds};

    fn record(target_id: usize, ratio: f64) -> IntersectionRecord {
        IntersectionRecord {
            target_id,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    fn tracker_with(n: usize) -> ActiveItemTracker {
        let mut arena = ElementArena::new();
        let mut tracker = ActiveItemTracker::new();
        for i in 0..n {
            let handle = arena.register(Some(ElementBounds::new(i as f64 * 100.0, 50.0)));
            assert_eq!(tracker.register_candidate(handle), i);
        }
        tracker
    }

    #[test]
    fn test_none_before_first_qualifying_record() {
        let mut tracker = tracker_with(3);
        assert_eq!(tracker.active(), None);
        assert_eq!(tracker.apply_item_records(&[record(0, 0.25)]), None);
        assert_eq!(tracker.active(), None);
        assert_eq!(tracker.node(0), SidebarNode::Upcoming);
    }

    #[test]
    fn test_qualifying_item_in_mixed_batch() {
        let mut tracker = tracker_with(3);
        let changed =
            tracker.apply_item_records(&[record(0, 0.3), record(1, 0.6), record(2, 0.3)]);
        assert_eq!(changed, Some(1));
        assert_eq!(tracker.active(), Some(1));

        // Non-qualifying records freeze the value
        tracker.apply_item_records(&[record(1, 0.2), record(2, 0.4)]);
        assert_eq!(tracker.active(), Some(1));
        tracker.apply_item_records(&[record(1, 0.0)]);
        assert_eq!(tracker.active(), Some(1));
    }

    #[test]
    fn test_last_qualifying_record_wins() {
        let mut tracker = tracker_with(3);
        tracker.apply_item_records(&[record(2, 0.75), record(0, 0.8)]);
        assert_eq!(tracker.active(), Some(0));
    }

    #[test]
    fn test_exact_threshold_does_not_qualify() {
        let mut tracker = tracker_with(2);
        tracker.apply_item_records(&[record(1, 0.5)]);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_out_of_range_target_ignored() {
        let mut tracker = tracker_with(2);
        tracker.apply_item_records(&[record(7, 1.0)]);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_container_visibility_independent() {
        let mut tracker = tracker_with(2);
        tracker.apply_item_records(&[record(1, 0.9)]);
        tracker.apply_container_records(&[record(0, 0.2)]);
        assert!(tracker.is_list_visible());
        tracker.apply_container_records(&[IntersectionRecord {
            target_id: 0,
            ratio: 0.0,
            is_intersecting: false,
        }]);
        assert!(!tracker.is_list_visible());
        assert_eq!(tracker.active(), Some(1));
    }

    #[test]
    fn test_sidebar_nodes() {
        let mut tracker = tracker_with(4);
        tracker.apply_item_records(&[record(2, 0.6)]);
        assert_eq!(tracker.node(0), SidebarNode::Passed);
        assert_eq!(tracker.node(2), SidebarNode::Active);
        assert_eq!(tracker.node(3), SidebarNode::Upcoming);
        assert!(tracker.connector_lit(2));
        assert!(!tracker.connector_lit(3));
    }

    #[test]
    fn test_deregister_candidates() {
        let mut tracker = tracker_with(3);
        tracker.deregister_candidates();
        assert!(tracker.is_empty());
        tracker.apply_item_records(&[record(0, 1.0)]);
        assert_eq!(tracker.active(), None);
    }
}
