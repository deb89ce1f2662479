//! One-shot reveal latch
//!
//! `triggered` moves from false to true exactly once, on the first
//! intersecting record. The owning observer is released at that moment.

use tracing::debug;

use crate::intersection::{IntersectionRecord, IntersectionWatcher, ObserverId};

/// Reveal state of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub triggered: bool,
}

/// Latch bound to one observer registration
#[derive(Debug)]
pub struct RevealLatch {
    state: RevealState,
    observer: Option<ObserverId>,
}

impl RevealLatch {
    /// Latch that releases `observer` when it triggers
    pub fn new(observer: ObserverId) -> Self {
        Self {
            state: RevealState::default(),
            observer: Some(observer),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state.triggered
    }

    /// Observer this latch still holds
    pub fn observer(&self) -> Option<ObserverId> {
        self.observer
    }

    /// Apply a batch for the latch's element
    ///
    /// Returns true only on the call that triggered the latch.
    pub fn apply(&mut self, records: &[IntersectionRecord], watcher: &mut IntersectionWatcher) -> bool {
        if self.state.triggered {
            return false;
        }
        if !records.iter().any(|r| r.is_intersecting) {
            return false;
        }
        self.state.triggered = true;
        self.release(watcher);
        true
    }

    /// Disconnect the observer; a no-op after the first call
    pub fn release(&mut self, watcher: &mut IntersectionWatcher) {
        if let Some(observer) = self.observer.take() {
            debug!(triggered = self.state.triggered, "Reveal observer released");
            watcher.disconnect(observer);
        }
    }
}
