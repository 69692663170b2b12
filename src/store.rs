//! Measurement store: per-tab bounds plus container/strip dimensions.
//!
//! Measurements arrive lazily and out of order as each subject finishes
//! layout.  All writes go through the narrow `record_*` API so the
//! readiness gate stays a pure predicate over recorded data.

use crate::geometry::{TabBounds, ViewportBounds};

/// Holds every measurement the sync engine needs, keyed by tab index.
///
/// Tab indices are dense from 0 but may be populated in any arrival
/// order; absent entries simply keep the readiness gate closed.
#[derive(Debug, Default)]
pub struct MeasurementStore {
    tabs: Vec<Option<TabBounds>>,
    container: Option<ViewportBounds>,
    strip_width: Option<f32>,
}

impl MeasurementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the bounds for one tab.  Repeated or out-of-order calls
    /// are fine; the last write wins.
    pub fn record_tab(&mut self, index: usize, bounds: TabBounds) {
        if self.tabs.len() <= index {
            self.tabs.resize(index + 1, None);
        }
        self.tabs[index] = Some(bounds);
    }

    /// Upserts the viewport measurement.
    pub fn record_container(&mut self, bounds: ViewportBounds) {
        self.container = Some(bounds);
    }

    /// Upserts the full (possibly off-screen) strip width.
    pub fn record_strip(&mut self, width: f32) {
        self.strip_width = Some(width);
    }

    /// Returns the recorded bounds for `index`, if any.
    pub fn tab(&self, index: usize) -> Option<TabBounds> {
        self.tabs.get(index).copied().flatten()
    }

    pub fn container(&self) -> Option<ViewportBounds> {
        self.container
    }

    pub fn strip_width(&self) -> Option<f32> {
        self.strip_width
    }

    /// True iff everything needed to compute outputs for `position` is
    /// present: the tab itself, its successor (unless it is the last
    /// tab), and both container and strip measurements.
    pub fn is_ready(&self, position: usize, is_last_tab: bool) -> bool {
        self.tab(position).is_some()
            && (is_last_tab || self.tab(position + 1).is_some())
            && self.container.is_some()
            && self.strip_width.is_some()
    }

    /// Clears all tab measurements, forcing re-measurement after the
    /// tab identity list changes.
    ///
    /// Container and strip measurements are retained until their own
    /// next layout fires.  If the new tab set changes the strip's
    /// natural width, the stale width can mis-clamp scroll targets for
    /// that window; the rendering layer re-measures on its next pass.
    pub fn invalidate(&mut self) {
        tracing::debug!(tabs = self.tabs.len(), "clearing tab measurements");
        self.tabs.clear();
    }
}
