//! The sync core: reconciles progress ticks and layout events into
//! per-tick underline geometry and scroll commands.
//!
//! Three inputs arrive asynchronously on the UI thread: the continuous
//! progress signal (every animation tick), per-tab layout measurements
//! (lazily, in any order) and the container/strip dimensions (once
//! layout settles).  Every entry point below either returns the pair of
//! outputs for this tick or `None` when the tick must be suppressed —
//! missing data is a routine transient state, never an error.

use crate::config::StripConfig;
use crate::geometry::{
    FrameUpdate, LayoutRect, PageRequest, ScrollCommand, TabBounds, ViewportBounds,
};
use crate::progress::PageProgress;
use crate::scroll_math;
use crate::store::MeasurementStore;
use crate::underline_math;

/// Synchronization engine for one mounted tab strip.
///
/// Single-threaded by design: all mutation happens from UI-thread event
/// handlers, so there is nothing to lock.
pub struct TabStrip {
    config: StripConfig,
    labels: Vec<String>,
    store: MeasurementStore,
    /// Last progress value delivered by the signal; layout events replay
    /// it so late measurements still produce a correct first frame.
    last_progress: f32,
    published_once: bool,
}

impl TabStrip {
    pub fn new(config: StripConfig, labels: Vec<String>) -> Self {
        Self {
            config,
            labels,
            store: MeasurementStore::new(),
            last_progress: 0.0,
            published_once: false,
        }
    }

    pub fn tab_count(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Replaces the tab identity list.
    ///
    /// A changed identity invalidates every tab measurement: indices may
    /// now refer to different tabs, so all of them must re-measure
    /// before output resumes.  Container/strip measurements are kept
    /// until their own next layout.
    pub fn set_tabs(&mut self, labels: Vec<String>) {
        if labels == self.labels {
            return;
        }
        tracing::debug!(
            old = self.labels.len(),
            new = labels.len(),
            "tab identity changed, invalidating measurements"
        );
        self.labels = labels;
        self.store.invalidate();
    }

    /// Handles one tick of the continuous progress signal.
    ///
    /// Returns the outputs for this tick, or `None` when the tick is
    /// suppressed: empty tab set, transient overscroll, or a position
    /// whose measurements have not arrived yet.
    pub fn on_progress(&mut self, value: f32) -> Option<FrameUpdate> {
        self.last_progress = value;

        let Some(progress) = PageProgress::decode(value, self.tab_count()) else {
            tracing::trace!(value, "progress tick outside valid range, skipping");
            return None;
        };

        let is_last = progress.is_last(self.tab_count());
        if !self.store.is_ready(progress.position, is_last) {
            tracing::trace!(
                position = progress.position,
                "measurements incomplete, suppressing output"
            );
            return None;
        }

        let update = self.compute(progress, is_last)?;
        if !self.published_once {
            self.published_once = true;
            tracing::debug!(position = progress.position, "first frame published");
        }
        Some(update)
    }

    /// Handles layout completion for one tab.
    ///
    /// A stale index — one past the current identity list, typically a
    /// late callback from a previous tab set — is ignored outright so a
    /// reused index cannot be seeded with old geometry.
    pub fn on_tab_layout(&mut self, index: usize, rect: LayoutRect) -> Option<FrameUpdate> {
        if index >= self.tab_count() {
            tracing::warn!(
                index,
                tab_count = self.tab_count(),
                "ignoring layout for tab outside current tab set"
            );
            return None;
        }
        self.store.record_tab(index, TabBounds::from_layout(rect));
        self.replay()
    }

    /// Handles layout completion of the scrollable strip.
    pub fn on_strip_layout(&mut self, rect: LayoutRect) -> Option<FrameUpdate> {
        self.store.record_strip(rect.width);
        self.replay()
    }

    /// Handles layout completion of the outer viewport.
    pub fn on_container_layout(&mut self, rect: LayoutRect) -> Option<FrameUpdate> {
        self.store.record_container(ViewportBounds {
            width: rect.width,
            height: rect.height,
        });
        self.replay()
    }

    /// Builds the outbound page-change request for a directly activated
    /// tab.  `None` for out-of-range indices.
    pub fn page_request(&self, index: usize) -> Option<PageRequest> {
        (index < self.tab_count()).then_some(PageRequest(index))
    }

    /// Re-runs the progress pipeline with the last known value (not
    /// zero): a late measurement retroactively yields the correct first
    /// frame instead of leaving the underline at a default position.
    fn replay(&mut self) -> Option<FrameUpdate> {
        self.on_progress(self.last_progress)
    }

    fn compute(&self, progress: PageProgress, is_last: bool) -> Option<FrameUpdate> {
        // `is_ready` held for this position, so all lookups succeed.
        let cur = self.store.tab(progress.position)?;
        let next = if is_last {
            None
        } else {
            Some(self.store.tab(progress.position + 1)?)
        };
        let container_width = self.store.container()?.width;
        let strip_width = self.store.strip_width()?;

        let underline = underline_math::underline_span(cur, next, progress.offset);
        let offset_x = scroll_math::scroll_target(
            cur.left,
            cur.width,
            next.map(|n| n.width).unwrap_or(0.0),
            progress.offset,
            container_width,
            strip_width,
            self.config.allow_overscroll_bounce,
        );

        Some(FrameUpdate {
            underline,
            scroll: ScrollCommand { offset_x },
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/strip.rs"]
mod tests;
