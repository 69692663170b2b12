//! Wiring between the progress signal, the sync core and the rendering
//! layer.
//!
//! The rendering layer implements [`StripSink`] and receives only
//! imperative writes: an underline style target, an absolute scroll-to,
//! and outbound page requests.  [`MountedStrip`] owns the progress
//! subscription for the lifetime of the mount; dropping it releases the
//! listener.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{FrameUpdate, LayoutRect, ScrollCommand, UnderlineGeometry};
use crate::signal::{ProgressSignal, Subscription};
use crate::strip::TabStrip;

/// Imperative outputs consumed by the rendering layer.
pub trait StripSink {
    /// Moves/resizes the underline.  Applied as an animated style
    /// target by the host; the engine just supplies the numbers.
    fn apply_underline(&mut self, geometry: UnderlineGeometry);

    /// Sets the strip's absolute scroll position, non-animated.
    fn scroll_to(&mut self, command: ScrollCommand);

    /// Asks the external paging controller to switch to `page`.
    fn request_page(&mut self, page: usize);
}

/// A [`TabStrip`] mounted between a progress signal and a sink.
///
/// Holds the progress subscription; unmounting (dropping) this struct
/// unregisters the listener so no callback survives the component.
pub struct MountedStrip {
    strip: Rc<RefCell<TabStrip>>,
    sink: Rc<RefCell<dyn StripSink>>,
    _progress: Subscription,
}

impl MountedStrip {
    /// Subscribes `strip` to `signal` and routes every computed frame
    /// to `sink`.
    ///
    /// The signal's current value is fed through the engine immediately
    /// so a mount at a non-zero initial page starts from the live
    /// value; layout events arriving before the first tick then replay
    /// it instead of page zero.
    pub fn mount(
        signal: &ProgressSignal,
        strip: TabStrip,
        sink: Rc<RefCell<dyn StripSink>>,
    ) -> Self {
        let strip = Rc::new(RefCell::new(strip));

        let initial = strip.borrow_mut().on_progress(signal.get());
        if let Some(update) = initial {
            publish(&sink, update);
        }

        let strip_for_ticks = strip.clone();
        let sink_for_ticks = sink.clone();
        let subscription = signal.subscribe(move |value| {
            let update = strip_for_ticks.borrow_mut().on_progress(value);
            if let Some(update) = update {
                publish(&sink_for_ticks, update);
            }
        });

        Self {
            strip,
            sink,
            _progress: subscription,
        }
    }

    /// Forwards a tab's layout box, publishing if the frame became
    /// computable.
    pub fn on_tab_layout(&self, index: usize, rect: LayoutRect) {
        let update = self.strip.borrow_mut().on_tab_layout(index, rect);
        if let Some(update) = update {
            publish(&self.sink, update);
        }
    }

    /// Forwards the scrollable strip's layout box.
    pub fn on_strip_layout(&self, rect: LayoutRect) {
        let update = self.strip.borrow_mut().on_strip_layout(rect);
        if let Some(update) = update {
            publish(&self.sink, update);
        }
    }

    /// Forwards the outer viewport's layout box.
    pub fn on_container_layout(&self, rect: LayoutRect) {
        let update = self.strip.borrow_mut().on_container_layout(rect);
        if let Some(update) = update {
            publish(&self.sink, update);
        }
    }

    /// Replaces the tab identity list (invalidates measurements when
    /// the identity changed).
    pub fn set_tabs(&self, labels: Vec<String>) {
        self.strip.borrow_mut().set_tabs(labels);
    }

    /// Emits a page request for a directly activated tab.  Out-of-range
    /// indices are dropped.
    pub fn select_tab(&self, index: usize) {
        let request = self.strip.borrow().page_request(index);
        if let Some(request) = request {
            self.sink.borrow_mut().request_page(request.0);
        }
    }
}

fn publish(sink: &Rc<RefCell<dyn StripSink>>, update: FrameUpdate) {
    let mut sink = sink.borrow_mut();
    sink.apply_underline(update.underline);
    sink.scroll_to(update.scroll);
}

#[cfg(test)]
#[path = "../tests/unit/mount.rs"]
mod tests;
