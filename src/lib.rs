//! Synchronization engine for swipeable, scrollable tab bars.
//!
//! Reconciles three asynchronously-arriving inputs — a continuous page
//! progress signal, lazy per-tab layout measurements, and the
//! container/strip dimensions — into two continuous outputs: the
//! underline's position/width and the strip's scroll offset.  Rendering
//! stays on the other side of [`StripSink`]; this crate is pure
//! in-memory, per-mount state and math.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tabstrip::{
//!     LayoutRect, MountedStrip, ProgressSignal, ScrollCommand, StripSink, TabStrip,
//!     UnderlineGeometry, config,
//! };
//!
//! struct Renderer;
//! impl StripSink for Renderer {
//!     fn apply_underline(&mut self, _g: UnderlineGeometry) { /* style write */ }
//!     fn scroll_to(&mut self, _c: ScrollCommand) { /* imperative scroll */ }
//!     fn request_page(&mut self, _page: usize) { /* tell the pager */ }
//! }
//!
//! let signal = ProgressSignal::new(0.0);
//! let strip = TabStrip::new(
//!     config::load_config(),
//!     vec!["Home".into(), "Feed".into(), "Profile".into()],
//! );
//! let mounted = MountedStrip::mount(&signal, strip, Rc::new(RefCell::new(Renderer)));
//!
//! // Layout callbacks, as each subject settles:
//! mounted.on_container_layout(LayoutRect { x: 0.0, width: 300.0, height: 50.0 });
//! mounted.on_strip_layout(LayoutRect { x: 0.0, width: 640.0, height: 50.0 });
//! mounted.on_tab_layout(0, LayoutRect { x: 0.0, width: 60.0, height: 49.0 });
//!
//! // Progress ticks, at animation cadence:
//! signal.set(0.5);
//! // Dropping `mounted` releases the progress subscription.
//! ```

pub mod config;
mod geometry;
mod mount;
mod progress;
mod scroll_math;
mod signal;
mod store;
mod strip;
mod underline_math;

pub use geometry::{
    FrameUpdate, LayoutRect, PageRequest, ScrollCommand, TabBounds, UnderlineGeometry,
    ViewportBounds,
};
pub use mount::{MountedStrip, StripSink};
pub use progress::PageProgress;
pub use scroll_math::scroll_target;
pub use signal::{ProgressSignal, Subscription};
pub use store::MeasurementStore;
pub use strip::TabStrip;
pub use underline_math::underline_span;
