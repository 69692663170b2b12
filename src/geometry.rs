//! Value types shared by the measurement store and the math modules.
//!
//! Everything here is plain data in viewport coordinates.  Layout
//! callbacks deliver [`LayoutRect`]s; the store keeps [`TabBounds`] and
//! [`ViewportBounds`]; each progress tick derives an
//! [`UnderlineGeometry`] and a [`ScrollCommand`], bundled as a
//! [`FrameUpdate`].

/// Raw box carried by a layout-completion callback, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

/// Recorded extent of one rendered tab.
///
/// `right` is derived once at record time so the interpolator can blend
/// both edges without re-deriving it every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBounds {
    pub left: f32,
    pub right: f32,
    pub width: f32,
    pub height: f32,
}

impl TabBounds {
    /// Builds tab bounds from a layout callback box.
    pub fn from_layout(rect: LayoutRect) -> Self {
        Self {
            left: rect.x,
            right: rect.x + rect.width,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Measured size of the visible viewport containing the tab strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub width: f32,
    pub height: f32,
}

/// Target position and width for the active-tab underline.
///
/// Recomputed on every progress tick; never persisted beyond the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnderlineGeometry {
    pub left: f32,
    pub width: f32,
}

/// Absolute horizontal scroll target for the tab strip.
///
/// Issued as a non-animated scroll-to: the progress signal is already
/// animated by the caller, so the target is set outright each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset_x: f32,
}

/// The pair of outputs published for one ready progress tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    pub underline: UnderlineGeometry,
    pub scroll: ScrollCommand,
}

/// Outbound request to switch to a page, emitted on direct tab
/// activation.  The engine never changes pages itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest(pub usize);
