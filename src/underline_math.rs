//! Pure interpolation math for the active-tab underline.
//!
//! No state, no side effects: given the bounds of the current tab, the
//! bounds of the next tab (when one exists) and the fractional page
//! offset, this computes where the underline should sit this tick.

use crate::geometry::{TabBounds, UnderlineGeometry};

/// Blends the underline between `cur` and `next` at `offset` in `[0, 1)`.
///
/// Both edges are interpolated independently rather than interpolating
/// the width: as tabs of different widths transition, the underline
/// stretches and then snaps to the incoming tab instead of sliding at a
/// fixed width.
///
/// `next = None` means `cur` is the last tab; the underline rests on it
/// exactly and `offset` is ignored.
pub fn underline_span(cur: TabBounds, next: Option<TabBounds>, offset: f32) -> UnderlineGeometry {
    let Some(next) = next else {
        return UnderlineGeometry {
            left: cur.left,
            width: cur.right - cur.left,
        };
    };

    let left = offset * next.left + (1.0 - offset) * cur.left;
    let right = offset * next.right + (1.0 - offset) * cur.right;
    UnderlineGeometry {
        left,
        width: right - left,
    }
}
