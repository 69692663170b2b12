//! Pure scroll-target math for the tab strip.
//!
//! Computes the absolute horizontal offset that keeps the active (and
//! incoming) tab centered in the viewport while a swipe is in flight.

/// Computes the strip's scroll target for one progress tick.
///
/// - `tab_left`: left edge of the current tab within the strip.
/// - `tab_width`: width of the current tab.
/// - `next_tab_width`: width of the incoming tab, `0.0` when the
///   current tab is the last one.
/// - `offset`: fractional page offset in `[0, 1)`.
/// - `container_width` / `strip_width`: viewport and full strip widths.
/// - `allow_overscroll_bounce`: when `true` the upper clamp is skipped
///   and the platform's native overscroll elasticity absorbs targets
///   past the right edge; when `false` the target is clamped to
///   `strip_width - container_width`.
///
/// The lower clamp to `0` always applies and runs before the upper
/// clamp, matching native scroll-view parity.
pub fn scroll_target(
    tab_left: f32,
    tab_width: f32,
    next_tab_width: f32,
    offset: f32,
    container_width: f32,
    strip_width: f32,
    allow_overscroll_bounce: bool,
) -> f32 {
    let absolute_offset = offset * tab_width;
    let mut target = tab_left + absolute_offset;

    // Center the weighted blend of the outgoing and incoming tab so the
    // apparent focus stays centered as tab widths change mid-swipe.
    target -= (container_width - (1.0 - offset) * tab_width - offset * next_tab_width) / 2.0;

    target = target.max(0.0);
    if !allow_overscroll_bounce {
        target = target.min(strip_width - container_width);
    }
    target
}
