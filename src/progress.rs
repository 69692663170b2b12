//! Decoding of the continuous page-progress value.
//!
//! The external paging controller animates a single scalar in
//! `[0, tab_count - 1]`; the engine splits it into an integer position
//! and a fractional offset before gating on measurements.

/// One decoded progress sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageProgress {
    /// Integer page position (`floor` of the progress value).
    pub position: usize,
    /// Fractional offset toward the next page, in `[0, 1)`.
    pub offset: f32,
}

impl PageProgress {
    /// Splits `value` into position and offset.
    ///
    /// Returns `None` for an empty tab set or a value outside
    /// `[0, tab_count - 1]` (transient overscroll): such ticks are
    /// no-ops, neither clamped nor errors.
    pub fn decode(value: f32, tab_count: usize) -> Option<Self> {
        if tab_count == 0 {
            return None;
        }
        let last = (tab_count - 1) as f32;
        if !value.is_finite() || value < 0.0 || value > last {
            return None;
        }

        let position = value.floor() as usize;
        Some(Self {
            position,
            offset: value - position as f32,
        })
    }

    /// True when `position` is the final tab, including the
    /// single-tab case.
    pub fn is_last(&self, tab_count: usize) -> bool {
        self.position + 1 >= tab_count
    }
}
