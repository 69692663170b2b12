use serde::{Deserialize, Serialize};

/// Engine configuration consumed by the sync core and its shell.
///
/// `allow_overscroll_bounce` replaces the original runtime platform
/// check: hosts whose scroll views have native overscroll elasticity
/// opt in, and the reconciler then skips the right-bound clamp.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Bar height in logical pixels.  Read by the rendering shell
    /// through [`TabStrip::config`](crate::TabStrip::config) when
    /// sizing the strip; the sync math itself never uses it.
    pub bar_height: u32,
    /// Underline thickness in logical pixels, likewise a shell-facing
    /// value: the engine computes the underline's horizontal span only.
    pub underline_height: u32,
    pub allow_overscroll_bounce: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            bar_height: 50,
            underline_height: 4,
            allow_overscroll_bounce: false,
        }
    }
}
