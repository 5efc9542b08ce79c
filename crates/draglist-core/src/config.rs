//! Interaction configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters for the reorder interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Hold duration before a press becomes a drag, in milliseconds.
    pub drag_response_ms: u64,
    /// Alpha applied to the floating overlay.
    pub overlay_alpha: f64,
    /// Haptic pulse length on drag start, in milliseconds.
    pub haptic_ms: u64,
    /// Pixels scrolled per auto-scroll tick.
    pub scroll_step: f64,
    /// Interval between auto-scroll ticks, in milliseconds.
    pub scroll_interval_ms: u64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            drag_response_ms: 600,
            overlay_alpha: 0.35,
            haptic_ms: 50,
            scroll_step: 30.0,
            scroll_interval_ms: 25,
        }
    }
}
