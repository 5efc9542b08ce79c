//! Edge auto-scroll bands and per-tick scroll decisions.

use serde::{Deserialize, Serialize};

/// Scroll direction for one auto-scroll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Pointer near the top edge: scroll the list backward.
    Backward,
    /// Pointer near the bottom edge: scroll the list forward.
    Forward,
}

/// The vertical trigger bands for edge auto-scroll.
///
/// Computed once at drag start from the viewport height: the lower quarter
/// and upper quarter of the viewport trigger scrolling, the half in between
/// is the dead zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollBand {
    /// Pointer above this Y scrolls the list backward.
    pub down_border: f64,
    /// Pointer below this Y scrolls the list forward.
    pub up_border: f64,
}

impl ScrollBand {
    /// Bands for a viewport of the given height: borders at 1/4 and 3/4.
    pub fn for_viewport(height: f64) -> Self {
        Self {
            down_border: height / 4.0,
            up_border: height * 3.0 / 4.0,
        }
    }

    /// Which way to scroll for a pointer at `y`, or `None` in the dead zone.
    pub fn direction_for(&self, y: f64) -> Option<ScrollDirection> {
        if y > self.up_border {
            Some(ScrollDirection::Forward)
        } else if y < self.down_border {
            Some(ScrollDirection::Backward)
        } else {
            None
        }
    }
}

impl ScrollDirection {
    /// Signed pixel delta applied to the dragged row's top for one tick.
    ///
    /// Forward scrolling moves content up, so the row's resting offset
    /// decreases; backward scrolling is the mirror.
    pub fn pixel_delta(&self, step: f64) -> f64 {
        match self {
            Self::Forward => -step,
            Self::Backward => step,
        }
    }
}
