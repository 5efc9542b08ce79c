//! Host traits the interaction core talks to.
//!
//! The core never renders, scrolls, or vibrates anything itself; it drives a
//! [`ListHost`] (the scrollable list container) and a [`Platform`] (overlay
//! surface, haptics, window geometry) through these seams. Both traits are
//! object-safe and handed to the controller per call as `&mut dyn`.

use kurbo::{Point, Rect};
use thiserror::Error;

/// Opaque handle for a captured row visual, issued by the [`ListHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotId(pub u64);

/// Opaque handle for a floating overlay, issued by the [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// Host-side failures surfaced at the trait seam.
///
/// These are always recovered locally: the core logs them and degrades the
/// gesture to "no visual change". Nothing propagates to the embedder.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to capture row snapshot: {0}")]
    SnapshotFailed(String),
    #[error("overlay surface unavailable: {0}")]
    OverlayUnavailable(String),
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// The scrollable list container being reordered.
///
/// Indices are absolute data indices; `child_at` addresses rendered rows by
/// their offset from the first visible one, so only the visible window needs
/// real geometry.
pub trait ListHost {
    /// Absolute index of the first rendered row.
    fn first_visible_index(&self) -> usize;

    /// Bounds of the rendered row `offset` places after the first visible
    /// one, in list-local coordinates. `None` past the last rendered row.
    fn child_at(&self, offset: usize) -> Option<Rect>;

    /// Height of the visible viewport in pixels.
    fn viewport_height(&self) -> f64;

    /// Smoothly scroll so the row at `index` sits `pixel_offset` pixels from
    /// the top of the viewport.
    fn smooth_scroll_to(&mut self, index: usize, pixel_offset: f64);

    /// Toggle a row's normal rendering. Hidden rows keep their layout slot.
    /// A row that is not currently rendered is a no-op.
    fn set_item_hidden(&mut self, index: usize, hidden: bool);

    /// Capture the rendered appearance of the row at `index`.
    fn capture_snapshot(&mut self, index: usize) -> HostResult<SnapshotId>;

    /// Release a snapshot that was never consumed by an overlay.
    fn release_snapshot(&mut self, snapshot: SnapshotId);
}

/// Platform services outside the list: the overlay surface, haptics, and
/// window geometry.
pub trait Platform {
    /// Trigger haptic feedback for `duration_ms` milliseconds.
    fn trigger_haptic(&mut self, duration_ms: u64);

    /// Create the floating overlay showing `snapshot` at `position` (screen
    /// coordinates) with the given alpha. Consumes the snapshot.
    fn create_overlay(
        &mut self,
        snapshot: SnapshotId,
        position: Point,
        alpha: f64,
    ) -> HostResult<OverlayId>;

    /// Move an existing overlay.
    fn update_overlay(&mut self, overlay: OverlayId, position: Point);

    /// Destroy an overlay, releasing it and its consumed snapshot.
    fn destroy_overlay(&mut self, overlay: OverlayId);

    /// Top window inset (status bar, notch) in pixels. Hosts that do not
    /// know return 0.0.
    fn top_inset(&self) -> f64;
}
