//! Per-gesture state values.
//!
//! The interaction's mutable state lives in two explicit values — the armed
//! press and the active drag session — owned by the controller's state enum
//! and passed through each handler, never in free-floating fields.

use kurbo::{Point, Rect, Vec2};

use crate::autoscroll::ScrollBand;
use crate::host::{OverlayId, SnapshotId};
use crate::input::PointerSample;

/// State of an armed long press: everything captured at pointer-down, before
/// the row can be hidden or the list can move.
#[derive(Debug, Clone)]
pub struct PressState {
    /// Absolute index of the pressed row.
    pub index: usize,
    /// The pointer-down sample.
    pub down: PointerSample,
    /// Bounds of the pressed row at press time, list-local.
    pub item_rect: Rect,
    /// Fixed offset from the row's top-left to the press point.
    pub pointer_to_item: Vec2,
    /// Fixed offset from local to screen-absolute coordinates.
    pub local_to_screen: Vec2,
    /// Auto-scroll trigger bands for the current viewport.
    pub band: ScrollBand,
    /// Row visual captured at press time.
    pub snapshot: SnapshotId,
}

/// State of an active drag: created when the long press fires, destroyed on
/// pointer-up. At most one exists at a time.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// The dragged row's *current* slot; swaps move it.
    pub source_index: usize,
    /// Fixed offset from the row's top-left to the press point.
    pub pointer_to_item: Vec2,
    /// Fixed offset from local to screen-absolute coordinates.
    pub local_to_screen: Vec2,
    /// Auto-scroll trigger bands for the current viewport.
    pub band: ScrollBand,
    /// The session's overlay handle.
    pub overlay: OverlayId,
    /// Most recent pointer sample; auto-scroll ticks read it between moves.
    pub last_sample: PointerSample,
}

impl PressState {
    /// Promote an armed press into an active session around `overlay`.
    pub fn into_session(self, overlay: OverlayId) -> DragSession {
        DragSession {
            source_index: self.index,
            pointer_to_item: self.pointer_to_item,
            local_to_screen: self.local_to_screen,
            band: self.band,
            overlay,
            last_sample: self.down,
        }
    }
}

impl DragSession {
    /// Screen position for the overlay given a pointer position.
    ///
    /// Keeps the same pixel of the snapshot under the pointer that was under
    /// it at press time, corrected for the local/screen offset and any top
    /// inset the overlay surface does not account for itself.
    pub fn overlay_position(&self, pointer: Point, top_inset: f64) -> Point {
        Point::new(
            pointer.x - self.pointer_to_item.x + self.local_to_screen.x,
            pointer.y - self.pointer_to_item.y + self.local_to_screen.y - top_inset,
        )
    }
}

/// Overlay position for an armed press that has not moved yet.
///
/// Same formula as [`DragSession::overlay_position`], applied to the
/// pointer-down sample when the overlay is first created.
pub fn initial_overlay_position(press: &PressState, top_inset: f64) -> Point {
    Point::new(
        press.down.position.x - press.pointer_to_item.x + press.local_to_screen.x,
        press.down.position.y - press.pointer_to_item.y + press.local_to_screen.y - top_inset,
    )
}
