//! Fake hosts for tests: a fixed-row-height list and a recording platform.

use std::collections::HashSet;

use kurbo::{Point, Rect};

use crate::host::{HostError, HostResult, ListHost, OverlayId, Platform, SnapshotId};

/// In-memory list with fixed-height rows. Rows keep their layout slot when
/// hidden; scrolling is simulated by moving the first visible index.
pub struct FakeList {
    item_count: usize,
    item_height: f64,
    viewport_height: f64,
    width: f64,
    first_visible: usize,
    hidden: HashSet<usize>,
    next_snapshot: u64,
    pub fail_capture: bool,
    pub captured: Vec<(SnapshotId, usize)>,
    pub released: Vec<SnapshotId>,
    pub scroll_calls: Vec<(usize, f64)>,
}

impl FakeList {
    pub fn new(item_count: usize, item_height: f64, viewport_height: f64) -> Self {
        Self {
            item_count,
            item_height,
            viewport_height,
            width: 320.0,
            first_visible: 0,
            hidden: HashSet::new(),
            next_snapshot: 1,
            fail_capture: false,
            captured: Vec::new(),
            released: Vec::new(),
            scroll_calls: Vec::new(),
        }
    }

    /// Simulate the list having scrolled so `index` is the first rendered row.
    pub fn scroll_to_first_visible(&mut self, index: usize) {
        self.first_visible = index;
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.contains(&index)
    }
}

impl ListHost for FakeList {
    fn first_visible_index(&self) -> usize {
        self.first_visible
    }

    fn child_at(&self, offset: usize) -> Option<Rect> {
        let index = self.first_visible + offset;
        if index >= self.item_count {
            return None;
        }
        let top = offset as f64 * self.item_height;
        if top >= self.viewport_height {
            return None;
        }
        Some(Rect::new(0.0, top, self.width, top + self.item_height))
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn smooth_scroll_to(&mut self, index: usize, pixel_offset: f64) {
        self.scroll_calls.push((index, pixel_offset));
    }

    fn set_item_hidden(&mut self, index: usize, hidden: bool) {
        if hidden {
            self.hidden.insert(index);
        } else {
            self.hidden.remove(&index);
        }
    }

    fn capture_snapshot(&mut self, index: usize) -> HostResult<SnapshotId> {
        if self.fail_capture {
            return Err(HostError::SnapshotFailed("no drawing cache".into()));
        }
        let id = SnapshotId(self.next_snapshot);
        self.next_snapshot += 1;
        self.captured.push((id, index));
        Ok(id)
    }

    fn release_snapshot(&mut self, snapshot: SnapshotId) {
        self.released.push(snapshot);
    }
}

/// Platform fake recording haptics and overlay traffic.
pub struct FakePlatform {
    pub top_inset: f64,
    pub fail_overlay: bool,
    next_overlay: u64,
    pub haptics: Vec<u64>,
    pub created: Vec<(OverlayId, SnapshotId, Point, f64)>,
    pub updates: Vec<(OverlayId, Point)>,
    pub destroyed: Vec<OverlayId>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            top_inset: 0.0,
            fail_overlay: false,
            next_overlay: 1,
            haptics: Vec::new(),
            created: Vec::new(),
            updates: Vec::new(),
            destroyed: Vec::new(),
        }
    }

    /// Overlays created and not yet destroyed.
    pub fn live_overlays(&self) -> usize {
        self.created.len() - self.destroyed.len()
    }
}

impl Platform for FakePlatform {
    fn trigger_haptic(&mut self, duration_ms: u64) {
        self.haptics.push(duration_ms);
    }

    fn create_overlay(
        &mut self,
        snapshot: SnapshotId,
        position: Point,
        alpha: f64,
    ) -> HostResult<OverlayId> {
        if self.fail_overlay {
            return Err(HostError::OverlayUnavailable("window manager rejected view".into()));
        }
        let id = OverlayId(self.next_overlay);
        self.next_overlay += 1;
        self.created.push((id, snapshot, position, alpha));
        Ok(id)
    }

    fn update_overlay(&mut self, overlay: OverlayId, position: Point) {
        self.updates.push((overlay, position));
    }

    fn destroy_overlay(&mut self, overlay: OverlayId) {
        self.destroyed.push(overlay);
    }

    fn top_inset(&self) -> f64 {
        self.top_inset
    }
}
