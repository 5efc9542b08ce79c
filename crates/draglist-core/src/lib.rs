//! DragList Core Library
//!
//! Platform-agnostic interaction core for drag-to-reorder lists: long-press
//! drag initiation, pointer tracking with coordinate-to-index resolution,
//! edge auto-scroll, and swap/reorder decisions. Rendering, snapshot capture,
//! the floating overlay, and haptics stay behind the host traits in [`host`].

pub mod autoscroll;
pub mod config;
pub mod controller;
pub mod host;
pub mod input;
pub mod session;
pub mod timer;

#[cfg(test)]
pub(crate) mod testhost;

pub use autoscroll::{ScrollBand, ScrollDirection};
pub use config::DragConfig;
pub use controller::{EventOutcome, ReorderController};
pub use hit_test::index_at;
pub use host::{HostError, HostResult, ListHost, OverlayId, Platform, SnapshotId};
pub use input::{PointerEvent, PointerSample};
pub use session::{DragSession, PressState};
pub use timer::TimerQueue;
