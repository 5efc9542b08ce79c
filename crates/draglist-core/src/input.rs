//! Pointer event types for the reorder interaction.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One pointer position, carrying both coordinate systems.
///
/// `position` is in the list's local space; `screen_position` is absolute.
/// The difference between the two is fixed for the lifetime of a gesture and
/// is what keeps the floating overlay aligned across window boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Position in list-local coordinates.
    pub position: Point,
    /// Position in screen-absolute coordinates.
    pub screen_position: Point,
}

impl PointerSample {
    /// Create a sample from local and screen-absolute positions.
    pub fn new(position: Point, screen_position: Point) -> Self {
        Self {
            position,
            screen_position,
        }
    }

    /// Create a sample where local and screen coordinates coincide.
    pub fn local(position: Point) -> Self {
        Self {
            position,
            screen_position: position,
        }
    }
}

/// Pointer event type for unified mouse/touch handling.
///
/// Events are expected in gesture order: a `Down` always precedes any
/// `Move`/`Up` of the same gesture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up(PointerSample),
}

impl PointerEvent {
    /// The sample carried by this event.
    pub fn sample(&self) -> PointerSample {
        match self {
            Self::Down(s) | Self::Move(s) | Self::Up(s) => *s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_sample_coincides() {
        let s = PointerSample::local(Point::new(10.0, 20.0));
        assert_eq!(s.position, s.screen_position);
    }

    #[test]
    fn test_event_sample_accessor() {
        let s = PointerSample::new(Point::new(5.0, 6.0), Point::new(105.0, 206.0));
        assert_eq!(PointerEvent::Down(s).sample(), s);
        assert_eq!(PointerEvent::Move(s).sample(), s);
        assert_eq!(PointerEvent::Up(s).sample(), s);
    }
}
