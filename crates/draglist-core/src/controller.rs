//! The reorder interaction state machine.
//!
//! Raw pointer events come in; long-press arming, drag tracking, swap
//! resolution, and edge auto-scroll come out as calls against the host
//! traits plus synchronous `on_reorder` callbacks. Everything runs on one
//! logical thread; deferred work (the long-press delay, auto-scroll ticks)
//! sits in a timer queue the embedder drains via [`ReorderController::advance`].

use std::time::Duration;

use kurbo::Point;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

use crate::autoscroll::ScrollBand;
use crate::config::DragConfig;
use crate::hit_test::index_at;
use crate::host::{ListHost, Platform};
use crate::input::{PointerEvent, PointerSample};
use crate::session::{DragSession, PressState, initial_overlay_position};
use crate::timer::TimerQueue;

/// What the controller did with an event.
///
/// Events pass through to the underlying list until a drag session is
/// active; once dragging, move/up belong to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Deliver the event to the underlying list as usual.
    Passthrough,
    /// The event was consumed by the active drag session.
    Consumed,
}

/// Deferred actions owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredAction {
    LongPress,
    AutoScroll,
}

/// Gesture state. At most one press or one session exists at a time.
enum State {
    Idle,
    Pressed(PressState),
    Dragging(DragSession),
}

/// Drag-to-reorder controller for one scrollable list.
///
/// Feed it every pointer event of the list through
/// [`handle_pointer_event`](Self::handle_pointer_event), and call
/// [`advance`](Self::advance) whenever [`next_deadline`](Self::next_deadline)
/// comes due. Reorder decisions surface through the `on_reorder` callback,
/// invoked synchronously before the triggering handler returns, so the
/// embedder's backing order is consistent before the next frame.
pub struct ReorderController {
    config: DragConfig,
    state: State,
    timers: TimerQueue<DeferredAction>,
    on_reorder: Box<dyn FnMut(usize, usize)>,
}

impl ReorderController {
    /// Create a controller. `on_reorder(from, to)` is invoked once per swap.
    pub fn new(config: DragConfig, on_reorder: impl FnMut(usize, usize) + 'static) -> Self {
        Self {
            config,
            state: State::Idle,
            timers: TimerQueue::new(),
            on_reorder: Box::new(on_reorder),
        }
    }

    /// Whether a drag session is currently active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging(_))
    }

    /// Earliest point in time at which [`advance`](Self::advance) has work.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Process one pointer event at time `now`.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        now: Instant,
        list: &mut dyn ListHost,
        platform: &mut dyn Platform,
    ) -> EventOutcome {
        match event {
            PointerEvent::Down(sample) => self.on_down(sample, now, list),
            PointerEvent::Move(sample) => self.on_move(sample, now, list, platform),
            PointerEvent::Up(_) => self.on_up(list, platform),
        }
    }

    /// Fire all deferred actions due at `now`.
    pub fn advance(&mut self, now: Instant, list: &mut dyn ListHost, platform: &mut dyn Platform) {
        for action in self.timers.fire_due(now) {
            match action {
                DeferredAction::LongPress => self.fire_long_press(list, platform),
                DeferredAction::AutoScroll => self.autoscroll_tick(now, list),
            }
        }
    }

    fn on_down(
        &mut self,
        sample: PointerSample,
        now: Instant,
        list: &mut dyn ListHost,
    ) -> EventOutcome {
        // A press on empty space never arms; the list sees the event as usual.
        let Some(index) = index_at(list, sample.position) else {
            return EventOutcome::Passthrough;
        };
        let Some(item_rect) = list.child_at(index - list.first_visible_index()) else {
            return EventOutcome::Passthrough;
        };
        // Geometry and the row visual are captured now, while the row is
        // still rendered normally.
        let snapshot = match list.capture_snapshot(index) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("row snapshot failed, not arming drag: {e}");
                return EventOutcome::Passthrough;
            }
        };
        let press = PressState {
            index,
            down: sample,
            item_rect,
            pointer_to_item: sample.position - item_rect.origin(),
            local_to_screen: sample.screen_position - sample.position,
            band: ScrollBand::for_viewport(list.viewport_height()),
            snapshot,
        };
        self.timers.schedule(
            DeferredAction::LongPress,
            Duration::from_millis(self.config.drag_response_ms),
            now,
        );
        log::debug!("press armed at index {index}");
        self.state = State::Pressed(press);
        EventOutcome::Passthrough
    }

    fn on_move(
        &mut self,
        sample: PointerSample,
        now: Instant,
        list: &mut dyn ListHost,
        platform: &mut dyn Platform,
    ) -> EventOutcome {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => EventOutcome::Passthrough,
            State::Pressed(press) => {
                if press.item_rect.contains(sample.position) {
                    self.state = State::Pressed(press);
                } else {
                    // Drag intent abandoned (e.g. the user started scrolling).
                    log::debug!("pointer left the pressed row, long press cancelled");
                    self.timers.cancel(DeferredAction::LongPress);
                    list.release_snapshot(press.snapshot);
                }
                EventOutcome::Passthrough
            }
            State::Dragging(mut session) => {
                session.last_sample = sample;
                let position = session.overlay_position(sample.position, platform.top_inset());
                platform.update_overlay(session.overlay, position);
                self.resolve_swap(&mut session, list, sample.position);
                // Kick the auto-scroll loop; no-op while it is already running.
                self.timers
                    .schedule(DeferredAction::AutoScroll, Duration::ZERO, now);
                self.state = State::Dragging(session);
                EventOutcome::Consumed
            }
        }
    }

    fn on_up(&mut self, list: &mut dyn ListHost, platform: &mut dyn Platform) -> EventOutcome {
        self.timers.clear();
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => EventOutcome::Passthrough,
            State::Pressed(press) => {
                list.release_snapshot(press.snapshot);
                EventOutcome::Passthrough
            }
            State::Dragging(session) => {
                list.set_item_hidden(session.source_index, false);
                platform.destroy_overlay(session.overlay);
                log::debug!("drag ended at index {}", session.source_index);
                EventOutcome::Consumed
            }
        }
    }

    /// Long-press deadline reached: the armed press becomes a drag session.
    fn fire_long_press(&mut self, list: &mut dyn ListHost, platform: &mut dyn Platform) {
        let State::Pressed(press) = std::mem::replace(&mut self.state, State::Idle) else {
            return;
        };
        platform.trigger_haptic(self.config.haptic_ms);
        list.set_item_hidden(press.index, true);
        let position = initial_overlay_position(&press, platform.top_inset());
        match platform.create_overlay(press.snapshot, position, self.config.overlay_alpha) {
            Ok(overlay) => {
                log::debug!("drag started at index {}", press.index);
                self.state = State::Dragging(press.into_session(overlay));
            }
            Err(e) => {
                // Degrade to "no visual change": reveal the row and give the
                // snapshot back.
                log::warn!("overlay creation failed, abandoning drag: {e}");
                list.set_item_hidden(press.index, false);
                list.release_snapshot(press.snapshot);
            }
        }
    }

    /// One auto-scroll tick: scroll if the pointer sits in a trigger band,
    /// re-resolve the swap (scrolling moves rows under a stationary pointer),
    /// and re-center the dragged row.
    fn autoscroll_tick(&mut self, now: Instant, list: &mut dyn ListHost) {
        let State::Dragging(mut session) = std::mem::replace(&mut self.state, State::Idle) else {
            return;
        };
        let direction = session.band.direction_for(session.last_sample.position.y);
        if direction.is_some() {
            self.timers.schedule(
                DeferredAction::AutoScroll,
                Duration::from_millis(self.config.scroll_interval_ms),
                now,
            );
        }
        let point = session.last_sample.position;
        self.resolve_swap(&mut session, list, point);

        let scroll_y = direction.map_or(0.0, |d| d.pixel_delta(self.config.scroll_step));
        let first = list.first_visible_index();
        if session.source_index >= first {
            if let Some(rect) = list.child_at(session.source_index - first) {
                list.smooth_scroll_to(session.source_index, rect.y0 + scroll_y);
            }
            // Dragged row scrolled out of the render window: transient, skip
            // the re-center for this tick.
        }
        self.state = State::Dragging(session);
    }

    /// Swap resolution: if the pointer resolves to a different row, toggle
    /// visibility, notify, and adopt the new slot.
    fn resolve_swap(&mut self, session: &mut DragSession, list: &mut dyn ListHost, point: Point) {
        let Some(target) = index_at(list, point) else {
            return;
        };
        if target == session.source_index {
            return;
        }
        list.set_item_hidden(target, true);
        list.set_item_hidden(session.source_index, false);
        log::debug!("swap {} -> {}", session.source_index, target);
        (self.on_reorder)(session.source_index, target);
        session.source_index = target;
    }
}
