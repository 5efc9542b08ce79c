//! Cancellable deferred-action queue.
//!
//! Both deferred actions of the interaction (the long-press delay and the
//! auto-scroll loop) go through this queue. The embedder drives it with its
//! own clock: schedule entries during event handling, then call
//! [`TimerQueue::fire_due`] at or after [`TimerQueue::next_deadline`].

use std::time::Duration;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// A single-shot timer queue keyed by caller-supplied tokens.
///
/// At most one entry exists per token; scheduling an already-pending token
/// is a no-op, so repeated requests are idempotent.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: Vec<(T, Instant)>,
}

impl<T: Copy + Eq> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `token` to fire at `now + delay`.
    ///
    /// No-op if the token is already pending.
    pub fn schedule(&mut self, token: T, delay: Duration, now: Instant) {
        if self.is_scheduled(token) {
            return;
        }
        self.entries.push((token, now + delay));
    }

    /// Cancel a pending token. No-op if it is not pending.
    pub fn cancel(&mut self, token: T) {
        self.entries.retain(|(t, _)| *t != token);
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether `token` is currently pending.
    pub fn is_scheduled(&self, token: T) -> bool {
        self.entries.iter().any(|(t, _)| *t == token)
    }

    /// The earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(_, at)| *at).min()
    }

    /// Remove and return all tokens whose deadline is at or before `now`,
    /// in deadline order. Tokens never fire before their deadline.
    pub fn fire_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<(T, Instant)> = Vec::new();
        self.entries.retain(|entry| {
            if entry.1 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(_, at)| *at);
        due.into_iter().map(|(t, _)| t).collect()
    }
}

impl<T: Copy + Eq> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
