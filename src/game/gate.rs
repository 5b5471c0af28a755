//! Caller-side serialization of move requests.
//!
//! The engine resolves every move synchronously and never throttles. A
//! presentation layer that animates moves owns a `MoveGate` and drops
//! requests arriving before the previous move has settled, so each changed
//! move gets exactly one spawn before the next one is applied.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use rust_2048::game::MoveGate;
//!
//! let mut gate = MoveGate::default();
//! let t0 = Instant::now();
//!
//! assert!(gate.try_acquire(t0));
//! assert!(!gate.try_acquire(t0 + Duration::from_millis(50)));
//! assert!(gate.try_acquire(t0 + Duration::from_millis(105)));
//! ```

use std::time::{Duration, Instant};

use crate::core::MERGE_ANIMATION_MS;

/// Leading-edge throttle: accept a request, then reject everything until
/// the cooldown has elapsed.
#[derive(Clone, Debug)]
pub struct MoveGate {
    cooldown: Duration,
    last_accepted: Option<Instant>,
}

impl Default for MoveGate {
    /// Cooldown of 1.05 merge animations.
    fn default() -> Self {
        Self::new(Duration::from_micros(MERGE_ANIMATION_MS * 1050))
    }
}

impl MoveGate {
    #[must_use]
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Whether a move requested at `now` may be dispatched. Accepting
    /// restarts the cooldown; rejected requests are dropped, not queued.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let ready = self
            .last_accepted
            .map_or(true, |last| now.saturating_duration_since(last) >= self.cooldown);
        if ready {
            self.last_accepted = Some(now);
        }
        ready
    }

    /// Forget the last accepted move, e.g. on a new game.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
