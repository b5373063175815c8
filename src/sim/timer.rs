//! Deferred serve scheduling
//!
//! The goal-to-next-serve delay is the sim's only suspension point. It is
//! modeled as a fire-once countdown ticked by the match context on the same
//! single-threaded loop, so cancellation is just disarming: a match reset
//! while a serve is pending must never let the old serve fire against
//! rebuilt players.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// What to do when the timer fires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServeCue {
    /// Side the serve should travel toward; `None` means coin-flip
    pub toward: Option<Side>,
}

/// Cancellable, restartable, fire-once serve timer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ServeTimer {
    pending: Option<Pending>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Pending {
    remaining: f32,
    cue: ServeCue,
}

impl ServeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a serve after `delay` seconds. Re-arming replaces any
    /// pending serve.
    pub fn arm(&mut self, delay: f32, toward: Option<Side>) {
        self.pending = Some(Pending {
            remaining: delay,
            cue: ServeCue { toward },
        });
    }

    /// Drop any pending serve
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Count down; returns the cue exactly once, on the tick the delay
    /// elapses
    pub fn tick(&mut self, dt: f32) -> Option<ServeCue> {
        let pending = self.pending.as_mut()?;
        pending.remaining -= dt;
        if pending.remaining <= 0.0 {
            let cue = pending.cue;
            self.pending = None;
            Some(cue)
        } else {
            None
        }
    }
}
