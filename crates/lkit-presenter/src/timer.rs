#![forbid(unsafe_code)]

//! One-shot expiration timers.
//!
//! An [`EntryTimer`] binds a deadline to one entry id. A presenter holds at
//! most one, always for its current top entry, and overwrites it whenever
//! the top changes; overwriting is the replace-on-reschedule primitive, and
//! [`EntryTimer::cancel`] invalidates without firing.
//!
//! Time is delivered by the host event loop: the presenter's `tick(now)`
//! calls [`EntryTimer::fire_if_due`], which transitions to `Fired` at most
//! once. Firing drives a user-facing auto-dismiss, not a deadline, so being
//! coalesced with the tick cadence (plus a small early-fire tolerance) is
//! accepted.

use lkit_core::EntryId;
use std::time::Duration;
use web_time::Instant;

/// Window within which a fire may be coalesced ahead of its deadline.
pub const FIRE_TOLERANCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Armed,
    Cancelled,
    Fired,
}

/// A one-shot countdown bound to a specific entry.
#[derive(Debug, Clone)]
pub struct EntryTimer {
    owner: EntryId,
    fire_at: Instant,
    state: TimerState,
}

impl EntryTimer {
    /// Schedule a timer for `owner`, firing `duration` from now.
    #[must_use]
    pub fn schedule(owner: EntryId, duration: Duration) -> Self {
        Self::schedule_at(owner, duration, Instant::now())
    }

    /// Schedule a timer for `owner`, firing `duration` after `now`.
    #[must_use]
    pub fn schedule_at(owner: EntryId, duration: Duration, now: Instant) -> Self {
        Self {
            owner,
            fire_at: now + duration,
            state: TimerState::Armed,
        }
    }

    /// The entry this timer will dismiss.
    #[must_use]
    pub fn owner(&self) -> EntryId {
        self.owner
    }

    /// Whether the timer is armed (not cancelled, not yet fired).
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.state == TimerState::Armed
    }

    /// Invalidate without firing. Safe to call in any state.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Armed {
            self.state = TimerState::Cancelled;
        }
    }

    /// Fire if the deadline has been reached (within [`FIRE_TOLERANCE`]).
    ///
    /// Returns the owner id on the single transition to `Fired`; all later
    /// calls return `None`: the timer is spent and re-arming requires a
    /// fresh `schedule`.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<EntryId> {
        if self.state != TimerState::Armed {
            return None;
        }
        if now + FIRE_TOLERANCE >= self.fire_at {
            self.state = TimerState::Fired;
            return Some(self.owner);
        }
        None
    }
}
