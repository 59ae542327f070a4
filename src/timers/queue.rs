//! Ordered queue of scheduled cook actions.
//!
//! Strict FIFO arrival order, fixed capacity, and head-only scheduling:
//! position 0 is the only timer ever started or checked, so at most one
//! timer runs at any instant and entries behind the head stay dormant.
//! When the head completes it is removed the same tick; the new head is
//! started on the *next* tick, giving sequential, non-overlapping execution
//! with a one-tick hand-off latency.

use core::time::Duration;

use crate::config::MAX_COOK_TIMERS;
use crate::error::Error;
use crate::status::TimerStatus;

use super::timer::{CookTimer, TimerAction, TimerEffect, TimerId};

/// What one queue advancement did, for the caller to apply and report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QueueTick {
    /// Effect fired by the head's start or done action this tick, if any.
    pub effect: Option<TimerEffect>,
    /// Head timer that began running this tick.
    pub started: Option<TimerId>,
    /// Head timer that completed and was removed this tick.
    pub completed: Option<TimerId>,
}

pub struct CookTimerQueue {
    timers: heapless::Vec<CookTimer, MAX_COOK_TIMERS>,
    /// Next id to allocate. Monotonic; never reused, never reset.
    next_id: u32,
}

impl CookTimerQueue {
    pub fn new() -> Self {
        Self {
            timers: heapless::Vec::new(),
            next_id: 1,
        }
    }

    /// Append a timer at the tail. Legal at any time, in any mode; the
    /// entry takes effect whenever Timers mode is next active.
    pub fn enqueue(
        &mut self,
        action: TimerAction,
        duration_secs: u64,
        argument: f32,
    ) -> crate::error::Result<TimerId> {
        if self.timers.is_full() {
            return Err(Error::QueueFull);
        }
        let id = TimerId::new(self.next_id);
        self.next_id += 1;

        let timer = CookTimer::new(id, action, duration_secs, argument);
        // Capacity was checked above; push cannot fail.
        let _ = self.timers.push(timer);
        Ok(id)
    }

    /// Remove the first entry matching `id`, from any position. Removing
    /// the running head discards it — its done action never fires. Returns
    /// whether an entry was removed.
    pub fn remove(&mut self, id: TimerId) -> bool {
        match self.timers.iter().position(|t| t.id() == id) {
            Some(idx) => {
                self.timers.remove(idx);
                true
            }
            None => false,
        }
    }

    /// One advancement step; call once per control tick while in Timers
    /// mode. Inspects only the head: starts it if dormant, otherwise checks
    /// it for expiry, then removes it if done.
    pub fn tick(&mut self, now: Duration) -> QueueTick {
        let mut out = QueueTick::default();

        let Some(head) = self.timers.first_mut() else {
            return out;
        };

        if head.is_running() {
            out.effect = head.check(now);
        } else {
            out.effect = head.start(now);
            out.started = Some(head.id());
        }

        if self
            .timers
            .first()
            .is_some_and(|head| head.is_done(now))
        {
            let done = self.timers.remove(0);
            out.completed = Some(done.id());
        }

        out
    }

    /// Serialized view of every queued timer, in queue order. Read-only.
    pub fn snapshot(&self, now: Duration) -> Vec<TimerStatus> {
        self.timers.iter().map(|t| TimerStatus::of(t, now)).collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Number of timers currently running (0 or 1 by construction).
    pub fn running_count(&self) -> usize {
        self.timers.iter().filter(|t| t.is_running()).count()
    }
}

impl Default for CookTimerQueue {
    fn default() -> Self {
        Self::new()
    }
}
