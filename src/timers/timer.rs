//! A single scheduled cook action.
//!
//! A [`CookTimer`] is immutable once created except for its elapsed-time
//! accumulator: action, duration, and argument are fixed at enqueue time.
//! Its start and done actions are not executed here — they are returned as
//! [`TimerEffect`]s for the caller to apply. The caller (the service tick)
//! already holds the appliance lock, so the effect is applied on an
//! explicitly already-exclusive path instead of re-entering a public setter.

use core::time::Duration;

use log::info;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Stable handle for a queued timer; the sole key for removal. Allocated by
/// the queue from a monotonic counter that is never reused or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

impl TimerId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for TimerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Action kind
// ---------------------------------------------------------------------------

/// What a timer does when it starts and when it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// On start: apply the timer's argument as the target temperature.
    Cook,
    /// On expiry: command heat-off (target temperature 0).
    StopCook,
    /// On expiry: command heat-off; Off-mode reconciliation then runs the
    /// passive cooldown.
    StopAndCool,
    /// Pure delay; no actuator effect at either end.
    Countdown,
    /// On expiry: raise an alert for the UI collaborator.
    AlertWebpage,
}

impl TimerAction {
    /// Decode the fixed literal token sent by the command layer.
    ///
    /// Unrecognised tokens map to [`TimerAction::StopCook`]. This mirrors
    /// the shipped appliance (which never matched its own "Stop+Cook"
    /// token) and is almost certainly a defect rather than a deliberate
    /// fallback — it is kept as a single named policy so a future fix is a
    /// one-line change.
    pub fn from_request_token(token: &str) -> Self {
        match token {
            "Cook" => Self::Cook,
            "Countdown" => Self::Countdown,
            "Stop+&+Cool" => Self::StopAndCool,
            "Alert+Webpage" => Self::AlertWebpage,
            _ => Self::StopCook,
        }
    }

    /// Human-readable name used in the timers status report.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cook => "Cook",
            Self::StopCook => "Stop Cook",
            Self::StopAndCool => "Stop & Cool",
            Self::Countdown => "Countdown",
            Self::AlertWebpage => "Alert Webpage",
        }
    }
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

/// Side effect requested by a timer's start or done action, applied by the
/// already-locked caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerEffect {
    /// Set the appliance target temperature (°F).
    SetTargetTemp(f32),
    /// Surface an expired `AlertWebpage` timer.
    Alert(TimerId),
}

// ---------------------------------------------------------------------------
// CookTimer
// ---------------------------------------------------------------------------

/// One scheduled cook action plus its elapsed-time accumulator.
#[derive(Debug, Clone)]
pub struct CookTimer {
    id: TimerId,
    action: TimerAction,
    /// Target temperature for `Cook`; ignored by every other action.
    argument: f32,
    duration: Duration,
    /// Accumulated running time from completed run spans.
    elapsed: Duration,
    /// Monotonic instant the current run span began; `None` while paused.
    started_at: Option<Duration>,
    start_fired: bool,
    done_fired: bool,
}

impl CookTimer {
    /// No range validation: out-of-range durations/arguments are accepted
    /// and surface only through their physical effect.
    pub(crate) fn new(id: TimerId, action: TimerAction, duration_secs: u64, argument: f32) -> Self {
        Self {
            id,
            action,
            argument,
            duration: Duration::from_secs(duration_secs),
            elapsed: Duration::ZERO,
            started_at: None,
            start_fired: false,
            done_fired: false,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn action(&self) -> TimerAction {
        self.action
    }

    pub fn argument(&self) -> f32 {
        self.argument
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total accumulated running time as of `now`.
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.started_at {
            Some(t0) => self.elapsed + now.saturating_sub(t0),
            None => self.elapsed,
        }
    }

    /// Done means the timer ran to (or past) its duration — a paused timer
    /// is never done, no matter how much time it accumulated.
    pub fn is_done(&self, now: Duration) -> bool {
        self.is_running() && self.elapsed(now) >= self.duration
    }

    /// Begin elapsing and fire the start action.
    ///
    /// Idempotent: a second call while running is a no-op, and the start
    /// action fires at most once over the timer's lifetime (resuming after
    /// `pause` does not re-fire it).
    pub fn start(&mut self, now: Duration) -> Option<TimerEffect> {
        if self.is_running() {
            return None;
        }
        self.started_at = Some(now);

        if self.start_fired {
            return None;
        }
        self.start_fired = true;
        info!("timer {} started ({})", self.id, self.action.as_str());

        match self.action {
            TimerAction::Cook => Some(TimerEffect::SetTargetTemp(self.argument)),
            TimerAction::StopCook
            | TimerAction::StopAndCool
            | TimerAction::Countdown
            | TimerAction::AlertWebpage => None,
        }
    }

    /// Stop elapsing, preserving accumulated time. Idempotent.
    pub fn pause(&mut self, now: Duration) {
        if let Some(t0) = self.started_at.take() {
            self.elapsed += now.saturating_sub(t0);
        }
    }

    /// Fire the done action if the timer has expired. At most once.
    pub fn check(&mut self, now: Duration) -> Option<TimerEffect> {
        if !self.is_done(now) || self.done_fired {
            return None;
        }
        self.done_fired = true;
        info!("timer {} timed out ({})", self.id, self.action.as_str());

        match self.action {
            TimerAction::StopCook | TimerAction::StopAndCool => {
                Some(TimerEffect::SetTargetTemp(0.0))
            }
            TimerAction::AlertWebpage => Some(TimerEffect::Alert(self.id)),
            TimerAction::Cook | TimerAction::Countdown => None,
        }
    }
}
