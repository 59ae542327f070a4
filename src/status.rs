//! Serializable status snapshots for the command/UI collaborator.
//!
//! Field names are the wire format the status webpage polls; do not rename
//! without versioning the frontend.

use core::time::Duration;

use serde::Serialize;

use crate::stove::{FanSpeed, StoveMode};
use crate::timers::{CookTimer, TimerAction};

/// Point-in-time appliance state, valid at the end of some completed tick
/// or command (never a partial update — see the locking discipline in
/// [`control_loop`](crate::control_loop)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoveStatus {
    pub current_temp: f32,
    pub target_temp: f32,
    pub stove_mode: StoveMode,
    pub downdraft_fan: FanSpeed,
    pub convection_fan: FanSpeed,
    pub cooling_fan: bool,
    pub light: bool,
    pub use_top_burner: bool,
    pub use_bot_burner: bool,
    pub door_open: bool,
}

/// Serialized form of one queued cook timer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerStatus {
    pub uid: u32,
    /// Whole seconds elapsed.
    pub elapsed: u64,
    /// Whole seconds total.
    pub duration: u64,
    /// Target temperature for `Cook`, rendered as text; empty for every
    /// other action.
    pub argument: String,
    pub action: &'static str,
}

impl TimerStatus {
    pub(crate) fn of(timer: &CookTimer, now: Duration) -> Self {
        let argument = if timer.action() == TimerAction::Cook {
            format!("{}", timer.argument())
        } else {
            String::new()
        };

        Self {
            uid: timer.id().get(),
            elapsed: timer.elapsed(now).as_secs(),
            duration: timer.duration().as_secs(),
            argument,
            action: timer.action().as_str(),
        }
    }
}
