//! Inbound commands to the control core.
//!
//! These represent actions requested by the outside world (the HTTP command
//! server, front panel, provisioning) that the
//! [`StoveService`](super::service::StoveService) interprets and acts upon.
//! The command layer is responsible for parsing and validating its transport
//! encoding; by the time a `StoveCommand` exists, every field is well-typed,
//! so a malformed request can never partially mutate appliance state.

use crate::stove::{FanSpeed, StoveMode};
use crate::timers::{TimerAction, TimerId};

/// Commands that external adapters can send into the control core. Each is
/// executed under the same exclusion lock as the control tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoveCommand {
    /// Set the cook target temperature (°F).
    SetTargetTemp(f32),

    /// Switch appliance mode (wire codes 0/1/2 decode via
    /// [`StoveMode::from_code`]).
    SetMode(StoveMode),

    SetDowndraftFan(FanSpeed),
    SetConvectionFan(FanSpeed),
    SetCoolingFan(bool),
    SetLight(bool),

    /// Select the top element for this cook (declarative intent).
    UseTopElement(bool),
    UseBottomElement(bool),

    /// Append a cook timer to the queue. Rejected with `QueueFull` at
    /// capacity; otherwise legal in any mode.
    AddTimer {
        action: TimerAction,
        duration_secs: u64,
        argument: f32,
    },

    /// Remove a timer by id, from any position. No-op if absent; removing
    /// the running head discards it without firing its done action.
    RemoveTimer(TimerId),

    /// Emergency stop: force Off and reset actuators immediately.
    Cancel,
}
