//! Outbound application events.
//!
//! The [`StoveService`](super::service::StoveService) emits these through
//! the [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them — log to serial, push to the status
//! webpage, etc.

use crate::stove::StoveMode;
use crate::timers::TimerId;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The controller finished its initial actuator reset.
    Started,

    /// The appliance mode changed (operator command or safety cancel).
    ModeChanged { from: StoveMode, to: StoveMode },

    /// Temperature exceeded the runaway ceiling; the cook was cancelled.
    RunawayCancelled { temp_f: f32 },

    /// The temperature probe returned the failure sentinel. Emitted once
    /// per fault transition, not per tick.
    SensorFault,

    /// The probe produced a valid reading after a fault.
    SensorRecovered,

    /// The cancel button was held past the debounce threshold.
    CancelAccepted,

    /// The head cook timer began running (its start action has fired).
    TimerStarted(TimerId),

    /// A cook timer reached its duration and fired its done action.
    TimerCompleted(TimerId),

    /// An `AlertWebpage` timer expired; the UI collaborator surfaces it.
    TimerAlert(TimerId),
}
