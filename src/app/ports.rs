//! Port traits — the hexagonal boundary between the control core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ StoveService (domain)
//! ```
//!
//! Driven adapters (the GPIO board, the temperature probe, event sinks)
//! implement these traits. The [`StoveService`](super::service::StoveService)
//! consumes them via generics, so the control core never touches hardware
//! directly and the whole state machine runs on the host under test.

use core::time::Duration;

// ───────────────────────────────────────────────────────────────
// Temperature probe (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Sentinel returned by a failed probe read. Deliberately above the runaway
/// ceiling so a broken sensor is indistinguishable from an over-temperature
/// condition and forces a fail-safe cancel.
pub const TEMP_SENTINEL_F: f32 = f32::MAX;

/// Read-side port: the domain samples the appliance temperature once per
/// control tick.
pub trait TemperatureProbe {
    /// Current cavity temperature in °F, or [`TEMP_SENTINEL_F`] if the
    /// probe could not be read.
    fn read_temp_f(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: one method per named physical line (or line pair).
///
/// Fan lines come in low/high pairs; callers guarantee at most one of the
/// pair is asserted, and adapters write both levels in a single call so a
/// crash between writes can never leave both energised.
pub trait ActuatorPort {
    /// Downdraft fan relays.
    fn set_downdraft_lines(&mut self, low: bool, high: bool);

    /// Convection fan relays.
    fn set_convection_lines(&mut self, low: bool, high: bool);

    /// Cooling fan (single speed).
    fn set_cooling_fan(&mut self, on: bool);

    /// Cavity light.
    fn set_light(&mut self, on: bool);

    /// De-energise every heating-element line.
    fn elements_off(&mut self);

    /// Door position switch. `true` = door open.
    fn is_door_open(&self) -> bool;

    /// Front-panel cancel button, raw (undebounced). `true` = pressed.
    fn is_cancel_pressed(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Monotonic clock (driven adapter: time → domain)
// ───────────────────────────────────────────────────────────────

/// Steady time source for elapsed-time accounting. `now()` is a duration
/// since an arbitrary fixed origin (boot) and never goes backwards.
pub trait MonotonicClock {
    fn now(&self) -> Duration;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log, the
/// status webpage's poll channel, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
