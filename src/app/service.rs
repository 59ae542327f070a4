//! Application service — the hexagonal core.
//!
//! [`StoveService`] owns the stove controller and the cook-timer queue and
//! exposes a clean, hardware-agnostic API. All I/O flows through port
//! traits injected at call sites, making the entire service testable with
//! mock adapters.
//!
//! ```text
//!  TemperatureProbe ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                       │       StoveService        │
//!      ActuatorPort ◀── │ controller · timer queue  │
//!                       └──────────────────────────┘
//! ```
//!
//! Callers (the control loop, command handlers) hold the single appliance
//! lock for the duration of each call — see
//! [`control_loop`](crate::control_loop).

use core::time::Duration;

use log::info;

use crate::config::StoveConfig;
use crate::error::CommandError;
use crate::status::{StoveStatus, TimerStatus};
use crate::stove::controller::StoveController;
use crate::stove::elements::{ElementController, ElementStrategy, NullStrategy};
use crate::stove::StoveMode;
use crate::timers::{CookTimerQueue, TimerEffect, TimerId};

use super::commands::StoveCommand;
use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, TemperatureProbe};

/// The application service orchestrates all control decisions.
pub struct StoveService {
    controller: StoveController,
    queue: CookTimerQueue,
}

impl StoveService {
    /// Construct with the default (no-op) element strategy.
    pub fn new(config: StoveConfig) -> Self {
        Self::with_strategy(config, Box::new(NullStrategy))
    }

    /// Construct with an explicit element strategy (the duty-cycling seam).
    pub fn with_strategy(config: StoveConfig, strategy: Box<dyn ElementStrategy + Send>) -> Self {
        let elements = ElementController::new(strategy);
        Self {
            controller: StoveController::new(config, elements),
            queue: CookTimerQueue::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Reset every actuator to its safe initial state. Call once at boot,
    /// before the first tick.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.controller.init(hw);
        sink.emit(&AppEvent::Started);
        info!("stove controller started ({:?})", self.controller.mode());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle. `now` comes from the monotonic clock;
    /// `hw` satisfies both ports to avoid a double mutable borrow.
    pub fn tick(
        &mut self,
        hw: &mut (impl TemperatureProbe + ActuatorPort),
        now: Duration,
        sink: &mut impl EventSink,
    ) {
        let mode_before = self.controller.mode();

        // 1. Temperature + unconditional runaway cutoff.
        self.controller.sample_temperature(hw, sink);

        // 2. Mode behavior.
        match self.controller.mode() {
            StoveMode::Off => {
                // Actuator reconciliation happens once, in finish_tick.
            }
            StoveMode::Manual => {
                // Direct operator actuation only. Reserved.
            }
            StoveMode::Timers => {
                let outcome = self.queue.tick(now);
                if let Some(effect) = outcome.effect {
                    self.apply_effect(effect, sink);
                }
                if let Some(id) = outcome.started {
                    sink.emit(&AppEvent::TimerStarted(id));
                }
                if let Some(id) = outcome.completed {
                    sink.emit(&AppEvent::TimerCompleted(id));
                }
            }
        }

        // 3. Cancel-input debounce.
        self.controller.check_cancel(hw, sink);

        // 4–5. Re-reconcile if something forced Off; record previous mode.
        self.controller.finish_tick(hw);

        let mode_after = self.controller.mode();
        if mode_after != mode_before {
            sink.emit(&AppEvent::ModeChanged {
                from: mode_before,
                to: mode_after,
            });
        }
    }

    /// Apply a timer effect. Runs inside `tick`, which already executes
    /// under the appliance lock — this is the explicit
    /// apply-while-exclusive path, distinct from the lock-acquiring
    /// setter on `StoveHandle`.
    fn apply_effect(&mut self, effect: TimerEffect, sink: &mut impl EventSink) {
        match effect {
            TimerEffect::SetTargetTemp(target_f) => {
                self.controller.set_target_temp(target_f);
            }
            TimerEffect::Alert(id) => {
                sink.emit(&AppEvent::TimerAlert(id));
            }
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Execute one validated command from the network layer. Returns the
    /// new timer's id for `AddTimer`, `None` for everything else.
    pub fn handle_command(
        &mut self,
        cmd: StoveCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> crate::error::Result<Option<TimerId>> {
        match cmd {
            StoveCommand::SetTargetTemp(target_f) => {
                let max = self.controller.config().max_target_temp_f;
                if !(0.0..=max).contains(&target_f) {
                    return Err(CommandError::TargetOutOfRange.into());
                }
                self.controller.set_target_temp(target_f);
            }
            StoveCommand::SetMode(mode) => {
                let from = self.controller.mode();
                self.controller.set_mode(mode);
                if mode != from {
                    sink.emit(&AppEvent::ModeChanged { from, to: mode });
                }
            }
            StoveCommand::SetDowndraftFan(level) => {
                self.controller.set_downdraft_fan(hw, level);
            }
            StoveCommand::SetConvectionFan(level) => {
                self.controller.set_convection_fan(hw, level);
            }
            StoveCommand::SetCoolingFan(on) => {
                self.controller.set_cooling_fan(hw, on);
            }
            StoveCommand::SetLight(on) => {
                self.controller.set_light(hw, on);
            }
            StoveCommand::UseTopElement(state) => {
                self.controller.set_use_top_element(state);
            }
            StoveCommand::UseBottomElement(state) => {
                self.controller.set_use_bottom_element(state);
            }
            StoveCommand::AddTimer {
                action,
                duration_secs,
                argument,
            } => {
                let id = self.queue.enqueue(action, duration_secs, argument)?;
                return Ok(Some(id));
            }
            StoveCommand::RemoveTimer(id) => {
                if self.queue.remove(id) {
                    info!("removed timer {id}");
                }
            }
            StoveCommand::Cancel => {
                let from = self.controller.mode();
                self.controller.cancel(hw);
                sink.emit(&AppEvent::CancelAccepted);
                if from != StoveMode::Off {
                    sink.emit(&AppEvent::ModeChanged {
                        from,
                        to: StoveMode::Off,
                    });
                }
            }
        }
        Ok(None)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build the appliance status snapshot.
    pub fn status(&self, hw: &impl ActuatorPort) -> StoveStatus {
        StoveStatus {
            current_temp: self.controller.current_temp_f(),
            target_temp: self.controller.target_temp_f(),
            stove_mode: self.controller.mode(),
            downdraft_fan: self.controller.downdraft_fan(),
            convection_fan: self.controller.convection_fan(),
            cooling_fan: self.controller.cooling_fan_on(),
            light: self.controller.light_on(),
            use_top_burner: self.controller.use_top_element(),
            use_bot_burner: self.controller.use_bottom_element(),
            door_open: hw.is_door_open(),
        }
    }

    /// Serialized view of the cook-timer queue, in queue order.
    pub fn timers(&self, now: Duration) -> Vec<TimerStatus> {
        self.queue.snapshot(now)
    }

    /// Number of queued timers.
    pub fn timer_count(&self) -> usize {
        self.queue.len()
    }

    /// Number of timers currently running (0 or 1 by construction).
    pub fn running_timer_count(&self) -> usize {
        self.queue.running_count()
    }

    pub fn mode(&self) -> StoveMode {
        self.controller.mode()
    }

    pub fn config(&self) -> &StoveConfig {
        self.controller.config()
    }
}
