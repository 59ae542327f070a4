//! The stove control state machine.
//!
//! [`StoveController`] owns the appliance state (mode, temperatures, fan
//! levels, light, element selection) and makes every actuation decision.
//! It is driven once per control period by
//! [`StoveService::tick`](crate::app::service::StoveService::tick), which
//! sequences the per-tick steps:
//!
//! 1. re-sample temperature and apply the unconditional runaway cutoff;
//! 2. run the current mode's behavior (manual no-op / timer-queue
//!    advancement; Off defers to step 4);
//! 3. debounce the physical cancel input;
//! 4. reconcile actuators if the mode is now Off, else advance the elements;
//! 5. record the mode for next tick's transition detection.
//!
//! All methods assume the caller holds the appliance lock; the public,
//! lock-acquiring surface lives on [`StoveHandle`](crate::control_loop::StoveHandle).

use log::{error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::{ActuatorPort, EventSink, TemperatureProbe, TEMP_SENTINEL_F};
use crate::config::StoveConfig;

use super::elements::ElementController;
use super::{FanSpeed, StoveMode};

pub struct StoveController {
    config: StoveConfig,
    elements: ElementController,

    mode: StoveMode,
    /// Mode at the end of the previous tick; detects entry into Off so the
    /// convection-fan reset happens exactly once.
    previous_mode: StoveMode,

    current_temp_f: f32,
    target_temp_f: f32,

    downdraft_fan: FanSpeed,
    convection_fan: FanSpeed,
    cooling_fan_on: bool,
    light_on: bool,

    /// Consecutive ticks the cancel input has been asserted.
    cancel_hold_ticks: u32,
    /// Latch so a persistently broken probe logs once, not every 50 ms.
    sensor_broken: bool,
}

impl StoveController {
    pub fn new(config: StoveConfig, elements: ElementController) -> Self {
        Self {
            config,
            elements,
            mode: StoveMode::Off,
            previous_mode: StoveMode::Off,
            current_temp_f: 0.0,
            target_temp_f: 0.0,
            downdraft_fan: FanSpeed::Off,
            convection_fan: FanSpeed::Off,
            cooling_fan_on: false,
            light_on: false,
            cancel_hold_ticks: 0,
            sensor_broken: false,
        }
    }

    /// Drive every actuator to its initial safe state. Call once at boot,
    /// before the first tick.
    pub fn init(&mut self, hw: &mut dyn ActuatorPort) {
        self.reconcile_off(hw);
        self.set_downdraft_fan(hw, FanSpeed::Off);
        self.set_light(hw, false);
    }

    // ── Per-tick steps (sequenced by StoveService::tick) ──────

    /// Step 1: refresh the temperature and apply the runaway cutoff.
    /// Unconditional — runs in every mode, and a broken probe (sentinel
    /// `f32::MAX`) trips the same path. Fail-safe by construction.
    ///
    /// `hw` satisfies both ports — this avoids a double mutable borrow
    /// while keeping the port boundary explicit.
    pub fn sample_temperature(
        &mut self,
        hw: &mut (impl TemperatureProbe + ActuatorPort),
        sink: &mut dyn EventSink,
    ) {
        self.current_temp_f = hw.read_temp_f();

        if self.current_temp_f == TEMP_SENTINEL_F {
            if !self.sensor_broken {
                error!("temperature probe read failed; treating as runaway");
                self.sensor_broken = true;
                sink.emit(&AppEvent::SensorFault);
            }
        } else if self.sensor_broken {
            self.sensor_broken = false;
            info!("temperature probe recovered");
            sink.emit(&AppEvent::SensorRecovered);
        }

        if self.current_temp_f > self.config.runaway_ceiling_f {
            warn!(
                "runaway: {:.1} F exceeds ceiling {:.1} F, cancelling",
                self.current_temp_f, self.config.runaway_ceiling_f
            );
            self.cancel(hw);
            sink.emit(&AppEvent::RunawayCancelled {
                temp_f: self.current_temp_f,
            });
        }
    }

    /// Step 4 (and the cancel path): force actuators to match Off.
    ///
    /// Zeroes the target, resets the convection fan once on entry, keeps
    /// all elements de-energised, and runs the passive cooldown: a cooling
    /// fan that was on stays on until the cavity drops to the auto-cool
    /// threshold.
    pub fn reconcile_off(&mut self, hw: &mut dyn ActuatorPort) {
        self.target_temp_f = 0.0;

        if self.previous_mode != StoveMode::Off {
            self.set_convection_fan(hw, FanSpeed::Off);
        }

        self.elements.off(hw);

        if self.cooling_fan_on {
            self.cooling_fan_on = self.current_temp_f > self.config.auto_cool_threshold_f;
        }
        hw.set_cooling_fan(self.cooling_fan_on);
    }

    /// Step 3: debounce the physical cancel input. The counter resets the
    /// instant the input is released; sustained assertion for the
    /// configured tick count force-cancels, bounding worst-case latency at
    /// `debounce_ticks * tick_period`.
    pub fn check_cancel(&mut self, hw: &mut dyn ActuatorPort, sink: &mut dyn EventSink) {
        if !hw.is_cancel_pressed() {
            self.cancel_hold_ticks = 0;
            return;
        }

        self.cancel_hold_ticks = self.cancel_hold_ticks.saturating_add(1);
        if self.cancel_hold_ticks >= self.config.cancel_debounce_ticks {
            if self.cancel_hold_ticks == self.config.cancel_debounce_ticks {
                info!("cancel button held {} ticks, cancelling", self.cancel_hold_ticks);
                sink.emit(&AppEvent::CancelAccepted);
            }
            self.cancel(hw);
        }
    }

    /// Steps 4–5: a prior step may have forced Off (runaway, cancel, timer
    /// done action); if so, re-reconcile so the actuators match the
    /// now-current mode. Otherwise advance the element strategy. Then
    /// record the mode for next tick's transition detection.
    pub fn finish_tick(&mut self, hw: &mut dyn ActuatorPort) {
        if self.mode == StoveMode::Off {
            self.reconcile_off(hw);
        } else {
            self.elements
                .update(self.current_temp_f, self.target_temp_f, hw);
        }
        self.previous_mode = self.mode;
    }

    /// Force Off and reset actuators. The safety paths (runaway, debounced
    /// cancel) and the external emergency stop all land here.
    pub fn cancel(&mut self, hw: &mut dyn ActuatorPort) {
        self.reconcile_off(hw);
        self.mode = StoveMode::Off;
    }

    // ── Setters ───────────────────────────────────────────────
    //
    // Each performs one hardware-level write plus the in-memory update.
    // None are gated by mode: a command may set any actuator at any time,
    // and the next tick's reconciliation overwrites it if the mode
    // disagrees (Off always re-zeroes elements and the target).

    pub fn set_target_temp(&mut self, target_f: f32) {
        self.target_temp_f = target_f;
    }

    pub fn set_mode(&mut self, mode: StoveMode) {
        self.mode = mode;
    }

    pub fn set_downdraft_fan(&mut self, hw: &mut dyn ActuatorPort, level: FanSpeed) {
        self.downdraft_fan = level;
        hw.set_downdraft_lines(level.low_line(), level.high_line());
    }

    pub fn set_convection_fan(&mut self, hw: &mut dyn ActuatorPort, level: FanSpeed) {
        self.convection_fan = level;
        hw.set_convection_lines(level.low_line(), level.high_line());
    }

    pub fn set_cooling_fan(&mut self, hw: &mut dyn ActuatorPort, on: bool) {
        self.cooling_fan_on = on;
        hw.set_cooling_fan(on);
    }

    pub fn set_light(&mut self, hw: &mut dyn ActuatorPort, on: bool) {
        self.light_on = on;
        hw.set_light(on);
    }

    pub fn set_use_top_element(&mut self, state: bool) {
        self.elements.set_use_top(state);
    }

    pub fn set_use_bottom_element(&mut self, state: bool) {
        self.elements.set_use_bottom(state);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> StoveMode {
        self.mode
    }

    pub fn current_temp_f(&self) -> f32 {
        self.current_temp_f
    }

    pub fn target_temp_f(&self) -> f32 {
        self.target_temp_f
    }

    pub fn downdraft_fan(&self) -> FanSpeed {
        self.downdraft_fan
    }

    pub fn convection_fan(&self) -> FanSpeed {
        self.convection_fan
    }

    pub fn cooling_fan_on(&self) -> bool {
        self.cooling_fan_on
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    pub fn use_top_element(&self) -> bool {
        self.elements.use_top()
    }

    pub fn use_bottom_element(&self) -> bool {
        self.elements.use_bottom()
    }

    pub fn config(&self) -> &StoveConfig {
        &self.config
    }
}
