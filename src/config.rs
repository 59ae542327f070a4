//! System configuration parameters
//!
//! All tunable parameters for the stove controller. Values are compiled-in
//! defaults; a provisioning layer may override them at boot.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoveConfig {
    // --- Safety ---
    /// Hard runaway ceiling (°F). A reading above this cancels the cook
    /// unconditionally, in every mode.
    pub runaway_ceiling_f: f32,
    /// Passive-cooldown threshold (°F): in Off mode the cooling fan stays
    /// on until the cavity drops to or below this temperature.
    pub auto_cool_threshold_f: f32,
    /// Consecutive asserted ticks of the cancel input required before the
    /// controller force-cancels (debounce).
    pub cancel_debounce_ticks: u32,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,

    // --- Limits ---
    /// Upper bound accepted by the command layer for target temperature (°F).
    pub max_target_temp_f: f32,
}

/// Fixed capacity of the cook-timer queue. Enqueue beyond this is rejected
/// with [`Error::QueueFull`](crate::error::Error::QueueFull).
pub const MAX_COOK_TIMERS: usize = 30;

impl Default for StoveConfig {
    fn default() -> Self {
        Self {
            // Safety
            runaway_ceiling_f: 800.0,
            auto_cool_threshold_f: 150.0,
            cancel_debounce_ticks: 50, // 2.5 s at a 50 ms tick

            // Timing
            control_loop_interval_ms: 50, // 20 Hz

            // Limits
            max_target_temp_f: 500.0,
        }
    }
}

impl StoveConfig {
    /// Duration of one control tick in seconds.
    pub fn tick_secs(&self) -> f32 {
        self.control_loop_interval_ms as f32 / 1000.0
    }
}
