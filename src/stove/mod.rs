//! Stove domain types and the control state machine.

pub mod controller;
pub mod elements;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

// ---------------------------------------------------------------------------
// Appliance mode
// ---------------------------------------------------------------------------

/// Top-level appliance mode. Three fixed, closed variants — dispatch is a
/// plain `match`, never a trait hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoveMode {
    /// All actuators forced to a safe/cooling state.
    Off,
    /// Direct operator actuation; no controller-driven behavior.
    Manual,
    /// Advancement driven by the cook-timer queue.
    Timers,
}

impl StoveMode {
    /// Decode the wire-level mode code used by the command layer (0/1/2).
    pub fn from_code(code: u8) -> Result<Self, CommandError> {
        match code {
            0 => Ok(Self::Off),
            1 => Ok(Self::Manual),
            2 => Ok(Self::Timers),
            other => Err(CommandError::BadModeCode(other)),
        }
    }

    /// Status-report name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Manual => "manual",
            Self::Timers => "timers",
        }
    }
}

// ---------------------------------------------------------------------------
// Fan speed
// ---------------------------------------------------------------------------

/// Mutually exclusive fan level. Each multi-speed fan has two physical
/// output lines (low, high); at most one is ever asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanSpeed {
    Off,
    Low,
    High,
}

impl FanSpeed {
    /// Decode the wire-level fan code used by the command layer (0/1/2).
    pub fn from_code(code: u8) -> Result<Self, CommandError> {
        match code {
            0 => Ok(Self::Off),
            1 => Ok(Self::Low),
            2 => Ok(Self::High),
            other => Err(CommandError::BadFanCode(other)),
        }
    }

    /// Level of the low-speed output line for this speed.
    pub fn low_line(self) -> bool {
        self == Self::Low
    }

    /// Level of the high-speed output line for this speed.
    pub fn high_line(self) -> bool {
        self == Self::High
    }

    /// Status-report name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}
