//! GPIO pin assignments for the stove controller main board.
//!
//! Single source of truth — every adapter references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Fans — each multi-speed fan has one line per level; the controller
// guarantees at most one line per fan is asserted at a time.
// ---------------------------------------------------------------------------

/// Downdraft fan, low-speed relay (active HIGH).
pub const DOWNDRAFT_LOW_GPIO: i32 = 42;
/// Downdraft fan, high-speed relay.
pub const DOWNDRAFT_HIGH_GPIO: i32 = 41;
/// Electronics-bay / cavity cooling fan (single speed).
pub const COOLING_FAN_GPIO: i32 = 40;
/// Convection fan, low-speed relay.
pub const CONVECTION_LOW_GPIO: i32 = 37;
/// Convection fan, high-speed relay.
pub const CONVECTION_HIGH_GPIO: i32 = 36;

// ---------------------------------------------------------------------------
// Cavity light
// ---------------------------------------------------------------------------

pub const LIGHT_GPIO: i32 = 38;

// ---------------------------------------------------------------------------
// Heating elements — dual-leg contactors per element.
// ---------------------------------------------------------------------------

/// Bottom (bake) element, leg A.
pub const BAKE_A_GPIO: i32 = 35;
/// Bottom (bake) element, leg B.
pub const BAKE_B_GPIO: i32 = 34;
/// Top (broil) element, leg A.
pub const BROIL_A_GPIO: i32 = 33;
/// Top (broil) element, leg B.
pub const BROIL_B_GPIO: i32 = 26;
/// Convection ring element.
pub const CONVECTION_ELEMENT_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Door position switch. HIGH = door open.
pub const DOOR_OPEN_GPIO: i32 = 4;
/// Door lock feedback, locked position.
pub const DOOR_LOCKED_GPIO: i32 = 3;
/// Door lock feedback, unlocked position.
pub const DOOR_UNLOCKED_GPIO: i32 = 2;
/// Front-panel cancel button. HIGH = pressed.
pub const CANCEL_GPIO: i32 = 1;

// ---------------------------------------------------------------------------
// I2C bus (MCP9600 thermocouple amplifier)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 8;
pub const I2C_SCL_GPIO: i32 = 9;
