//! Simulated appliance board.
//!
//! Implements both hardware ports with injectable inputs and a recorded
//! write history, so host builds and tests can script scenarios (runaway,
//! cancel holds, door opening) without a stove in the room.

use crate::app::ports::{ActuatorPort, TemperatureProbe, TEMP_SENTINEL_F};

/// One hardware-level write, in the order the controller issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineWrite {
    Downdraft { low: bool, high: bool },
    Convection { low: bool, high: bool },
    CoolingFan(bool),
    Light(bool),
    ElementsOff,
}

/// In-memory stand-in for the stove main board.
pub struct SimulatedStove {
    /// Temperature the next probe read returns.
    pub temp_f: f32,
    /// Raw cancel-button level.
    pub cancel_pressed: bool,
    /// Door position switch level.
    pub door_open: bool,

    /// Latched output state, mirroring what the relays would hold.
    pub downdraft: (bool, bool),
    pub convection: (bool, bool),
    pub cooling_fan: bool,
    pub light: bool,
    pub elements_energized: bool,

    /// Every write since construction (or the last [`Self::clear_writes`]).
    pub writes: Vec<LineWrite>,
}

impl SimulatedStove {
    /// Room-temperature board, nothing pressed, everything off.
    pub fn new() -> Self {
        Self {
            temp_f: 72.0,
            cancel_pressed: false,
            door_open: false,
            downdraft: (false, false),
            convection: (false, false),
            cooling_fan: false,
            light: false,
            elements_energized: false,
            writes: Vec::new(),
        }
    }

    /// Make the next probe read fail.
    pub fn break_probe(&mut self) {
        self.temp_f = TEMP_SENTINEL_F;
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl Default for SimulatedStove {
    fn default() -> Self {
        Self::new()
    }
}

impl TemperatureProbe for SimulatedStove {
    fn read_temp_f(&mut self) -> f32 {
        self.temp_f
    }
}

impl ActuatorPort for SimulatedStove {
    fn set_downdraft_lines(&mut self, low: bool, high: bool) {
        self.downdraft = (low, high);
        self.writes.push(LineWrite::Downdraft { low, high });
    }

    fn set_convection_lines(&mut self, low: bool, high: bool) {
        self.convection = (low, high);
        self.writes.push(LineWrite::Convection { low, high });
    }

    fn set_cooling_fan(&mut self, on: bool) {
        self.cooling_fan = on;
        self.writes.push(LineWrite::CoolingFan(on));
    }

    fn set_light(&mut self, on: bool) {
        self.light = on;
        self.writes.push(LineWrite::Light(on));
    }

    fn elements_off(&mut self) {
        self.elements_energized = false;
        self.writes.push(LineWrite::ElementsOff);
    }

    fn is_door_open(&self) -> bool {
        self.door_open
    }

    fn is_cancel_pressed(&self) -> bool {
        self.cancel_pressed
    }
}
