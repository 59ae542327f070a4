//! ESP32-S3 board adapter.
//!
//! One-shot GPIO configuration through raw ESP-IDF sys calls, an MCP9600
//! thermocouple probe over I2C, and [`EspStoveBoard`] binding both to the
//! port traits. Device-only; host builds use the simulator instead.

use esp_idf_hal::delay::BLOCK;
use esp_idf_hal::i2c::I2cDriver;
use esp_idf_svc::sys::*;

use log::{info, warn};

use crate::app::ports::{ActuatorPort, TemperatureProbe, TEMP_SENTINEL_F};
use crate::pins;

// ── One-shot GPIO init ────────────────────────────────────────

/// Errors during one-shot GPIO configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioInitError {
    ConfigFailed(i32),
}

impl core::fmt::Display for GpioInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ConfigFailed(rc) => write!(f, "GPIO config failed (rc={rc})"),
        }
    }
}

impl std::error::Error for GpioInitError {}

/// Configure every stove line. Call once from `main()` before the control
/// loop starts; outputs come up driven low (everything off).
pub fn init_gpio() -> Result<(), GpioInitError> {
    let output_pins = [
        pins::DOWNDRAFT_LOW_GPIO,
        pins::DOWNDRAFT_HIGH_GPIO,
        pins::COOLING_FAN_GPIO,
        pins::CONVECTION_LOW_GPIO,
        pins::CONVECTION_HIGH_GPIO,
        pins::LIGHT_GPIO,
        pins::BAKE_A_GPIO,
        pins::BAKE_B_GPIO,
        pins::BROIL_A_GPIO,
        pins::BROIL_B_GPIO,
        pins::CONVECTION_ELEMENT_GPIO,
    ];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: called once from main() before the control loop thread
        // exists; single-threaded.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(GpioInitError::ConfigFailed(ret));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    let input_pins = [
        pins::DOOR_OPEN_GPIO,
        pins::DOOR_LOCKED_GPIO,
        pins::DOOR_UNLOCKED_GPIO,
        pins::CANCEL_GPIO,
    ];

    for &pin in &input_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(GpioInitError::ConfigFailed(ret));
        }
    }

    info!("esp: GPIO configured ({} outputs, {} inputs)", output_pins.len(), input_pins.len());
    Ok(())
}

fn gpio_write(pin: i32, high: bool) {
    // SAFETY: pin was configured as an output in init_gpio().
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

fn gpio_read(pin: i32) -> bool {
    // SAFETY: read-only register access on a configured input pin.
    (unsafe { gpio_get_level(pin) }) != 0
}

// ── MCP9600 thermocouple amplifier ────────────────────────────

const MCP9600_ADDR: u8 = 0x60;
const REG_HOT_JUNCTION: u8 = 0x00;

/// I2C thermocouple probe. A failed bus transaction returns the sentinel,
/// which the controller treats as runaway.
pub struct Mcp9600Probe<'d> {
    i2c: I2cDriver<'d>,
    /// Log the first failure of a burst, not all of them.
    fault_logged: bool,
}

impl<'d> Mcp9600Probe<'d> {
    pub fn new(i2c: I2cDriver<'d>) -> Self {
        Self {
            i2c,
            fault_logged: false,
        }
    }
}

impl TemperatureProbe for Mcp9600Probe<'_> {
    fn read_temp_f(&mut self) -> f32 {
        let mut buf = [0u8; 2];
        match self
            .i2c
            .write_read(MCP9600_ADDR, &[REG_HOT_JUNCTION], &mut buf, BLOCK)
        {
            Ok(()) => {
                self.fault_logged = false;
                // Hot-junction register: signed 16-bit, 0.0625 degC per LSB.
                let raw = i16::from_be_bytes(buf);
                let celsius = f32::from(raw) * 0.0625;
                celsius * 9.0 / 5.0 + 32.0
            }
            Err(e) => {
                if !self.fault_logged {
                    warn!("esp: MCP9600 read failed: {e}");
                    self.fault_logged = true;
                }
                TEMP_SENTINEL_F
            }
        }
    }
}

// ── Board binding ─────────────────────────────────────────────

/// The real stove board: GPIO actuation plus whatever probe is plugged in.
pub struct EspStoveBoard<P> {
    probe: P,
}

impl<P: TemperatureProbe> EspStoveBoard<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }
}

impl<P: TemperatureProbe> TemperatureProbe for EspStoveBoard<P> {
    fn read_temp_f(&mut self) -> f32 {
        self.probe.read_temp_f()
    }
}

impl<P> ActuatorPort for EspStoveBoard<P> {
    fn set_downdraft_lines(&mut self, low: bool, high: bool) {
        gpio_write(pins::DOWNDRAFT_LOW_GPIO, low);
        gpio_write(pins::DOWNDRAFT_HIGH_GPIO, high);
    }

    fn set_convection_lines(&mut self, low: bool, high: bool) {
        gpio_write(pins::CONVECTION_LOW_GPIO, low);
        gpio_write(pins::CONVECTION_HIGH_GPIO, high);
    }

    fn set_cooling_fan(&mut self, on: bool) {
        gpio_write(pins::COOLING_FAN_GPIO, on);
    }

    fn set_light(&mut self, on: bool) {
        gpio_write(pins::LIGHT_GPIO, on);
    }

    fn elements_off(&mut self) {
        gpio_write(pins::BAKE_A_GPIO, false);
        gpio_write(pins::BAKE_B_GPIO, false);
        gpio_write(pins::BROIL_A_GPIO, false);
        gpio_write(pins::BROIL_B_GPIO, false);
        gpio_write(pins::CONVECTION_ELEMENT_GPIO, false);
    }

    fn is_door_open(&self) -> bool {
        gpio_read(pins::DOOR_OPEN_GPIO)
    }

    fn is_cancel_pressed(&self) -> bool {
        gpio_read(pins::CANCEL_GPIO)
    }
}
