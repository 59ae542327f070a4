//! StoveCtrl — main entry point.
//!
//! Device builds bring up the real board (GPIO lines, MCP9600 probe over
//! I2C) and run the control loop on the main task. Host builds wire the
//! same core to the simulated board and run a short scripted cook so the
//! whole stack can be exercised at a desk.

#![deny(unused_must_use)]

use anyhow::Result;

#[cfg(all(target_os = "espidf", feature = "espidf"))]
fn main() -> Result<()> {
    use log::info;
    use stovectrl::adapters::esp::{self, EspStoveBoard, Mcp9600Probe};
    use stovectrl::adapters::log_sink::LogEventSink;
    use stovectrl::app::StoveService;
    use stovectrl::config::StoveConfig;
    use stovectrl::control_loop::{self, SteadyClock, StoveHandle};

    use std::sync::atomic::AtomicBool;

    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("stovectrl v{}", env!("CARGO_PKG_VERSION"));

    esp::init_gpio()?;

    let peripherals = esp_idf_hal::peripherals::Peripherals::take()?;
    let i2c_cfg = esp_idf_hal::i2c::I2cConfig::new()
        .baudrate(esp_idf_hal::units::Hertz(100_000));
    let i2c = esp_idf_hal::i2c::I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio8,
        peripherals.pins.gpio9,
        &i2c_cfg,
    )?;
    let board = EspStoveBoard::new(Mcp9600Probe::new(i2c));

    let service = StoveService::new(StoveConfig::default());
    let handle = StoveHandle::new(service, board, LogEventSink);
    handle.start();

    // The command/UI collaborator owns the network surface and drives
    // `handle.command()` from its own task; this task is the control loop.
    static SHUTDOWN: AtomicBool = AtomicBool::new(false);
    let clock = SteadyClock::new();
    control_loop::run(&handle, &clock, &SHUTDOWN);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn main() -> Result<()> {
    use log::info;
    use stovectrl::adapters::log_sink::LogEventSink;
    use stovectrl::adapters::sim::SimulatedStove;
    use stovectrl::app::{StoveCommand, StoveService};
    use stovectrl::config::StoveConfig;
    use stovectrl::control_loop::{self, SteadyClock, StoveHandle};
    use stovectrl::stove::StoveMode;
    use stovectrl::timers::TimerAction;

    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("stovectrl v{} (simulated board)", env!("CARGO_PKG_VERSION"));

    let service = StoveService::new(StoveConfig::default());
    let handle = StoveHandle::new(service, SimulatedStove::new(), LogEventSink);
    handle.start();

    let shutdown = Arc::new(AtomicBool::new(false));
    let loop_thread = std::thread::spawn({
        let handle = handle.clone();
        let shutdown = Arc::clone(&shutdown);
        move || {
            let clock = SteadyClock::new();
            control_loop::run(&handle, &clock, &shutdown);
        }
    });

    // Scripted cook: switch to timer mode, queue a short cook followed by
    // a countdown, and watch the queue drain.
    handle.command(StoveCommand::SetMode(StoveMode::Timers))?;
    let cook = handle.command(StoveCommand::AddTimer {
        action: TimerAction::Cook,
        duration_secs: 3,
        argument: 350.0,
    })?;
    info!("queued cook timer {:?}", cook);
    handle.command(StoveCommand::AddTimer {
        action: TimerAction::Countdown,
        duration_secs: 2,
        argument: 0.0,
    })?;

    std::thread::sleep(Duration::from_secs(6));
    info!("status: {}", serde_json::to_string(&handle.status())?);

    handle.command(StoveCommand::Cancel)?;
    std::thread::sleep(Duration::from_millis(200));

    shutdown.store(true, Ordering::Relaxed);
    if loop_thread.join().is_err() {
        log::error!("control loop thread panicked");
    }
    Ok(())
}

// Device target without the framework feature: nothing can run.
#[cfg(all(target_os = "espidf", not(feature = "espidf")))]
compile_error!("build with --features espidf for the device target");
