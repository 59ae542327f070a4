//! The periodic control loop and the shared appliance handle.
//!
//! Concurrency model: one [`StoveCore`] (service + hardware + event sink)
//! behind a single `Mutex`. The tick thread and every command/status caller
//! take the same lock, so each tick and each command executes atomically
//! and external readers only ever observe fully-settled state. Within a
//! tick, timer effects are applied directly by the already-locked service,
//! never through the handle, which keeps the lock non-reentrant.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::app::ports::{ActuatorPort, EventSink, MonotonicClock, TemperatureProbe};
use crate::app::{StoveCommand, StoveService};
use crate::status::{StoveStatus, TimerStatus};
use crate::stove::StoveMode;
use crate::timers::TimerId;

/// Everything the control loop mutates, kept together under one lock.
pub struct StoveCore<HW, S> {
    pub service: StoveService,
    pub hw: HW,
    pub sink: S,
}

/// Cloneable, thread-safe handle to the appliance. Each method takes the
/// lock for exactly one operation.
pub struct StoveHandle<HW, S> {
    inner: Arc<Mutex<StoveCore<HW, S>>>,
}

impl<HW, S> Clone for StoveHandle<HW, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<HW, S> StoveHandle<HW, S>
where
    HW: TemperatureProbe + ActuatorPort,
    S: EventSink,
{
    pub fn new(service: StoveService, hw: HW, sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoveCore { service, hw, sink })),
        }
    }

    /// A poisoned lock means a panic mid-tick on another thread. The state
    /// itself is a plain value snapshot, so recover the guard and carry on
    /// rather than propagating the poison to every caller.
    fn lock(&self) -> MutexGuard<'_, StoveCore<HW, S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset actuators to their safe boot state. Call once before the loop.
    pub fn start(&self) {
        let core = &mut *self.lock();
        core.service.start(&mut core.hw, &mut core.sink);
    }

    /// Run one control cycle at monotonic instant `now`.
    pub fn tick(&self, now: Duration) {
        let core = &mut *self.lock();
        core.service.tick(&mut core.hw, now, &mut core.sink);
    }

    /// Execute one command from the network layer.
    pub fn command(&self, cmd: StoveCommand) -> crate::error::Result<Option<TimerId>> {
        let core = &mut *self.lock();
        core.service.handle_command(cmd, &mut core.hw, &mut core.sink)
    }

    pub fn status(&self) -> StoveStatus {
        let core = &*self.lock();
        core.service.status(&core.hw)
    }

    pub fn timers(&self, now: Duration) -> Vec<TimerStatus> {
        self.lock().service.timers(now)
    }

    pub fn mode(&self) -> StoveMode {
        self.lock().service.mode()
    }

    /// Control period, from configuration.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(u64::from(
            self.lock().service.config().control_loop_interval_ms,
        ))
    }
}

/// Monotonic wall-free clock anchored at construction. Timer arithmetic
/// only ever sees durations from this origin, so wall-clock adjustments
/// cannot stretch or shrink a cook.
pub struct SteadyClock {
    origin: Instant,
}

impl SteadyClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SteadyClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SteadyClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Drive the appliance until `shutdown` is raised. Fixed-period scheduling:
/// each iteration sleeps for the configured period minus the time the tick
/// itself took, so cancel-debounce latency stays bounded.
pub fn run<HW, S, C>(handle: &StoveHandle<HW, S>, clock: &C, shutdown: &AtomicBool)
where
    HW: TemperatureProbe + ActuatorPort,
    S: EventSink,
    C: MonotonicClock,
{
    let period = handle.tick_period();
    info!("control loop running at {period:?} per tick");

    while !shutdown.load(Ordering::Relaxed) {
        let tick_start = Instant::now();
        handle.tick(clock.now());

        let spent = tick_start.elapsed();
        if spent > period {
            debug!("tick overran its period: {spent:?}");
        }
        std::thread::sleep(period.saturating_sub(spent));
    }
    info!("control loop stopped");
}
