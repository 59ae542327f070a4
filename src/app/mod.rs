//! Hardware-agnostic application layer: port traits, commands, events, and
//! the orchestrating service.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;

pub use commands::StoveCommand;
pub use events::AppEvent;
pub use ports::{ActuatorPort, EventSink, MonotonicClock, TemperatureProbe, TEMP_SENTINEL_F};
pub use service::StoveService;
