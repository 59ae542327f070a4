//! Event sink that routes application events to the log facade.
//!
//! Severity mirrors operator impact: safety trips warn, faults error,
//! routine lifecycle stays at info.

use log::{error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("event: controller started"),
            AppEvent::ModeChanged { from, to } => {
                info!("event: mode {} -> {}", from.as_str(), to.as_str());
            }
            AppEvent::RunawayCancelled { temp_f } => {
                warn!("event: thermal runaway at {temp_f:.1} F, stove cancelled");
            }
            AppEvent::SensorFault => error!("event: temperature probe fault"),
            AppEvent::SensorRecovered => info!("event: temperature probe recovered"),
            AppEvent::CancelAccepted => info!("event: cancel accepted"),
            AppEvent::TimerStarted(id) => info!("event: timer {id} started"),
            AppEvent::TimerCompleted(id) => info!("event: timer {id} completed"),
            AppEvent::TimerAlert(id) => warn!("event: timer {id} alert"),
        }
    }
}
