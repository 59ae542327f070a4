//! Cook-timer scheduling engine: one timer record, one ordered queue.

pub mod queue;
pub mod timer;

pub use queue::{CookTimerQueue, QueueTick};
pub use timer::{CookTimer, TimerAction, TimerEffect, TimerId};
