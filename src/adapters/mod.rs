//! Driven adapters: concrete implementations of the port traits.
//!
//! `sim` runs anywhere and backs the host binary and the test suite; `esp`
//! talks to the real board and only builds for the device target.

pub mod log_sink;
pub mod sim;

#[cfg(feature = "espidf")]
pub mod esp;
