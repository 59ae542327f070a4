//! StoveCtrl control core.
//!
//! The control logic for a networked oven/stove appliance: a mode state
//! machine with thermal-runaway and cancel-button safety paths, plus a
//! sequential cook-timer scheduling engine.
//!
//! Hexagonal layout: the `app` layer is pure logic driven through port
//! traits; `adapters` supplies the real board (device builds) and a
//! scriptable simulator (host builds and tests); `control_loop` owns the
//! locking discipline and the periodic tick.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control_loop;
pub mod status;
pub mod stove;
pub mod timers;

pub mod error;
pub mod pins;

pub mod adapters;
