//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the control core against
//! the simulated board. All tests run on the host with no real hardware.

mod stove_service_tests;
mod timer_flow_tests;
