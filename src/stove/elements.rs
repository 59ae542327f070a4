//! Heating-element control.
//!
//! [`ElementController`] tracks which elements the operator has selected for
//! the current cook and funnels all element actuation through an
//! [`ElementStrategy`]. The default [`NullStrategy`] never energises
//! anything: closed-loop time-proportioning is a planned follow-up that
//! slots in behind the same trait without touching the controller.

use crate::app::ports::ActuatorPort;

/// Rated power of the top (broil) element.
pub const TOP_ELEMENT_POWER_W: u32 = 1100;
/// Rated power of the bottom (bake) element.
pub const BOTTOM_ELEMENT_POWER_W: u32 = 1500;

/// Per-tick element demand handed to the strategy.
///
/// A duty-cycling implementation would translate the target-vs-current
/// delta into bounded-duration element activations: run the element for a
/// time, then let the heat dissipate into the cavity before re-evaluating
/// (Newton's law of cooling makes the transfer rate proportional to the
/// element/air temperature difference, so dwell times can be tabulated
/// experimentally per element using the power ratings above).
#[derive(Debug, Clone, Copy)]
pub struct ElementDemand {
    pub current_temp_f: f32,
    pub target_temp_f: f32,
    pub use_top: bool,
    pub use_bottom: bool,
}

/// Strategy seam for element actuation. Implementations decide, once per
/// control tick, which element lines to energise.
pub trait ElementStrategy {
    fn update(&mut self, demand: &ElementDemand, hw: &mut dyn ActuatorPort);
}

/// The shipping strategy: elements are never energised by the controller.
/// Deliberately a no-op, not a stub — see the module docs.
pub struct NullStrategy;

impl ElementStrategy for NullStrategy {
    fn update(&mut self, _demand: &ElementDemand, _hw: &mut dyn ActuatorPort) {}
}

/// Tracks element selection and owns the actuation strategy.
pub struct ElementController {
    use_top: bool,
    use_bottom: bool,
    strategy: Box<dyn ElementStrategy + Send>,
}

impl ElementController {
    pub fn new(strategy: Box<dyn ElementStrategy + Send>) -> Self {
        Self {
            use_top: false,
            use_bottom: false,
            strategy,
        }
    }

    /// Select/deselect the top element for this cook. Declarative intent
    /// only — the strategy decides when lines are actually energised.
    pub fn set_use_top(&mut self, state: bool) {
        self.use_top = state;
    }

    pub fn set_use_bottom(&mut self, state: bool) {
        self.use_bottom = state;
    }

    pub fn use_top(&self) -> bool {
        self.use_top
    }

    pub fn use_bottom(&self) -> bool {
        self.use_bottom
    }

    /// De-energise every element line immediately.
    pub fn off(&mut self, hw: &mut dyn ActuatorPort) {
        hw.elements_off();
    }

    /// One strategy step. Runs every non-Off tick.
    pub fn update(&mut self, current_temp_f: f32, target_temp_f: f32, hw: &mut dyn ActuatorPort) {
        let demand = ElementDemand {
            current_temp_f,
            target_temp_f,
            use_top: self.use_top,
            use_bottom: self.use_bottom,
        };
        self.strategy.update(&demand, hw);
    }
}
