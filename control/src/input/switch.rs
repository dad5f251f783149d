//! Manage mode switch's state.

use mesa_dsp::shaper::ShapingMode;

/// Use this to hold state of a shaping mode switch.
///
/// The switch is read fresh on every cycle, without debouncing. It is a
/// slow manual control, and a bounce would only last a single iteration.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switch {
    pub active: bool,
    pub toggled: bool,
}

impl Switch {
    pub fn update(&mut self, active: bool) {
        self.toggled = self.active != active;
        self.active = active;
    }

    pub fn mode(&self) -> ShapingMode {
        if self.active {
            ShapingMode::Exponential
        } else {
            ShapingMode::Linear
        }
    }
}
