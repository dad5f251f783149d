//! Process all input peripherals over time.

use mesa_dsp::error::ConfigurationError;
use mesa_dsp::processor::Attributes;
use mesa_dsp::shaper::{Levels, Modes};

use super::control::Control;
use super::pot::Pot;
use super::snapshot::Snapshot;
use super::switch::Switch;
use crate::configuration::Configuration;

/// Stateful store of raw inputs.
///
/// This struct turns the raw snapshot into a set of abstracted peripherals.
/// These peripherals provide smoothing or toggle detection. It is the only
/// state carried from one iteration of the loop to another.
///
/// Note that despite all its attributes are public, they should be only read
/// from.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub cv: Control,
    pub slider: Pot,
    pub center: Pot,
    pub left: Pot,
    pub right: Pot,
    pub mode_left: Switch,
    pub mode_right: Switch,
}

impl Store {
    /// # Errors
    ///
    /// Fails if any of the smoothing coefficients is out of range.
    pub fn try_new(configuration: &Configuration) -> Result<Self, ConfigurationError> {
        let pot = Pot::try_new(configuration.pot_alpha)?;
        Ok(Self {
            cv: Control::try_new(configuration.cv_alpha)?,
            slider: pot,
            center: pot,
            left: pot,
            right: pot,
            mode_left: Switch::default(),
            mode_right: Switch::default(),
        })
    }

    pub fn update(&mut self, snapshot: Snapshot) {
        self.cv.update(snapshot.cv);
        self.slider.update(snapshot.slider);
        self.center.update(snapshot.center);
        self.left.update(snapshot.left);
        self.right.update(snapshot.right);
        self.mode_left.update(snapshot.mode_left);
        self.mode_right.update(snapshot.mode_right);
    }

    /// Smoothed inputs ready to be passed to the processor.
    pub fn attributes(&self) -> Attributes {
        Attributes {
            cv: self.cv.value(),
            slider: self.slider.value(),
            levels: Levels {
                center: self.center.value(),
                left: self.left.value(),
                right: self.right.value(),
            },
            modes: Modes {
                left: self.mode_left.mode(),
                right: self.mode_right.mode(),
            },
        }
    }
}
