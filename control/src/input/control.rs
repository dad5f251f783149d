//! Manage control input's state.

use mesa_dsp::error::ConfigurationError;
use mesa_dsp::sample;
use mesa_dsp::smoother::Smoother;

/// Use this to hold control input's state over time.
///
/// The input may need to track fast movements, so it uses its own smoothing
/// coefficient. With the coefficient of `1.0` the value passes through
/// unfiltered.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Control {
    smoother: Smoother,
    raw: f32,
}

impl Control {
    /// # Errors
    ///
    /// Fails if the smoothing coefficient is out of range.
    pub fn try_new(alpha: f32) -> Result<Self, ConfigurationError> {
        Ok(Self {
            smoother: Smoother::try_new(alpha)?,
            raw: 0.0,
        })
    }

    pub fn update(&mut self, value: f32) {
        self.raw = sample::from_unit(value);
        self.smoother.tick(self.raw);
    }

    pub fn value(&self) -> f32 {
        self.smoother.value()
    }

    pub fn value_raw(&self) -> f32 {
        self.raw
    }
}
