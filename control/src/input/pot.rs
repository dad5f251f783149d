//! Pot abstraction smoothing its readings over time.

use mesa_dsp::error::ConfigurationError;
use mesa_dsp::sample;
use mesa_dsp::smoother::Smoother;

/// Abstraction of a potentiometer.
///
/// Pots are operated by hand and move slowly, so they can afford heavy
/// smoothing to get rid of the jitter of the ADC.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pot {
    smoother: Smoother,
}

impl Pot {
    /// # Errors
    ///
    /// Fails if the smoothing coefficient is out of range.
    pub fn try_new(alpha: f32) -> Result<Self, ConfigurationError> {
        Ok(Self {
            smoother: Smoother::try_new(alpha)?,
        })
    }

    pub fn update(&mut self, value: f32) {
        self.smoother.tick(sample::from_unit(value));
    }

    /// Smoothed value in the sample range.
    pub fn value(&self) -> f32 {
        self.smoother.value()
    }
}
