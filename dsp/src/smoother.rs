//! Exponential smoothing of noisy analog samples.
//!
//! This is a recursive low-pass filter with a single blending coefficient.
//! Unlike a plain one-pole filter, it does not start from zero: the first
//! sample seen is taken over verbatim, so the output does not ramp up from
//! silence right after boot.

use crate::error::ConfigurationError;

/// State of a single smoothed channel.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterState {
    pub value: f32,
    pub initialized: bool,
}

impl FilterState {
    /// Blend the new sample into the state.
    ///
    /// The output always lies between the previous value and the sample,
    /// so it never overshoots anything it has seen. NaN samples are
    /// skipped.
    #[must_use]
    pub fn updated(self, sample: f32, alpha: f32) -> Self {
        if sample.is_nan() {
            return self;
        }

        if !self.initialized {
            return Self {
                value: sample,
                initialized: true,
            };
        }

        let blended = self.value + alpha * (sample - self.value);
        // Rounding must not push the value past the sample.
        let low = self.value.min(sample);
        let high = self.value.max(sample);
        Self {
            value: blended.clamp(low, high),
            initialized: true,
        }
    }
}

/// Filter state bound to a fixed smoothing coefficient.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Smoother {
    state: FilterState,
    alpha: f32,
}

impl Smoother {
    /// # Errors
    ///
    /// Fails with `InvalidAlpha` unless `alpha` is within `(0.0, 1.0]`.
    pub fn try_new(alpha: f32) -> Result<Self, ConfigurationError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ConfigurationError::InvalidAlpha);
        }
        Ok(Self {
            state: FilterState::default(),
            alpha,
        })
    }

    pub fn tick(&mut self, sample: f32) -> f32 {
        self.state = self.state.updated(sample, self.alpha);
        self.state.value
    }

    pub fn value(&self) -> f32 {
        self.state.value
    }
}
