//! Dead zone window positioned by the slider.

use crate::error::ConfigurationError;
use crate::sample::MAX;

/// Calculator of the plateau window.
///
/// The window has a constant width and slides over the whole sample range
/// following the slider, without ever reaching outside of it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Plateau {
    half_width: f32,
}

/// Plateau window of a single iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub center: f32,
    pub half_width: f32,
    pub left_bound: f32,
    pub right_bound: f32,
}

impl Plateau {
    /// Width is given as a portion of the full scale, the window is then
    /// `width * MAX` samples wide, truncated to a whole number of samples.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidPlateauWidth` if width is outside of `[0.0, 1.0]`.
    pub fn try_new(width: f32) -> Result<Self, ConfigurationError> {
        if !(0.0..=1.0).contains(&width) {
            return Err(ConfigurationError::InvalidPlateauWidth);
        }
        Ok(Self::with_half_width(libm::floorf(width * MAX / 2.0)))
    }

    pub(crate) fn with_half_width(half_width: f32) -> Self {
        Self { half_width }
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Place the window based on the smoothed slider value.
    ///
    /// The center lands on a whole sample. With half width being whole too,
    /// both bounds stay on the same grid as the incoming samples.
    pub fn compute(&self, slider: f32) -> Window {
        let fraction = (slider / MAX).clamp(0.0, 1.0);
        let center = libm::roundf(self.half_width + fraction * (MAX - 2.0 * self.half_width));
        Window {
            center,
            half_width: self.half_width,
            left_bound: center - self.half_width,
            right_bound: center + self.half_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn default_width_results_in_expected_half_width() {
        let plateau = Plateau::try_new(0.2).unwrap();
        assert_relative_eq!(plateau.half_width(), 6553.0);
    }

    #[test]
    fn slider_in_the_middle_centers_the_window() {
        let window = Plateau::with_half_width(6553.0).compute(32768.0);
        assert_relative_eq!(window.center, 32768.0);
        assert_relative_eq!(window.left_bound, 26215.0);
        assert_relative_eq!(window.right_bound, 39321.0);
    }

    #[test]
    fn slider_at_edges_makes_window_touch_the_edge() {
        let plateau = Plateau::with_half_width(6553.0);

        let window = plateau.compute(0.0);
        assert_relative_eq!(window.center, 6553.0);
        assert_relative_eq!(window.left_bound, 0.0);

        let window = plateau.compute(MAX);
        assert_relative_eq!(window.center, MAX - 6553.0);
        assert_relative_eq!(window.right_bound, MAX);
    }

    #[test]
    fn zero_width_collapses_window_to_a_point() {
        let window = Plateau::try_new(0.0).unwrap().compute(1000.0);
        assert_relative_eq!(window.left_bound, 1000.0);
        assert_relative_eq!(window.right_bound, 1000.0);
    }

    #[test]
    fn invalid_width_is_refused() {
        assert!(Plateau::try_new(-0.1).is_err());
        assert!(Plateau::try_new(1.1).is_err());
        assert!(Plateau::try_new(f32::NAN).is_err());
    }

    proptest! {
        #[test]
        fn window_always_fits_the_range(width in 0.0_f32..=1.0, slider in 0.0_f32..=65535.0) {
            let window = Plateau::try_new(width).unwrap().compute(slider);
            prop_assert!(0.0 <= window.left_bound);
            prop_assert!(window.left_bound <= window.center);
            prop_assert!(window.center <= window.right_bound);
            prop_assert!(window.right_bound <= MAX);
        }
    }
}
