//! Main interface for the shaping loop.

use crate::curve::Curve;
use crate::error::ConfigurationError;
use crate::plateau::{Plateau, Window};
use crate::shaper::{self, Levels, Modes, Zone};

/// Holds everything built during startup and reused every iteration.
///
/// The processor itself does not change while processing, all the state
/// of the loop is kept in the smoothed inputs owned by the caller.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Processor {
    curve: Curve,
    plateau: Plateau,
}

/// Smoothed inputs of a single iteration, all in the sample range.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    pub cv: f32,
    pub slider: f32,
    pub levels: Levels,
    pub modes: Modes,
}

/// Outcome of a single iteration.
///
/// Besides the output sample, this carries values useful for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    pub output: f32,
    pub volume_left: f32,
    pub volume_right: f32,
    pub zone: Zone,
    pub window: Window,
}

impl Processor {
    /// # Errors
    ///
    /// Fails when the plateau width or the curve sharpness are invalid.
    /// The caller should not proceed in that case.
    pub fn try_new(plateau_width: f32, curve_sharpness: f32) -> Result<Self, ConfigurationError> {
        let curve = Curve::try_new(curve_sharpness)?;
        let plateau = Plateau::try_new(plateau_width)?;
        Ok(Self { curve, plateau })
    }

    #[must_use]
    pub fn process(&self, attributes: Attributes) -> Reaction {
        let window = self.plateau.compute(attributes.slider);
        let shaped = shaper::classify_and_shape(
            &self.curve,
            attributes.cv,
            &window,
            attributes.levels,
            attributes.modes,
        );
        Reaction {
            output: shaped.output,
            volume_left: shaped.volume_left,
            volume_right: shaped.volume_right,
            zone: shaped.zone,
            window,
        }
    }
}
