//! Exponential response approximated by a lookup table.
//!
//! The table is built once during startup, all later reads only interpolate
//! between its points. Since nothing writes into it after it is built, it
//! can be freely shared with any other context.

use crate::error::ConfigurationError;

/// Number of segments of the default curve.
pub const CURVE_RESOLUTION: usize = 256;

/// Curve table with the default resolution.
pub type Curve = CurveTable<{ CURVE_RESOLUTION + 1 }>;

/// Normalized exponential curve sampled in `P` points.
///
/// Points are evenly spread over the input range `[0.0, 1.0]`. The first one
/// is exactly `0.0`, the last one is exactly `1.0` and all between are
/// non-decreasing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurveTable<const P: usize> {
    points: [f32; P],
}

impl<const P: usize> CurveTable<P> {
    /// Build the table of `(1 - e^(-sharpness * x)) / (1 - e^(-sharpness))`.
    ///
    /// Larger sharpness gives more aggressive early rise. Negative sharpness
    /// gives the mirrored, late rising, curve.
    ///
    /// # Errors
    ///
    /// Returns an error when the table has less than two points, when
    /// sharpness is not finite, or when it leads to zero or overflowing
    /// normalization.
    pub fn try_new(sharpness: f32) -> Result<Self, ConfigurationError> {
        if P < 2 {
            return Err(ConfigurationError::TooFewPoints);
        }
        if !sharpness.is_finite() {
            return Err(ConfigurationError::NonFiniteSharpness);
        }

        let sharpness = f64::from(sharpness);
        // Without this normalization the curve would not reach 1.0 at its
        // end, causing a jump on zone boundaries.
        let normalization = -libm::expm1(-sharpness);
        if normalization == 0.0 || !normalization.is_finite() {
            return Err(ConfigurationError::DegenerateNormalization);
        }

        let segments = (P - 1) as f64;
        let mut points = [0.0; P];
        for i in 1..P - 1 {
            let x = i as f64 / segments;
            let y = -libm::expm1(-sharpness * x) / normalization;
            if !y.is_finite() {
                return Err(ConfigurationError::DegenerateNormalization);
            }
            points[i] = (y as f32).clamp(points[i - 1], 1.0);
        }
        points[P - 1] = 1.0;

        Ok(Self { points })
    }

    /// Read the curve at `x`, interpolating linearly between points.
    ///
    /// Input is clamped to `[0.0, 1.0]`.
    pub fn sample(&self, x: f32) -> f32 {
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };

        let position = x * (P - 1) as f32;
        let index = libm::floorf(position) as usize;
        if index >= P - 1 {
            return self.points[P - 1];
        }
        let remainder = position - index as f32;

        let a = self.points[index];
        let b = self.points[index + 1];
        (a + (b - a) * remainder).min(b)
    }

    pub fn points(&self) -> &[f32; P] {
        &self.points
    }
}
