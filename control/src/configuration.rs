//! Constants tuning the behavior of the module.
//!
//! These are fixed at build time. They are collected into a single
//! structure so they can be validated together before the loop starts.

/// Smoothing of pots. They are slow, so they can take heavy filtering.
pub const POT_ALPHA: f32 = 0.06;

/// Smoothing of the CV input. `1.0` passes it through unfiltered.
pub const CV_ALPHA: f32 = 1.0;

/// Width of the center plateau as a portion of the full scale.
pub const PLATEAU_WIDTH: f32 = 0.2;

/// Steepness of the exponential curve.
pub const CURVE_SHARPNESS: f32 = 3.0;

/// How often should diagnostics be reported.
pub const REPORT_INTERVAL_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub pot_alpha: f32,
    pub cv_alpha: f32,
    pub plateau_width: f32,
    pub curve_sharpness: f32,
    /// Reporting is disabled when set to `None`.
    pub report_interval_ms: Option<u32>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            pot_alpha: POT_ALPHA,
            cv_alpha: CV_ALPHA,
            plateau_width: PLATEAU_WIDTH,
            curve_sharpness: CURVE_SHARPNESS,
            report_interval_ms: Some(REPORT_INTERVAL_MS),
        }
    }
}
