//! Errors detected while validating the configuration at startup.

use core::fmt;

/// Invalid configuration constant.
///
/// These are only ever returned while building the processor. Once it is
/// built, none of the processing can fail.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    /// Curve sharpness is NaN or infinite.
    NonFiniteSharpness,
    /// Normalization of the curve would divide by zero or overflow.
    DegenerateNormalization,
    /// The curve table needs at least its two edge points.
    TooFewPoints,
    /// Plateau width must be within `[0.0, 1.0]`.
    InvalidPlateauWidth,
    /// Smoothing coefficient must be within `(0.0, 1.0]`.
    InvalidAlpha,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NonFiniteSharpness => "curve sharpness must be finite",
            Self::DegenerateNormalization => "curve sharpness yields a degenerate normalization",
            Self::TooFewPoints => "curve table needs at least two points",
            Self::InvalidPlateauWidth => "plateau width must be within 0.0 and 1.0",
            Self::InvalidAlpha => "smoothing alpha must be within (0.0, 1.0]",
        };
        f.write_str(message)
    }
}
