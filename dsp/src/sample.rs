//! Canonical range of channel samples.
//!
//! All the shaping math runs on `f32` samples spanning from `0.0` to
//! [`MAX`], the 16-bit full scale. Readings coming from the hardware are
//! mapped into this range here, and this is also the only place where
//! out-of-range values get clamped. Components further down the pipeline
//! can rely on their input being within bounds.

/// Full scale of a channel sample.
pub const MAX: f32 = 65535.0;

/// Map a normalized reading from `[0.0, 1.0]` into the sample range.
///
/// Values outside of the unit range are clamped, NaN is treated as zero.
#[must_use]
pub fn from_unit(value: f32) -> f32 {
    clamp(value * MAX)
}

/// Map a raw 16-bit reading into the sample range.
#[must_use]
pub fn from_raw(value: u16) -> f32 {
    f32::from(value)
}

/// Keep the sample within `[0.0, MAX]`.
#[must_use]
pub fn clamp(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX)
}

/// Convert the sample into a word that can be written to a 16-bit DAC.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn to_raw(value: f32) -> u16 {
    libm::roundf(clamp(value)) as u16
}
