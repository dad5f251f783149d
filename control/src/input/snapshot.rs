//! Structures used to pass the current state of hardware peripherals.

/// The current state of all peripherals.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// control package. Analog readings are expected to be normalized to
/// `[0.0, 1.0]`, anything outside of that gets clamped on ingestion. Mode
/// switches are passed as they are, without debouncing.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub cv: f32,
    pub slider: f32,
    pub center: f32,
    pub left: f32,
    pub right: f32,
    pub mode_left: bool,
    pub mode_right: bool,
}
