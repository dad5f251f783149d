use mesa_dsp::shaper::Zone;

/// Desired state of output peripherals.
///
/// Besides the word for the DAC, this carries diagnostic values describing
/// how the output was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub dac: u16,
    pub volume_left: u16,
    pub volume_right: u16,
    pub zone: Zone,
}
