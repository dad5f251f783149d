use crate::system::hal::dac::{Enabled, C1};
use crate::system::hal::pac::DAC;
use crate::system::hal::traits::DacOut;

/// Analog output carrying the shaped level.
pub struct Output {
    channel: Channel,
}

pub type Channel = C1<DAC, Enabled>;

impl Output {
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    /// Write a 16-bit sample. The DAC is 12-bit, lowest bits get dropped.
    pub fn set(&mut self, value: u16) {
        self.channel.set_value(value >> 4);
    }
}
