use crate::system::hal::gpio;

/// Shaping mode switches.
///
/// Switches are pulled up, they are active when they connect to ground.
/// They are not debounced, a bounce would be visible for a single
/// iteration only.
pub struct Switches {
    pub left: bool,
    pub right: bool,
    pins: Pins,
}

pub struct Pins {
    pub left: Pin,
    pub right: Pin,
}

pub type Pin = gpio::ErasedPin<gpio::Input>;

impl Switches {
    pub fn new(pins: Pins) -> Self {
        Self {
            left: false,
            right: false,
            pins,
        }
    }

    pub fn sample(&mut self) {
        self.left = self.pins.left.is_low();
        self.right = self.pins.right.is_low();
    }
}
