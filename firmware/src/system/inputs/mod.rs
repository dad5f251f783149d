//! Abstraction of all inputs.
//!
//! All of these are grouped under a single abstraction to allow sharing of
//! the two ADCs. A single call to `sample` reads every input once, which is
//! exactly what a single iteration of the loop needs.

mod cv;
mod pots;
mod switches;

use mesa_control::InputSnapshot;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::pac::{ADC1, ADC2};

pub use cv::Pin as CVPin;
use cv::CV;
pub use pots::Pins as PotsPins;
use pots::Pots;
pub use switches::Pins as SwitchesPins;
use switches::Switches;

pub struct Inputs {
    pub cv: CV,
    pub pots: Pots,
    pub switches: Switches,
    adc_1: Adc<ADC1, Enabled>,
    adc_2: Adc<ADC2, Enabled>,
}

pub struct Config {
    pub cv: CVPin,
    pub pots: PotsPins,
    pub switches: SwitchesPins,
    pub adc_1: Adc<ADC1, Enabled>,
    pub adc_2: Adc<ADC2, Enabled>,
}

impl Inputs {
    pub fn new(config: Config) -> Self {
        Self {
            cv: CV::new(config.cv),
            pots: Pots::new(config.pots),
            switches: Switches::new(config.switches),
            adc_1: config.adc_1,
            adc_2: config.adc_2,
        }
    }

    pub fn sample(&mut self) {
        self.cv.sample(&mut self.adc_1);
        self.pots.sample(&mut self.adc_1, &mut self.adc_2);
        self.switches.sample();
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            cv: self.cv.value,
            slider: self.pots.slider,
            center: self.pots.center,
            left: self.pots.left,
            right: self.pots.right,
            mode_left: self.switches.left,
            mode_right: self.switches.right,
        }
    }
}
