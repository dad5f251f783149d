use nb::block;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::{ADC1, ADC2};

#[derive(defmt::Format)]
pub struct Pots {
    pub slider: f32,
    pub center: f32,
    pub left: f32,
    pub right: f32,
    pins: Pins,
}

#[derive(defmt::Format)]
pub struct Pins {
    pub slider: SliderPin,
    pub center: CenterPin,
    pub left: LeftPin,
    pub right: RightPin,
}

pub type SliderPin = gpio::gpioa::PA7<gpio::Analog>;
pub type CenterPin = gpio::gpioa::PA6<gpio::Analog>;
pub type LeftPin = gpio::gpioa::PA2<gpio::Analog>;
pub type RightPin = gpio::gpiob::PB1<gpio::Analog>;

impl Pots {
    pub(crate) fn new(pins: Pins) -> Self {
        Self {
            slider: 0.0,
            center: 0.0,
            left: 0.0,
            right: 0.0,
            pins,
        }
    }

    pub fn sample(&mut self, adc_1: &mut Adc<ADC1, Enabled>, adc_2: &mut Adc<ADC2, Enabled>) {
        adc_1.start_conversion(&mut self.pins.slider);
        adc_2.start_conversion(&mut self.pins.center);
        let sample_1: u32 = block!(adc_1.read_sample()).unwrap_or_default();
        let sample_2: u32 = block!(adc_2.read_sample()).unwrap_or_default();

        adc_1.start_conversion(&mut self.pins.left);
        adc_2.start_conversion(&mut self.pins.right);
        let sample_3: u32 = block!(adc_1.read_sample()).unwrap_or_default();
        let sample_4: u32 = block!(adc_2.read_sample()).unwrap_or_default();

        self.slider = transpose_adc(sample_1, adc_1.slope());
        self.center = transpose_adc(sample_2, adc_2.slope());
        self.left = transpose_adc(sample_3, adc_1.slope());
        self.right = transpose_adc(sample_4, adc_2.slope());
    }
}

fn transpose_adc(sample: u32, slope: u32) -> f32 {
    let float = (slope as f32 - sample as f32) / slope as f32;
    // NOTE: Pots are connected to -5 to +5 V ADC while they span only
    // from 0 to +5 V.
    let half_range = float * 2.0 - 1.0;
    // NOTE: The pot never reaches all the way up to max voltage.
    let scaled_up = half_range * (1.0 / 0.988);
    scaled_up.clamp(0.0, 1.0)
}
