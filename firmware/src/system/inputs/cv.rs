use nb::block;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::ADC1;

pub struct CV {
    pub value: f32,
    pin: Pin,
}

pub type Pin = gpio::gpioc::PC0<gpio::Analog>;

impl CV {
    pub fn new(pin: Pin) -> Self {
        Self { value: 0.0, pin }
    }

    pub fn sample(&mut self, adc_1: &mut Adc<ADC1, Enabled>) {
        adc_1.start_conversion(&mut self.pin);
        let sample: u32 = block!(adc_1.read_sample()).unwrap_or_default();
        self.value = transpose_adc(sample, adc_1.slope());
    }
}

fn transpose_adc(sample: u32, slope: u32) -> f32 {
    // NOTE: The input stage is inverting.
    let float = (slope as f32 - sample as f32) / slope as f32;
    float.clamp(0.0, 1.0)
}
