use crate::system::inputs::Inputs;

/// Keep sampling until the left mode switch changes its position.
///
/// This is used by on-device tests to wait for the operator.
pub fn sample_until_left_switch_is_flipped(inputs: &mut Inputs) {
    loop {
        let was_active = inputs.switches.left;
        inputs.sample();
        if inputs.switches.left != was_active {
            break;
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
