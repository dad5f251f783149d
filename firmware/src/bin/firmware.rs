#![no_main]
#![no_std]

use mesa_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use mesa_control::{Configuration, Store};
    use mesa_firmware::system::inputs::Inputs;
    use mesa_firmware::system::output::Output;
    use mesa_firmware::system::System;

    const BLINKS: u8 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        status_led: LedUser,
        inputs: Inputs,
        output: Output,
        store: Store,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.status_led;
        let inputs = system.inputs;
        let output = system.output;

        // Refuse to run with constants that would break the processing.
        let store = match Store::try_new(Configuration::default()) {
            Ok(store) => store,
            Err(error) => defmt::panic!("Invalid configuration: {}", error),
        };

        blink::spawn(true, BLINKS).unwrap();

        (
            Shared {},
            Local {
                status_led,
                inputs,
                output,
                store,
            },
            init::Monotonics(mono),
        )
    }

    /// The shaping loop, running as fast as the ADC allows.
    ///
    /// Reporting is driven from here too, so it can never stall the loop.
    #[idle(local = [inputs, output, store])]
    fn idle(cx: idle::Context) -> ! {
        let inputs = cx.local.inputs;
        let output = cx.local.output;
        let store = cx.local.store;

        loop {
            inputs.sample();
            let desired_output = store.apply_input_snapshot(inputs.snapshot());
            output.set(desired_output.dac);

            #[allow(clippy::cast_possible_truncation)]
            let now_ms = monotonics::now().ticks() as u32;
            if let Some(report) = store.tick(now_ms) {
                defmt::info!("{=str}", report.line().as_str());
                defmt::debug!("Zone: {}", report.zone.indicator());
            }
        }
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }
}
