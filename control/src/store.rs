//! The main store tying inputs, processing and reporting together.

use mesa_dsp::error::ConfigurationError;
use mesa_dsp::processor::{Processor, Reaction};
use mesa_dsp::sample;

use crate::configuration::Configuration;
use crate::input::snapshot::Snapshot as InputSnapshot;
use crate::input::store::Store as Input;
use crate::log;
use crate::output::DesiredOutput;
use crate::report::{Report, Reporter};

/// The main store of peripheral abstraction and module configuration.
///
/// This struct is the central piece of the control module. It takes
/// `InputSnapshot` on its inputs, passes it to peripheral abstractions,
/// runs the processor over the smoothed values and returns the desired
/// output. It is meant to be owned by the loop and passed through all its
/// iterations, there is no other state.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub(crate) input: Input,
    processor: Processor,
    reporter: Option<Reporter>,
    last_reaction: Option<Reaction>,
}

impl Store {
    /// Validate the configuration and build everything needed by the loop.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration. The loop must not be started then.
    pub fn try_new(configuration: Configuration) -> Result<Self, ConfigurationError> {
        let input = Input::try_new(&configuration)?;
        let processor =
            Processor::try_new(configuration.plateau_width, configuration.curve_sharpness)?;
        let reporter = configuration.report_interval_ms.map(Reporter::new);

        log::info!("Configuration: {}", configuration);

        Ok(Self {
            input,
            processor,
            reporter,
            last_reaction: None,
        })
    }

    pub fn apply_input_snapshot(&mut self, snapshot: InputSnapshot) -> DesiredOutput {
        self.input.update(snapshot);
        self.log_mode_changes();

        let reaction = self.processor.process(self.input.attributes());
        self.last_reaction = Some(reaction);

        DesiredOutput {
            dac: sample::to_raw(reaction.output),
            volume_left: sample::to_raw(reaction.volume_left),
            volume_right: sample::to_raw(reaction.volume_right),
            zone: reaction.zone,
        }
    }

    /// Count the iteration and produce a report if it is due.
    ///
    /// This should be called once per iteration, after the output was
    /// written. It returns `None` if reporting is disabled.
    pub fn tick(&mut self, now_ms: u32) -> Option<Report> {
        let rate = self.reporter.as_mut()?.tick(now_ms)?;
        let reaction = self.last_reaction?;
        Some(Report {
            cv: self.input.cv.value_raw(),
            output: sample::to_raw(reaction.output),
            center: self.input.center.value(),
            volume_left: sample::to_raw(reaction.volume_left),
            volume_right: sample::to_raw(reaction.volume_right),
            zone: reaction.zone,
            rate,
        })
    }

    fn log_mode_changes(&self) {
        if self.input.mode_left.toggled {
            log::debug!("Left shaping mode: {}", self.input.mode_left.mode());
        }
        if self.input.mode_right.toggled {
            log::debug!("Right shaping mode: {}", self.input.mode_right.mode());
        }
    }
}
