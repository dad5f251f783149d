//! Rate limited diagnostics of the loop.
//!
//! The loop runs as fast as it can, so it measures its own iteration rate
//! and once in a while produces a report of the latest values. Everything
//! here is driven from the loop itself and never blocks it.

use core::fmt::Write;

use heapless::String;
use mesa_dsp::sample::MAX;
use mesa_dsp::shaper::Zone;

/// Reference voltage of the ADC, used to show CV in volts.
pub const VREF: f32 = 3.3;

/// Capacity of a rendered report line, fitting even the longest values.
pub const LINE_CAPACITY: usize = 128;

/// Counts iterations and tells when the next report is due.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reporter {
    interval_ms: u32,
    iterations: u32,
    window_start_ms: Option<u32>,
}

/// Snapshot of diagnostic values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub cv: f32,
    pub output: u16,
    pub center: f32,
    pub volume_left: u16,
    pub volume_right: u16,
    pub zone: Zone,
    pub rate: u32,
}

impl Reporter {
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            iterations: 0,
            window_start_ms: None,
        }
    }

    /// Call this once per iteration with the current time.
    ///
    /// Returns the rate in iterations per second when a report is due. The
    /// clock is allowed to wrap around.
    pub fn tick(&mut self, now_ms: u32) -> Option<u32> {
        let start_ms = match self.window_start_ms {
            Some(start_ms) => start_ms,
            None => {
                self.window_start_ms = Some(now_ms);
                return None;
            }
        };

        self.iterations = self.iterations.saturating_add(1);

        let elapsed_ms = now_ms.wrapping_sub(start_ms);
        if elapsed_ms < self.interval_ms {
            return None;
        }

        let rate = u64::from(self.iterations) * 1000 / u64::from(elapsed_ms);
        self.iterations = 0;
        self.window_start_ms = Some(now_ms);

        Some(u32::try_from(rate).unwrap_or(u32::MAX))
    }
}

impl Report {
    pub fn cv_volts(&self) -> f32 {
        self.cv / MAX * VREF
    }

    /// Render the report as a single line of text.
    ///
    /// The format is `CV=<raw>/<volts>V vol=<output> C=<center>/<ratio>
    /// L=<left>/<ratio> R=<right>/<ratio> Hz=<rate>`, ready to be parsed by
    /// plotting scripts.
    pub fn line(&self) -> String<LINE_CAPACITY> {
        let (left_ratio, right_ratio) = match self.zone {
            Zone::Left(ratio) => (ratio, 0.0),
            Zone::Right(ratio) => (0.0, ratio),
            Zone::Center => (0.0, 0.0),
        };

        let mut line = String::new();
        // NOTE: The capacity is large enough for any values, this cannot fail.
        let _ = write!(
            line,
            "CV={:.1}/{:.2}V vol={} C={}/{:.2} L={}/{:.2} R={}/{:.2} Hz={}",
            self.cv,
            self.cv_volts(),
            self.output,
            mesa_dsp::sample::to_raw(self.center),
            self.center / MAX,
            self.volume_left,
            left_ratio,
            self.volume_right,
            right_ratio,
            self.rate,
        );
        line
    }
}
