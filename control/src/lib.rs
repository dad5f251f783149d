//! Components of the control loop, passing hardware readings to the shaping
//! processor and its result back to the output.
//!
//! It is mainly targetted to run in a firmware with a single free-running
//! loop. However, parts of it may be useful in software as well.
//!
//! Following is the flow of a single iteration:
//!
//! ```text
//!   [CV] [Slider] [Pots] [Switches]
//!      |     |      |     |
//!      V     V      V     V
//!        (InputSnapshot)
//!               |
//!               V
//!    [ Store {Input, Processor} ] ----> (Report) ----> [Log]
//!               |
//!               | (DesiredOutput)
//!               V
//!             [DAC]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod configuration;
mod input;
mod log;
mod output;
pub mod report;
mod store;

pub use crate::configuration::Configuration;
pub use crate::input::snapshot::Snapshot as InputSnapshot;
pub use crate::output::DesiredOutput;
pub use crate::store::Store;
