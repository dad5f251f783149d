//! Shaping of the control voltage into the output level, running in the
//! free-running control loop.
//!
//! The processing goes through the following stages:
//!
//! ```text
//!  [raw samples] -> (sample) -> (smoother) -> (plateau) -> (shaper) -> [DAC]
//!                                                             ^
//!                                                          (curve)
//! ```
//!
//! Smoothing state is owned by the caller, the rest is built once on startup
//! and only read from then.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod curve;
pub mod error;
pub mod plateau;
pub mod processor;
pub mod sample;
pub mod shaper;
pub mod smoother;
